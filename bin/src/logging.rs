//! Log output setup.

use tracing_subscriber::EnvFilter;

/// Returns the default filter directive for the given flags.
const fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flags. Logs go to stderr so
/// that report output on stdout stays machine-readable.
pub(crate) fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)));

    // A subscriber may already be installed (e.g. under test harnesses).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose > 1)
        .with_writer(std::io::stderr)
        .try_init();
}
