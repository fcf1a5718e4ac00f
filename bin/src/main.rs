//! marquee CLI - Box-office sales trend reporting.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod display;
mod logging;

use config::DashboardConfig;
use display::{AxisArg, MetricArg};
use marquee_lib::OutputFormat;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Box-office sales trend reporting", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// JSON file with dashboard defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sales trend table
    Trend {
        /// Sales CSV (transaction_date,event_name,show_time,gross,tickets)
        input: PathBuf,

        /// Days to look back from today. Defaults to the configured lookback.
        #[arg(short, long)]
        days: Option<u32>,

        /// Earliest transaction date (YYYY-MM-DD). Overrides --days.
        #[arg(short, long)]
        since: Option<String>,

        /// Only include these events (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        events: Vec<String>,

        /// Metric the view is prepared for
        #[arg(short, long, value_enum)]
        metric: Option<MetricArg>,

        /// Trailing moving-average window in days (0 for daily values)
        #[arg(short, long)]
        window: Option<usize>,

        /// X-axis layout
        #[arg(short, long, value_enum)]
        axis: Option<AxisArg>,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (csv, json, ndjson). Inferred from the output file
        /// extension when omitted, otherwise csv.
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Rank events by total gross
    Summary {
        /// Sales CSV (transaction_date,event_name,show_time,gross,tickets)
        input: PathBuf,

        /// Number of events to show. Defaults to the configured top-N.
        #[arg(short, long)]
        top: Option<usize>,

        /// Show every event
        #[arg(long, conflicts_with = "top")]
        all: bool,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (csv, json, ndjson). Inferred from the output file
        /// extension when omitted, otherwise csv.
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show snapshot KPIs for one event
    Report {
        /// Sales CSV (transaction_date,event_name,show_time,gross,tickets)
        input: PathBuf,

        /// Event name
        #[arg(short, long)]
        event: String,

        /// Seat capacity across all performances
        #[arg(short, long, default_value = "0")]
        capacity: u64,

        /// Report date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        as_of: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = DashboardConfig::load(cli.config.as_deref())?;

    match command {
        Commands::Trend {
            input,
            days,
            since,
            events,
            metric,
            window,
            axis,
            output,
            format,
            pretty,
        } => {
            let request = commands::trend::TrendRequest {
                input,
                days,
                since,
                events,
                metric,
                window,
                axis,
            };
            commands::trend::trend(&config, request, output.as_deref(), format, pretty).await
        }
        Commands::Summary {
            input,
            top,
            all,
            output,
            format,
            pretty,
        } => {
            let limit = if all { None } else { Some(top.unwrap_or(config.top_events)) };
            commands::summary::summary(&input, limit, output.as_deref(), format, pretty).await
        }
        Commands::Report {
            input,
            event,
            capacity,
            as_of,
            json,
        } => commands::report::report(&input, &event, capacity, as_of.as_deref(), json).await,
    }
}
