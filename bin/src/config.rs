//! Dashboard defaults loaded from an optional JSON file.

use anyhow::{Context, Result};
use marquee_lib::{Lookback, TrendOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults applied when the corresponding CLI flag is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DashboardConfig {
    /// Trend lookback window.
    pub(crate) lookback: Lookback,
    /// Trend view options.
    pub(crate) trend: TrendOptions,
    /// Number of events shown by `summary`.
    pub(crate) top_events: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            lookback: Lookback::default(),
            trend: TrendOptions::default(),
            top_events: 5,
        }
    }
}

impl DashboardConfig {
    /// Loads the config file at `path`, or the defaults when no path is given.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        tracing::debug!(path = %path.display(), ?config, "loaded dashboard config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_lib::{AxisMode, Metric};
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = DashboardConfig::load(None).unwrap();
        assert_eq!(config.lookback.num_days(), 180);
        assert_eq!(config.trend.window, 0);
        assert_eq!(config.top_events, 5);
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"lookback": 30, "trend": {{"metric": "tickets", "axis": "normalized"}}}}"#
        )
        .unwrap();

        let config = DashboardConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.lookback.num_days(), 30);
        assert_eq!(config.trend.metric, Metric::Tickets);
        assert_eq!(config.trend.axis, AxisMode::Normalized);
        assert_eq!(config.trend.window, 0);
        assert_eq!(config.top_events, 5);
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(DashboardConfig::load(Some(file.path())).is_err());
        assert!(DashboardConfig::load(Some(Path::new("/nonexistent/marquee.json"))).is_err());
    }
}
