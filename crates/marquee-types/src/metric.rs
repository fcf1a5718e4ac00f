//! Trend metric and axis mode definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A numeric measure tracked per series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Gross sales value.
    #[default]
    Revenue,
    /// Tickets sold.
    Tickets,
}

impl Metric {
    /// Returns the metric as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Tickets => "tickets",
        }
    }

    /// Returns all available metrics.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Revenue, Self::Tickets]
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Metric {
    type Err = MetricParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "revenue" | "gross" | "rev" => Ok(Self::Revenue),
            "tickets" | "sold" | "tix" => Ok(Self::Tickets),
            _ => Err(MetricParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid metric string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricParseError(String);

impl std::fmt::Display for MetricParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid metric '{}', expected one of: revenue, tickets",
            self.0
        )
    }
}

impl std::error::Error for MetricParseError {}

/// X-axis layout of a trend view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AxisMode {
    /// One row per calendar date.
    #[default]
    Calendar,
    /// One row per whole day elapsed since each series went on sale.
    Normalized,
}

impl AxisMode {
    /// Returns the axis mode as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::Normalized => "normalized",
        }
    }

    /// Returns true if rows are keyed by day offset.
    #[must_use]
    pub const fn is_normalized(&self) -> bool {
        matches!(self, Self::Normalized)
    }
}

impl std::fmt::Display for AxisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_parse() {
        assert_eq!("revenue".parse::<Metric>().unwrap(), Metric::Revenue);
        assert_eq!("Tickets".parse::<Metric>().unwrap(), Metric::Tickets);
        assert_eq!("gross".parse::<Metric>().unwrap(), Metric::Revenue);
        assert!("occupancy".parse::<Metric>().is_err());
    }

    #[test]
    fn test_metric_serde() {
        assert_eq!(serde_json::to_string(&Metric::Tickets).unwrap(), "\"tickets\"");
        let axis: AxisMode = serde_json::from_str("\"normalized\"").unwrap();
        assert!(axis.is_normalized());
    }
}
