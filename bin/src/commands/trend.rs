//! Trend command implementation.

use crate::config::DashboardConfig;
use crate::display::{self, AxisArg, MetricArg};
use anyhow::Result;
use marquee_lib::prelude::*;
use std::path::{Path, PathBuf};

/// Command-line inputs of the `trend` subcommand.
#[derive(Debug)]
pub(crate) struct TrendRequest {
    pub(crate) input: PathBuf,
    pub(crate) days: Option<u32>,
    pub(crate) since: Option<String>,
    pub(crate) events: Vec<String>,
    pub(crate) metric: Option<MetricArg>,
    pub(crate) window: Option<usize>,
    pub(crate) axis: Option<AxisArg>,
}

impl TrendRequest {
    /// Builds the sales query, resolving the lookback against the config.
    fn query(&self, config: &DashboardConfig) -> Result<SalesQuery> {
        let since = match &self.since {
            Some(value) => super::parse_date(value)?,
            None => self
                .days
                .map_or(config.lookback, Lookback::days)
                .since(super::today()),
        };

        let mut query = SalesQuery::all().with_since(since);
        if !self.events.is_empty() {
            query = query.with_events(self.events.iter().cloned());
        }
        Ok(query)
    }

    /// Applies flag overrides on top of the configured trend options.
    fn options(&self, config: &DashboardConfig) -> TrendOptions {
        let mut options = config.trend;
        if let Some(metric) = self.metric {
            options = options.with_metric(metric.into());
        }
        if let Some(window) = self.window {
            options = options.with_window(window);
        }
        if let Some(axis) = self.axis {
            options = options.with_axis(axis.into());
        }
        options
    }
}

/// Build the trend table for the requested sales and write it out.
pub(crate) async fn trend(
    config: &DashboardConfig,
    request: TrendRequest,
    output: Option<&Path>,
    format: Option<OutputFormat>,
    pretty: bool,
) -> Result<()> {
    let query = request.query(config)?;
    let options = request.options(config);
    let source = CsvSource::new(&request.input);

    tracing::info!(
        input = %request.input.display(),
        since = ?query.since,
        metric = options.metric.as_str(),
        window = options.window,
        axis = options.axis.as_str(),
        "building trend view"
    );

    let view = trend_view(&source, &query, options).await?;
    if view.is_empty() {
        tracing::warn!("no sales matched the query");
    }

    display::write_trend(&view, output, format, pretty)?;

    if let Some(path) = output {
        tracing::info!(
            rows = view.rows.len(),
            series = view.series_keys.len(),
            path = %path.display(),
            "wrote trend table"
        );
    }
    Ok(())
}
