//! In-memory data source.

use async_trait::async_trait;
use marquee_types::SaleRecord;

use crate::{SalesQuery, SalesSource, SourceError};

/// Sales rows held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<SaleRecord>,
}

impl MemorySource {
    /// Creates a source over the given rows.
    #[must_use]
    pub const fn new(records: Vec<SaleRecord>) -> Self {
        Self { records }
    }

    /// Returns the number of rows held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no rows are held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<SaleRecord>> for MemorySource {
    fn from(records: Vec<SaleRecord>) -> Self {
        Self::new(records)
    }
}

#[async_trait]
impl SalesSource for MemorySource {
    async fn fetch(&self, query: &SalesQuery) -> Result<Vec<SaleRecord>, SourceError> {
        Ok(self
            .records
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect())
    }

    fn describe(&self) -> String {
        format!("memory ({} rows)", self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use marquee_types::SeriesKey;

    #[tokio::test]
    async fn test_fetch_filters() {
        let source = MemorySource::from(vec![
            SaleRecord::new("2024-01-01", SeriesKey::new("A", "Eve"), 10.0, 1),
            SaleRecord::new("2024-02-01", SeriesKey::new("A", "Eve"), 20.0, 2),
            SaleRecord::new("2024-02-01", SeriesKey::new("B", "Eve"), 30.0, 3),
        ]);
        assert_eq!(source.len(), 3);

        let query = SalesQuery::all()
            .with_since(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
            .with_events(["A"]);
        let rows = source.fetch(&query).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].tickets, 2);
    }
}
