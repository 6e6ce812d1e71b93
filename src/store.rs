//! In-memory report store.
//!
//! Append-only: reports are inserted once while the log is read and never
//! change afterwards. Queries return borrows into the store, so everything
//! derived from it lives no longer than the store itself.

mod query;

use std::collections::BTreeSet;

pub use query::{Direction, Query};

use crate::model::{Field, FieldValue, QuestReport};

/// Errors that can occur during store queries.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no report matches the query")]
    EmptyResult,
}

pub type Result<T> = core::result::Result<T, StoreError>;

/// Every parsed quest report, in file order.
#[derive(Debug, Default)]
pub struct ReportStore {
    reports: Vec<QuestReport>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one report. Duplicate uids are kept.
    pub fn insert(&mut self, report: QuestReport) {
        self.reports.push(report);
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Reports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &QuestReport> {
        self.reports.iter()
    }

    /// Distinct values of one column across all reports.
    pub fn distinct_values(&self, field: Field) -> BTreeSet<FieldValue<'_>> {
        self.reports.iter().map(|r| r.get(field)).collect()
    }

    /// Reports matching every filter, ordered and truncated as requested.
    ///
    /// The sort is stable: reports with equal keys keep insertion order.
    pub fn find(&self, query: &Query<'_>) -> Vec<&QuestReport> {
        let mut found: Vec<&QuestReport> =
            self.reports.iter().filter(|r| query.matches(r)).collect();
        if query.is_ordered() {
            found.sort_by(|a, b| query.compare(a, b));
        }
        if let Some(limit) = query.max_rows() {
            found.truncate(limit);
        }
        found
    }

    /// The first report under the given ordering.
    pub fn find_one(&self, field: Field, direction: Direction) -> Result<&QuestReport> {
        let query = Query::new().order_by(field, direction).limit(1);
        self.find(&query)
            .into_iter()
            .next()
            .ok_or(StoreError::EmptyResult)
    }

    /// Number of reports matching every filter. Ordering and limit are ignored.
    pub fn count(&self, query: &Query<'_>) -> usize {
        self.reports.iter().filter(|r| query.matches(r)).count()
    }
}

impl FromIterator<QuestReport> for ReportStore {
    fn from_iter<I: IntoIterator<Item = QuestReport>>(iter: I) -> Self {
        Self {
            reports: iter.into_iter().collect(),
        }
    }
}
