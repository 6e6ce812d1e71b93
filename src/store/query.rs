//! Query description: equality filters, ordering, and a row limit.

use std::cmp::Ordering;

use crate::model::{Field, FieldValue, QuestReport};

/// Sort direction for [`Query::order_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// A conjunctive equality query over the report store.
#[derive(Debug, Clone, Default)]
pub struct Query<'q> {
    filters: Vec<(Field, FieldValue<'q>)>,
    order: Option<(Field, Direction)>,
    limit: Option<usize>,
}

impl<'q> Query<'q> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only reports whose `field` equals `value`.
    #[must_use]
    pub fn filter(mut self, field: Field, value: impl Into<FieldValue<'q>>) -> Self {
        self.filters.push((field, value.into()));
        self
    }

    #[must_use]
    pub fn order_by(mut self, field: Field, direction: Direction) -> Self {
        self.order = Some((field, direction));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(super) fn matches(&self, report: &QuestReport) -> bool {
        self.filters
            .iter()
            .all(|(field, value)| report.get(*field) == *value)
    }

    pub(super) fn compare(&self, a: &QuestReport, b: &QuestReport) -> Ordering {
        match self.order {
            Some((field, Direction::Ascending)) => a.get(field).cmp(&b.get(field)),
            Some((field, Direction::Descending)) => b.get(field).cmp(&a.get(field)),
            None => Ordering::Equal,
        }
    }

    pub(super) fn is_ordered(&self) -> bool {
        self.order.is_some()
    }

    pub(super) fn max_rows(&self) -> Option<usize> {
        self.limit
    }
}
