//! Filter query values emitted by a coordinator

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::date::format_ymd;

/// Discriminator of a [`FilterQuery`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    ByTerm,
    ByDateRange,
}

/// Inclusive date range. `start` is not required to precede `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// True when `start` falls after `end`; such a range matches nothing.
    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }

    /// Inclusive containment check on both bounds
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", format_ymd(self.start), format_ymd(self.end))
    }
}

/// A normalized request to narrow a displayed collection.
///
/// Each variant carries exactly the fields its kind requires, so a term
/// query can never hold a range and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterQuery {
    ByTerm { term: String },
    ByDateRange { range: DateRange },
}

impl FilterQuery {
    pub fn kind(&self) -> QueryKind {
        match self {
            FilterQuery::ByTerm { .. } => QueryKind::ByTerm,
            FilterQuery::ByDateRange { .. } => QueryKind::ByDateRange,
        }
    }

    pub fn term(&self) -> Option<&str> {
        match self {
            FilterQuery::ByTerm { term } => Some(term),
            FilterQuery::ByDateRange { .. } => None,
        }
    }

    pub fn range(&self) -> Option<DateRange> {
        match self {
            FilterQuery::ByTerm { .. } => None,
            FilterQuery::ByDateRange { range } => Some(*range),
        }
    }
}

impl fmt::Display for FilterQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterQuery::ByTerm { term } => write!(f, "seller contains \"{}\"", term),
            FilterQuery::ByDateRange { range } => write!(f, "date in {}", range),
        }
    }
}
