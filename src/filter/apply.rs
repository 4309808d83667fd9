//! Host-side application of filter queries to record collections

use chrono::NaiveDate;

use super::query::FilterQuery;

/// Anything a [`FilterQuery`] can be evaluated against
pub trait Filterable {
    fn seller(&self) -> &str;
    fn date(&self) -> NaiveDate;
}

impl FilterQuery {
    /// Evaluate this query against one item.
    ///
    /// Term queries match a case-insensitive substring of the seller; range
    /// queries match inclusively on both bounds.
    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        match self {
            FilterQuery::ByTerm { term } => item.seller().to_lowercase().contains(&term.to_lowercase()),
            FilterQuery::ByDateRange { range } => range.contains(item.date()),
        }
    }
}

/// Narrow `items` to those matching `query`; `None` keeps everything.
pub fn apply<'a, T: Filterable>(items: &'a [T], query: Option<&FilterQuery>) -> Vec<&'a T> {
    match query {
        Some(query) => items.iter().filter(|item| query.matches(*item)).collect(),
        None => items.iter().collect(),
    }
}
