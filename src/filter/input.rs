//! Uncommitted filter form state

use chrono::NaiveDate;

/// Raw input of a single filter form.
///
/// Values are stored exactly as entered. Trimming and completeness checks
/// happen at submission time, never here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
    pub seller_term: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FilterInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field holds a value (whitespace in the term counts as a value).
    pub fn is_empty(&self) -> bool {
        self.seller_term.is_empty() && self.start_date.is_none() && self.end_date.is_none()
    }

    /// Wipe every field back to its unset state
    pub fn clear(&mut self) {
        self.seller_term.clear();
        self.start_date = None;
        self.end_date = None;
    }
}
