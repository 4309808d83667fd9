//! The filter coordinator and its host contract.
//!
//! A [`FilterCoordinator`] sits between a filter form and whatever owns the
//! filtered data. Field setters only record input. Queries reach the host
//! through [`FilterHost::on_search`] when the user submits and the input is
//! complete; incomplete input is silently withheld. [`FilterCoordinator::reset`]
//! wipes the input and fires [`FilterHost::on_reset`].

use chrono::NaiveDate;

use super::input::FilterInput;
use super::query::{DateRange, FilterQuery};

/// Receiver of coordinator events.
///
/// `on_search` fires once per successful submit, `on_reset` once per reset.
/// The coordinator never inspects what the host does with either.
pub trait FilterHost {
    fn on_search(&mut self, query: &FilterQuery);
    fn on_reset(&mut self);
}

impl<H: FilterHost + ?Sized> FilterHost for &mut H {
    fn on_search(&mut self, query: &FilterQuery) {
        (**self).on_search(query);
    }

    fn on_reset(&mut self) {
        (**self).on_reset();
    }
}

/// Host built from a pair of caller-supplied closures
pub struct CallbackHost<S, R>
where
    S: FnMut(&FilterQuery),
    R: FnMut(),
{
    on_search: S,
    on_reset: R,
}

impl<S, R> CallbackHost<S, R>
where
    S: FnMut(&FilterQuery),
    R: FnMut(),
{
    pub fn new(on_search: S, on_reset: R) -> Self {
        Self { on_search, on_reset }
    }
}

impl<S, R> FilterHost for CallbackHost<S, R>
where
    S: FnMut(&FilterQuery),
    R: FnMut(),
{
    fn on_search(&mut self, query: &FilterQuery) {
        (self.on_search)(query);
    }

    fn on_reset(&mut self) {
        (self.on_reset)();
    }
}

/// Owner of one form's uncommitted input.
///
/// Each form gets its own coordinator; nothing is shared between instances.
/// The coordinator keeps no history, so submitting the same input twice
/// emits the same query twice.
pub struct FilterCoordinator<H: FilterHost> {
    input: FilterInput,
    host: H,
}

impl<H: FilterHost> FilterCoordinator<H> {
    /// Create a coordinator with empty input
    pub fn new(host: H) -> Self {
        Self {
            input: FilterInput::new(),
            host,
        }
    }

    pub fn input(&self) -> &FilterInput {
        &self.input
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Store the seller term verbatim. Whitespace is kept until submission.
    pub fn set_seller_term(&mut self, text: impl Into<String>) {
        self.input.seller_term = text.into();
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.input.start_date = date;
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.input.end_date = date;
    }

    /// Emit a term query built from the trimmed seller term.
    ///
    /// Returns `None` without notifying the host when the trimmed term is empty.
    pub fn submit_term_search(&mut self) -> Option<FilterQuery> {
        let term = self.input.seller_term.trim();
        if term.is_empty() {
            log::debug!("Filter: term search withheld, term is blank");
            return None;
        }

        let query = FilterQuery::ByTerm { term: term.to_string() };
        log::info!("Filter: emitting {}", query);
        self.host.on_search(&query);
        Some(query)
    }

    /// Emit a date range query from both bounds exactly as entered.
    ///
    /// Returns `None` without notifying the host unless both bounds are set.
    /// Bound order is not checked.
    pub fn submit_date_range_search(&mut self) -> Option<FilterQuery> {
        let (Some(start), Some(end)) = (self.input.start_date, self.input.end_date) else {
            log::debug!("Filter: date range search withheld, range incomplete");
            return None;
        };

        let query = FilterQuery::ByDateRange {
            range: DateRange::new(start, end),
        };
        log::info!("Filter: emitting {}", query);
        self.host.on_search(&query);
        Some(query)
    }

    /// Clear all input and tell the host to drop any applied filter
    pub fn reset(&mut self) {
        self.input.clear();
        log::info!("Filter: reset");
        self.host.on_reset();
    }
}

impl<H: FilterHost + Default> Default for FilterCoordinator<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}
