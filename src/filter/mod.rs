//! Filter coordination for list panels.
//!
//! A filter form collects raw, possibly incomplete input and only turns it
//! into a [`FilterQuery`] when the user explicitly submits. The pieces are:
//!
//! - [`input`] - the uncommitted form state owned by one coordinator
//! - [`query`] - the immutable query value handed to the host
//! - [`coordinator`] - the [`FilterCoordinator`] and the [`FilterHost`] contract
//! - [`apply`] - host-side helpers that narrow a collection with a query

pub mod apply;
pub mod coordinator;
pub mod input;
pub mod query;

pub use apply::{apply, Filterable};
pub use coordinator::{CallbackHost, FilterCoordinator, FilterHost};
pub use input::FilterInput;
pub use query::{DateRange, FilterQuery, QueryKind};
