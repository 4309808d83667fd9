//! Utility modules for filterdesk.
//!
//! - [`color`] - Theme colour name parsing
//! - [`date`] - Date parsing and formatting for filter fields and record lists

pub mod color;
pub mod date;
