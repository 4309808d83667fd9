//! filterdesk - filter coordination for storefront admin panels
//!
//! This library provides a filter coordinator that turns raw form input into
//! validated search queries, together with a terminal dashboard for
//! purchases, returns and messages that hosts one coordinator per panel.
//!
//! # Modules
//!
//! * [`filter`] - Filter input, queries, the coordinator and query application
//! * [`records`] - Dashboard record model and JSON loading
//! * [`config`] - Application configuration management
//! * [`theme`] - Immutable interaction-state styles
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date and colour helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Filter coordination: input state, queries and host callbacks
pub mod filter;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Record model for purchases, returns and messages
pub mod records;

/// UI theme resolved once from configuration
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for dates and colours
pub mod utils;

pub use filter::{CallbackHost, DateRange, FilterCoordinator, FilterHost, FilterInput, FilterQuery, QueryKind};
