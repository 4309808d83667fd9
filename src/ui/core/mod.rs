//! Core UI functionality for filterdesk.
//!
//! - [`actions`] - Action definitions and dashboard panels
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//!
//! Components turn terminal events into [`Action`]s; the app component
//! applies them to shared state and forwards them to child components.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, Panel};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
