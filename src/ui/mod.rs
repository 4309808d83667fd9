//! UI module for filterdesk
//!
//! This module handles the terminal dashboard: components, layout and the
//! event loop.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
