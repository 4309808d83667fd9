//! Reusable UI components

pub mod filter_panel;
pub mod log_view;
pub mod record_list;
pub mod status_bar;
pub mod text_input;

// Component exports
pub use filter_panel::{FieldShape, FilterField, FilterPanelComponent, PendingActions};
pub use log_view::LogView;
pub use record_list::RecordListComponent;
pub use status_bar::StatusBar;
pub use text_input::TextInput;
