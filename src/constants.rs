//! Constants used throughout the application
//!
//! This module centralizes UI text, status messages, and limits to keep them
//! consistent across components.

// Panel titles
pub const TITLE_PURCHASES: &str = "Purchases";
pub const TITLE_RETURNS: &str = "Returns";
pub const TITLE_MESSAGES: &str = "Messages";
pub const TITLE_FILTERS: &str = " Filters ";
pub const TITLE_LOGS: &str = " Logs ";

// Filter field labels
pub const LABEL_SELLER: &str = "Seller";
pub const LABEL_START_DATE: &str = "From";
pub const LABEL_END_DATE: &str = "To";
pub const BUTTON_SEARCH: &str = "[ Search ]";
pub const BUTTON_DATE_SEARCH: &str = "[ By date ]";
pub const BUTTON_RESET: &str = "[ Reset ]";

// Status messages
pub const STATUS_NO_FILTER: &str = "No filter applied";
pub const STATUS_FILTER_CLEARED: &str = "Filter cleared";
pub const STATUS_REVERSED_RANGE: &str = "⚠ start is after end, range matches nothing";
pub const STATUS_NO_RECORDS: &str = "No records loaded";
pub const STATUS_HINTS: &str = "Tab: next field • Enter: submit • Esc: reset • PgUp/PgDn: panel • Ctrl+L: logs • Ctrl+C: quit";

// Config
pub const CONFIG_FILE_NAME: &str = "filterdesk.toml";
pub const CONFIG_DIR_NAME: &str = "filterdesk";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Logging
pub const LOG_FILE_NAME: &str = "filterdesk.log";
pub const MAX_LOG_ENTRIES: usize = 1000;

// Layout limits
pub const LIST_HEIGHT_MIN_PERCENT: u16 = 30;
pub const LIST_HEIGHT_MAX_PERCENT: u16 = 90;
pub const LIST_HEIGHT_DEFAULT_PERCENT: u16 = 70;
