use crate::constants::{TITLE_MESSAGES, TITLE_PURCHASES, TITLE_RETURNS};
use crate::filter::FilterQuery;

/// Dashboard panel, one per record kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Purchases,
    Returns,
    Messages,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Purchases, Panel::Returns, Panel::Messages];

    pub fn index(self) -> usize {
        match self {
            Panel::Purchases => 0,
            Panel::Returns => 1,
            Panel::Messages => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Panel::Purchases => TITLE_PURCHASES,
            Panel::Returns => TITLE_RETURNS,
            Panel::Messages => TITLE_MESSAGES,
        }
    }

    /// Parse a config name such as `"returns"`
    pub fn from_name(name: &str) -> Option<Panel> {
        match name.trim().to_lowercase().as_str() {
            "purchases" => Some(Panel::Purchases),
            "returns" => Some(Panel::Returns),
            "messages" => Some(Panel::Messages),
            _ => None,
        }
    }

    pub fn next(self) -> Panel {
        Panel::ALL[(self.index() + 1) % Panel::ALL.len()]
    }

    pub fn previous(self) -> Panel {
        Panel::ALL[(self.index() + Panel::ALL.len() - 1) % Panel::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Filtering
    ApplyFilter(FilterQuery),
    ClearFilter,

    // Navigation
    NextPanel,
    PreviousPanel,
    SelectPanel(Panel),
    NextRecord,
    PreviousRecord,

    // UI operations
    ToggleLogs,

    // App control
    Quit,
    None,
}
