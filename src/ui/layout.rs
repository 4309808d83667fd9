//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub tabs: Rect,
    pub filters: Rect,
    pub list: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Height of the filter panel: border, input row, button row, error row
    pub const FILTER_PANEL_HEIGHT: u16 = 7;
    pub const TABS_HEIGHT: u16 = 1;
    pub const STATUS_HEIGHT: u16 = 2;

    /// Split the screen into tabs, filter panel, record list and status bar.
    ///
    /// The list gets `list_percent` of the height left after the fixed rows
    /// (never less than 3 lines when the screen allows it).
    #[must_use]
    pub fn main_layout(area: Rect, list_percent: u16) -> MainAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::TABS_HEIGHT),
                Constraint::Length(Self::FILTER_PANEL_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(Self::STATUS_HEIGHT),
            ])
            .split(area);

        let list_area = chunks[2];
        let list_height = ((list_area.height as u32 * list_percent.min(100) as u32) / 100) as u16;
        let list = Rect::new(list_area.x, list_area.y, list_area.width, list_height.max(list_area.height.min(3)));

        MainAreas {
            tabs: chunks[0],
            filters: chunks[1],
            list,
            status: chunks[3],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
