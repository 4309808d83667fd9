//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::STATUS_HINTS;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status line above the key hints
    pub fn render(f: &mut Frame, area: Rect, status: &str, warning: Option<&str>) {
        let mut spans = vec![Span::styled(status.to_string(), Style::default().fg(Color::Gray))];
        if let Some(warning) = warning {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(warning.to_string(), Style::default().fg(Color::Yellow)));
        }

        let lines = vec![
            Line::from(spans),
            Line::from(Span::styled(STATUS_HINTS, Style::default().fg(Color::DarkGray))),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
