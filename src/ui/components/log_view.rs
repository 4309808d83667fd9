//! Overlay listing recent log lines

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;

pub struct LogView;

impl LogView {
    /// Render newest-first log lines in a centered popup
    pub fn render(f: &mut Frame, area: Rect, logger: &Logger) {
        let popup = LayoutManager::centered_rect(80, 70, area);
        f.render_widget(Clear, popup);

        let lines: Vec<Line> = logger.get_logs().into_iter().map(Line::from).collect();
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(TITLE_LOGS)
                    .style(Style::default().fg(Color::Gray)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, popup);
    }
}
