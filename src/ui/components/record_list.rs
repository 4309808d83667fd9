//! Record list for the active panel

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::config::DisplayConfig;
use crate::records::{format_amount, Record};
use crate::theme::{InteractionState, Theme};
use crate::ui::core::{Action, Component};
use crate::utils::date::format_with;

pub struct RecordListComponent {
    records: Vec<Record>,
    total: usize,
    title: String,
    list_state: ListState,
    display_config: DisplayConfig,
    theme: Theme,
}

impl Default for RecordListComponent {
    fn default() -> Self {
        Self::new(DisplayConfig::default(), Theme::default())
    }
}

impl RecordListComponent {
    pub fn new(display_config: DisplayConfig, theme: Theme) -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            title: String::new(),
            list_state: ListState::default(),
            display_config,
            theme,
        }
    }

    /// Replace the visible records. `total` is the panel size before filtering.
    pub fn update_records(&mut self, title: &str, records: Vec<Record>, total: usize) {
        self.title = title.to_string();
        self.total = total;
        self.records = records;
        self.list_state.select(if self.records.is_empty() { None } else { Some(0) });
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn selected(&self) -> Option<&Record> {
        self.list_state.selected().and_then(|index| self.records.get(index))
    }

    pub fn next(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(index) if index + 1 < self.records.len() => index + 1,
            Some(index) => index,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn previous(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let previous = self.list_state.selected().map(|index| index.saturating_sub(1)).unwrap_or(0);
        self.list_state.select(Some(previous));
    }

    fn render_item(&self, record: &Record) -> ListItem<'static> {
        let badge_style = Style::default()
            .fg(self.theme.badge_color(record.kind))
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![
            Span::styled(format!("[{}] ", record.kind.badge()), badge_style),
            Span::styled(
                format!("{} ", format_with(record.date, &self.display_config.date_format)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(record.seller.clone(), self.theme.list_row.for_state(InteractionState::Normal)),
        ];
        if !record.summary.is_empty() {
            spans.push(Span::raw(format!(" - {}", record.summary)));
        }
        if self.display_config.show_amounts {
            if let Some(cents) = record.amount_cents {
                spans.push(Span::styled(format!("  {}", format_amount(cents)), Style::default().fg(Color::Cyan)));
            }
        }
        ListItem::new(Line::from(spans))
    }
}

impl Component for RecordListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down => Action::NextRecord,
            KeyCode::Up => Action::PreviousRecord,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextRecord => {
                self.next();
                Action::None
            }
            Action::PreviousRecord => {
                self.previous();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(" {} ({}/{}) ", self.title, self.records.len(), self.total);
        let items: Vec<ListItem> = self.records.iter().map(|record| self.render_item(record)).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(self.theme.list_row.for_state(InteractionState::Focus))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
