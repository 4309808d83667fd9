//! Filter form for a record panel.
//!
//! The panel owns the text buffers the user edits and one
//! [`FilterCoordinator`]. Every edit is pushed into the coordinator as soon as
//! it happens; queries only leave the coordinator on Enter, a button press, or
//! a reset. The coordinator's host queues the resulting [`Action`]s, which the
//! panel hands back to the app.

use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::{
    BUTTON_DATE_SEARCH, BUTTON_RESET, BUTTON_SEARCH, LABEL_END_DATE, LABEL_SELLER, LABEL_START_DATE, TITLE_FILTERS,
};
use crate::filter::{FilterCoordinator, FilterHost, FilterInput, FilterQuery};
use crate::theme::{InteractionState, Theme};
use crate::ui::components::text_input::TextInput;
use crate::ui::core::{Action, Component};
use crate::utils::date::{parse_date_input, DateInputError, DEFAULT_DATE_FORMAT};

/// Filter host that queues coordinator events as app actions
#[derive(Debug, Default)]
pub struct PendingActions {
    queue: VecDeque<Action>,
}

impl PendingActions {
    pub fn next_action(&mut self) -> Option<Action> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl FilterHost for PendingActions {
    fn on_search(&mut self, query: &FilterQuery) {
        self.queue.push_back(Action::ApplyFilter(query.clone()));
    }

    fn on_reset(&mut self) {
        self.queue.push_back(Action::ClearFilter);
    }
}

/// How a focusable field is drawn and edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    Text,
    Date,
    Button,
}

/// Focusable fields of the filter panel, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterField {
    #[default]
    SellerTerm,
    StartDate,
    EndDate,
    SearchButton,
    DateSearchButton,
    ResetButton,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::SellerTerm,
        FilterField::StartDate,
        FilterField::EndDate,
        FilterField::SearchButton,
        FilterField::DateSearchButton,
        FilterField::ResetButton,
    ];

    pub fn shape(self) -> FieldShape {
        match self {
            FilterField::SellerTerm => FieldShape::Text,
            FilterField::StartDate | FilterField::EndDate => FieldShape::Date,
            FilterField::SearchButton | FilterField::DateSearchButton | FilterField::ResetButton => FieldShape::Button,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterField::SellerTerm => LABEL_SELLER,
            FilterField::StartDate => LABEL_START_DATE,
            FilterField::EndDate => LABEL_END_DATE,
            FilterField::SearchButton => BUTTON_SEARCH,
            FilterField::DateSearchButton => BUTTON_DATE_SEARCH,
            FilterField::ResetButton => BUTTON_RESET,
        }
    }

    fn position(self) -> usize {
        FilterField::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> FilterField {
        FilterField::ALL[(self.position() + 1) % FilterField::ALL.len()]
    }

    pub fn previous(self) -> FilterField {
        FilterField::ALL[(self.position() + FilterField::ALL.len() - 1) % FilterField::ALL.len()]
    }
}

/// What Enter (or a click) does on a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Submit {
    Term,
    DateRange,
    Reset,
}

pub struct FilterPanelComponent {
    coordinator: FilterCoordinator<PendingActions>,
    seller: TextInput,
    start: TextInput,
    end: TextInput,
    focus: FilterField,
    hovered: Option<FilterField>,
    date_format: String,
    start_error: Option<DateInputError>,
    end_error: Option<DateInputError>,
    theme: Theme,
    field_areas: Vec<(FilterField, Rect)>,
}

impl Default for FilterPanelComponent {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT, Theme::default())
    }
}

impl FilterPanelComponent {
    pub fn new(date_format: &str, theme: Theme) -> Self {
        Self {
            coordinator: FilterCoordinator::new(PendingActions::default()),
            seller: TextInput::new(),
            start: TextInput::new(),
            end: TextInput::new(),
            focus: FilterField::default(),
            hovered: None,
            date_format: date_format.to_string(),
            start_error: None,
            end_error: None,
            theme,
            field_areas: Vec::new(),
        }
    }

    pub fn focus(&self) -> FilterField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FilterField) {
        self.focus = field;
    }

    pub fn hovered(&self) -> Option<FilterField> {
        self.hovered
    }

    /// Uncommitted input as the coordinator currently sees it
    pub fn input(&self) -> &FilterInput {
        self.coordinator.input()
    }

    /// First date field whose text does not parse, with its error
    pub fn date_error(&self) -> Option<(FilterField, &DateInputError)> {
        [FilterField::StartDate, FilterField::EndDate]
            .into_iter()
            .find_map(|field| self.date_error_for(field).map(|err| (field, err)))
    }

    pub fn date_error_for(&self, field: FilterField) -> Option<&DateInputError> {
        match field {
            FilterField::StartDate => self.start_error.as_ref(),
            FilterField::EndDate => self.end_error.as_ref(),
            FilterField::SellerTerm
            | FilterField::SearchButton
            | FilterField::DateSearchButton
            | FilterField::ResetButton => None,
        }
    }

    /// Raw text of a text or date field; buttons have none
    pub fn field_text(&self, field: FilterField) -> Option<&str> {
        self.text_input(field).map(TextInput::value)
    }

    fn text_input(&self, field: FilterField) -> Option<&TextInput> {
        match field {
            FilterField::SellerTerm => Some(&self.seller),
            FilterField::StartDate => Some(&self.start),
            FilterField::EndDate => Some(&self.end),
            FilterField::SearchButton | FilterField::DateSearchButton | FilterField::ResetButton => None,
        }
    }

    fn text_input_mut(&mut self, field: FilterField) -> Option<&mut TextInput> {
        match field {
            FilterField::SellerTerm => Some(&mut self.seller),
            FilterField::StartDate => Some(&mut self.start),
            FilterField::EndDate => Some(&mut self.end),
            FilterField::SearchButton | FilterField::DateSearchButton | FilterField::ResetButton => None,
        }
    }

    /// Push the text of `field` into the coordinator
    fn commit_field(&mut self, field: FilterField) {
        match field {
            FilterField::SellerTerm => {
                let text = self.seller.value().to_string();
                self.coordinator.set_seller_term(text);
            }
            FilterField::StartDate => {
                let date = self.parse_date_field(FilterField::StartDate);
                self.coordinator.set_start_date(date);
            }
            FilterField::EndDate => {
                let date = self.parse_date_field(FilterField::EndDate);
                self.coordinator.set_end_date(date);
            }
            FilterField::SearchButton | FilterField::DateSearchButton | FilterField::ResetButton => {}
        }
    }

    /// Empty or malformed date text leaves the bound unset
    fn parse_date_field(&mut self, field: FilterField) -> Option<chrono::NaiveDate> {
        let text = self.field_text(field).unwrap_or_default();
        let (date, error) = match parse_date_input(text, &self.date_format) {
            Ok(date) => (Some(date), None),
            Err(DateInputError::Empty) => (None, None),
            Err(err) => {
                log::debug!("Filter panel: {} field: {}", field.label(), err);
                (None, Some(err))
            }
        };
        match field {
            FilterField::StartDate => self.start_error = error,
            FilterField::EndDate => self.end_error = error,
            FilterField::SellerTerm
            | FilterField::SearchButton
            | FilterField::DateSearchButton
            | FilterField::ResetButton => {}
        }
        date
    }

    fn submit_kind(field: FilterField) -> Submit {
        match field {
            FilterField::SellerTerm | FilterField::SearchButton => Submit::Term,
            FilterField::StartDate | FilterField::EndDate | FilterField::DateSearchButton => Submit::DateRange,
            FilterField::ResetButton => Submit::Reset,
        }
    }

    fn submit(&mut self, field: FilterField) -> Action {
        match Self::submit_kind(field) {
            Submit::Term => {
                self.coordinator.submit_term_search();
            }
            Submit::DateRange => {
                self.coordinator.submit_date_range_search();
            }
            Submit::Reset => self.reset(),
        }
        self.next_action()
    }

    /// Clear every field and queue a [`Action::ClearFilter`]
    pub fn reset(&mut self) {
        self.seller.clear();
        self.start.clear();
        self.end.clear();
        self.start_error = None;
        self.end_error = None;
        self.coordinator.reset();
    }

    fn next_action(&mut self) -> Action {
        self.coordinator.host_mut().next_action().unwrap_or(Action::None)
    }

    fn edit_focused<F>(&mut self, edit: F) -> Action
    where
        F: FnOnce(&mut TextInput) -> bool,
    {
        let field = self.focus;
        let changed = match self.text_input_mut(field) {
            Some(input) => edit(input),
            None => false,
        };
        if changed {
            self.commit_field(field);
        }
        Action::None
    }

    fn field_at(&self, column: u16, row: u16) -> Option<FilterField> {
        let position = Position::new(column, row);
        self.field_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(field, _)| *field)
    }

    fn interaction_state(&self, field: FilterField) -> InteractionState {
        if self.focus == field {
            InteractionState::Focus
        } else if self.hovered == Some(field) {
            InteractionState::Hover
        } else {
            InteractionState::Normal
        }
    }

    fn render_field(&self, f: &mut Frame, field: FilterField, area: Rect) {
        let state = self.interaction_state(field);
        match field.shape() {
            FieldShape::Text | FieldShape::Date => {
                let style = self.theme.field.for_state(state);
                let title = match field.shape() {
                    FieldShape::Date => format!("{} ({})", field.label(), self.date_format),
                    _ => field.label().to_string(),
                };
                let text = self.field_text(field).unwrap_or_default();
                let width = area.width.saturating_sub(2);
                let cursor = self.text_input(field).map(TextInput::cursor_position).unwrap_or(0);
                let cursor = u16::try_from(cursor).unwrap_or(u16::MAX);
                // Keep the cursor inside the borders by scrolling the text left
                let offset = cursor.saturating_sub(width.saturating_sub(1));
                let paragraph = Paragraph::new(text)
                    .scroll((0, offset))
                    .block(Block::default().borders(Borders::ALL).title(title).style(style));
                f.render_widget(paragraph, area);

                if state == InteractionState::Focus && width > 0 {
                    f.set_cursor_position((area.x + 1 + cursor - offset, area.y + 1));
                }
            }
            FieldShape::Button => {
                let style = self.theme.button.for_state(state);
                f.render_widget(Paragraph::new(field.label()).style(style), area);
            }
        }
    }
}

impl Component for FilterPanelComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                Action::None
            }
            KeyCode::Esc => {
                self.reset();
                self.next_action()
            }
            KeyCode::Enter => self.submit(self.focus),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.edit_focused(|input| {
                    input.insert(c);
                    true
                })
            }
            KeyCode::Backspace => self.edit_focused(TextInput::backspace),
            KeyCode::Delete => self.edit_focused(TextInput::delete),
            KeyCode::Left => self.edit_focused(|input| {
                input.move_left();
                false
            }),
            KeyCode::Right => self.edit_focused(|input| {
                input.move_right();
                false
            }),
            KeyCode::Home => self.edit_focused(|input| {
                input.move_home();
                false
            }),
            KeyCode::End => self.edit_focused(|input| {
                input.move_end();
                false
            }),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let target = self.field_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                self.hovered = target;
                Action::None
            }
            MouseEventKind::Down(MouseButton::Left) => match target {
                Some(field) => {
                    self.focus = field;
                    match field.shape() {
                        FieldShape::Button => self.submit(field),
                        FieldShape::Text | FieldShape::Date => Action::None,
                    }
                }
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(TITLE_FILTERS)
            .style(Style::default().fg(Color::Gray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(1), Constraint::Length(1)]).split(inner);
        let inputs = Layout::horizontal([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);
        let buttons = Layout::horizontal([
            Constraint::Length(BUTTON_SEARCH.chars().count() as u16),
            Constraint::Length(2),
            Constraint::Length(BUTTON_DATE_SEARCH.chars().count() as u16),
            Constraint::Length(2),
            Constraint::Length(BUTTON_RESET.chars().count() as u16),
            Constraint::Min(0),
        ])
        .split(rows[1]);

        self.field_areas = vec![
            (FilterField::SellerTerm, inputs[0]),
            (FilterField::StartDate, inputs[1]),
            (FilterField::EndDate, inputs[2]),
            (FilterField::SearchButton, buttons[0]),
            (FilterField::DateSearchButton, buttons[2]),
            (FilterField::ResetButton, buttons[4]),
        ];

        for (field, area) in self.field_areas.clone() {
            self.render_field(f, field, area);
        }

        if let Some((field, err)) = self.date_error() {
            let message = format!("Invalid date in {}: {}", field.label(), err);
            let line = Line::from(Span::styled(message, Style::default().fg(Color::Red)));
            f.render_widget(Paragraph::new(line), rows[2]);
        }
    }
}
