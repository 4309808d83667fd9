//! Top-level dashboard component.
//!
//! Holds the loaded records, one [`FilterPanelComponent`] per [`Panel`] and
//! the query currently applied to each panel. Filter panels emit
//! [`Action::ApplyFilter`] / [`Action::ClearFilter`]; this component applies
//! them to the active panel's records.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Tabs,
    Frame,
};

use crate::config::Config;
use crate::constants::{STATUS_FILTER_CLEARED, STATUS_NO_FILTER, STATUS_NO_RECORDS, STATUS_REVERSED_RANGE};
use crate::filter::{self, FilterQuery};
use crate::logger::Logger;
use crate::records::{records_for_panel, Record};
use crate::theme::Theme;
use crate::ui::components::{FilterPanelComponent, LogView, RecordListComponent, StatusBar};
use crate::ui::core::{Action, Component, EventType, Panel};
use crate::ui::layout::LayoutManager;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub records: Vec<Record>,
    pub active_panel: Panel,
    /// Applied query per panel, indexed by [`Panel::index`]
    pub applied: [Option<FilterQuery>; 3],
    pub status_message: Option<String>,
    pub warning_message: Option<String>,
    pub show_logs: bool,
}

impl AppState {
    pub fn applied_filter(&self, panel: Panel) -> Option<&FilterQuery> {
        self.applied[panel.index()].as_ref()
    }

    /// Records of `panel` that pass its applied filter
    pub fn visible_records(&self, panel: Panel) -> Vec<Record> {
        let panel_records = records_for_panel(&self.records, panel);
        filter::apply(&panel_records, self.applied_filter(panel))
            .into_iter()
            .cloned()
            .collect()
    }

    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.warning_message = None;
    }
}

pub struct AppComponent {
    // Component composition
    filter_panels: Vec<FilterPanelComponent>,
    record_list: RecordListComponent,

    // Application state
    state: AppState,
    logger: Logger,
    list_height_percent: u16,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, theme: Theme, records: Vec<Record>, logger: Logger) -> Self {
        let filter_panels = Panel::ALL
            .iter()
            .map(|_| FilterPanelComponent::new(&config.display.date_format, theme.clone()))
            .collect();

        let state = AppState {
            records,
            active_panel: config.default_panel(),
            ..Default::default()
        };

        let mut app = Self {
            filter_panels,
            record_list: RecordListComponent::new(config.display.clone(), theme),
            state,
            logger,
            list_height_percent: config.ui.list_height_percent,
            should_quit: false,
        };
        app.refresh_records();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn active_panel(&self) -> Panel {
        self.state.active_panel
    }

    /// Records currently shown in the list
    pub fn visible_records(&self) -> &[Record] {
        self.record_list.records()
    }

    pub fn filter_panel(&self, panel: Panel) -> &FilterPanelComponent {
        &self.filter_panels[panel.index()]
    }

    fn active_filter_panel_mut(&mut self) -> &mut FilterPanelComponent {
        &mut self.filter_panels[self.state.active_panel.index()]
    }

    /// Rebuild the list for the active panel from its applied filter
    fn refresh_records(&mut self) {
        let panel = self.state.active_panel;
        let total = self.state.records.iter().filter(|r| r.kind.panel() == panel).count();
        let visible = self.state.visible_records(panel);
        self.record_list.update_records(panel.title(), visible, total);
    }

    fn describe_filter(&self) -> String {
        let panel = self.state.active_panel;
        let shown = self.record_list.records().len();
        match self.state.applied_filter(panel) {
            Some(query) => format!("Filter: {} • {} match", query, shown),
            None if self.state.records.is_empty() => STATUS_NO_RECORDS.to_string(),
            None => STATUS_NO_FILTER.to_string(),
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        if self.state.show_logs {
            return match key.code {
                KeyCode::Esc => Action::ToggleLogs,
                KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ToggleLogs,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ToggleLogs,
            KeyCode::PageDown => Action::NextPanel,
            KeyCode::PageUp => Action::PreviousPanel,
            KeyCode::Up | KeyCode::Down => self.record_list.handle_key_events(key),
            _ => Action::None,
        }
    }

    /// Route a key through global shortcuts, then the active filter panel
    pub fn handle_key(&mut self, key: KeyEvent) {
        let mut action = self.handle_global_key(key);
        if action == Action::None && !self.state.show_logs {
            action = self.active_filter_panel_mut().handle_key_events(key);
        }
        self.handle_action(action);
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.state.show_logs {
            return;
        }
        let action = self.active_filter_panel_mut().handle_mouse_events(mouse);
        self.handle_action(action);
    }

    pub fn handle_event(&mut self, event: EventType) {
        match event {
            EventType::Key(key) => self.handle_key(key),
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => {}
        }
    }

    /// Apply an action to app state and child components
    pub fn handle_action(&mut self, action: Action) {
        let action = self.record_list.update(action);
        match action {
            Action::ApplyFilter(query) => {
                let panel = self.state.active_panel;
                self.state.warning_message = match query.range() {
                    Some(range) if range.is_reversed() => Some(STATUS_REVERSED_RANGE.to_string()),
                    _ => None,
                };
                self.state.applied[panel.index()] = Some(query);
                self.refresh_records();
                let status = self.describe_filter();
                log::info!("{}: {}", panel.title(), status);
                self.state.status_message = Some(status);
            }
            Action::ClearFilter => {
                let panel = self.state.active_panel;
                self.state.applied[panel.index()] = None;
                self.refresh_records();
                self.state.clear_messages();
                self.state.status_message = Some(STATUS_FILTER_CLEARED.to_string());
                log::info!("{}: filter cleared", panel.title());
            }
            Action::NextPanel => self.select_panel(self.state.active_panel.next()),
            Action::PreviousPanel => self.select_panel(self.state.active_panel.previous()),
            Action::SelectPanel(panel) => self.select_panel(panel),
            Action::ToggleLogs => {
                self.state.show_logs = !self.state.show_logs;
            }
            Action::Quit => {
                self.should_quit = true;
            }
            Action::NextRecord | Action::PreviousRecord | Action::None => {}
        }
    }

    fn select_panel(&mut self, panel: Panel) {
        if panel == self.state.active_panel {
            return;
        }
        self.active_filter_panel_mut().on_blur();
        self.state.active_panel = panel;
        self.active_filter_panel_mut().on_focus();
        self.state.clear_messages();
        self.refresh_records();
        log::debug!("Navigation: switched to {}", panel.title());
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let areas = LayoutManager::main_layout(area, self.list_height_percent);

        let titles: Vec<Line> = Panel::ALL.iter().map(|p| Line::from(p.title())).collect();
        let tabs = Tabs::new(titles)
            .select(self.state.active_panel.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, areas.tabs);

        let panel = self.state.active_panel.index();
        self.filter_panels[panel].render(f, areas.filters);
        self.record_list.render(f, areas.list);

        let status = self.state.status_message.clone().unwrap_or_else(|| self.describe_filter());
        StatusBar::render(f, areas.status, &status, self.state.warning_message.as_deref());

        if self.state.show_logs {
            LogView::render(f, area, &self.logger);
        }
    }
}
