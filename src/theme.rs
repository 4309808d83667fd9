//! Immutable UI theme.
//!
//! A [`Theme`] is resolved once from [`ThemeConfig`] when the app starts and
//! is never modified afterwards. Every styled element carries a fully
//! specified style for each [`InteractionState`].

use anyhow::{anyhow, Result};
use ratatui::style::{Color, Modifier, Style};

use crate::config::{StateColors, ThemeConfig};
use crate::records::RecordKind;
use crate::utils::color::parse_color;

/// Interaction state of a styled element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Normal,
    Hover,
    Focus,
}

/// One style per interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateStyles {
    pub normal: Style,
    pub hover: Style,
    pub focus: Style,
}

impl StateStyles {
    pub fn for_state(&self, state: InteractionState) -> Style {
        match state {
            InteractionState::Normal => self.normal,
            InteractionState::Hover => self.hover,
            InteractionState::Focus => self.focus,
        }
    }

    fn from_colors(normal: Color, hover: Color, focus: Color) -> Self {
        Self {
            normal: Style::default().fg(normal),
            hover: Style::default().fg(hover).add_modifier(Modifier::UNDERLINED),
            focus: Style::default().fg(focus).add_modifier(Modifier::BOLD),
        }
    }

    fn resolve(key: &str, colors: &StateColors) -> Result<Self> {
        Ok(Self::from_colors(
            resolve_color(&format!("{}.normal", key), &colors.normal)?,
            resolve_color(&format!("{}.hover", key), &colors.hover)?,
            resolve_color(&format!("{}.focus", key), &colors.focus)?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub field: StateStyles,
    pub button: StateStyles,
    pub list_row: StateStyles,
    purchase: Color,
    return_: Color,
    message: Color,
}

impl Theme {
    /// Resolve every colour name in `config`, failing on the first unknown one
    pub fn from_config(config: &ThemeConfig) -> Result<Self> {
        Ok(Self {
            field: StateStyles::resolve("field", &config.field)?,
            button: StateStyles::resolve("button", &config.button)?,
            list_row: StateStyles::resolve("list_row", &config.list_row)?,
            purchase: resolve_color("purchase", &config.purchase)?,
            return_: resolve_color("return", &config.return_)?,
            message: resolve_color("message", &config.message)?,
        })
    }

    pub fn badge_color(&self, kind: RecordKind) -> Color {
        match kind {
            RecordKind::Purchase => self.purchase,
            RecordKind::Return => self.return_,
            RecordKind::Message => self.message,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            field: StateStyles::from_colors(Color::Gray, Color::White, Color::Yellow),
            button: StateStyles::from_colors(Color::DarkGray, Color::White, Color::Cyan),
            list_row: StateStyles::from_colors(Color::Reset, Color::LightBlue, Color::Yellow),
            purchase: Color::Green,
            return_: Color::Yellow,
            message: Color::Blue,
        }
    }
}

fn resolve_color(key: &str, name: &str) -> Result<Color> {
    parse_color(name).ok_or_else(|| anyhow!("Unknown colour '{}' for theme.{}", name, key))
}
