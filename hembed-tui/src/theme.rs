//! Theme system for dark/light modes

use hembed_core::config::ThemeVariant;
use hembed_core::NoticeLevel;
use ratatui::style::{Color, Modifier, Style};

/// Theme definition
#[derive(Clone, Debug)]
pub struct Theme {
    pub base: Style,
    pub heading: [Style; 6],
    pub checked: Style,
    pub disabled: Style,
    pub query: Style,
    pub border: Color,
    pub border_active: Color,
    pub cursor_line_bg: Color,
    pub button: Style,
    pub button_focused: Style,
    pub status_bar_fg: Color,
    pub status_bar_bg: Color,
    pub notice_warning: Style,
    pub notice_error: Style,
}

impl Theme {
    /// Create a theme for the given variant
    pub fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Style of a heading label at `level` (1-6)
    pub fn heading_style(&self, level: u8) -> Style {
        let idx = (level.clamp(1, 6) - 1) as usize;
        self.heading[idx]
    }

    /// Style of the status bar when showing a notice
    pub fn notice_style(&self, level: NoticeLevel) -> Style {
        match level {
            NoticeLevel::Info => Style::default()
                .fg(self.status_bar_fg)
                .bg(self.status_bar_bg),
            NoticeLevel::Warning => self.notice_warning,
            NoticeLevel::Error => self.notice_error,
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            base: Style::default().fg(Color::White),
            heading: [
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::LightCyan),
                Style::default().fg(Color::LightGreen),
                Style::default().fg(Color::LightYellow),
                Style::default().fg(Color::LightMagenta),
                Style::default().fg(Color::Gray),
            ],
            checked: Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            query: Style::default().fg(Color::Yellow),
            border: Color::DarkGray,
            border_active: Color::LightCyan,
            cursor_line_bg: Color::Rgb(40, 40, 40),
            button: Style::default().fg(Color::Gray),
            button_focused: Style::default()
                .fg(Color::Black)
                .bg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
            status_bar_fg: Color::Black,
            status_bar_bg: Color::LightBlue,
            notice_warning: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            notice_error: Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            base: Style::default().fg(Color::Black),
            heading: [
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Green),
                Style::default().fg(Color::Rgb(150, 100, 0)), // Dark yellow
                Style::default().fg(Color::Magenta),
                Style::default().fg(Color::DarkGray),
            ],
            checked: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::CROSSED_OUT),
            query: Style::default().fg(Color::Rgb(150, 75, 0)),
            border: Color::Gray,
            border_active: Color::Blue,
            cursor_line_bg: Color::Rgb(230, 230, 250), // Light lavender
            button: Style::default().fg(Color::DarkGray),
            button_focused: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            status_bar_fg: Color::White,
            status_bar_bg: Color::Blue,
            notice_warning: Style::default()
                .fg(Color::Black)
                .bg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            notice_error: Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_style_clamps_level() {
        let theme = Theme::dark();
        assert_eq!(theme.heading_style(0), theme.heading[0]);
        assert_eq!(theme.heading_style(9), theme.heading[5]);
    }

    #[test]
    fn test_variants_differ() {
        assert_ne!(Theme::dark().base, Theme::light().base);
    }
}
