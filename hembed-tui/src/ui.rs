//! UI rendering

use crate::app::App;
use crate::heading_dialog::{DialogButton, HeadingDialog, RowState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Draw the UI
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Picker (and dialog overlay)
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_picker(frame, app, chunks[0]);

    if let Some(dialog) = &app.dialog {
        render_dialog(frame, app, dialog, chunks[0]);
    }

    render_status_bar(frame, app, chunks[1]);
}

/// Cut `text` to fit in `max_width` columns, marking the cut with `…`
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

fn render_picker(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let focused = app.dialog.is_none();
    let border_style = if focused {
        Style::default().fg(app.theme.border_active)
    } else {
        Style::default().fg(app.theme.border)
    };

    let query = Paragraph::new(Line::from(vec![
        Span::styled("> ", app.theme.query),
        Span::styled(app.picker.query.clone(), app.theme.base),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Embed headings from"),
    );
    frame.render_widget(query, chunks[0]);

    let width = chunks[1].width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .picker
        .matches
        .iter()
        .map(|note| ListItem::new(truncate(&note.display_path(), width)))
        .collect();

    let title = format!("Notes ({}/{})", app.picker.matches.len(), app.picker.total());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .style(app.theme.base)
        .highlight_style(
            Style::default()
                .bg(app.theme.cursor_line_bg)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.picker.matches.is_empty() {
        state.select(Some(app.picker.selected_index));
    }
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

/// Centered rect taking the given percentage of `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Text of one dialog row, without styling
pub fn row_label(app: &App, dialog: &HeadingDialog, row: usize) -> String {
    let checkbox = match dialog.row_state(row) {
        RowState::Checked => "[x]",
        RowState::Unchecked => "[ ]",
        RowState::Disabled => "[-]",
    };

    match dialog.heading_at(row) {
        None => format!("{checkbox} Select all top-level"),
        Some(heading) => {
            let indent = " ".repeat(
                usize::from(heading.level.saturating_sub(1)) * usize::from(app.config.dialog.indent),
            );
            let marker = if app.config.dialog.show_levels {
                format!("{} ", "#".repeat(usize::from(heading.level)))
            } else {
                String::new()
            };
            format!("{indent}{checkbox} {marker}{}", heading.text)
        }
    }
}

fn render_dialog(frame: &mut Frame, app: &App, dialog: &HeadingDialog, area: Rect) {
    let popup = centered_rect(70, 80, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_active))
        .title(format!("Select headings: {}", dialog.note.display_path()));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let width = chunks[0].width as usize;
    let items: Vec<ListItem> = (0..dialog.row_count())
        .map(|row| {
            let text = truncate(&row_label(app, dialog, row), width);
            let style = match (dialog.row_state(row), dialog.heading_at(row)) {
                (RowState::Disabled, _) => app.theme.disabled,
                (RowState::Checked, _) => app.theme.checked,
                (RowState::Unchecked, Some(heading)) => app.theme.heading_style(heading.level),
                (RowState::Unchecked, None) => app.theme.base,
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(app.theme.cursor_line_bg)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default().with_selected(Some(dialog.selected_index));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let buttons: Vec<Span> = [DialogButton::Cancel, DialogButton::Insert]
        .iter()
        .flat_map(|button| {
            let style = if *button == dialog.focused_button {
                app.theme.button_focused
            } else {
                app.theme.button
            };
            [
                Span::styled(format!("[ {} ]", button.label()), style),
                Span::raw("  "),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(buttons)), chunks[1]);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(notice) = &app.status_message {
        let status = Paragraph::new(Line::from(Span::styled(
            format!(" {}", notice.message),
            app.theme.notice_style(notice.level),
        )))
        .style(app.theme.notice_style(notice.level));
        frame.render_widget(status, area);
        return;
    }

    let target = app
        .target
        .as_ref()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("no target");

    let status_text = match &app.dialog {
        Some(dialog) => format!(
            " hembed  -> {}  {} selected  space:toggle  tab:button  enter:confirm  esc:back",
            target,
            dialog.selected_count()
        ),
        None => format!(
            " hembed  -> {}  type to filter  enter:open  esc:quit",
            target
        ),
    };

    let style = Style::default()
        .fg(app.theme.status_bar_fg)
        .bg(app.theme.status_bar_bg)
        .add_modifier(Modifier::BOLD);
    let status = Paragraph::new(Line::from(vec![Span::styled(status_text, style)])).style(style);

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("Intro", 10), "Intro");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate("Introduction", 6), "Intro…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        assert_eq!(truncate("見出し見出し", 5), "見出…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate("abc", 0), "");
    }
}
