//! Input handling and keybindings

use crate::app::App;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
    /// A selection was confirmed and stored in `App::outcome`
    Confirm,
}

/// Handle a key event
pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<Action> {
    // Notices are transient: any keystroke dismisses them
    if !matches!(key.code, KeyCode::Modifier(_)) {
        app.clear_status_message();
    }

    // Handle Ctrl+C
    if matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    ) {
        app.quit();
        return Ok(Action::Quit);
    }

    if app.dialog.is_some() {
        handle_dialog_input(app, key)
    } else {
        handle_picker_input(app, key)
    }
}

fn handle_dialog_input(app: &mut App, key: KeyEvent) -> Result<Action> {
    let Some(dialog) = app.dialog.as_mut() else {
        return Ok(Action::Continue);
    };

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_dialog(),
        KeyCode::Up | KeyCode::Char('k') => dialog.move_up(),
        KeyCode::Down | KeyCode::Char('j') => dialog.move_down(),
        KeyCode::Home | KeyCode::Char('g') => dialog.move_to_top(),
        KeyCode::End | KeyCode::Char('G') => dialog.move_to_bottom(),
        KeyCode::Char(' ') | KeyCode::Char('x') => dialog.toggle_current(),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => dialog.next_button(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => dialog.prev_button(),
        KeyCode::Enter => {
            app.press_dialog_button();
            if app.outcome.is_some() {
                return Ok(Action::Confirm);
            }
        }
        _ => {}
    }

    Ok(Action::Continue)
}

fn handle_picker_input(app: &mut App, key: KeyEvent) -> Result<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => {
            app.quit();
            return Ok(Action::Quit);
        }
        KeyCode::Enter => app.open_selected_note(),
        KeyCode::Up => app.picker.move_up(),
        KeyCode::Down => app.picker.move_down(),
        KeyCode::Char('p') if ctrl => app.picker.move_up(),
        KeyCode::Char('n') if ctrl => app.picker.move_down(),
        KeyCode::Char('u') if ctrl => app.picker.clear_query(),
        KeyCode::Backspace => app.picker.pop_char(),
        KeyCode::Char(c) if !ctrl => app.picker.push_char(c),
        _ => {}
    }

    Ok(Action::Continue)
}
