//! hembed TUI - Terminal user interface components
//!
//! This crate contains all ratatui/crossterm integration:
//! - App state management
//! - Event loop and input handling
//! - Note picker and heading selection dialog
//! - Rendering and theme system

pub mod app;
pub mod heading_dialog;
pub mod input;
pub mod picker;
pub mod terminal;
pub mod theme;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEventKind};
use hembed_core::EmbedRequest;
use std::time::Duration;

// Re-export main types
pub use app::App;

/// Run the TUI until the user confirms a selection or quits.
///
/// Returns the confirmed selection, or `None` when the user quit.
pub fn run(mut app: App) -> Result<Option<EmbedRequest>> {
    let mut terminal = terminal::init().context("Failed to initialize terminal")?;

    // Main event loop
    let result = run_loop(&mut terminal, &mut app);

    // Always restore terminal, even if run_loop fails
    terminal::restore().context("Failed to restore terminal")?;

    result?;
    Ok(app.outcome.take())
}

fn run_loop(terminal: &mut terminal::Tui, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|frame| ui::draw(frame, app))
            .context("Failed to draw frame")?;

        if app.should_quit {
            break;
        }

        // Poll for events with timeout
        if crossterm::event::poll(Duration::from_millis(100)).context("Failed to poll events")? {
            if let Event::Key(key) = crossterm::event::read().context("Failed to read event")? {
                // Only handle key press events, ignore release
                if key.kind == KeyEventKind::Press {
                    match input::handle_input(app, key)? {
                        input::Action::Confirm => {
                            log::info!("selection confirmed");
                        }
                        input::Action::Quit | input::Action::Continue => {}
                    }
                }
            }
        }
    }

    Ok(())
}
