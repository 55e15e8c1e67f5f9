//! Application state

use anyhow::{Context, Result};
use hembed_core::{Config, EmbedRequest, Embedder, Notice, NoteSource, Vault};
use std::path::PathBuf;

use crate::heading_dialog::{DialogButton, HeadingDialog};
use crate::picker::FilePicker;
use crate::theme::Theme;

/// Main application state
pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub embedder: Embedder<Vault>,
    pub picker: FilePicker,
    pub dialog: Option<HeadingDialog>,
    pub status_message: Option<Notice>,
    pub should_quit: bool,
    /// Set when the user confirms a selection
    pub outcome: Option<EmbedRequest>,
    /// Document the embeds will go into, shown in the status bar
    pub target: Option<PathBuf>,
}

impl App {
    /// Create a new application instance over `vault`
    pub fn new(config: Config, vault: Vault, target: Option<PathBuf>) -> Result<Self> {
        let notes = vault.list_notes().context("Failed to list notes")?;

        let skip = if config.picker.skip_active {
            target.as_ref().and_then(|t| t.canonicalize().ok())
        } else {
            None
        };
        let picker = FilePicker::new(notes, skip, config.picker.case_sensitive);
        let theme = Theme::for_variant(config.theme);

        Ok(Self {
            config,
            theme,
            embedder: Embedder::new(vault),
            picker,
            dialog: None,
            status_message: None,
            should_quit: false,
            outcome: None,
            target,
        })
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status_message(&mut self, notice: Notice) {
        log::debug!("notice from {}: {}", notice.source, notice.message);
        self.status_message = Some(notice);
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Open the heading dialog for the highlighted note.
    ///
    /// A note without headings leaves the picker open with a notice.
    pub fn open_selected_note(&mut self) {
        let Some(note) = self.picker.current().cloned() else {
            return;
        };

        match self.embedder.select(&note) {
            Ok(selector) => {
                log::info!("selecting headings of {}", note.path.display());
                self.dialog = Some(HeadingDialog::new(note, selector));
            }
            Err(err) => self.set_status_message(Notice::from_error(&err, "picker")),
        }
    }

    /// Discard the dialog and go back to the picker
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Activate the focused dialog button
    pub fn press_dialog_button(&mut self) {
        let Some(button) = self.dialog.as_ref().map(|d| d.focused_button) else {
            return;
        };
        match button {
            DialogButton::Cancel => self.close_dialog(),
            DialogButton::Insert => self.confirm_dialog(),
        }
    }

    /// Accept the current selection and finish
    pub fn confirm_dialog(&mut self) {
        if let Some(dialog) = self.dialog.take() {
            self.outcome = Some(dialog.confirm());
            self.quit();
        }
    }
}
