//! Heading selection dialog
//!
//! Row 0 is the "Select all" checkbox, rows 1.. are the note's headings.
//! All selection rules live in [`HeadingSelector`]; this type only tracks the
//! cursor, the "Select all" checkbox and the focused button.

use hembed_core::{EmbedRequest, Heading, HeadingSelector, NoteFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Cancel,
    Insert,
}

impl DialogButton {
    pub fn label(&self) -> &str {
        match self {
            DialogButton::Cancel => "Cancel",
            DialogButton::Insert => "Insert",
        }
    }
}

/// How a row should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Checked,
    Unchecked,
    Disabled,
}

pub struct HeadingDialog {
    pub note: NoteFile,
    selector: HeadingSelector,
    pub select_all: bool,
    pub selected_index: usize,
    pub focused_button: DialogButton,
}

impl HeadingDialog {
    pub fn new(note: NoteFile, selector: HeadingSelector) -> Self {
        Self {
            note,
            selector,
            select_all: false,
            selected_index: 0,
            focused_button: DialogButton::Insert,
        }
    }

    /// Number of rows including the "Select all" row
    pub fn row_count(&self) -> usize {
        self.selector.headings().len() + 1
    }

    /// Heading shown on a row, `None` for the "Select all" row
    pub fn heading_at(&self, row: usize) -> Option<&Heading> {
        row.checked_sub(1).and_then(|i| self.selector.headings().get(i))
    }

    pub fn row_state(&self, row: usize) -> RowState {
        let Some(index) = row.checked_sub(1) else {
            return if self.select_all {
                RowState::Checked
            } else {
                RowState::Unchecked
            };
        };

        let state = self.selector.state();
        if state.is_disabled(index) {
            RowState::Disabled
        } else if state.is_selected(index) {
            RowState::Checked
        } else {
            RowState::Unchecked
        }
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index < self.row_count().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.selected_index = self.row_count().saturating_sub(1);
    }

    /// Flip the checkbox on the current row
    pub fn toggle_current(&mut self) {
        match self.selected_index.checked_sub(1) {
            None => {
                self.select_all = !self.select_all;
                if self.select_all {
                    self.selector.select_all_top_level();
                } else {
                    self.selector.clear();
                }
            }
            Some(index) => self.selector.toggle(index),
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selector.state().selected().len()
    }

    pub fn next_button(&mut self) {
        self.focused_button = match self.focused_button {
            DialogButton::Cancel => DialogButton::Insert,
            DialogButton::Insert => DialogButton::Cancel,
        };
    }

    pub fn prev_button(&mut self) {
        // Two buttons, so previous and next coincide.
        self.next_button();
    }

    /// Consume the dialog, yielding the confirmed selection
    pub fn confirm(self) -> EmbedRequest {
        EmbedRequest::from_selector(self.note, self.selector)
    }
}
