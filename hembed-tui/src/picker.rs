//! Note picker: a query line over the vault's notes

use hembed_core::vault::{suggest, NoteFile};
use std::path::PathBuf;

pub struct FilePicker {
    notes: Vec<NoteFile>,
    pub query: String,
    pub matches: Vec<NoteFile>,
    pub selected_index: usize,
    skip: Option<PathBuf>,
    case_sensitive: bool,
}

impl FilePicker {
    /// Create a picker over `notes`, hiding `skip` (the document being edited)
    pub fn new(notes: Vec<NoteFile>, skip: Option<PathBuf>, case_sensitive: bool) -> Self {
        let mut picker = Self {
            notes,
            query: String::new(),
            matches: Vec::new(),
            selected_index: 0,
            skip,
            case_sensitive,
        };
        picker.refresh();
        picker
    }

    fn refresh(&mut self) {
        self.matches = suggest(
            &self.notes,
            &self.query,
            self.skip.as_deref(),
            self.case_sensitive,
        )
        .into_iter()
        .cloned()
        .collect();
        self.selected_index = self
            .selected_index
            .min(self.matches.len().saturating_sub(1));
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selected_index = 0;
        self.refresh();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refresh();
        }
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.selected_index = 0;
        self.refresh();
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index < self.matches.len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// The highlighted note, if any note matches
    pub fn current(&self) -> Option<&NoteFile> {
        self.matches.get(self.selected_index)
    }

    /// Total number of pickable notes
    pub fn total(&self) -> usize {
        self.notes.len() - usize::from(self.skip_is_listed())
    }

    fn skip_is_listed(&self) -> bool {
        self.skip
            .as_deref()
            .is_some_and(|skip| self.notes.iter().any(|n| n.path == skip))
    }
}
