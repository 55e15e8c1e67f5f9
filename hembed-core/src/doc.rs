//! The active document that embeds are inserted into

use anyhow::{Context, Result};
use ropey::Rope;
use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::EmbedError;

/// Somewhere inserted text can go
pub trait TextSink {
    /// Replace the current selection (or insert at the cursor) with `text`
    fn replace_selection(&mut self, text: &str) -> Result<()>;
}

/// Insertion point in the target document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    /// Before the given zero-based line, clamped to the document end
    Line(usize),
    /// After the last line
    #[default]
    End,
}

/// A markdown document opened for editing
#[derive(Clone, Debug)]
pub struct TargetDocument {
    pub path: PathBuf,
    pub rope: Rope,
    pub cursor: Cursor,
    dirty: bool,
}

impl TargetDocument {
    /// Open the document at `path`.
    ///
    /// A missing path, a directory or a non-markdown file is not a document
    /// that can receive embeds and yields [`EmbedError::NoActiveDocument`].
    pub fn open(path: &Path, cursor: Cursor) -> Result<Self> {
        let is_markdown = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
        if !path.is_file() || !is_markdown {
            log::warn!("not an editable markdown document: {}", path.display());
            return Err(EmbedError::NoActiveDocument.into());
        }

        let abs_path = path
            .canonicalize()
            .with_context(|| format!("Failed to canonicalize path: {}", path.display()))?;

        let content = fs::read_to_string(&abs_path)
            .with_context(|| format!("Failed to read file: {}", abs_path.display()))?;

        Ok(Self {
            path: abs_path,
            rope: Rope::from_str(&content),
            cursor,
            dirty: false,
        })
    }

    /// Char index the next insertion goes to
    fn cursor_char(&self) -> usize {
        match self.cursor {
            Cursor::End => self.rope.len_chars(),
            Cursor::Line(line) => {
                let last = self.rope.len_lines().saturating_sub(1);
                if line > last {
                    self.rope.len_chars()
                } else {
                    self.rope.line_to_char(line)
                }
            }
        }
    }

    fn ends_with_newline(&self) -> bool {
        let len = self.rope.len_chars();
        len == 0 || self.rope.char(len - 1) == '\n'
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the document back to disk if it changed
    pub fn save(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let file = fs::File::create(&self.path)
            .with_context(|| format!("Failed to open file for writing: {}", self.path.display()))?;
        let mut writer = std::io::BufWriter::new(file);
        self.rope
            .write_to(&mut writer)
            .and_then(|()| writer.flush())
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;

        self.dirty = false;
        log::info!("saved {}", self.path.display());
        Ok(())
    }
}

impl TextSink for TargetDocument {
    fn replace_selection(&mut self, text: &str) -> Result<()> {
        let at = self.cursor_char();

        // Appending after a last line without a newline would join the two.
        let inserted = if at == self.rope.len_chars() && !self.ends_with_newline() {
            format!("\n{text}")
        } else {
            text.to_string()
        };

        self.rope.insert(at, &inserted);
        self.dirty = true;

        if let Cursor::Line(_) = self.cursor {
            self.cursor = Cursor::Line(self.rope.char_to_line(at + inserted.chars().count()));
        }

        log::debug!(
            "inserted {} chars into {}",
            inserted.chars().count(),
            self.path.display()
        );
        Ok(())
    }
}

/// Writes inserted text to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl TextSink for StdoutSink {
    fn replace_selection(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write to stdout")
    }
}

/// Copies inserted text to the system clipboard
#[cfg(feature = "clipboard")]
pub struct ClipboardSink {
    clipboard: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl ClipboardSink {
    pub fn new() -> Result<Self> {
        let clipboard = arboard::Clipboard::new().context("Failed to access clipboard")?;
        Ok(Self { clipboard })
    }
}

#[cfg(feature = "clipboard")]
impl TextSink for ClipboardSink {
    fn replace_selection(&mut self, text: &str) -> Result<()> {
        self.clipboard
            .set_text(text.to_string())
            .context("Failed to copy to clipboard")
    }
}
