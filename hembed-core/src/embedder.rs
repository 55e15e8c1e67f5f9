//! Pick-a-note, pick-headings, insert-embeds flow
//!
//! [`Embedder`] holds the note source and performs the two checks that are
//! reported to the user: a note without headings and a missing target
//! document. Any front end (the TUI, or the headless CLI) drives it.

use anyhow::Result;

use crate::doc::TextSink;
use crate::embed::format_embeds;
use crate::error::EmbedError;
use crate::heading::{parse_headings, Heading};
use crate::selection::HeadingSelector;
use crate::vault::{NoteFile, NoteSource};

/// A confirmed selection, ready to be inserted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedRequest {
    pub note: NoteFile,
    /// Selected heading texts in selection order
    pub headings: Vec<String>,
}

impl EmbedRequest {
    /// Build the request from a finished selection
    pub fn from_selector(note: NoteFile, selector: HeadingSelector) -> Self {
        Self {
            note,
            headings: selector.finish(),
        }
    }

    /// The text that will be inserted
    pub fn render(&self) -> String {
        format_embeds(&self.note.basename, &self.headings)
    }
}

pub struct Embedder<S> {
    source: S,
}

impl<S: NoteSource> Embedder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read and parse a note, failing with [`EmbedError::NoHeadingsFound`]
    /// when it has no headings
    pub fn load_headings(&self, note: &NoteFile) -> Result<Vec<Heading>> {
        let content = self.source.read_note(note)?;
        let headings = parse_headings(&content);

        if headings.is_empty() {
            log::info!("no headings in {}", note.path.display());
            return Err(EmbedError::NoHeadingsFound {
                note: note.rel_path.clone(),
            }
            .into());
        }

        Ok(headings)
    }

    /// Open the selection for a note
    pub fn select(&self, note: &NoteFile) -> Result<HeadingSelector> {
        Ok(HeadingSelector::new(self.load_headings(note)?))
    }

    /// Insert the embeds for `request` into `sink`.
    ///
    /// Returns the number of embeds inserted; an empty selection inserts
    /// nothing.
    pub fn insert(&self, sink: Option<&mut dyn TextSink>, request: &EmbedRequest) -> Result<usize> {
        let Some(sink) = sink else {
            return Err(EmbedError::NoActiveDocument.into());
        };

        if request.headings.is_empty() {
            log::info!("nothing selected, skipping insert");
            return Ok(0);
        }

        sink.replace_selection(&request.render())?;
        Ok(request.headings.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    struct MemorySource {
        notes: HashMap<PathBuf, String>,
    }

    impl MemorySource {
        fn new(notes: &[(&str, &str)]) -> Self {
            Self {
                notes: notes
                    .iter()
                    .map(|(p, c)| (PathBuf::from(p), c.to_string()))
                    .collect(),
            }
        }
    }

    impl NoteSource for MemorySource {
        fn list_notes(&self) -> Result<Vec<NoteFile>> {
            Ok(self
                .notes
                .keys()
                .map(|p| NoteFile::new(Path::new("/"), p))
                .collect())
        }

        fn read_note(&self, note: &NoteFile) -> Result<String> {
            self.notes
                .get(&note.path)
                .cloned()
                .ok_or_else(|| anyhow!("missing note {}", note.path.display()))
        }
    }

    #[derive(Default)]
    struct Buffer(String);

    impl TextSink for Buffer {
        fn replace_selection(&mut self, text: &str) -> Result<()> {
            self.0.push_str(text);
            Ok(())
        }
    }

    fn note(path: &str) -> NoteFile {
        NoteFile::new(Path::new("/"), Path::new(path))
    }

    #[test]
    fn test_select_and_insert() -> Result<()> {
        let embedder = Embedder::new(MemorySource::new(&[("/Note.md", "# A\n## B\n## C\n# D\n")]));
        let note = note("/Note.md");

        let mut selector = embedder.select(&note)?;
        selector.toggle(0);
        assert!(selector.state().is_disabled(1));
        assert!(selector.state().is_disabled(2));

        let request = EmbedRequest::from_selector(note, selector);
        let mut buffer = Buffer::default();
        let count = embedder.insert(Some(&mut buffer), &request)?;

        assert_eq!(count, 1);
        assert_eq!(buffer.0, "![[Note#A]]\n");
        Ok(())
    }

    #[test]
    fn test_no_headings_found() {
        let embedder = Embedder::new(MemorySource::new(&[("/Empty.md", "just text\n")]));
        let err = embedder.select(&note("/Empty.md")).unwrap_err();

        assert_eq!(
            err.downcast_ref::<EmbedError>(),
            Some(&EmbedError::NoHeadingsFound {
                note: PathBuf::from("Empty.md")
            })
        );
    }

    #[test]
    fn test_read_failure_is_not_an_embed_error() {
        let embedder = Embedder::new(MemorySource::new(&[]));
        let err = embedder.load_headings(&note("/Gone.md")).unwrap_err();
        assert!(err.downcast_ref::<EmbedError>().is_none());
    }

    #[test]
    fn test_insert_without_sink() {
        let embedder = Embedder::new(MemorySource::new(&[]));
        let request = EmbedRequest {
            note: note("/Note.md"),
            headings: vec!["A".to_string()],
        };

        let err = embedder.insert(None, &request).unwrap_err();
        assert_eq!(
            err.downcast_ref::<EmbedError>(),
            Some(&EmbedError::NoActiveDocument)
        );
    }

    #[test]
    fn test_empty_selection_inserts_nothing() -> Result<()> {
        let embedder = Embedder::new(MemorySource::new(&[]));
        let request = EmbedRequest {
            note: note("/Note.md"),
            headings: vec![],
        };

        let mut buffer = Buffer::default();
        assert_eq!(embedder.insert(Some(&mut buffer), &request)?, 0);
        assert!(buffer.0.is_empty());
        Ok(())
    }

    #[test]
    fn test_render_multiple() {
        let request = EmbedRequest {
            note: note("/dir/Meeting.md"),
            headings: vec!["Agenda".to_string(), "Actions".to_string()],
        };
        assert_eq!(
            request.render(),
            "![[Meeting#Agenda]]\n![[Meeting#Actions]]\n"
        );
    }
}
