//! Note discovery under a vault directory

use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::VaultConfig;

/// A note that can be picked as an embed source
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteFile {
    /// Absolute path on disk
    pub path: PathBuf,
    /// Path relative to the vault root, used for display and filtering
    pub rel_path: PathBuf,
    /// File name without extension, used in embed links
    pub basename: String,
}

impl NoteFile {
    /// Describe a file on disk relative to `root`
    pub fn new(root: &Path, path: &Path) -> Self {
        let rel_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        let basename = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            rel_path,
            basename,
        }
    }

    /// Relative path as displayed in the picker
    pub fn display_path(&self) -> String {
        self.rel_path.to_string_lossy().into_owned()
    }
}

/// Read access to notes
pub trait NoteSource {
    /// All notes that can be picked
    fn list_notes(&self) -> Result<Vec<NoteFile>>;

    /// Full text of a note
    fn read_note(&self, note: &NoteFile) -> Result<String>;
}

/// A directory of markdown notes
#[derive(Clone, Debug)]
pub struct Vault {
    root: PathBuf,
    config: VaultConfig,
}

impl Vault {
    /// Open a vault rooted at `root`, which must be an existing directory
    pub fn open(root: &Path, config: VaultConfig) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Failed to open vault: {}", root.display()))?;

        if !root.is_dir() {
            anyhow::bail!("Vault root is not a directory: {}", root.display());
        }

        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Describe an arbitrary file as a note of this vault
    pub fn note_for(&self, path: &Path) -> Result<NoteFile> {
        let abs = path
            .canonicalize()
            .with_context(|| format!("Failed to resolve note: {}", path.display()))?;
        Ok(NoteFile::new(&self.root, &abs))
    }

    fn is_note(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .and_then(OsStr::to_str)
                .is_some_and(|ext| {
                    self.config
                        .extensions
                        .iter()
                        .any(|e| e.eq_ignore_ascii_case(ext))
                })
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

impl NoteSource for Vault {
    fn list_notes(&self) -> Result<Vec<NoteFile>> {
        let include_hidden = self.config.include_hidden;
        let mut notes: Vec<NoteFile> = WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| include_hidden || !is_hidden(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable vault entry: {e}");
                    None
                }
            })
            .filter(|entry| self.is_note(entry))
            .map(|entry| NoteFile::new(&self.root, entry.path()))
            .collect();

        notes.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
        log::debug!("found {} notes under {}", notes.len(), self.root.display());
        Ok(notes)
    }

    fn read_note(&self, note: &NoteFile) -> Result<String> {
        fs::read_to_string(&note.path)
            .with_context(|| format!("Failed to read note: {}", note.path.display()))
    }
}

/// Filter notes for the picker: the relative path must contain `query` and
/// the note must not be `skip` (the document being edited)
pub fn suggest<'a>(
    notes: &'a [NoteFile],
    query: &str,
    skip: Option<&Path>,
    case_sensitive: bool,
) -> Vec<&'a NoteFile> {
    let needle = if case_sensitive {
        query.to_string()
    } else {
        query.to_lowercase()
    };

    notes
        .iter()
        .filter(|note| skip != Some(note.path.as_path()))
        .filter(|note| {
            let haystack = note.display_path();
            if case_sensitive {
                haystack.contains(&needle)
            } else {
                haystack.to_lowercase().contains(&needle)
            }
        })
        .collect()
}
