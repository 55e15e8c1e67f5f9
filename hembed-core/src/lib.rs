//! hembed core - Heading parsing, hierarchical selection and embed insertion
//!
//! This crate contains the core logic for hembed, independent of terminal UI concerns:
//! - Heading extraction with top-level marking
//! - Hierarchical selection with cascading disable
//! - Embed link formatting
//! - Note discovery and the documents embeds are inserted into
//! - Configuration management

pub mod config;
pub mod doc;
pub mod embed;
pub mod embedder;
pub mod error;
pub mod heading;
pub mod notice;
pub mod selection;
pub mod vault;

// Re-export commonly used types
pub use config::Config;
pub use doc::{Cursor, StdoutSink, TargetDocument, TextSink};
pub use embedder::{EmbedRequest, Embedder};
pub use error::EmbedError;
pub use heading::{parse_headings, Heading};
pub use notice::{Notice, NoticeLevel};
pub use selection::{HeadingSelector, SelectionEvent, SelectionState};
pub use vault::{NoteFile, NoteSource, Vault};

#[cfg(feature = "clipboard")]
pub use doc::ClipboardSink;
