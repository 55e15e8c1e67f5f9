//! User-facing error conditions

use std::path::PathBuf;

use crate::notice::Notice;

/// The two conditions that abort an embed and are reported to the user
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EmbedError {
    /// The chosen note has no headings; the selection dialog is not opened
    #[error("No headings found in {}", .note.display())]
    NoHeadingsFound { note: PathBuf },
    /// There is no document to insert the embeds into
    #[error("No active Markdown document to insert into")]
    NoActiveDocument,
}

impl EmbedError {
    /// Convert into a transient notice for display
    pub fn to_notice(&self) -> Notice {
        let source = match self {
            Self::NoHeadingsFound { .. } => "picker",
            Self::NoActiveDocument => "insert",
        };
        Notice::warning(self.to_string(), source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    #[test]
    fn test_no_headings_message_names_note() {
        let err = EmbedError::NoHeadingsFound {
            note: PathBuf::from("notes/empty.md"),
        };
        assert_eq!(err.to_string(), "No headings found in notes/empty.md");
    }

    #[test]
    fn test_to_notice() {
        let notice = EmbedError::NoActiveDocument.to_notice();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.source, "insert");
        assert!(notice.message.contains("No active"));
    }

    #[test]
    fn test_downcast_from_anyhow() {
        let err: anyhow::Error = EmbedError::NoActiveDocument.into();
        assert_eq!(
            err.downcast_ref::<EmbedError>(),
            Some(&EmbedError::NoActiveDocument)
        );
    }
}
