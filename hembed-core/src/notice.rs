//! Transient user-facing notices

/// Notice severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational message
    Info,
    /// Something the user asked for could not be done
    Warning,
    /// An unexpected failure
    Error,
}

/// A short message shown to the user, such as in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    /// Where the notice came from (e.g., "picker", "insert", "config")
    pub source: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            source: source.into(),
        }
    }

    pub fn info(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message, source)
    }

    pub fn warning(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message, source)
    }

    pub fn error(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message, source)
    }

    /// Build a notice from any error, using the embed wording when it is one
    /// of the known user-facing conditions
    pub fn from_error(err: &anyhow::Error, source: impl Into<String>) -> Self {
        match err.downcast_ref::<crate::EmbedError>() {
            Some(embed) => embed.to_notice(),
            None => Self::error(format!("{err:#}"), source),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
