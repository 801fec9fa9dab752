//! Error types for loading, parsing and checking content.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::ValidationErrors;

/// Errors produced by the content library.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Reading or writing a content file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML content: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization failed: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not name a supported format.
    #[error("unsupported content file extension: {0:?}")]
    UnsupportedExtension(String),

    #[error("unknown section: {0:?} (expected page1..page6)")]
    UnknownSection(String),

    /// The contact email is not a usable `mailto:` URI.
    #[error("malformed mailto URI {uri:?}: {reason}")]
    MailTo { uri: String, reason: String },

    /// The content parsed but broke one or more shape rules.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ContentError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn mailto(uri: &str, reason: impl Into<String>) -> Self {
        ContentError::MailTo {
            uri: uri.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;
