//! Where the content comes from.
//!
//! [`AppContext`] records whether the built-in content or an authored file
//! was selected. Content is read on demand so a broken file can still be
//! inspected by `validate`.

use std::{
    borrow::Cow,
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use folio::{Format, Portfolio};
use log::debug;

/// Selected content source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Content compiled into the library.
    Builtin,
    /// An authored TOML or JSON file.
    File(PathBuf),
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Builtin => f.write_str("built-in content"),
            ContentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Application state shared by all commands.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub source: ContentSource,
}

impl AppContext {
    /// Build a context from the optional `--content` path.
    pub fn new(content: Option<PathBuf>) -> Self {
        let source = match content {
            Some(path) => ContentSource::File(path),
            None => ContentSource::Builtin,
        };
        debug!("content source: {source}");
        Self { source }
    }

    /// Load and check the selected content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or breaks a
    /// shape rule.
    pub fn portfolio(&self) -> anyhow::Result<Cow<'static, Portfolio>> {
        match &self.source {
            ContentSource::Builtin => Ok(Cow::Borrowed(folio::portfolio())),
            ContentSource::File(path) => {
                let p = folio::format::load(path)
                    .with_context(|| format!("Failed to load {}", path.display()))?;
                Ok(Cow::Owned(p))
            }
        }
    }

    /// Load content from `path` without applying the shape rules.
    pub fn read_unchecked(path: &Path) -> anyhow::Result<Portfolio> {
        let format = Format::from_path(path)?;
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let p = folio::format::from_str(&text, format)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(p)
    }
}
