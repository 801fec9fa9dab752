//! TOML and JSON interchange for content files.
//!
//! The format is picked from the file extension, the same way config files
//! are handled elsewhere: `.toml`/`.tml` and `.json`.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
    time::SystemTime,
};

use log::{debug, info};

use crate::{
    content::Portfolio,
    error::{ContentError, Result},
};

/// Supported interchange formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Pick the format from an extension (without the dot).
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "toml" | "tml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            _ => Err(ContentError::UnsupportedExtension(ext.to_string())),
        }
    }

    /// Pick the format from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        Self::from_extension(ext)
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Toml => "toml",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s)
    }
}

/// Deserialize content without checking its shape rules.
pub fn from_str(s: &str, format: Format) -> Result<Portfolio> {
    let p = match format {
        Format::Toml => toml::from_str(s)?,
        Format::Json => serde_json::from_str(s)?,
    };
    Ok(p)
}

/// Deserialize content and check its shape rules.
pub fn parse(s: &str, format: Format) -> Result<Portfolio> {
    let p = from_str(s, format)?;
    p.validate()?;
    Ok(p)
}

/// Serialize content as pretty-printed text.
pub fn to_string(p: &Portfolio, format: Format) -> Result<String> {
    let s = match format {
        Format::Toml => toml::to_string_pretty(p)?,
        Format::Json => serde_json::to_string_pretty(p)?,
    };
    Ok(s)
}

/// Read, parse and check a content file.
pub fn load(path: impl AsRef<Path>) -> Result<Portfolio> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    debug!("loading {format} content from {}", path.display());
    let s = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
    parse(&s, format)
}

/// Write content to `path` in the format named by its extension.
///
/// An existing file is first copied to a timestamped backup next to it.
/// Returns the backup path when one was made.
pub fn save(p: &Portfolio, path: impl AsRef<Path>) -> Result<Option<PathBuf>> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let s = to_string(p, format)?;

    let backup = if path.exists() {
        let backup = backup_path(path, format);
        fs::copy(path, &backup).map_err(|e| ContentError::io(&backup, e))?;
        info!("backed up {} to {}", path.display(), backup.display());
        Some(backup)
    } else {
        None
    };

    fs::write(path, s).map_err(|e| ContentError::io(path, e))?;
    Ok(backup)
}

/// First unused `<stem>.bk-<secs>[-<n>].<ext>` next to `path`.
fn backup_path(path: &Path, format: Format) -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let ext = format.extension();
    let mut backup = path.with_extension(format!("bk-{secs}.{ext}"));
    let mut n = 1u32;
    while backup.exists() {
        backup = path.with_extension(format!("bk-{secs}-{n}.{ext}"));
        n += 1;
    }
    backup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("a/content.toml")).unwrap(), Format::Toml);
        assert_eq!(Format::from_path(Path::new("content.TML")).unwrap(), Format::Toml);
        assert_eq!(Format::from_path(Path::new("content.json")).unwrap(), Format::Json);
        assert!(matches!(
            Format::from_path(Path::new("content.yaml")),
            Err(ContentError::UnsupportedExtension(ext)) if ext == "yaml"
        ));
        assert!(Format::from_path(Path::new("content")).is_err());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let p = crate::portfolio();
        for format in [Format::Toml, Format::Json] {
            let text = to_string(p, format).unwrap();
            let back = parse(&text, format).unwrap();
            assert_eq!(&back, p, "{format} round trip");
        }
    }

    #[test]
    fn test_toml_layout() {
        let text = to_string(crate::portfolio(), Format::Toml).unwrap();
        assert!(text.contains("[page1]"));
        assert!(text.contains("[[page3]]"));
        assert!(text.contains("[[page4.proresslist]]"));
        assert!(text.contains("titleEn = "));
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut value = serde_json::to_value(crate::portfolio()).unwrap();
        value["page5"][2].as_object_mut().unwrap().remove("href");
        let err = from_str(&value.to_string(), Format::Json).unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
        assert!(err.to_string().contains("href"));
    }

    #[test]
    fn test_extra_section_rejected() {
        let mut value = serde_json::to_value(crate::portfolio()).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .insert("page7".to_string(), serde_json::json!({}));
        assert!(from_str(&value.to_string(), Format::Json).is_err());
    }

    #[test]
    fn test_parse_reports_violations() {
        let mut p = crate::portfolio().clone();
        p.page4.progress_list[5].value = "seventy".to_string();
        let text = to_string(&p, Format::Toml).unwrap();
        match parse(&text, Format::Toml) {
            Err(ContentError::Invalid(errs)) => {
                assert!(errs.contains("page4.proresslist[5].value"));
            }
            other => panic!("expected violations, got {other:?}"),
        }
    }
}
