//! Command handlers.
//!
//! Each handler writes its report to the given writer so the binary can pass
//! stdout and tests can pass a buffer.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use folio::{Format, Portfolio, Section};
use log::info;

use crate::ctx::{AppContext, ContentSource};

/// Handler for all `folioctl` commands.
pub struct CommandHandler<'a> {
    ctx: &'a AppContext,
}

impl<'a> CommandHandler<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        Self { ctx }
    }

    /// Print the whole content, or one section, as pretty JSON.
    pub fn show(&self, section: Option<Section>, out: &mut impl Write) -> Result<()> {
        let p = self.ctx.portfolio()?;
        let value = match section {
            Some(section) => p.section(section)?,
            None => serde_json::to_value(&*p)?,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        Ok(())
    }

    /// Serialize the content.
    ///
    /// With `output`, the file extension picks the format and an existing
    /// file is backed up first. Without it, `format` (default TOML) is
    /// written to `out`.
    pub fn export(
        &self,
        format: Option<Format>,
        output: Option<&Path>,
        out: &mut impl Write,
    ) -> Result<()> {
        let p = self.ctx.portfolio()?;
        match output {
            Some(path) => {
                let by_ext = Format::from_path(path)?;
                if let Some(format) = format
                    && format != by_ext
                {
                    bail!(
                        "--format {format} does not match output file {}",
                        path.display()
                    );
                }
                let backup = folio::format::save(&p, path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                if let Some(backup) = backup {
                    writeln!(out, "backup: {}", backup.display())?;
                }
                writeln!(out, "{} {}", "exported".green(), path.display())?;
            }
            None => {
                let format = format.unwrap_or(Format::Toml);
                write!(out, "{}", folio::format::to_string(&p, format)?)?;
            }
        }
        Ok(())
    }

    /// Emit the JSON Schema of content files.
    pub fn schema(&self, output: Option<&Path>, out: &mut impl Write) -> Result<()> {
        let schema = folio::schema::schema_string()?;
        match output {
            Some(path) => {
                fs::write(path, schema)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("schema written to {}", path.display());
                writeln!(out, "{} {}", "schema".green(), path.display())?;
            }
            None => writeln!(out, "{schema}")?,
        }
        Ok(())
    }

    /// Check content against the shape rules and print every violation.
    ///
    /// Returns `false` when the content is malformed.
    pub fn validate(&self, path: Option<PathBuf>, out: &mut impl Write) -> Result<bool> {
        let source = match path {
            Some(path) => ContentSource::File(path),
            None => self.ctx.source.clone(),
        };
        let p = match &source {
            ContentSource::Builtin => folio::portfolio().clone(),
            ContentSource::File(path) => AppContext::read_unchecked(path)?,
        };

        match p.validate() {
            Ok(()) => {
                writeln!(out, "{} {source}", "ok".green().bold())?;
                Ok(true)
            }
            Err(errs) => {
                writeln!(
                    out,
                    "{} {source}: {} violation(s)",
                    "invalid".red().bold(),
                    errs.violations.len()
                )?;
                for v in &errs.violations {
                    writeln!(out, "  {}: {}", v.path.yellow(), v.kind)?;
                }
                Ok(false)
            }
        }
    }

    /// Print a short overview of every section.
    pub fn summary(&self, out: &mut impl Write) -> Result<()> {
        let p = self.ctx.portfolio()?;
        writeln!(out, "{} ({})", p.page1().title.bold(), self.ctx.source)?;
        for section in Section::ALL {
            writeln!(out, "  {:<6} {}", section.to_string().cyan(), describe(&p, section))?;
        }
        Ok(())
    }
}

fn describe(p: &Portfolio, section: Section) -> String {
    match section {
        Section::Page1 => p.page1().title_en.clone(),
        Section::Page2 => format!("{} ({})", p.page2().job_intent, p.page2().author_img),
        Section::Page3 => format!(
            "{} skill group(s): {}",
            p.page3().len(),
            p.page3()
                .iter()
                .map(|g| g.title.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Section::Page4 => format!(
            "{} milestone(s), {} skill level(s), {} progress bar(s)",
            p.page4().course().len(),
            p.page4().single_list().len(),
            p.page4().progress_list().len()
        ),
        Section::Page5 => format!(
            "{} project(s): {}",
            p.page5().len(),
            p.page5()
                .iter()
                .map(|pr| pr.title.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Section::Page6 => match p.page6().mailto() {
            Ok(mail) => format!("{} / {}", p.page6().github, mail.address),
            Err(_) => p.page6().github.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<F>(ctx: &AppContext, f: F) -> String
    where
        F: FnOnce(&CommandHandler, &mut Vec<u8>) -> Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&CommandHandler::new(ctx), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_show_section() {
        let ctx = AppContext::new(None);
        let text = run(&ctx, |h, out| h.show(Some(Section::Page5), out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["title"], "Emoprobe情感分析系统");
        assert_eq!(value.as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_show_all() {
        let ctx = AppContext::new(None);
        let text = run(&ctx, |h, out| h.show(None, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 6);
        assert_eq!(value["page1"]["title"], "永远在路上");
    }

    #[test]
    fn test_export_stdout_round_trips() {
        let ctx = AppContext::new(None);
        for format in [Format::Toml, Format::Json] {
            let text = run(&ctx, |h, out| h.export(Some(format), None, out));
            let back = folio::format::parse(&text, format).unwrap();
            assert_eq!(&back, folio::portfolio());
        }
    }

    #[test]
    fn test_export_to_file_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        let ctx = AppContext::new(None);
        run(&ctx, |h, out| h.export(None, Some(path.as_path()), out));

        let from_file = AppContext::new(Some(path.clone()));
        let text = run(&from_file, |h, out| h.show(Some(Section::Page1), out));
        assert!(text.contains("永远在路上"));

        let second = run(&ctx, |h, out| h.export(None, Some(path.as_path()), out));
        assert!(second.starts_with("backup: "));
    }

    #[test]
    fn test_export_format_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        let ctx = AppContext::new(None);
        let mut buf = Vec::new();
        let err = CommandHandler::new(&ctx)
            .export(Some(Format::Toml), Some(path.as_path()), &mut buf)
            .unwrap_err();
        assert!(err.to_string().contains("does not match"));
        assert!(!path.exists());
    }

    #[test]
    fn test_schema_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content-schema.json");
        let ctx = AppContext::new(None);
        run(&ctx, |h, out| h.schema(Some(path.as_path()), out));
        let schema: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(schema["properties"].as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_validate_reports_every_violation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.toml");
        let mut p = folio::portfolio().clone();
        p.page4.progress_list[0].value = "ninety".to_string();
        p.page6.email = "minjer@foxmail.com".to_string();
        fs::write(&path, folio::format::to_string(&p, Format::Toml).unwrap()).unwrap();

        let ctx = AppContext::new(None);
        let mut buf = Vec::new();
        colored::control::set_override(false);
        let ok = CommandHandler::new(&ctx)
            .validate(Some(path), &mut buf)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!ok);
        assert!(text.contains("2 violation(s)"));
        assert!(text.contains("page4.proresslist[0].value"));
        assert!(text.contains("page6.email"));
    }

    #[test]
    fn test_validate_builtin() {
        let ctx = AppContext::new(None);
        let mut buf = Vec::new();
        colored::control::set_override(false);
        assert!(CommandHandler::new(&ctx).validate(None, &mut buf).unwrap());
        assert_eq!(String::from_utf8(buf).unwrap(), "ok built-in content\n");
    }

    #[test]
    fn test_summary() {
        let ctx = AppContext::new(None);
        let text = run(&ctx, |h, out| h.summary(out));
        assert!(text.contains("6 project(s)"));
        assert!(text.contains("1 milestone(s), 4 skill level(s), 6 progress bar(s)"));
        assert!(text.contains("minjer@foxmail.com"));
    }
}
