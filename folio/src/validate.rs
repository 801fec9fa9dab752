//! Shape checks for authored content.
//!
//! Deserialization already guarantees every field is present with the right
//! type. The checks here cover what the type system cannot: empty text, empty
//! lists, percentage text, URLs, the `mailto:` link and asset file names.
//! All violations are collected so an author sees every problem at once.

use std::{fmt, path::Path, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::{content::Portfolio, mailto::MailTo};

static PERCENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+%$").unwrap());

static WEB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i:https?)://([^\s/?#@]+@)?(\[[0-9A-Fa-f:.]+\]|[\p{L}\p{N}-]+(\.[\p{L}\p{N}-]+)*)(:[0-9]{1,5})?([/?#]\S*)?$",
    )
    .unwrap()
});

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg", "webp"];

const ICON_PREFIX: &str = "icon-";

/// What is wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    #[error("text is empty")]
    EmptyText,
    #[error("list is empty")]
    EmptyList,
    #[error("{0:?} is not a percentage (digits followed by '%')")]
    Percentage(String),
    #[error("{0:?} is above 100%")]
    PercentageRange(String),
    #[error("{0:?} is not an http(s) URL")]
    Url(String),
    #[error("{0}")]
    MailTo(String),
    #[error("{0:?} is not an image file name")]
    Image(String),
    #[error("{0:?} is not an icon class (expected prefix 'icon-')")]
    Icon(String),
}

/// A rule broken at a specific path, e.g. `page5[2].href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Every violation found in one document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub violations: Vec<Violation>,
}

impl ValidationErrors {
    /// Whether any violation sits at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} content violation(s)", self.violations.len())?;
        for v in &self.violations {
            write!(f, "\n  {v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Default)]
struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn report(&mut self, path: impl Into<String>, kind: ViolationKind) {
        self.violations.push(Violation {
            path: path.into(),
            kind,
        });
    }

    fn text(&mut self, path: impl Into<String>, value: &str) -> bool {
        if value.trim().is_empty() {
            self.report(path, ViolationKind::EmptyText);
            return false;
        }
        true
    }

    fn list<T>(&mut self, path: impl Into<String>, items: &[T]) {
        if items.is_empty() {
            self.report(path, ViolationKind::EmptyList);
        }
    }

    fn texts(&mut self, path: &str, items: &[String]) {
        self.list(path, items);
        for (i, item) in items.iter().enumerate() {
            self.text(format!("{path}[{i}]"), item);
        }
    }

    fn percentage(&mut self, path: String, value: &str) {
        if !self.text(path.clone(), value) {
            return;
        }
        if !PERCENT.is_match(value) {
            self.report(path, ViolationKind::Percentage(value.to_string()));
            return;
        }
        let digits = value.trim_end_matches('%');
        if digits.parse::<u32>().map_or(true, |p| p > 100) {
            self.report(path, ViolationKind::PercentageRange(value.to_string()));
        }
    }

    fn url(&mut self, path: String, value: &str) {
        if self.text(path.clone(), value) && !WEB_URL.is_match(value) {
            self.report(path, ViolationKind::Url(value.to_string()));
        }
    }

    fn mailto(&mut self, path: String, value: &str) {
        if !self.text(path.clone(), value) {
            return;
        }
        if let Err(e) = MailTo::parse(value) {
            self.report(path, ViolationKind::MailTo(e.to_string()));
        }
    }

    fn image(&mut self, path: String, value: &str) {
        if !self.text(path.clone(), value) {
            return;
        }
        let bare = !value.contains(['/', '\\']);
        let known = Path::new(value)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                IMAGE_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            });
        if !(bare && known) {
            self.report(path, ViolationKind::Image(value.to_string()));
        }
    }

    fn icon(&mut self, path: String, value: &str) {
        if !self.text(path.clone(), value) {
            return;
        }
        let ok = value
            .strip_prefix(ICON_PREFIX)
            .is_some_and(|rest| !rest.is_empty() && !rest.contains(char::is_whitespace));
        if !ok {
            self.report(path, ViolationKind::Icon(value.to_string()));
        }
    }
}

impl Portfolio {
    /// Check the content against the shape rules.
    ///
    /// # Errors
    ///
    /// Returns every violation found, in document order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut c = Checker::default();

        let banner = &self.page1;
        c.text("page1.titleEn", &banner.title_en);
        c.text("page1.title", &banner.title);

        let profile = &self.page2;
        c.image("page2.authorImg".to_string(), &profile.author_img);
        c.text("page2.xinhui", &profile.greeting);
        c.text("page2.qiuzhi", &profile.job_intent);
        c.text("page2.guanyuwo", &profile.about);

        c.list("page3", &self.page3);
        for (i, group) in self.page3.iter().enumerate() {
            c.icon(format!("page3[{i}].icon"), &group.icon);
            c.text(format!("page3[{i}].title"), &group.title);
            c.texts(&format!("page3[{i}].msg"), &group.items);
        }

        let journey = &self.page4;
        c.list("page4.course", &journey.course);
        for (i, milestone) in journey.course.iter().enumerate() {
            c.text(format!("page4.course[{i}].date"), &milestone.date);
            c.text(format!("page4.course[{i}].desc.title"), &milestone.desc.title);
            c.texts(&format!("page4.course[{i}].desc.list"), &milestone.desc.list);
        }
        for (i, skill) in journey.single_list.iter().enumerate() {
            c.text(format!("page4.singlelist[{i}].title"), &skill.title);
            c.text(format!("page4.singlelist[{i}].text"), &skill.text);
        }
        c.list("page4.proresslist", &journey.progress_list);
        for (i, item) in journey.progress_list.iter().enumerate() {
            c.text(format!("page4.proresslist[{i}].title"), &item.title);
            c.percentage(format!("page4.proresslist[{i}].value"), &item.value);
        }

        c.list("page5", &self.page5);
        for (i, project) in self.page5.iter().enumerate() {
            c.text(format!("page5[{i}].title"), &project.title);
            c.text(format!("page5[{i}].content"), &project.content);
            c.image(format!("page5[{i}].image"), &project.image);
            c.url(format!("page5[{i}].href"), &project.href);
        }

        c.url("page6.github".to_string(), &self.page6.github);
        c.mailto("page6.email".to_string(), &self.page6.email);

        if c.violations.is_empty() {
            Ok(())
        } else {
            log::debug!("content has {} violation(s)", c.violations.len());
            Err(ValidationErrors {
                violations: c.violations,
            })
        }
    }
}
