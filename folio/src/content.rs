//! Portfolio content types.
//!
//! The structure mirrors the sections of the page one to one. Field names on
//! the wire are the keys the page front-end reads (`titleEn`, `proresslist`,
//! ...); the Rust names describe what each field holds.
//!
//! # Content File Format
//!
//! ```toml
//! [page1]
//! titleEn = "Hello,I`m Minjer"
//! title = "永远在路上"
//!
//! [[page3]]
//! icon = "icon-diannao"
//! title = "开发语言"
//! msg = ["Java", "Python"]
//! ```

use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{ContentError, Result},
    mailto::MailTo,
};

/// Root content object.
///
/// Holds exactly the six page sections. Unknown keys are rejected when
/// deserializing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    /// Landing banner.
    pub page1: Banner,
    /// Author photo and short bio.
    pub page2: Profile,
    /// Skill groups, in display order.
    pub page3: Vec<SkillGroup>,
    /// Timeline and skill levels.
    pub page4: Journey,
    /// Projects, in display order.
    pub page5: Vec<Project>,
    /// Contact links.
    pub page6: Contact,
}

/// Landing banner titles.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Banner {
    /// English headline.
    #[serde(rename = "titleEn")]
    pub title_en: String,
    /// Chinese headline.
    pub title: String,
}

/// Author photo and bio.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Photo file name, resolved by the page's asset pipeline.
    #[serde(rename = "authorImg")]
    pub author_img: String,
    /// Greeting line (幸会).
    #[serde(rename = "xinhui")]
    pub greeting: String,
    /// Job intent (求职意向).
    #[serde(rename = "qiuzhi")]
    pub job_intent: String,
    /// About me (关于我).
    #[serde(rename = "guanyuwo")]
    pub about: String,
}

/// One group of skills shown as a card.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SkillGroup {
    /// Icon-font class name, e.g. `icon-diannao`.
    pub icon: String,
    /// Card title.
    pub title: String,
    /// Skills listed on the card.
    #[serde(rename = "msg")]
    pub items: Vec<String>,
}

/// Timeline entries plus the two skill-level lists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Journey {
    /// Timeline (我的历程).
    pub course: Vec<Milestone>,
    /// Extended skills with a textual level (我的拓展技能掌握).
    #[serde(rename = "singlelist")]
    pub single_list: Vec<SkillLevel>,
    /// Core skills drawn as progress bars (我的基本技能掌握).
    #[serde(rename = "proresslist")]
    pub progress_list: Vec<ProgressItem>,
}

impl Journey {
    /// Timeline entries.
    pub fn course(&self) -> &[Milestone] {
        &self.course
    }

    /// Skills with a textual level.
    pub fn single_list(&self) -> &[SkillLevel] {
        &self.single_list
    }

    /// Skills with a percentage level.
    pub fn progress_list(&self) -> &[ProgressItem] {
        &self.progress_list
    }
}

/// One timeline entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Milestone {
    /// Free-form period, e.g. `2021/9——至今`.
    pub date: String,
    /// What happened during the period.
    pub desc: MilestoneDetail,
}

/// Where the period was spent and what was done.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MilestoneDetail {
    pub title: String,
    pub list: Vec<String>,
}

/// Skill with a textual level such as `掌握`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SkillLevel {
    pub title: String,
    pub text: String,
}

/// Skill with a percentage level such as `90%`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProgressItem {
    pub title: String,
    /// Percentage text, digits followed by `%`.
    pub value: String,
}

impl ProgressItem {
    /// Numeric value of the percentage, if it is well formed and at most 100.
    pub fn percent(&self) -> Option<u8> {
        let digits = self.value.strip_suffix('%')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<u8>().ok().filter(|p| *p <= 100)
    }
}

/// One project card.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub title: String,
    /// Short description.
    pub content: String,
    /// Screenshot file name.
    pub image: String,
    /// Repository URL.
    pub href: String,
}

/// Contact links.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Profile URL.
    pub github: String,
    /// `mailto:` URI, optionally carrying a subject and body.
    pub email: String,
}

impl Contact {
    /// Parse the email link into its parts.
    pub fn mailto(&self) -> Result<MailTo> {
        MailTo::parse(&self.email)
    }
}

/// Top-level section key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Page1,
    Page2,
    Page3,
    Page4,
    Page5,
    Page6,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 6] = [
        Section::Page1,
        Section::Page2,
        Section::Page3,
        Section::Page4,
        Section::Page5,
        Section::Page6,
    ];

    /// Key of the section in the content object.
    pub fn key(self) -> &'static str {
        match self {
            Section::Page1 => "page1",
            Section::Page2 => "page2",
            Section::Page3 => "page3",
            Section::Page4 => "page4",
            Section::Page5 => "page5",
            Section::Page6 => "page6",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self> {
        Section::ALL
            .into_iter()
            .find(|section| section.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ContentError::UnknownSection(s.to_string()))
    }
}

impl Portfolio {
    pub fn page1(&self) -> &Banner {
        &self.page1
    }

    pub fn page2(&self) -> &Profile {
        &self.page2
    }

    pub fn page3(&self) -> &[SkillGroup] {
        &self.page3
    }

    pub fn page4(&self) -> &Journey {
        &self.page4
    }

    pub fn page5(&self) -> &[Project] {
        &self.page5
    }

    pub fn page6(&self) -> &Contact {
        &self.page6
    }

    /// Untyped view of a single section, keyed the way the page reads it.
    pub fn section(&self, section: Section) -> Result<Value> {
        let value = match section {
            Section::Page1 => serde_json::to_value(&self.page1)?,
            Section::Page2 => serde_json::to_value(&self.page2)?,
            Section::Page3 => serde_json::to_value(&self.page3)?,
            Section::Page4 => serde_json::to_value(&self.page4)?,
            Section::Page5 => serde_json::to_value(&self.page5)?,
            Section::Page6 => serde_json::to_value(&self.page6)?,
        };
        Ok(value)
    }
}
