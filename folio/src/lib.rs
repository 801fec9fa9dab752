//! # folio
//!
//! Typed content for a personal portfolio page.
//!
//! The page front-end reads one object with six sections (`page1`..`page6`):
//! a banner, a short bio, skill cards, a timeline with skill levels, a project
//! list and contact links. This crate holds that object as plain immutable
//! structs and checks authored content against the shape the page expects.
//!
//! ## Quick Start
//!
//! ```rust
//! let p = folio::portfolio();
//! assert_eq!(p.page1().title, "永远在路上");
//! assert_eq!(p.page4().progress_list().len(), 6);
//! ```
//!
//! Loading an authored file:
//!
//! ```rust,no_run
//! let p = folio::format::load("content.toml").unwrap();
//! for project in p.page5() {
//!     println!("{} -> {}", project.title, project.href);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`content`] - Section and record types
//! - [`format`] - TOML/JSON reading and writing
//! - [`schema`] - JSON Schema generation
//! - [`validate`] - Shape rules
//! - [`mailto`] - Contact link parsing

mod builtin;

/// Section and record types.
pub mod content;

/// Error types and result alias.
pub mod error;

/// TOML/JSON interchange.
pub mod format;

/// Contact link parsing.
pub mod mailto;

/// JSON Schema generation.
pub mod schema;

/// Shape rules for authored content.
pub mod validate;

pub use builtin::portfolio;
pub use content::{
    Banner, Contact, Journey, Milestone, MilestoneDetail, Portfolio, Profile, ProgressItem,
    Project, Section, SkillGroup, SkillLevel,
};
pub use error::{ContentError, Result};
pub use format::Format;
pub use mailto::MailTo;
pub use validate::{ValidationErrors, Violation, ViolationKind};
