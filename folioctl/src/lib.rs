//! # folioctl
//!
//! Command-line front end for the [`folio`] portfolio content.
//!
//! ## Modules
//!
//! - [`ctx`] - Content source selection
//! - [`commands`] - `show`, `export`, `schema`, `validate` and `summary`

/// Command handlers.
pub mod commands;

/// Content source selection.
pub mod ctx;

pub use commands::CommandHandler;
pub use ctx::{AppContext, ContentSource};
