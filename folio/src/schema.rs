//! JSON Schema for content files.
//!
//! Generated from the typed model so editors and page tooling can check an
//! authored file without this crate.

use serde_json::Value;

use crate::{content::Portfolio, error::Result};

/// JSON Schema of [`Portfolio`].
pub fn schema() -> Result<Value> {
    let schema = schemars::schema_for!(Portfolio);
    Ok(serde_json::to_value(&schema)?)
}

/// JSON Schema of [`Portfolio`], pretty-printed.
pub fn schema_string() -> Result<String> {
    Ok(serde_json::to_string_pretty(&schema()?)?)
}
