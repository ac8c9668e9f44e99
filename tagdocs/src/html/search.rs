//! Client-side search index generation.
//!
//! The browser-side scorer consumes a flat array of records; this module
//! only produces the data file, never the scoring logic. The index is
//! written as a small JS file assigning the array to a global, matching
//! what the docs pages load.

use std::fs;

use color_eyre::eyre::{Context, Result};
use log::info;
use serde::Serialize;

use crate::config::Config;

/// One searchable document record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchRecord {
  /// Stable identifier, derived from the slug.
  pub id: String,
  /// Page title.
  pub title: String,
  /// Page description.
  pub description: String,
  /// Human-readable category.
  pub category: String,
  /// Document slug (relative path without extension).
  pub slug: String,
  /// Absolute URL of the generated page.
  pub url: String,
  /// Front-matter keywords.
  pub keywords: Vec<String>,
  /// Free-text document content, markup stripped.
  pub content: String,
}

/// Write the search index under the output root as `js/search-index.js`.
///
/// # Errors
///
/// Returns an error when the target directory cannot be created or the
/// file cannot be written.
pub fn generate_search_index(
  config: &Config,
  records: &[SearchRecord],
) -> Result<()> {
  let js_dir = config.output_dir.join("js");
  fs::create_dir_all(&js_dir).wrap_err_with(|| {
    format!("Failed to create search index directory: {}", js_dir.display())
  })?;

  let json = serde_json::to_string_pretty(records)?;
  let payload = format!("const docsSearchIndex = {json};\n");

  let index_path = js_dir.join("search-index.js");
  fs::write(&index_path, payload).wrap_err_with(|| {
    format!("Failed to write search index: {}", index_path.display())
  })?;

  info!("Search index generated with {} documents", records.len());
  Ok(())
}
