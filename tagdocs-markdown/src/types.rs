//! Types for the tagdocs-markdown public API.
use serde::{Deserialize, Serialize};

/// Represents a heading in a rendered Markdown document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
  /// Heading text with inline markup stripped.
  pub text:  String,
  /// Heading level (1-6).
  pub level: u8,
  /// Generated anchor ID for the heading.
  pub id:    String,
}

/// Result of Markdown processing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkdownResult {
  /// Rendered HTML output.
  pub html: String,

  /// Extracted headings, in document order (for `ToC` and navigation).
  pub headers: Vec<Header>,

  /// Title of the document, if found (first H1).
  pub title: Option<String>,
}
