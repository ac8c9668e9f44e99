//! # tagdocs-markdown
//!
//! Markdown processing for the TAG IT Network documentation builder.
//! Converts Markdown text into HTML fragments with the site's custom
//! handling for fenced code blocks (including mermaid diagram
//! passthrough), heading anchors, tables and external links, and extracts
//! front matter and heading records along the way.
//!
//! ## Quick Start
//!
//! ```rust
//! use tagdocs_markdown::{MarkdownOptions, MarkdownProcessor};
//!
//! let processor = MarkdownProcessor::new(MarkdownOptions::default());
//! let result = processor.render("# Hello World\n\nThis is **bold** text.");
//!
//! assert!(result.html.contains("<strong>bold</strong>"));
//! assert_eq!(result.title.as_deref(), Some("Hello World"));
//! ```

pub mod frontmatter;
pub mod highlight;
pub mod processor;
pub mod utils;

mod types;

pub use crate::{
  frontmatter::{FrontMatter, FrontMatterError, parse_front_matter},
  processor::{MarkdownOptions, MarkdownProcessor, collect_markdown_files},
  types::{Header, MarkdownResult},
};
