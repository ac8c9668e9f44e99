//! Front matter parsing for Markdown documents.
//!
//! Documents may begin with a `---` delimited YAML block carrying page
//! metadata. Everything in the block is optional; a document without front
//! matter parses to the default (empty) metadata.

use serde::{Deserialize, Serialize};

/// Metadata block at the top of a Markdown document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrontMatter {
  /// Page title. Falls back to the first H1 when absent.
  #[serde(default)]
  pub title: Option<String>,

  /// Page description for the meta tag and search index.
  #[serde(default)]
  pub description: Option<String>,

  /// Last-updated date, shown in the page footer. Treated as an opaque
  /// string; the builder fills in today's date when absent.
  #[serde(rename = "lastUpdated", default)]
  pub last_updated: Option<String>,

  /// Search keywords for this page.
  #[serde(default)]
  pub keywords: Vec<String>,
}

/// Error parsing a front matter block.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
  #[error("front matter block is not terminated by a closing '---'")]
  Unterminated,

  #[error("invalid front matter: {0}")]
  Yaml(#[from] serde_yaml::Error),
}

/// Split content into a raw front matter block and the document body.
///
/// Returns `None` when the document does not open with a `---` delimiter.
/// The closing delimiter must start a line of its own.
fn split_front_matter(content: &str) -> Option<Result<(&str, &str), FrontMatterError>> {
  let rest = content.strip_prefix("---")?;
  // The opening delimiter must be the whole first line
  let after_open = match rest.strip_prefix('\n') {
    Some(after) => after,
    None => rest.strip_prefix("\r\n")?,
  };

  let Some(close) = after_open.find("\n---") else {
    return Some(Err(FrontMatterError::Unterminated));
  };

  let block = &after_open[..close];
  let after_close = &after_open[close + 4..];
  let body = after_close
    .strip_prefix('\n')
    .or_else(|| after_close.strip_prefix("\r\n"))
    .unwrap_or(after_close);

  Some(Ok((block, body)))
}

/// Parse the optional front matter block from a document.
///
/// Returns the parsed metadata and the remaining Markdown body. A document
/// without front matter yields `FrontMatter::default()` and the unchanged
/// content.
///
/// # Errors
///
/// Returns an error when the block is unterminated or is not valid YAML.
pub fn parse_front_matter(content: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
  match split_front_matter(content) {
    None => Ok((FrontMatter::default(), content)),
    Some(split) => {
      let (block, body) = split?;
      // An empty block deserializes as YAML null, not as a mapping
      if block.trim().is_empty() {
        return Ok((FrontMatter::default(), body));
      }
      let matter: FrontMatter = serde_yaml::from_str(block)?;
      Ok((matter, body))
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_full_front_matter() {
    let content = "---\n\
                   title: Quick Start\n\
                   description: Getting up and running.\n\
                   lastUpdated: 2026-01-20\n\
                   keywords:\n\
                   \x20 - setup\n\
                   \x20 - install\n\
                   ---\n\
                   \n\
                   # Heading\n";

    let (matter, body) = parse_front_matter(content).expect("should parse");
    assert_eq!(matter.title.as_deref(), Some("Quick Start"));
    assert_eq!(matter.description.as_deref(), Some("Getting up and running."));
    assert_eq!(matter.last_updated.as_deref(), Some("2026-01-20"));
    assert_eq!(matter.keywords, vec!["setup", "install"]);
    assert!(body.starts_with("\n# Heading"));
  }

  #[test]
  fn no_front_matter_returns_default() {
    let content = "# Just a document\n\nBody text.";
    let (matter, body) = parse_front_matter(content).expect("should parse");
    assert_eq!(matter, FrontMatter::default());
    assert_eq!(body, content);
  }

  #[test]
  fn empty_block_is_valid() {
    let content = "---\n---\nBody";
    let (matter, body) = parse_front_matter(content).expect("should parse");
    assert_eq!(matter, FrontMatter::default());
    assert_eq!(body, "Body");
  }

  #[test]
  fn invalid_yaml_is_an_error() {
    let content = "---\ntitle: [unclosed\n---\nBody";
    assert!(matches!(
      parse_front_matter(content),
      Err(FrontMatterError::Yaml(_))
    ));
  }

  #[test]
  fn unterminated_block_is_an_error() {
    let content = "---\ntitle: Dangling\n\n# Not closed";
    assert!(matches!(
      parse_front_matter(content),
      Err(FrontMatterError::Unterminated)
    ));
  }

  #[test]
  fn unknown_keys_are_ignored() {
    let content = "---\ntitle: Page\nauthor: someone\n---\nBody";
    let (matter, _body) = parse_front_matter(content).expect("should parse");
    assert_eq!(matter.title.as_deref(), Some("Page"));
  }
}
