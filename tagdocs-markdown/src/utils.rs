use std::sync::LazyLock;

use comrak::{
  Arena,
  nodes::{AstNode, NodeValue},
  options::Options,
  parse_document,
};
use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"<[^>]*>").unwrap_or_else(|e| {
    log::error!("Failed to compile TAG_RE regex: {e}");
    never_matching_regex()
  })
});

static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[^\w\s-]").unwrap_or_else(|e| {
    log::error!("Failed to compile NON_WORD_RE regex: {e}");
    never_matching_regex()
  })
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\s+").unwrap_or_else(|e| {
    log::error!("Failed to compile WHITESPACE_RE regex: {e}");
    never_matching_regex()
  })
});

static DASH_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"-+").unwrap_or_else(|e| {
    log::error!("Failed to compile DASH_RUN_RE regex: {e}");
    never_matching_regex()
  })
});

/// Derive a stable anchor ID from heading text.
///
/// Lowercases, strips embedded markup tags, removes punctuation outside
/// word characters and whitespace, collapses whitespace runs and repeated
/// hyphens to single hyphens, and trims leading/trailing hyphens. The same
/// input always yields the same ID; headings with identical text collide
/// and are not deduplicated.
#[must_use]
pub fn slugify(text: &str) -> String {
  let lowered = text.to_lowercase();
  let stripped = TAG_RE.replace_all(&lowered, "");
  let plain = NON_WORD_RE.replace_all(&stripped, "");
  let dashed = WHITESPACE_RE.replace_all(plain.trim(), "-");
  let collapsed = DASH_RUN_RE.replace_all(&dashed, "-");
  collapsed.trim_matches('-').to_string()
}

/// Remove embedded HTML tags from a fragment, keeping text content.
#[must_use]
pub fn strip_html_tags(html: &str) -> String {
  TAG_RE.replace_all(html, "").to_string()
}

/// Create a regex that never matches anything.
///
/// Used as a fallback when a static pattern fails to compile; it asserts
/// something impossible, which is safer than a trivial pattern like `^$`
/// that would match empty strings.
///
/// # Panics
///
/// Panics if the fallback pattern `r"^\b$"` fails to compile, which should
/// never happen.
#[must_use]
pub fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").unwrap_or_else(|_| {
    #[allow(clippy::unwrap_used, reason = "Pattern is guaranteed valid")]
    Regex::new(r"^\b$").unwrap()
  })
}

/// Strip markdown formatting and return plain text.
///
/// Walks the AST and extracts text content only, excluding code blocks.
/// Whitespace is normalized to single spaces. Used for search index
/// content, where markup is noise.
#[must_use]
pub fn strip_markdown(content: &str) -> String {
  let arena = Arena::new();
  let mut options = Options::default();
  options.extension.table = true;
  options.extension.strikethrough = true;
  options.extension.tasklist = true;
  options.render.r#unsafe = true;

  let root = parse_document(&arena, content, &options);

  fn extract_text<'a>(node: &'a AstNode<'a>, plain_text: &mut String) {
    match &node.data.borrow().value {
      NodeValue::Text(t) => {
        plain_text.push_str(t);
        plain_text.push(' ');
      },
      NodeValue::Code(code) => {
        plain_text.push_str(&code.literal);
        plain_text.push(' ');
      },
      NodeValue::CodeBlock(_) | NodeValue::HtmlBlock(_) => return,
      NodeValue::SoftBreak | NodeValue::LineBreak => {
        plain_text.push(' ');
      },
      _ => {},
    }
    for child in node.children() {
      extract_text(child, plain_text);
    }
  }

  let mut plain_text = String::new();
  extract_text(root, &mut plain_text);

  plain_text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn slugify_basic() {
    assert_eq!(slugify("Quick Start"), "quick-start");
    assert_eq!(slugify("Asset Lifecycle"), "asset-lifecycle");
  }

  #[test]
  fn slugify_strips_markup_and_punctuation() {
    assert_eq!(slugify("Install with <code>npm</code>!"), "install-with-npm");
    assert_eq!(slugify("What's New?"), "whats-new");
  }

  #[test]
  fn slugify_collapses_whitespace_and_hyphens() {
    assert_eq!(slugify("a   b\t\tc"), "a-b-c");
    assert_eq!(slugify("pre--existing---dashes"), "pre-existing-dashes");
  }

  #[test]
  fn slugify_trims_leading_and_trailing_hyphens() {
    assert_eq!(slugify("  -- padded -- "), "padded");
    assert_eq!(slugify("!!!"), "");
  }

  #[test]
  fn slugify_is_deterministic_and_idempotent() {
    let input = "Some *Complex* <em>Heading</em> -- v2.0!";
    let once = slugify(input);
    assert_eq!(once, slugify(input));
    assert_eq!(slugify(&once), once);
  }

  #[test]
  fn strip_html_tags_keeps_text() {
    assert_eq!(strip_html_tags("a <b>bold</b> move"), "a bold move");
    assert_eq!(strip_html_tags("no tags"), "no tags");
  }

  #[test]
  fn strip_markdown_drops_formatting_and_code_blocks() {
    let markdown =
      "# Title\n\nSome **bold** text with `inline` code.\n\n```rust\nfn \
       hidden() {}\n```\n\nAfter the block.";
    let plain = strip_markdown(markdown);
    assert!(plain.contains("Title"));
    assert!(plain.contains("bold"));
    assert!(plain.contains("inline"));
    assert!(plain.contains("After the block."));
    assert!(!plain.contains("hidden"));
    assert!(!plain.contains("**"));
  }
}
