//! Syntect-based syntax highlighting for fenced code blocks.
//!
//! Uses the two-face syntax set (Sublime Text grammars) and emits
//! class-annotated spans so the site stylesheet controls the colors. A
//! language token that the syntax set does not recognize is not an error;
//! callers fall back to escaped plain text.

use std::sync::OnceLock;

use syntect::{
  html::{ClassStyle, ClassedHTMLGenerator},
  parsing::SyntaxSet,
  util::LinesWithEndings,
};

/// Class-based code highlighter backed by syntect.
pub struct SyntaxHighlighter;

impl SyntaxHighlighter {
  /// Create a new highlighter. The underlying syntax set is process-wide
  /// and loaded lazily on first use.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }

  fn syntax_set() -> &'static SyntaxSet {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAX_SET.get_or_init(two_face::syntax::extra_newlines)
  }

  /// Whether the given language token maps to a known syntax.
  #[must_use]
  pub fn recognizes(&self, language: &str) -> bool {
    !language.is_empty()
      && Self::syntax_set().find_syntax_by_token(language).is_some()
  }

  /// Highlight code as class-annotated HTML spans.
  ///
  /// Returns `None` when the language token is not recognized or the
  /// highlighting pass fails, so callers can fall back to plain text.
  #[must_use]
  pub fn highlight(&self, code: &str, language: &str) -> Option<String> {
    let syntax_set = Self::syntax_set();
    let syntax = syntax_set.find_syntax_by_token(language)?;

    let mut generator = ClassedHTMLGenerator::new_with_class_style(
      syntax,
      syntax_set,
      ClassStyle::Spaced,
    );
    for line in LinesWithEndings::from(code) {
      generator
        .parse_html_for_line_which_includes_newline(line)
        .ok()?;
    }

    Some(generator.finalize())
  }
}

impl Default for SyntaxHighlighter {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn recognizes_common_languages() {
    let highlighter = SyntaxHighlighter::new();
    assert!(highlighter.recognizes("rust"));
    assert!(highlighter.recognizes("json"));
    assert!(!highlighter.recognizes("not-a-language"));
    assert!(!highlighter.recognizes(""));
  }

  #[test]
  fn highlight_emits_spans_for_known_language() {
    let highlighter = SyntaxHighlighter::new();
    let html = highlighter
      .highlight("fn main() {}\n", "rust")
      .expect("rust should be recognized");
    assert!(html.contains("<span"));
  }

  #[test]
  fn highlight_returns_none_for_unknown_language() {
    let highlighter = SyntaxHighlighter::new();
    assert!(highlighter.highlight("whatever\n", "zzz-unknown").is_none());
  }
}
