//! Table-of-contents extraction from rendered HTML.
//!
//! The TOC is deliberately shallow: only level-2 and level-3 headings
//! qualify (level 1 is the page title). Extraction is a linear scan for
//! heading tag pairs that already carry an `id` attribute; anchors are
//! assigned by the Markdown renderer, never invented here.

use std::{fmt::Write, sync::LazyLock};

use regex::Regex;
use tagdocs_markdown::utils::{never_matching_regex, strip_html_tags};

/// One qualifying heading in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
  /// Heading level (2 or 3).
  pub level: u8,
  /// Anchor ID carried by the heading tag.
  pub id: String,
  /// Display text with embedded markup stripped.
  pub text: String,
}

static TOC_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"(?s)<h([23])\s+id="([^"]+)"[^>]*>(.*?)</h[23]>"#)
    .unwrap_or_else(|e| {
      log::error!("Failed to compile TOC_HEADING_RE regex: {e}");
      never_matching_regex()
    })
});

/// Scan rendered HTML for level-2 and level-3 headings with anchors.
///
/// Headings without an `id` attribute are ignored. An empty result is not
/// an error; the page simply renders without a TOC.
#[must_use]
pub fn extract_headings(html: &str) -> Vec<TocEntry> {
  TOC_HEADING_RE
    .captures_iter(html)
    .map(|caps| TocEntry {
      level: caps[1].parse().unwrap_or(2),
      id:    caps[2].to_string(),
      text:  strip_html_tags(&caps[3]).trim().to_string(),
    })
    .collect()
}

/// Render TOC entries as the on-page link list.
///
/// Returns an empty string when there are no entries.
#[must_use]
pub fn render_toc(entries: &[TocEntry]) -> String {
  if entries.is_empty() {
    return String::new();
  }

  let mut html = String::from("<ul class=\"docs-toc-list\">");
  for entry in entries {
    let item_class = if entry.level == 3 {
      " class=\"docs-toc-subitem\""
    } else {
      ""
    };
    write!(
      html,
      "<li{item_class}><a href=\"#{id}\" \
       class=\"docs-toc-link\">{text}</a></li>",
      id = entry.id,
      text = entry.text,
    )
    .expect("Failed to write to toc string");
  }
  html.push_str("</ul>");
  html
}
