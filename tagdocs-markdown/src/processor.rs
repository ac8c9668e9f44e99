//! Core Markdown rendering pipeline.
//!
//! Rendering is comrak AST processing plus a small set of HTML post-passes:
//! fenced code blocks are replaced in the AST with the site's code-block
//! markup (or a mermaid passthrough container), then the rendered HTML gets
//! heading anchors, table wrappers and external-link attributes.

use std::{
  path::{Path, PathBuf},
  sync::LazyLock,
};

use comrak::{
  Arena,
  nodes::{NodeHtmlBlock, NodeValue},
  options::Options,
  parse_document,
};
use log::trace;
use regex::Regex;
use walkdir::WalkDir;

use crate::{
  highlight::SyntaxHighlighter,
  types::{Header, MarkdownResult},
  utils,
};

/// Options for configuring the Markdown processor.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
  /// Enable GitHub Flavored Markdown extensions (tables, strikethrough,
  /// task lists, autolinks).
  pub gfm: bool,

  /// Enable syntax highlighting for fenced code blocks.
  pub highlight_code: bool,

  /// Domain of the site itself. Absolute http(s) links to any other domain
  /// are given `target="_blank"` and `rel="noopener noreferrer"`. When
  /// `None`, every absolute link counts as external.
  pub site_domain: Option<String>,
}

impl Default for MarkdownOptions {
  fn default() -> Self {
    Self {
      gfm:            true,
      highlight_code: true,
      site_domain:    None,
    }
  }
}

/// Main Markdown processor.
pub struct MarkdownProcessor {
  options:     MarkdownOptions,
  highlighter: Option<SyntaxHighlighter>,
}

impl MarkdownProcessor {
  /// Create a new `MarkdownProcessor` with the given options.
  #[must_use]
  pub fn new(options: MarkdownOptions) -> Self {
    let highlighter = options.highlight_code.then(SyntaxHighlighter::new);
    Self {
      options,
      highlighter,
    }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &MarkdownOptions {
    &self.options
  }

  /// Render Markdown to an HTML fragment, extracting headings and title.
  ///
  /// The same input always produces the same output. The title is the text
  /// of the first H1, if any; front matter is the caller's concern.
  #[must_use]
  pub fn render(&self, markdown: &str) -> MarkdownResult {
    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, markdown, &options);

    self.replace_code_blocks(root);

    let mut html = String::new();
    comrak::format_html(root, &options, &mut html).unwrap_or_default();

    let (html, headers) = assign_heading_ids(&html);
    let html = wrap_tables(&html);
    let html = self.harden_external_links(&html);

    let title = headers
      .iter()
      .find(|header| header.level == 1)
      .map(|header| header.text.clone());

    MarkdownResult {
      html,
      headers,
      title,
    }
  }

  /// Build comrak options from `MarkdownOptions`.
  fn comrak_options(&self) -> Options<'_> {
    let mut options = Options::default();
    if self.options.gfm {
      options.extension.table = true;
      options.extension.strikethrough = true;
      options.extension.tasklist = true;
      options.extension.autolink = true;
    }
    // Raw HTML passes through; heading anchors are assigned by our own
    // post-pass, never by comrak
    options.render.r#unsafe = true;
    options.extension.header_ids = None;
    options
  }

  /// Replace fenced code blocks in the AST with the site's code markup.
  fn replace_code_blocks<'a>(&self, root: &'a comrak::nodes::AstNode<'a>) {
    for node in root.descendants() {
      let mut data = node.data.borrow_mut();
      let replacement = match &data.value {
        NodeValue::CodeBlock(block) => {
          Some(self.render_code_block(&block.info, &block.literal))
        },
        _ => None,
      };
      if let Some(html) = replacement {
        data.value = NodeValue::HtmlBlock(NodeHtmlBlock {
          block_type: 0,
          literal:    html,
        });
      }
    }
  }

  /// Render one fenced code block.
  ///
  /// Mermaid blocks pass through untouched inside a diagram container; the
  /// client-side diagram engine renders them later, and no validation
  /// happens here. Everything else is wrapped in the code-block shell and
  /// highlighted when the language token is recognized, escaped plain text
  /// otherwise.
  fn render_code_block(&self, info: &str, literal: &str) -> String {
    let language = info.split_whitespace().next().unwrap_or("");

    if language == "mermaid" {
      return format!("<div class=\"mermaid\">\n{literal}</div>\n");
    }

    let label = if language.is_empty() { "text" } else { language };
    let body = if language.is_empty() {
      html_escape::encode_text(literal).to_string()
    } else {
      self
        .highlighter
        .as_ref()
        .and_then(|highlighter| highlighter.highlight(literal, language))
        .unwrap_or_else(|| html_escape::encode_text(literal).to_string())
    };

    format!(
      "<div class=\"code-block\">\n<div class=\"code-header\"><span \
       class=\"code-lang\">{label}</span><button class=\"code-copy-btn\" \
       type=\"button\">Copy</button></div>\n<pre><code \
       class=\"language-{label}\">{body}</code></pre>\n</div>\n"
    )
  }

  /// Add `target`/`rel` attributes to links leaving the site's domain.
  fn harden_external_links(&self, html: &str) -> String {
    static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
      Regex::new(r#"<a href="(https?://[^"]*)""#).unwrap_or_else(|e| {
        log::error!("Failed to compile LINK_RE regex: {e}");
        utils::never_matching_regex()
      })
    });

    LINK_RE
      .replace_all(html, |caps: &regex::Captures| {
        let href = &caps[1];
        let internal = self
          .options
          .site_domain
          .as_deref()
          .is_some_and(|domain| href.contains(domain));
        if internal {
          caps[0].to_string()
        } else {
          format!(
            "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\""
          )
        }
      })
      .to_string()
  }
}

/// Assign anchor IDs to every rendered heading and collect heading records.
///
/// IDs are derived from the heading text via [`utils::slugify`]. Two
/// headings with the same text on one page produce the same ID; the second
/// occurrence is kept as-is rather than deduplicated.
fn assign_heading_ids(html: &str) -> (String, Vec<Header>) {
  static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<h([1-6])>(.*?)</h[1-6]>").unwrap_or_else(|e| {
      log::error!("Failed to compile HEADING_RE regex: {e}");
      utils::never_matching_regex()
    })
  });

  let mut headers = Vec::new();
  let html = HEADING_RE
    .replace_all(html, |caps: &regex::Captures| {
      let level: u8 = caps[1].parse().unwrap_or(1);
      let inner = &caps[2];
      let id = utils::slugify(inner);
      let text = utils::strip_html_tags(inner).trim().to_string();

      headers.push(Header {
        text,
        level,
        id: id.clone(),
      });

      format!("<h{level} id=\"{id}\">{inner}</h{level}>")
    })
    .to_string();

  (html, headers)
}

/// Wrap tables in a horizontal scroll container.
fn wrap_tables(html: &str) -> String {
  html
    .replace(
      "<table>",
      "<div class=\"table-wrapper\"><table class=\"docs-table\">",
    )
    .replace("</table>", "</table></div>")
}

/// Collect all Markdown files under the content directory.
#[must_use]
pub fn collect_markdown_files(input_dir: &Path) -> Vec<PathBuf> {
  let mut files = Vec::with_capacity(100);

  for entry in WalkDir::new(input_dir)
    .follow_links(true)
    .sort_by_file_name()
    .into_iter()
    .filter_map(Result::ok)
  {
    let path = entry.path();
    if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
      files.push(path.to_owned());
    }
  }

  trace!("Found {} markdown files to process", files.len());
  files
}
