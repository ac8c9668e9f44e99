#![allow(clippy::expect_used, reason = "Panics are fine inside tests.")]
use std::fs;

use tagdocs::{
  config::Config,
  html::template::{self, PageData, PageLink},
};
use tempfile::TempDir;

fn minimal_config() -> Config {
  Config {
    title: "Test Site".to_string(),
    generate_search: false,
    ..Config::default()
  }
}

fn minimal_page() -> PageData {
  PageData {
    title:         "Test Page".to_string(),
    description:   "A page for testing.".to_string(),
    category:      "Guides".to_string(),
    category_slug: "guides".to_string(),
    content:       "<h1 id=\"test-page\">Test Page</h1><p>Body</p>"
      .to_string(),
    sidebar:       "<div class=\"docs-nav-section\"></div>".to_string(),
    toc:           String::new(),
    last_updated:  "2026-02-01".to_string(),
    source_path:   "content/guides/test-page.md".to_string(),
    prev:          None,
    next:          None,
  }
}

#[test]
fn render_basic_page_uses_embedded_template() {
  let config = minimal_config();
  let html = template::render(&config, &minimal_page())
    .expect("Should render HTML");

  assert!(html.contains("<html"));
  assert!(html.contains("<title>Test Page | Test Site Docs</title>"));
  assert!(html.contains("<p>Body</p>"));
  assert!(html.contains("content=\"A page for testing.\""));
  assert!(html.contains("Last updated: 2026-02-01"));
}

#[test]
fn render_page_includes_breadcrumb_and_sidebar() {
  let config = minimal_config();
  let html = template::render(&config, &minimal_page())
    .expect("Should render HTML");

  assert!(html.contains("docs-breadcrumb"));
  assert!(html.contains("/docs/guides/"));
  assert!(html.contains(">Guides</a>"));
  assert!(html.contains("<div class=\"docs-nav-section\"></div>"));
}

#[test]
fn pagination_blocks_dropped_without_neighbors() {
  let config = minimal_config();
  let html = template::render(&config, &minimal_page())
    .expect("Should render HTML");

  assert!(!html.contains("docs-pagination-prev"));
  assert!(!html.contains("docs-pagination-next"));
}

#[test]
fn pagination_blocks_populated_with_neighbors() {
  let config = minimal_config();
  let mut page = minimal_page();
  page.prev = Some(PageLink {
    title: "System Overview".to_string(),
    url:   "/docs/architecture/system-overview.html".to_string(),
  });
  page.next = Some(PageLink {
    title: "Security Model".to_string(),
    url:   "/docs/architecture/security-model.html".to_string(),
  });

  let html =
    template::render(&config, &page).expect("Should render HTML");

  assert!(html.contains("docs-pagination-prev"));
  assert!(
    html.contains("href=\"/docs/architecture/system-overview.html\"")
  );
  assert!(html.contains("System Overview"));
  assert!(html.contains("docs-pagination-next"));
  assert!(html.contains("Security Model"));
}

#[test]
fn search_widgets_respect_search_flag() {
  let mut config = minimal_config();
  config.generate_search = true;
  let with_search = template::render(&config, &minimal_page())
    .expect("Should render HTML");
  assert!(with_search.contains("docsSearchTrigger"));
  assert!(with_search.contains("search-index.js"));

  config.generate_search = false;
  let without_search = template::render(&config, &minimal_page())
    .expect("Should render HTML");
  assert!(!without_search.contains("docsSearchTrigger"));
  assert!(!without_search.contains("search-index.js"));
}

#[test]
fn custom_template_dir_overrides_default() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let template_dir = temp_dir.path();

  let custom = "<!doctype html>\n<html>\n<head><title>{{ title \
                }}</title></head>\n<body class=\"custom-shell\">\n{{ content \
                }}\n</body>\n</html>";
  fs::write(template_dir.join("default.html"), custom)
    .expect("Failed to write custom template");

  let mut config = minimal_config();
  config.template_dir = Some(template_dir.to_path_buf());

  let html = template::render(&config, &minimal_page())
    .expect("Should render HTML with custom template");

  assert!(html.contains("custom-shell"));
  assert!(html.contains("<p>Body</p>"));
  assert!(!html.contains("docs-breadcrumb"));
}

#[test]
fn missing_template_file_falls_back_to_embedded_default() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");

  // Template directory exists but holds no default.html
  let mut config = minimal_config();
  config.template_dir = Some(temp_dir.path().to_path_buf());

  let html = template::render(&config, &minimal_page())
    .expect("Should render HTML from embedded template");

  assert!(html.contains("docs-breadcrumb"));
  assert!(html.contains("<title>Test Page | Test Site Docs</title>"));
}

#[test]
fn substitution_is_literal_without_escaping() {
  let config = minimal_config();
  let mut page = minimal_page();
  page.content = "<div class=\"mermaid\">\nA-->B\n</div>".to_string();

  let html =
    template::render(&config, &page).expect("Should render HTML");

  // Markup in replacement values must land verbatim
  assert!(html.contains("<div class=\"mermaid\">"));
  assert!(html.contains("A-->B"));
  assert!(!html.contains("&lt;div class=&quot;mermaid&quot;&gt;"));
}
