use std::fs;

use color_eyre::eyre::{Context, Result};
use serde::Serialize;
use tera::Tera;

use crate::config::Config;

// Embedded fallback; used whenever no template directory is configured or
// the named template file is missing, so the build never fails purely from
// a missing template.
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/default.html");

/// A pagination link to an adjacent document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageLink {
  pub title: String,
  pub url:   String,
}

/// Everything the page shell needs for one document.
#[derive(Debug, Clone)]
pub struct PageData {
  pub title:         String,
  pub description:   String,
  pub category:      String,
  pub category_slug: String,
  pub content:       String,
  pub sidebar:       String,
  pub toc:           String,
  pub last_updated:  String,
  pub source_path:   String,
  pub prev:          Option<PageLink>,
  pub next:          Option<PageLink>,
}

/// Render a documentation page through the page shell template.
///
/// Values substitute literally; front-matter content is trusted, so the
/// template is registered without an `.html` suffix to keep Tera's
/// autoescaping out of the way.
///
/// # Errors
///
/// Returns an error when a custom template cannot be read or the template
/// fails to render.
pub fn render(config: &Config, page: &PageData) -> Result<String> {
  let mut tera = Tera::default();
  let template_content =
    get_template_content(config, "default.html", DEFAULT_TEMPLATE)?;
  tera.add_raw_template("default", &template_content)?;

  let mut context = tera::Context::new();
  context.insert("title", &page.title);
  context.insert("site_title", &config.title);
  context.insert("description", &page.description);
  context.insert("category", &page.category);
  context.insert("category_slug", &page.category_slug);
  context.insert("content", &page.content);
  context.insert("sidebar", &page.sidebar);
  context.insert("toc", &page.toc);
  context.insert("last_updated", &page.last_updated);
  context.insert("source_path", &page.source_path);
  context.insert("base_url", &config.base_url);
  context.insert("generate_search", &config.generate_search);
  context.insert("prev", &page.prev);
  context.insert("next", &page.next);

  let html = tera.render("default", &context)?;
  Ok(html)
}

/// Get the template content from the template directory, or the embedded
/// default when the directory is unset or the file is missing.
fn get_template_content(
  config: &Config,
  template_name: &str,
  fallback: &str,
) -> Result<String> {
  if let Some(template_dir) = &config.template_dir {
    let template_path = template_dir.join(template_name);
    if template_path.exists() {
      return fs::read_to_string(&template_path).wrap_err_with(|| {
        format!(
          "Failed to read custom template file: {}. Check file permissions \
           and ensure the file is valid UTF-8",
          template_path.display()
        )
      });
    }
  }

  Ok(fallback.to_string())
}
