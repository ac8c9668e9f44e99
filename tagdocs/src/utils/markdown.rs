//! Page orchestration: discovery, per-document pipeline and output.
//!
//! Documents are processed one at a time in discovery order; no shared
//! mutable state crosses document boundaries. The failure policy is
//! partial success: a document that fails to build is logged and skipped,
//! and the batch carries on.

use std::{fs, path::Path};

use color_eyre::eyre::{Context, Result, bail};
use indicatif::ProgressBar;
use log::{error, info};
use tagdocs_markdown::{
  MarkdownOptions,
  MarkdownProcessor,
  collect_markdown_files,
  parse_front_matter,
  utils::strip_markdown,
};

use crate::{
  config::{
    Config,
    navigation::{NavPage, Navigation},
  },
  html::{
    search::{self, SearchRecord},
    sidebar,
    template::{self, PageData, PageLink},
    toc,
  },
};

/// Outcome of a build batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
  /// Documents successfully written.
  pub built:  usize,
  /// Documents skipped because of a per-document error.
  pub failed: usize,
}

/// Process all markdown files under the content root and write HTML output.
///
/// Output paths mirror source paths with the extension changed to `.html`;
/// parent directories are created as needed. When search generation is
/// enabled, the search index is written after the batch from the
/// successfully built documents.
///
/// # Errors
///
/// Returns an error only when the content root itself is unusable or the
/// search index cannot be written; per-document failures are logged and
/// counted instead.
pub fn process_markdown_files(
  config: &Config,
  nav: &Navigation,
) -> Result<BuildSummary> {
  let input_dir = &config.input_dir;
  if !input_dir.is_dir() {
    bail!("Input directory does not exist: {}", input_dir.display());
  }

  info!("Input directory: {}", input_dir.display());
  let files = collect_markdown_files(input_dir);
  info!("Found {} markdown files", files.len());

  let processor = create_processor(config);
  let sequence = nav.page_sequence();

  let mut summary = BuildSummary::default();
  let mut records: Vec<SearchRecord> = Vec::with_capacity(files.len());

  let progress = ProgressBar::new(files.len() as u64);
  for file_path in &files {
    match build_page(config, nav, &sequence, &processor, file_path) {
      Ok(record) => {
        summary.built += 1;
        records.push(record);
      },
      Err(err) => {
        summary.failed += 1;
        error!("Failed to build {}: {err:#}", file_path.display());
      },
    }
    progress.inc(1);
  }
  progress.finish_and_clear();

  if config.generate_search {
    search::generate_search_index(config, &records)?;
  }

  Ok(summary)
}

/// Build a single document end to end and return its search record.
fn build_page(
  config: &Config,
  nav: &Navigation,
  sequence: &[NavPage],
  processor: &MarkdownProcessor,
  file_path: &Path,
) -> Result<SearchRecord> {
  let content = fs::read_to_string(file_path).wrap_err_with(|| {
    format!("Failed to read markdown file: {}", file_path.display())
  })?;

  let (matter, body) = parse_front_matter(&content).wrap_err_with(|| {
    format!("Failed to parse front matter in {}", file_path.display())
  })?;

  let result = processor.render(body);

  let title = matter
    .title
    .clone()
    .or_else(|| result.title.clone())
    .unwrap_or_else(|| "Documentation".to_string());

  let rel_path = file_path.strip_prefix(&config.input_dir).wrap_err_with(|| {
    format!(
      "Failed to determine relative path for {}",
      file_path.display()
    )
  })?;

  let slug = slug_from_path(rel_path);
  let (category, category_slug) = category_from_path(rel_path);

  let description = matter.description.clone().unwrap_or_else(|| {
    format!("{title} - {} Documentation", config.title)
  });
  let last_updated = matter.last_updated.clone().unwrap_or_else(today);

  let sidebar = sidebar::render(nav, &slug, &config.base_url);
  let toc_entries = toc::extract_headings(&result.html);
  let toc = toc::render_toc(&toc_entries);
  let (prev, next) = neighbors(sequence, &slug, &config.base_url);

  let page = PageData {
    title: title.clone(),
    description: description.clone(),
    category: category.clone(),
    category_slug,
    content: result.html,
    sidebar,
    toc,
    last_updated,
    source_path: format!("content/{slug}.md"),
    prev,
    next,
  };

  let html = template::render(config, &page)?;

  let mut output_rel = rel_path.to_path_buf();
  output_rel.set_extension("html");
  let output_path = config.output_dir.join(&output_rel);
  if let Some(parent) = output_path.parent() {
    fs::create_dir_all(parent).wrap_err_with(|| {
      format!("Failed to create output directory: {}", parent.display())
    })?;
  }
  fs::write(&output_path, html).wrap_err_with(|| {
    format!("Failed to write output HTML: {}", output_path.display())
  })?;

  Ok(SearchRecord {
    id: slug.replace('/', "-"),
    title,
    description,
    category,
    url: format!("{}{slug}.html", config.base_url),
    slug,
    keywords: matter.keywords,
    content: strip_markdown(body),
  })
}

/// Create the shared markdown processor from the build configuration.
fn create_processor(config: &Config) -> MarkdownProcessor {
  MarkdownProcessor::new(MarkdownOptions {
    gfm:            true,
    highlight_code: config.highlight_code,
    site_domain:    Some(config.site_domain.clone()),
  })
}

/// Document slug: relative path with the extension stripped and `/`
/// separators regardless of platform.
fn slug_from_path(rel_path: &Path) -> String {
  rel_path
    .with_extension("")
    .components()
    .map(|component| component.as_os_str().to_string_lossy())
    .collect::<Vec<_>>()
    .join("/")
}

/// Breadcrumb category from the document's top-level subdirectory.
///
/// Root-level documents have no containing directory; they fall back to
/// their own stem.
fn category_from_path(rel_path: &Path) -> (String, String) {
  let category_slug = rel_path
    .components()
    .next()
    .filter(|_| rel_path.components().count() > 1)
    .map_or_else(
      || {
        rel_path
          .file_stem()
          .unwrap_or_default()
          .to_string_lossy()
          .to_string()
      },
      |component| component.as_os_str().to_string_lossy().to_string(),
    );

  let category = title_case(&category_slug.replace('-', " "));
  (category, category_slug)
}

/// Capitalize the first letter of every word.
fn title_case(text: &str) -> String {
  text
    .split_whitespace()
    .map(|word| {
      let mut chars = word.chars();
      chars.next().map_or_else(String::new, |c| {
        c.to_uppercase().collect::<String>() + chars.as_str()
      })
    })
    .collect::<Vec<_>>()
    .join(" ")
}

/// Today's date for the last-updated fallback.
fn today() -> String {
  jiff::Zoned::now().strftime("%Y-%m-%d").to_string()
}

/// Pagination neighbors from the navigation-tree document ordering.
///
/// Documents that do not appear in the navigation tree get no prev/next;
/// the template drops both blocks for them.
fn neighbors(
  sequence: &[NavPage],
  slug: &str,
  base_url: &str,
) -> (Option<PageLink>, Option<PageLink>) {
  let Some(position) = sequence.iter().position(|page| page.slug == slug)
  else {
    return (None, None);
  };

  let link = |page: &NavPage| PageLink {
    title: page.title.clone(),
    url:   format!("{base_url}{}", page.file),
  };

  let prev = position.checked_sub(1).map(|i| link(&sequence[i]));
  let next = sequence.get(position + 1).map(link);
  (prev, next)
}
