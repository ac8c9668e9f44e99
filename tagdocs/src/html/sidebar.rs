//! Sidebar navigation markup.
//!
//! Renders the declarative navigation tree into the docs sidebar. Section
//! expansion is a prefix match of the current document's slug against the
//! section slug, and exactly the first matching section expands; tree
//! order is significant. A leaf is active only on an exact slug match.

use std::fmt::Write;

use crate::config::navigation::Navigation;

/// Render the sidebar for the given document slug.
#[must_use]
pub fn render(nav: &Navigation, current_slug: &str, base_url: &str) -> String {
  let mut html = String::new();
  let mut expanded_taken = false;

  for section in nav.sections() {
    let is_expanded =
      !expanded_taken && current_slug.starts_with(section.slug.as_str());
    if is_expanded {
      expanded_taken = true;
    }

    let expanded_class = if is_expanded { " expanded" } else { "" };
    write!(
      html,
      "<div class=\"docs-nav-section{expanded_class}\">\n<button \
       class=\"docs-nav-section-title\" aria-expanded=\"{is_expanded}\">\n<span \
       class=\"docs-nav-icon\">{icon}</span>\n<span>{title}</span>\n<span \
       class=\"docs-nav-arrow\">\u{25b8}</span>\n</button>\n<div \
       class=\"docs-nav-items\">\n",
      icon = icon_glyph(&section.icon),
      title = section.title,
    )
    .expect("Failed to write to sidebar string");

    for entry in &section.children {
      let entry_slug = format!("{}/{}", section.slug, entry.slug);
      let active_class = if current_slug == entry_slug {
        " active"
      } else {
        ""
      };
      let badge = if entry.is_placeholder() {
        "<span class=\"docs-nav-badge\">Soon</span>"
      } else {
        ""
      };

      writeln!(
        html,
        "<a href=\"{base_url}{file}\" \
         class=\"docs-nav-link{active_class}\">{title}{badge}</a>",
        file = entry.file,
        title = entry.title,
      )
      .expect("Failed to write to sidebar string");
    }

    html.push_str("</div>\n</div>\n");
  }

  html
}

/// Map an icon identifier from the navigation tree to a display glyph.
fn icon_glyph(name: &str) -> &'static str {
  match name {
    "rocket" => "\u{1f680}",
    "layers" => "\u{25c7}",
    "code" => "\u{27e8}/\u{27e9}",
    "cpu" => "\u{25c8}",
    "terminal" => "\u{2318}",
    "package" => "\u{1f4e6}",
    "users" => "\u{1f465}",
    "coins" => "\u{25c9}",
    "book-open" => "\u{1f4d6}",
    "book" => "\u{1f4da}",
    _ => "\u{2022}",
  }
}
