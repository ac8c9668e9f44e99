use tagdocs::html::toc::{TocEntry, extract_headings, render_toc};

#[test]
fn extracts_h2_and_h3_in_order() {
  let html = "<h2 id=\"overview\">Overview</h2>\n<p>text</p>\n<h3 \
              id=\"details\">Details</h3>";
  let entries = extract_headings(html);

  assert_eq!(
    entries,
    vec![
      TocEntry {
        level: 2,
        id:    "overview".to_string(),
        text:  "Overview".to_string(),
      },
      TocEntry {
        level: 3,
        id:    "details".to_string(),
        text:  "Details".to_string(),
      },
    ]
  );
}

#[test]
fn level_one_and_deep_headings_are_excluded() {
  let html = "<h1 id=\"title\">Title</h1>\n<h2 id=\"kept\">Kept</h2>\n<h4 \
              id=\"deep\">Deep</h4>";
  let entries = extract_headings(html);
  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0].id, "kept");
}

#[test]
fn headings_without_ids_are_ignored() {
  let html = "<h2>No anchor</h2>\n<h2 id=\"anchored\">Anchored</h2>";
  let entries = extract_headings(html);
  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0].id, "anchored");
}

#[test]
fn embedded_markup_is_stripped_from_display_text() {
  let html =
    "<h2 id=\"using-tagctl\">Using <code>tagctl</code> daily</h2>";
  let entries = extract_headings(html);
  assert_eq!(entries[0].text, "Using tagctl daily");
}

#[test]
fn renders_list_with_subitem_class() {
  let entries = vec![
    TocEntry {
      level: 2,
      id:    "overview".to_string(),
      text:  "Overview".to_string(),
    },
    TocEntry {
      level: 3,
      id:    "details".to_string(),
      text:  "Details".to_string(),
    },
  ];

  let html = render_toc(&entries);
  assert!(html.starts_with("<ul class=\"docs-toc-list\">"));
  assert!(html.contains(
    "<li><a href=\"#overview\" class=\"docs-toc-link\">Overview</a></li>"
  ));
  assert!(html.contains(
    "<li class=\"docs-toc-subitem\"><a href=\"#details\" \
     class=\"docs-toc-link\">Details</a></li>"
  ));
  assert!(html.ends_with("</ul>"));
}

#[test]
fn no_qualifying_headings_is_not_an_error() {
  assert!(extract_headings("<p>just a paragraph</p>").is_empty());
  assert_eq!(render_toc(&[]), "");
}
