//! Declarative navigation tree for the sidebar and pagination.
//!
//! Loaded once per build from a JSON resource shaped like:
//!
//! ```json
//! {
//!   "navigation": {
//!     "main": [
//!       {
//!         "slug": "architecture",
//!         "title": "Architecture",
//!         "icon": "layers",
//!         "children": [
//!           {
//!             "slug": "system-overview",
//!             "title": "System Overview",
//!             "file": "architecture/system-overview.html"
//!           }
//!         ]
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! A missing file is not an error; the build proceeds with an empty tree
//! and an empty sidebar.

use std::{fs, path::Path};

use log::{error, warn};
use serde::{Deserialize, Serialize};

/// Root of the navigation configuration resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Navigation {
  #[serde(default)]
  pub navigation: NavTree,
}

/// Named navigation trees. Only `main` is rendered into the sidebar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavTree {
  #[serde(default)]
  pub main: Vec<NavSection>,
}

/// A collapsible sidebar section. Tree order is significant and preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavSection {
  /// Slug prefix for this section's documents.
  pub slug: String,

  /// Section title.
  pub title: String,

  /// Icon identifier, mapped to a glyph at render time.
  #[serde(default)]
  pub icon: String,

  /// Ordered leaf entries.
  #[serde(default)]
  pub children: Vec<NavEntry>,
}

/// A leaf navigation entry pointing at a generated page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavEntry {
  /// Entry slug; the full page slug is `section_slug/entry_slug`.
  pub slug: String,

  /// Entry title.
  pub title: String,

  /// Target file, relative to the site base URL.
  pub file: String,

  /// Availability status; `"placeholder"` marks not-yet-written pages.
  #[serde(default)]
  pub status: Option<String>,
}

impl NavEntry {
  /// Whether this entry is a not-yet-available placeholder.
  #[must_use]
  pub fn is_placeholder(&self) -> bool {
    self.status.as_deref() == Some("placeholder")
  }
}

/// A flattened navigation position, used for prev/next pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavPage {
  /// Full page slug (`section_slug/entry_slug`).
  pub slug: String,
  /// Entry title.
  pub title: String,
  /// Target file, relative to the site base URL.
  pub file: String,
}

impl Navigation {
  /// Load the navigation tree from a JSON file.
  ///
  /// A missing file yields an empty tree. A file that fails to parse is
  /// logged and also yields an empty tree; navigation is not worth failing
  /// the whole build over.
  #[must_use]
  pub fn load(path: &Path) -> Self {
    if !path.exists() {
      warn!(
        "Navigation file not found: {}. Sidebar will be empty.",
        path.display()
      );
      return Self::default();
    }

    let content = match fs::read_to_string(path) {
      Ok(content) => content,
      Err(err) => {
        error!("Failed to read navigation file {}: {err}", path.display());
        return Self::default();
      },
    };

    match serde_json::from_str(&content) {
      Ok(navigation) => navigation,
      Err(err) => {
        error!("Failed to parse navigation file {}: {err}", path.display());
        Self::default()
      },
    }
  }

  /// Sections of the main navigation tree, in declared order.
  #[must_use]
  pub fn sections(&self) -> &[NavSection] {
    &self.navigation.main
  }

  /// Flatten the tree into the document ordering used for pagination:
  /// sections in declared order, entries in order within each section.
  /// Placeholder entries are skipped since they have no page to link to.
  #[must_use]
  pub fn page_sequence(&self) -> Vec<NavPage> {
    self
      .sections()
      .iter()
      .flat_map(|section| {
        section
          .children
          .iter()
          .filter(|entry| !entry.is_placeholder())
          .map(|entry| NavPage {
            slug:  format!("{}/{}", section.slug, entry.slug),
            title: entry.title.clone(),
            file:  entry.file.clone(),
          })
      })
      .collect()
  }
}
