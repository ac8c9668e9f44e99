pub mod navigation;

use std::{
  fs,
  path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
  cli::{Cli, Commands},
  error::ConfigError,
};

// Defaults are functions rather than literals so non-const values such as
// PathBuf construction stay expressible.
fn default_input_dir() -> PathBuf {
  PathBuf::from("content")
}

fn default_output_dir() -> PathBuf {
  PathBuf::from("build")
}

fn default_navigation_file() -> PathBuf {
  PathBuf::from("config/navigation.json")
}

fn default_title() -> String {
  "TAG IT Network".to_string()
}

fn default_site_domain() -> String {
  "tagit.network".to_string()
}

fn default_base_url() -> String {
  "/docs/".to_string()
}

const fn default_true() -> bool {
  true
}

/// Configuration options for tagdocs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// Input directory containing markdown content
  #[serde(default = "default_input_dir")]
  pub input_dir: PathBuf,

  /// Output directory for generated pages
  #[serde(default = "default_output_dir")]
  pub output_dir: PathBuf,

  /// Path to template directory containing page shell templates
  #[serde(default)]
  pub template_dir: Option<PathBuf>,

  /// Path to the navigation tree description (JSON)
  #[serde(default = "default_navigation_file")]
  pub navigation_file: PathBuf,

  /// Title of the documentation site
  #[serde(default = "default_title")]
  pub title: String,

  /// The site's own domain; links elsewhere are treated as external
  #[serde(default = "default_site_domain")]
  pub site_domain: String,

  /// URL prefix pages are served under
  #[serde(default = "default_base_url")]
  pub base_url: String,

  /// Whether to generate the client-side search index
  #[serde(default = "default_true")]
  pub generate_search: bool,

  /// Whether to enable syntax highlighting for code blocks
  #[serde(default = "default_true")]
  pub highlight_code: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      input_dir:       default_input_dir(),
      output_dir:      default_output_dir(),
      template_dir:    None,
      navigation_file: default_navigation_file(),
      title:           default_title(),
      site_domain:     default_site_domain(),
      base_url:        default_base_url(),
      generate_search: true,
      highlight_code:  true,
    }
  }
}

impl Config {
  /// Create a new configuration from a file.
  /// Only TOML and JSON are supported.
  ///
  /// # Errors
  ///
  /// Returns an error when the file cannot be read or parsed, or when its
  /// extension is not `.toml` or `.json`.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    match path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase)
      .as_deref()
    {
      Some("json") => Ok(serde_json::from_str(&content)?),
      Some("toml") => Ok(toml::from_str(&content)?),
      _ => Err(ConfigError::UnknownFormat(path.to_path_buf())),
    }
  }

  /// Create configuration from the CLI, merging a config file (when given)
  /// with command line overrides.
  ///
  /// # Errors
  ///
  /// Returns an error when the referenced config file cannot be loaded.
  pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
    let mut config = match &cli.config_file {
      Some(path) => Self::from_file(path)?,
      None => Self::default(),
    };

    if let Some(Commands::Build {
      input_dir,
      output_dir,
      template_dir,
      navigation_file,
      title,
      generate_search,
      highlight_code,
    }) = &cli.command
    {
      if let Some(dir) = input_dir {
        config.input_dir.clone_from(dir);
      }
      if let Some(dir) = output_dir {
        config.output_dir.clone_from(dir);
      }
      if template_dir.is_some() {
        config.template_dir.clone_from(template_dir);
      }
      if let Some(path) = navigation_file {
        config.navigation_file.clone_from(path);
      }
      if let Some(text) = title {
        config.title.clone_from(text);
      }
      if *generate_search {
        config.generate_search = true;
      }
      if *highlight_code {
        config.highlight_code = true;
      }
    }

    Ok(config)
  }

  /// Write a starter configuration file with default values.
  ///
  /// # Errors
  ///
  /// Returns an error when serialization or the write fails.
  pub fn generate_default_config(path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(&Self::default())?;
    fs::write(path, content)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_config_values() {
    let config = Config::default();
    assert_eq!(config.input_dir, PathBuf::from("content"));
    assert_eq!(config.output_dir, PathBuf::from("build"));
    assert_eq!(config.title, "TAG IT Network");
    assert!(config.generate_search);
    assert!(config.highlight_code);
  }

  #[test]
  fn toml_config_roundtrip() {
    let toml = r#"
input_dir = "docs/content"
title = "Custom Docs"
generate_search = false
"#;
    let config: Config = toml::from_str(toml).expect("should parse");
    assert_eq!(config.input_dir, PathBuf::from("docs/content"));
    assert_eq!(config.title, "Custom Docs");
    assert!(!config.generate_search);
    // Unspecified fields keep their defaults
    assert_eq!(config.base_url, "/docs/");
  }

  #[test]
  fn json_config_parses() {
    let json = r#"{ "output_dir": "public", "site_domain": "example.org" }"#;
    let config: Config = serde_json::from_str(json).expect("should parse");
    assert_eq!(config.output_dir, PathBuf::from("public"));
    assert_eq!(config.site_domain, "example.org");
  }
}
