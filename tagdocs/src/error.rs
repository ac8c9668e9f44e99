use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors loading configuration or navigation resources.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("TOML parse error: {0}")]
  TomlParse(#[from] toml::de::Error),

  #[error("TOML serialize error: {0}")]
  TomlSerialize(#[from] toml::ser::Error),

  #[error("config file has no recognized extension (.toml or .json): {0}")]
  UnknownFormat(PathBuf),
}
