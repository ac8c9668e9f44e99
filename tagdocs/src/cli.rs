use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for tagdocs
#[derive(Parser, Debug)]
#[command(author, version, about = "tagdocs: TAG IT Network documentation builder")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to a configuration file (TOML or JSON)
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,
}

/// All supported subcommands for the tagdocs CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new tagdocs configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "tagdocs.toml")]
    output: PathBuf,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Build the documentation site.
  Build {
    /// Path to the directory containing markdown content.
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Output directory for generated pages.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to directory containing template files. Templates override
    /// built-in ones (default.html)
    #[arg(long = "template-dir")]
    template_dir: Option<PathBuf>,

    /// Path to the navigation tree description (JSON).
    #[arg(long = "navigation")]
    navigation_file: Option<PathBuf>,

    /// Title of the documentation site.
    #[arg(short = 'T', long)]
    title: Option<String>,

    /// Whether to generate the client-side search index.
    #[arg(short = 'S', long = "generate-search", action = clap::ArgAction::SetTrue)]
    generate_search: bool,

    /// Whether to enable syntax highlighting for code blocks.
    #[arg(long = "highlight-code", action = clap::ArgAction::SetTrue)]
    highlight_code: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
