use std::fs;

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};

mod cli;
mod config;
mod error;
mod html;
mod utils;

use cli::{Cli, Commands};
use config::{Config, navigation::Navigation};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  if let Some(Commands::Init { output, force }) = &cli.command {
    // Check if file already exists and that we're not forcing overwrite
    if output.exists() && !force {
      bail!(
        "Configuration file already exists: {}. Use --force to overwrite.",
        output.display()
      );
    }

    if let Some(parent) = output.parent() {
      if !parent.as_os_str().is_empty() && !parent.exists() {
        fs::create_dir_all(parent).wrap_err_with(|| {
          format!("Failed to create directory: {}", parent.display())
        })?;
      }
    }

    Config::generate_default_config(output).wrap_err_with(|| {
      format!(
        "Failed to generate configuration file: {}",
        output.display()
      )
    })?;

    info!(
      "Configuration file created successfully. Edit it to customize the \
       site build."
    );
    return Ok(());
  }

  // Create configuration from CLI and/or config file
  let config = Config::load(&cli)?;

  // Run the main site build
  generate_site(&config)
}

/// Main site build process
fn generate_site(config: &Config) -> Result<()> {
  info!("Starting documentation build...");

  // Ensure output directory exists
  fs::create_dir_all(&config.output_dir)?;
  info!("Output directory: {}", config.output_dir.display());

  // Load the navigation tree; a missing file just means an empty sidebar
  let nav = Navigation::load(&config.navigation_file);

  // Process all markdown documents
  let summary = utils::process_markdown_files(config, &nav)?;

  if summary.failed > 0 {
    info!(
      "Build finished with errors: {} pages generated, {} failed",
      summary.built, summary.failed
    );
  } else {
    info!("Build complete! {} pages generated.", summary.built);
  }

  Ok(())
}
