//! @acp:module "Init Command"
//! @acp:summary "Write a default configuration file"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;

use crate::config::Config;
use crate::render::OutputFormat;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Config file to write
    pub path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
    /// Data directory for submissions and analytics
    pub data_dir: Option<PathBuf>,
    /// Default output format
    pub format: Option<OutputFormat>,
    /// Disable submission logging
    pub no_persist: bool,
    /// Disable step analytics
    pub no_analytics: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            options.path.display()
        );
    }

    let mut config = Config {
        data_dir: options.data_dir,
        persist: !options.no_persist,
        analytics: !options.no_analytics,
        ..Default::default()
    };
    if let Some(format) = options.format {
        config.default_format = format.as_str().to_string();
    }

    config.save(&options.path)?;
    println!(
        "{} Created {}",
        style("✓").green(),
        options.path.display()
    );
    println!(
        "  Submissions will be stored in {}",
        style(config.data_dir().display()).cyan()
    );

    println!("\n{}", style("Next steps:").bold());
    println!("  Run {} to build your checklist", style("advisor interview").cyan());

    Ok(())
}
