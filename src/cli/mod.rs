//! Command-line interface.

mod args;
pub mod check;
pub mod render;

pub use args::{Cli, Commands, RenderArgs};

use anyhow::{Context, Result, bail};
use tola_head::config::{HeadConfig, find_config_file};

/// Locate and load the config named on the command line.
///
/// Relative paths are searched upward from the current directory.
pub fn load_config(cli: &Cli) -> Result<HeadConfig> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let Some(path) = find_config_file(&cwd, &cli.config) else {
        bail!("Config file '{}' not found", cli.config.display());
    };
    Ok(HeadConfig::from_path(&path)?)
}
