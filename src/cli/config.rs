use std::path::PathBuf;

use clap::Args;

use super::show::render_version;
use crate::utils::config::{ConfigParser, DEFAULT_CONFIG_FILE};
use crate::utils::error::Result;

/// Load the configured version and print it
#[derive(Debug, Args)]
pub struct ConfigCommand {
    /// Configuration file (default: ./version.toml)
    #[arg(long, env = "VERSTRING_CONFIG")]
    pub path: Option<PathBuf>,

    /// Append the build number to dev builds
    #[arg(long)]
    pub with_build: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

impl ConfigCommand {
    pub fn render(&self) -> Result<String> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let version = ConfigParser::load_version_config(&path)?;
        render_version(&version, self.with_build, self.json)
    }

    /// Execute the config command
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
