use clap::Args;
use serde::{Deserialize, Serialize};

use crate::models::version_string::VersionString;
use crate::utils::error::{Result, VersionError};

/// Compare two versions the way the update checker does
#[derive(Debug, Args)]
pub struct CompareCommand {
    /// Local version
    pub this: String,

    /// Version to compare against (e.g. the one reported by the update server)
    pub other: String,

    /// Local version is a development build
    #[arg(long)]
    pub this_dev: bool,

    /// Local build number
    #[arg(long, default_value_t = 0)]
    pub this_build: u32,

    /// Other version is a development build
    #[arg(long)]
    pub other_dev: bool,

    /// Other build number
    #[arg(long, default_value_t = 0)]
    pub other_build: u32,

    /// Print the raw rank difference instead of -1/0/1
    #[arg(long)]
    pub diff: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for compare command
#[derive(Debug, Serialize, Deserialize)]
pub struct CompareResponse {
    pub this: String,
    pub other: String,
    pub diff: bool,
    pub result: i64,
}

impl CompareCommand {
    pub fn render(&self) -> Result<String> {
        let this = VersionString::new(&self.this, self.this_dev, self.this_build)?;
        let other = VersionString::new(&self.other, self.other_dev, self.other_build)?;
        let result = this.compare(&other, self.diff);

        if !self.json {
            return Ok(result.to_string());
        }

        let response = CompareResponse {
            this: this.full_version(true),
            other: other.full_version(true),
            diff: self.diff,
            result,
        };
        serde_json::to_string_pretty(&response).map_err(VersionError::from)
    }

    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
