use clap::Args;
use serde::{Deserialize, Serialize};

use crate::models::version_string::VersionString;
use crate::utils::error::{Result, VersionError};

/// Parse a version and print how it is displayed
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Base version, `major.minor.patch[-suffix]`
    pub version: String,

    /// Treat as a development build
    #[arg(long)]
    pub dev: bool,

    /// Build number (only shown for dev builds)
    #[arg(long, default_value_t = 0)]
    pub build: u32,

    /// Append the build number to dev builds
    #[arg(long)]
    pub with_build: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON description of a parsed version
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
    pub base_version: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub suffix: String,
    pub dev: bool,
    pub build: u32,
    pub number: i64,
    pub display: String,
}

impl VersionResponse {
    pub fn new(version: &VersionString, include_build: bool) -> Self {
        Self {
            base_version: version.base_version().to_string(),
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            suffix: version.suffix().to_string(),
            dev: version.is_dev_build(),
            build: version.build_number(),
            number: version.number(),
            display: version.full_version(include_build),
        }
    }
}

/// Render a version either as its display string or as JSON
pub fn render_version(version: &VersionString, include_build: bool, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(&VersionResponse::new(version, include_build)).map_err(VersionError::from)
    } else {
        Ok(version.full_version(include_build))
    }
}

impl ShowCommand {
    pub fn render(&self) -> Result<String> {
        let version = VersionString::new(&self.version, self.dev, self.build)?;
        render_version(&version, self.with_build, self.json)
    }

    /// Execute the show command
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
