use clap::Args;

use crate::models::version_string::VersionString;
use crate::utils::error::Result;

/// Print the bit-packed numeric rank of a version
#[derive(Debug, Args)]
pub struct RankCommand {
    /// Base version, `major.minor.patch[-suffix]`
    pub version: String,
}

impl RankCommand {
    pub fn render(&self) -> Result<String> {
        let version = VersionString::release(&self.version)?;
        Ok(version.number().to_string())
    }

    /// Execute the rank command
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
