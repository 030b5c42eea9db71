// Configuration utilities and TOML parsing

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::version_string::VersionString;
use crate::utils::error::{Result, VersionError};

/// Default configuration file name, looked up in the current directory
pub const DEFAULT_CONFIG_FILE: &str = "version.toml";

/// On-disk layout of the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionToml {
    pub version: VersionSection,
}

/// `[version]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSection {
    /// Base version, `major.minor.patch[-suffix]`
    pub base: String,
    /// Whether this is a development build
    #[serde(default)]
    pub dev: bool,
    /// Incrementing build number, only shown for dev builds
    #[serde(default)]
    pub build: u32,
}

/// Configuration parsing utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load the configured version from a TOML file
    pub fn load_version_config<P: AsRef<Path>>(path: P) -> Result<VersionString> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(VersionError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;

        tracing::debug!(path = %path.display(), "loaded version configuration");

        Self::parse_version_config(&content)
    }

    /// Parse the configured version from TOML text
    pub fn parse_version_config(content: &str) -> Result<VersionString> {
        let parsed: VersionToml = toml::from_str(content)
            .map_err(|e| VersionError::ConfigError(format!("Invalid TOML syntax: {e}")))?;

        let section = parsed.version;
        VersionString::new(&section.base, section.dev, section.build)
    }
}
