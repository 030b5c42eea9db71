// verstring - server version strings
// Core library functionality

pub mod cli;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use models::version_string::{VersionString, DEV_MARKER, DISTRIBUTION_TAG};
pub use utils::error::{Result, VersionError};
