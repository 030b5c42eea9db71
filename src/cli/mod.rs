// CLI module for command-line interface

pub mod compare;
pub mod config;
pub mod rank;
pub mod show;

use clap::{Parser, Subcommand};

use crate::utils::error::Result;

use self::compare::CompareCommand;
use self::config::ConfigCommand;
use self::rank::RankCommand;
use self::show::ShowCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "verstring")]
#[command(about = "Parse, render and compare server version strings")]
#[command(long_about = r#"verstring parses `major.minor.patch[-suffix]` version strings, renders
them with the distribution tag and dev-build markers, and compares them
the way the server's update checker does.

Examples:
  verstring show 1.2.3                          Print 1.2.3-ipv6
  verstring show 1.2.3 --dev --build 7 --with-build
  verstring rank 2.1.4                          Print the packed rank (1060)
  verstring compare 1.2.3 1.3.0                 1 when the second is newer
  verstring config --path version.toml          Show the configured version"#)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Parse a version and print its display string
    Show(ShowCommand),

    /// Print the numeric rank of a version
    Rank(RankCommand),

    /// Compare two versions (-1: other is older, 1: other is newer, 0: equal)
    Compare(CompareCommand),

    /// Load the version from a TOML configuration file
    Config(ConfigCommand),
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub fn execute(command: &Commands) -> Result<()> {
        match command {
            Commands::Show(cmd) => cmd.execute(),
            Commands::Rank(cmd) => cmd.execute(),
            Commands::Compare(cmd) => cmd.execute(),
            Commands::Config(cmd) => cmd.execute(),
        }
    }
}
