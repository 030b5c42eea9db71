// verstring - server version strings
// Main CLI entry point

use std::process;

use clap::Parser;
use verstring::cli::{Cli, CliDispatcher};
use verstring::utils::logger;

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    if let Err(err) = CliDispatcher::execute(&cli.command) {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}
