//! Admin tools CLI
//!
//! Prints the compiled-in admin menu and breadcrumb trails, and checks
//! the registry for duplicate paths.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    admin_tools::logging::init(cli.verbose).map_err(|e| CliError::Logging(e.to_string()))?;
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List { json } => commands::run_list(json),
        Commands::Breadcrumb { path, json } => commands::run_breadcrumb(&path, json),
        Commands::Check => commands::run_check(),
    }
}
