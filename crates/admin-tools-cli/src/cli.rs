//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// Admin Tools - Inspect the built-in admin tool registry
#[derive(Parser, Debug)]
#[command(name = "admin-tools")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List built-in tools in menu order
    List {
        /// Output the menu as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the breadcrumb trail for a navigation path
    ///
    /// Examples:
    ///   admin-tools breadcrumb /admin/email
    ///   admin-tools breadcrumb /admin/audit-logs/42 --json
    Breadcrumb {
        /// Navigation path (e.g., /admin/email)
        path: String,

        /// Output the trail as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that no two tools share a navigation path
    Check,
}
