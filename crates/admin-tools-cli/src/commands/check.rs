//! Check command for registry consistency

use admin_tools::ToolRegistry;
use colored::Colorize;

use crate::error::Result;

/// Run the check command
pub fn run_check() -> Result<()> {
    check_registry(ToolRegistry::builtin())?;
    println!(
        "{} {} tools, all navigation paths unique",
        "OK".green().bold(),
        ToolRegistry::builtin().len()
    );
    Ok(())
}

fn check_registry(registry: &ToolRegistry) -> Result<()> {
    registry.validate()?;
    tracing::debug!(tools = registry.len(), "Registry validated");
    Ok(())
}
