//! List command for the admin menu

use std::io::{self, Write};

use admin_tools::{menu, ToolRegistry};
use colored::Colorize;

use crate::error::Result;

/// Run the list command
pub fn run_list(json: bool) -> Result<()> {
    write_list(&mut io::stdout().lock(), ToolRegistry::builtin(), json)
}

fn write_list(out: &mut impl Write, registry: &ToolRegistry, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", menu::to_json_pretty(registry)?)?;
        return Ok(());
    }

    writeln!(out, "{}", "Admin Tools".bold())?;
    writeln!(out)?;

    for tool in registry {
        writeln!(
            out,
            "  {:<20} {} [{}]",
            tool.path.green(),
            tool.name,
            tool.icon.as_str().dimmed()
        )?;
        writeln!(out, "  {:<20} {}", "", tool.description.dimmed())?;
    }

    writeln!(out)?;
    writeln!(out, "{} {} tools", "Total:".dimmed(), registry.len())?;

    Ok(())
}
