//! Breadcrumb command
//!
//! Renders the trail for a path. Segments without a tool are shown by
//! their raw text.

use std::io::{self, Write};

use admin_tools::{BreadcrumbIndex, Crumb};
use colored::Colorize;

use crate::error::Result;

/// Run the breadcrumb command
pub fn run_breadcrumb(path: &str, json: bool) -> Result<()> {
    write_breadcrumb(&mut io::stdout().lock(), BreadcrumbIndex::builtin(), path, json)
}

fn write_breadcrumb(
    out: &mut impl Write,
    index: &BreadcrumbIndex,
    path: &str,
    json: bool,
) -> Result<()> {
    let trail = index.trail(path);
    tracing::debug!(path, crumbs = trail.len(), "Resolved breadcrumb trail");

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&trail)?)?;
        return Ok(());
    }

    let rendered: Vec<String> = trail.iter().map(render_crumb).collect();
    let separator = format!(" {} ", ">".dimmed());
    writeln!(out, "{}", rendered.join(separator.as_str()))?;

    Ok(())
}

fn render_crumb(crumb: &Crumb) -> String {
    match crumb.label {
        Some(label) => label.bold().to_string(),
        None => crumb.segment.clone(),
    }
}
