//! Core types for the admin tool registry

use serde::Serialize;
use std::fmt;

/// Glyph shown next to a tool in the admin menu.
///
/// Each variant maps to a stable kebab-case icon name that the frontend
/// resolves against its icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolIcon {
    /// Envelope, used for mail settings
    Mail,
    /// Shield, used for network access controls
    Shield,
    /// Scroll with text, used for logs
    ScrollText,
    /// Key, used for directory and credential settings
    KeyRound,
}

impl ToolIcon {
    /// Icon name as understood by the frontend.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ToolIcon::Mail => "mail",
            ToolIcon::Shield => "shield",
            ToolIcon::ScrollText => "scroll-text",
            ToolIcon::KeyRound => "key-round",
        }
    }
}

impl fmt::Display for ToolIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A built-in administrative tool as shown in the admin menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    /// Display label (e.g., "邮件配置")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Navigation path the tool is mounted at (e.g., "/admin/email")
    pub path: &'static str,
    /// Menu glyph
    pub icon: ToolIcon,
}

impl ToolDescriptor {
    /// Create a new tool descriptor.
    pub const fn new(
        name: &'static str,
        description: &'static str,
        path: &'static str,
        icon: ToolIcon,
    ) -> Self {
        Self {
            name,
            description,
            path,
            icon,
        }
    }

    /// Breadcrumb entry contributed by this tool.
    pub fn breadcrumb_entry(&self) -> (&'static str, &'static str) {
        (self.path, self.name)
    }
}
