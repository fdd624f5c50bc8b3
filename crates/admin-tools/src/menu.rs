//! JSON export of the admin menu
//!
//! The frontend menu renderer consumes an array of
//! `{ name, description, path, icon }` objects in display order.

use crate::error::Result;
use crate::registry::ToolRegistry;

/// Serialize a registry as a compact JSON array.
pub fn to_json(registry: &ToolRegistry) -> Result<String> {
    Ok(serde_json::to_string(registry.as_slice())?)
}

/// Serialize a registry as an indented JSON array.
pub fn to_json_pretty(registry: &ToolRegistry) -> Result<String> {
    Ok(serde_json::to_string_pretty(registry.as_slice())?)
}

/// Serialize a registry as a JSON value.
pub fn to_value(registry: &ToolRegistry) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(registry.as_slice())?)
}
