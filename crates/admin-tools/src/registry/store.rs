//! Ordered tool registry storage

use super::ToolDescriptor;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::LazyLock;

static BUILTIN_REGISTRY: LazyLock<ToolRegistry> =
    LazyLock::new(|| ToolRegistry::from_tools(super::builtin_tools().to_vec()));

/// Ordered, read-only collection of admin tools.
///
/// Iteration order is display order. There is no way to add or remove
/// tools once the registry is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Create a registry over the given tools, keeping their order.
    pub fn from_tools(tools: Vec<ToolDescriptor>) -> Self {
        Self { tools }
    }

    /// The process-wide registry of built-in tools.
    pub fn builtin() -> &'static ToolRegistry {
        &BUILTIN_REGISTRY
    }

    /// Get the first tool mounted at `path`.
    pub fn get(&self, path: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.path == path)
    }

    /// Check if any tool is mounted at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Get the number of tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Iterate over tools in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    /// All tools in display order.
    pub fn as_slice(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Check that no two tools share a navigation path.
    ///
    /// Reports the first duplicate found in display order. Breadcrumb
    /// derivation does not call this; it resolves duplicates last-write-wins.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashMap<&str, &ToolDescriptor> = HashMap::with_capacity(self.len());
        for tool in &self.tools {
            if let Some(first) = seen.insert(tool.path, tool) {
                return Err(Error::DuplicatePath {
                    path: tool.path.to_string(),
                    first: first.name.to_string(),
                    second: tool.name.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<ToolDescriptor>> for ToolRegistry {
    fn from(tools: Vec<ToolDescriptor>) -> Self {
        Self::from_tools(tools)
    }
}

impl<'a> IntoIterator for &'a ToolRegistry {
    type Item = &'a ToolDescriptor;
    type IntoIter = std::slice::Iter<'a, ToolDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ToolIcon;

    fn make_tool(name: &'static str, path: &'static str) -> ToolDescriptor {
        ToolDescriptor::new(name, "", path, ToolIcon::Mail)
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_get_and_contains() {
        let registry = ToolRegistry::from_tools(vec![make_tool("A", "/a"), make_tool("B", "/b")]);

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("/a"));
        assert_eq!(registry.get("/b").map(|t| t.name), Some("B"));
        assert!(!registry.contains("/c"));
    }

    #[test]
    fn test_get_returns_first_on_duplicate() {
        let registry = ToolRegistry::from_tools(vec![make_tool("A", "/x"), make_tool("B", "/x")]);
        assert_eq!(registry.get("/x").map(|t| t.name), Some("A"));
    }

    #[test]
    fn test_iteration_keeps_order() {
        let registry = ToolRegistry::from_tools(vec![
            make_tool("Z", "/z"),
            make_tool("A", "/a"),
            make_tool("M", "/m"),
        ]);

        let names: Vec<_> = registry.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Z", "A", "M"]); // Not sorted

        let again: Vec<_> = (&registry).into_iter().map(|t| t.name).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn test_validate_reports_duplicate() {
        let registry = ToolRegistry::from_tools(vec![
            make_tool("A", "/x"),
            make_tool("B", "/y"),
            make_tool("C", "/x"),
        ]);

        match registry.validate() {
            Err(Error::DuplicatePath {
                path,
                first,
                second,
            }) => {
                assert_eq!(path, "/x");
                assert_eq!(first, "A");
                assert_eq!(second, "C");
            }
            other => panic!("Expected DuplicatePath, got {:?}", other),
        }
    }

    #[test]
    fn test_builtin() {
        let registry = ToolRegistry::builtin();

        assert_eq!(registry.len(), crate::registry::BUILTIN_COUNT);
        assert!(registry.contains("/admin/email"));
        assert!(registry.contains("/admin/ldap"));
        assert!(registry.validate().is_ok());
        assert!(std::ptr::eq(registry, ToolRegistry::builtin()));
    }
}
