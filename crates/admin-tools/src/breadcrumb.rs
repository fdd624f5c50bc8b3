//! Breadcrumb labels derived from the tool registry
//!
//! The index maps a navigation path to the display name of the tool
//! mounted there. It supplies no fallback: a breadcrumb renderer that
//! looks up an unknown path gets `None` and picks its own label.

use crate::registry::{ToolDescriptor, ToolRegistry};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::LazyLock;

static BUILTIN_INDEX: LazyLock<BreadcrumbIndex> =
    LazyLock::new(|| BreadcrumbIndex::from_registry(ToolRegistry::builtin()));

/// Build a map by projecting each item to a `(key, value)` pair.
///
/// Items are visited in order and upserted, so a later item replaces an
/// earlier one with the same key.
pub fn index_by<I, K, V, F>(items: I, mut key_value: F) -> HashMap<K, V>
where
    I: IntoIterator,
    K: Eq + Hash + fmt::Debug,
    F: FnMut(I::Item) -> (K, V),
{
    let mut map = HashMap::new();
    for item in items {
        let (key, value) = key_value(item);
        if map.contains_key(&key) {
            tracing::debug!(?key, "Replacing earlier entry");
        }
        map.insert(key, value);
    }
    map
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// Cumulative path up to and including this segment (e.g., "/admin/email")
    pub path: String,
    /// Last segment of `path` (e.g., "email")
    pub segment: String,
    /// Tool name if a tool is mounted at `path`
    pub label: Option<&'static str>,
}

/// Read-only mapping from navigation path to tool display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreadcrumbIndex {
    labels: HashMap<&'static str, &'static str>,
}

impl BreadcrumbIndex {
    /// Derive the index from tools in iteration order (last write wins).
    pub fn from_tools(tools: &[ToolDescriptor]) -> Self {
        let labels = index_by(tools, ToolDescriptor::breadcrumb_entry);
        tracing::debug!(
            tools = tools.len(),
            labels = labels.len(),
            "Built breadcrumb index"
        );
        Self { labels }
    }

    /// Derive the index from a registry.
    pub fn from_registry(registry: &ToolRegistry) -> Self {
        Self::from_tools(registry.as_slice())
    }

    /// The process-wide index over the built-in tools.
    pub fn builtin() -> &'static BreadcrumbIndex {
        &BUILTIN_INDEX
    }

    /// Get the display name for a navigation path.
    pub fn label(&self, path: &str) -> Option<&'static str> {
        self.labels.get(path).copied()
    }

    /// Check if a path has a label.
    pub fn contains(&self, path: &str) -> bool {
        self.labels.contains_key(path)
    }

    /// Get the number of indexed paths.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over `(path, name)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.labels.iter().map(|(path, name)| (*path, *name))
    }

    /// Split `path` into cumulative prefixes and label each one.
    ///
    /// Empty segments are skipped, so "/admin//email/" yields the same
    /// trail as "/admin/email". The root path yields an empty trail.
    pub fn trail(&self, path: &str) -> Vec<Crumb> {
        let mut prefix = String::with_capacity(path.len());
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                prefix.push('/');
                prefix.push_str(segment);
                Crumb {
                    path: prefix.clone(),
                    segment: segment.to_string(),
                    label: self.label(&prefix),
                }
            })
            .collect()
    }
}

impl From<&ToolRegistry> for BreadcrumbIndex {
    fn from(registry: &ToolRegistry) -> Self {
        Self::from_registry(registry)
    }
}
