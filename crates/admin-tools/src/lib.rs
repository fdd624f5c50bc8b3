//! Built-in administrative tools for the admin web interface.
//!
//! This crate holds the compiled-in list of admin tools shown in the
//! navigation menu, and the breadcrumb index derived from it.
//!
//! # Architecture
//!
//! 1. **Registry** - [`ToolRegistry`] wraps an ordered sequence of
//!    [`ToolDescriptor`]s. Order is display order. The built-in list lives
//!    in [`BUILTIN_TOOLS`].
//!
//! 2. **Breadcrumb index** - [`BreadcrumbIndex`] maps a navigation path to
//!    its display name. It is derived from a registry once and never
//!    changes afterwards. Duplicate paths resolve last-write-wins.
//!
//! 3. **Menu export** - [`menu::to_json`] serializes a registry for the
//!    frontend menu renderer.
//!
//! ```
//! use admin_tools::{BreadcrumbIndex, ToolRegistry};
//!
//! let registry = ToolRegistry::builtin();
//! assert_eq!(registry.iter().next().map(|t| t.path), Some("/admin/email"));
//!
//! let index = BreadcrumbIndex::builtin();
//! assert_eq!(index.label("/admin/audit-logs"), Some("审计日志"));
//! assert_eq!(index.label("/admin/unknown"), None);
//! ```

pub mod breadcrumb;
pub mod error;
pub mod logging;
pub mod menu;
pub mod registry;

pub use breadcrumb::{index_by, BreadcrumbIndex, Crumb};
pub use error::{Error, Result};
pub use registry::{
    builtin_tools, ToolDescriptor, ToolIcon, ToolRegistry, BUILTIN_COUNT, BUILTIN_TOOLS,
};
