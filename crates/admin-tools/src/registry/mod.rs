//! Admin tool registry - single source of truth for the admin menu
//!
//! The built-in tools are declared once in [`builtins`] and every menu,
//! breadcrumb and lookup derives from that list.

mod builtins;
mod store;
mod types;

pub use builtins::{builtin_tools, BUILTIN_COUNT, BUILTIN_TOOLS};
pub use store::ToolRegistry;
pub use types::{ToolDescriptor, ToolIcon};
