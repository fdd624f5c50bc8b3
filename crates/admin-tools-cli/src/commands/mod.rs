//! Command implementations

mod breadcrumb;
mod check;
mod list;

pub use breadcrumb::run_breadcrumb;
pub use check::run_check;
pub use list::run_list;
