//! Output rendering: listing tables and the command catalog.

pub mod catalog;
pub mod table;

pub use catalog::{builtin_catalog, format_catalog};
pub use table::PrettyTableRenderer;
