//! Resource domain module
//!
//! Describes *what* a projector produces, independent of how the cluster is
//! reached:
//!
//! - [`ResourceKind`]: the eight inspectable kinds and their exact headers
//! - [`ResourceQuery`] / [`LogQuery`]: namespace scope and name filters
//! - [`ProjectedTable`] / [`ResourceRow`]: rows of display strings in
//!   control-plane order
//! - [`age`]: the AGE column format shared by every kind

pub mod age;
pub mod kind;
pub mod query;
pub mod table;

pub use age::{UNKNOWN_AGE, age_since, format_age};
pub use kind::ResourceKind;
pub use query::{DEFAULT_NAMESPACE, LogQuery, ResourceQuery};
pub use table::{ProjectedTable, ResourceRow};
