//! Port for turning projected tables into host-facing text.

use kdebug_domain::ProjectedTable;

/// Renders a [`ProjectedTable`] as a single text payload.
pub trait TableRenderer: Send + Sync {
    fn render(&self, table: &ProjectedTable) -> String;
}
