//! Projected rows and tables.

use super::kind::ResourceKind;
use serde::{Deserialize, Serialize};

/// One row of display strings, one per column of its kind's table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRow(Vec<String>);

impl ResourceRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, column: usize) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ResourceRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Header plus rows, kept in the order the control plane returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedTable {
    kind: ResourceKind,
    header: Vec<String>,
    rows: Vec<ResourceRow>,
}

impl ProjectedTable {
    /// Empty table carrying `kind`'s headers.
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            header: kind.headers().iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. The row must have exactly one cell per header.
    pub fn push(&mut self, row: ResourceRow) {
        debug_assert_eq!(
            row.len(),
            self.header.len(),
            "row width does not match {} table",
            self.kind
        );
        self.rows.push(row);
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[ResourceRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a header, e.g. `column("READY")`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_has_kind_headers() {
        let table = ProjectedTable::new(ResourceKind::StatefulSet);
        assert_eq!(table.header(), ["NAMESPACE", "NAME", "READY", "AGE"]);
        assert!(table.is_empty());
        assert_eq!(table.column("READY"), Some(2));
        assert_eq!(table.column("NODE"), None);
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let mut table = ProjectedTable::new(ResourceKind::StatefulSet);
        table.push(["default", "zeta", "1/1", "5s"].into_iter().collect());
        table.push(["default", "alpha", "0/1", "3s"].into_iter().collect());

        let names: Vec<_> = table.rows().iter().filter_map(|r| r.get(1)).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }
}
