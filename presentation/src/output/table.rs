//! `prettytable`-backed [`TableRenderer`].

use kdebug_application::ports::table_renderer::TableRenderer;
use kdebug_domain::{ProjectedTable, TableStyle};
use prettytable::format::{self, TableFormat};
use prettytable::{Cell, Row, Table};

pub struct PrettyTableRenderer {
    style: TableStyle,
}

impl PrettyTableRenderer {
    pub fn new(style: TableStyle) -> Self {
        Self { style }
    }

    fn format(&self) -> TableFormat {
        match self.style {
            TableStyle::Bordered => *format::consts::FORMAT_DEFAULT,
            TableStyle::Plain => *format::consts::FORMAT_CLEAN,
        }
    }
}

impl Default for PrettyTableRenderer {
    fn default() -> Self {
        Self::new(TableStyle::default())
    }
}

impl TableRenderer for PrettyTableRenderer {
    fn render(&self, projected: &ProjectedTable) -> String {
        let mut table = Table::new();
        table.set_format(self.format());
        table.set_titles(Row::new(
            projected.header().iter().map(|h| Cell::new(h)).collect(),
        ));
        for row in projected.rows() {
            table.add_row(Row::new(row.cells().iter().map(|c| Cell::new(c)).collect()));
        }
        table.to_string()
    }
}
