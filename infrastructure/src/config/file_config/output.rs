//! Output configuration from TOML (`[output]` section)

use super::ConfigIssue;
use kdebug_domain::TableStyle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Table style: "bordered" or "plain"
    pub table_style: String,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            table_style: "bordered".to_string(),
        }
    }
}

impl FileOutputConfig {
    /// Parse `table_style`, falling back to the default for unknown values.
    pub fn parse_table_style(&self) -> (TableStyle, Option<ConfigIssue>) {
        match self.table_style.parse() {
            Ok(style) => (style, None),
            Err(_) => (
                TableStyle::default(),
                Some(ConfigIssue::invalid_value(
                    "output.table_style",
                    &self.table_style,
                    &TableStyle::VALUES,
                    "bordered",
                )),
            ),
        }
    }
}
