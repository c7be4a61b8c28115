//! Table style value object

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How listing tables are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    /// Box-drawn borders around every cell (default)
    #[default]
    Bordered,
    /// Space-aligned columns with no borders
    Plain,
}

impl TableStyle {
    pub const VALUES: [&'static str; 2] = ["bordered", "plain"];
}

impl FromStr for TableStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bordered" => Ok(Self::Bordered),
            "plain" => Ok(Self::Plain),
            other => Err(format!("unknown table style '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bordered() {
        assert_eq!(TableStyle::default(), TableStyle::Bordered);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Plain".parse::<TableStyle>(), Ok(TableStyle::Plain));
        assert!("fancy".parse::<TableStyle>().is_err());
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&TableStyle::Plain).unwrap();
        assert_eq!(json, "\"plain\"");
    }
}
