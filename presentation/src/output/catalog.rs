//! Human-readable command catalog (`kdebug-mcp tools`).

use kdebug_domain::{CommandDefinition, CommandId};
use std::fmt::Write;

/// Catalog of the built-in commands. Needs no cluster connection.
pub fn builtin_catalog() -> String {
    let definitions: Vec<_> = CommandId::ALL.iter().map(|id| id.definition()).collect();
    format_catalog(&definitions)
}

/// List commands in registration order with their parameters.
pub fn format_catalog<'a>(definitions: impl IntoIterator<Item = &'a CommandDefinition>) -> String {
    let mut out = String::new();

    for definition in definitions {
        let _ = writeln!(out, "{}", definition.name);
        let _ = writeln!(out, "    {}", definition.description);
        for param in &definition.parameters {
            let qualifier = match param.default() {
                None => "required".to_string(),
                Some(default) if !default.is_empty() => format!("default: {default:?}"),
                Some(_) => "optional".to_string(),
            };
            let _ = writeln!(
                out,
                "    --{:<10} {} ({})",
                param.name(),
                param.description(),
                qualifier
            );
        }
        out.push('\n');
    }

    out
}
