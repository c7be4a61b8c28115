//! JSON Schema generation for command definitions.
//!
//! Every parameter is a string. Optional parameters advertise their default
//! unless it is empty.

use kdebug_domain::CommandDefinition;
use serde_json::{Map, Value, json};

/// Input schema of one command, as an MCP `inputSchema` object.
pub fn input_schema(definition: &CommandDefinition) -> Map<String, Value> {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in &definition.parameters {
        let mut property = json!({
            "type": "string",
            "description": param.description(),
        });
        if let Some(default) = param.default().filter(|d| !d.is_empty()) {
            property["default"] = Value::String(default.to_string());
        }
        properties.insert(param.name().to_string(), property);

        if param.is_required() {
            required.push(Value::String(param.name().to_string()));
        }
    }

    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), Value::Array(required));
    }
    schema
}
