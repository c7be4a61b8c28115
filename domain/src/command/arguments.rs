//! Argument coercion.
//!
//! Hosts send loosely typed JSON arguments. [`coerce`] checks them against a
//! [`CommandDefinition`] once, producing [`CoercedArguments`] in which every
//! declared parameter is present as a string. Handlers never look at raw JSON.

use super::entities::CommandDefinition;
use crate::core::error::DebugError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Raw arguments of one invocation, as delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationArguments(HashMap<String, Value>);

impl InvocationArguments {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<serde_json::Map<String, Value>> for InvocationArguments {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for InvocationArguments {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Fully populated string parameters for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoercedArguments(BTreeMap<String, String>);

impl CoercedArguments {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Value of a parameter that must be present and non-empty.
    pub fn require(&self, name: &str) -> Result<&str, DebugError> {
        match self.get(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(DebugError::MissingRequiredParameter(name.to_string())),
        }
    }

    /// Value of an optional parameter, empty when absent.
    pub fn optional(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Coerce `arguments` against `definition`.
///
/// - strings are taken verbatim, numbers and booleans by their textual form
/// - `null` counts as absent
/// - arrays and objects are rejected with [`DebugError::InvalidParameterType`]
/// - an absent (or empty) required parameter is
///   [`DebugError::MissingRequiredParameter`]
/// - an absent optional parameter takes its declared default
///
/// Arguments the definition does not declare are dropped.
pub fn coerce(
    definition: &CommandDefinition,
    arguments: &InvocationArguments,
) -> Result<CoercedArguments, DebugError> {
    let mut coerced = BTreeMap::new();

    for param in &definition.parameters {
        let supplied = match arguments.get(param.name()) {
            None | Some(Value::Null) => None,
            Some(value) => Some(coerce_string(param.name(), value)?),
        };

        let value = match (supplied, param.default()) {
            (Some(value), _) if !(param.is_required() && value.is_empty()) => value,
            (_, Some(default)) => default.to_string(),
            (_, None) => {
                return Err(DebugError::MissingRequiredParameter(param.name().to_string()));
            }
        };

        coerced.insert(param.name().to_string(), value);
    }

    Ok(CoercedArguments(coerced))
}

fn coerce_string(parameter: &str, value: &Value) -> Result<String, DebugError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) => Err(type_mismatch(parameter, "array")),
        Value::Object(_) => Err(type_mismatch(parameter, "object")),
    }
}

fn type_mismatch(parameter: &str, actual: &'static str) -> DebugError {
    DebugError::InvalidParameterType {
        parameter: parameter.to_string(),
        expected: "string",
        actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::entities::ParameterSpec;
    use serde_json::json;

    fn pod_logs() -> CommandDefinition {
        CommandDefinition::new("podLogs", "Get pod logs")
            .with_parameter(ParameterSpec::optional("namespace", "Namespace", "default"))
            .with_parameter(ParameterSpec::required("name", "Pod name"))
            .with_parameter(ParameterSpec::optional("container", "Container", ""))
    }

    #[test]
    fn test_defaults_fill_missing_optionals() {
        let args = InvocationArguments::new().with_arg("name", "web-1");
        let coerced = coerce(&pod_logs(), &args).unwrap();

        assert_eq!(coerced.get("namespace"), Some("default"));
        assert_eq!(coerced.get("name"), Some("web-1"));
        assert_eq!(coerced.get("container"), Some(""));
        assert_eq!(coerced.len(), 3);
    }

    #[test]
    fn test_missing_required_names_parameter() {
        let args = InvocationArguments::new().with_arg("namespace", "prod");
        let err = coerce(&pod_logs(), &args).unwrap_err();
        assert_eq!(err, DebugError::MissingRequiredParameter("name".to_string()));
    }

    #[test]
    fn test_empty_or_null_required_is_missing() {
        for value in [json!(""), json!(null)] {
            let args = InvocationArguments::new().with_arg("name", value);
            let err = coerce(&pod_logs(), &args).unwrap_err();
            assert_eq!(err, DebugError::MissingRequiredParameter("name".to_string()));
        }
    }

    #[test]
    fn test_scalars_are_coerced_to_strings() {
        let args = InvocationArguments::new()
            .with_arg("name", 42)
            .with_arg("container", true);
        let coerced = coerce(&pod_logs(), &args).unwrap();
        assert_eq!(coerced.get("name"), Some("42"));
        assert_eq!(coerced.get("container"), Some("true"));
    }

    #[test]
    fn test_structured_values_are_rejected() {
        let args = InvocationArguments::new().with_arg("name", json!(["a", "b"]));
        let err = coerce(&pod_logs(), &args).unwrap_err();
        assert_eq!(
            err,
            DebugError::InvalidParameterType {
                parameter: "name".to_string(),
                expected: "string",
                actual: "array",
            }
        );
    }

    #[test]
    fn test_undeclared_arguments_are_dropped() {
        let args = InvocationArguments::new()
            .with_arg("name", "web-1")
            .with_arg("follow", true);
        let coerced = coerce(&pod_logs(), &args).unwrap();
        assert!(coerced.get("follow").is_none());
    }

    #[test]
    fn test_from_json_map() {
        let map = json!({"namespace": "kube-system"})
            .as_object()
            .cloned()
            .unwrap();
        let args = InvocationArguments::from(map);
        assert_eq!(args.get("namespace"), Some(&json!("kube-system")));
    }

    #[test]
    fn test_require_and_optional_accessors() {
        let args = InvocationArguments::new().with_arg("name", "web-1");
        let coerced = coerce(&pod_logs(), &args).unwrap();
        assert_eq!(coerced.require("name"), Ok("web-1"));
        assert_eq!(
            coerced.require("container"),
            Err(DebugError::MissingRequiredParameter("container".to_string()))
        );
        assert_eq!(coerced.optional("missing"), "");
    }
}
