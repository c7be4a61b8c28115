//! Typed parameter sets built from coerced arguments.

use super::arguments::CoercedArguments;
use crate::core::error::DebugError;
use crate::resource::{LogQuery, ResourceQuery};

/// Parameter set a handler receives instead of a raw argument map.
pub trait FromArguments: Sized {
    fn from_arguments(args: &CoercedArguments) -> Result<Self, DebugError>;
}

/// Parameters of commands that take none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoParams;

impl FromArguments for NoParams {
    fn from_arguments(_args: &CoercedArguments) -> Result<Self, DebugError> {
        Ok(NoParams)
    }
}

/// `context` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextParams {
    pub context: String,
}

impl FromArguments for ContextParams {
    fn from_arguments(args: &CoercedArguments) -> Result<Self, DebugError> {
        Ok(Self {
            context: args.require("context")?.to_string(),
        })
    }
}

/// Namespace and optional name of a listing command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub namespace: String,
    pub name: String,
}

impl ListParams {
    pub fn query(&self) -> ResourceQuery {
        ResourceQuery::new(self.namespace.as_str(), self.name.as_str())
    }
}

impl FromArguments for ListParams {
    fn from_arguments(args: &CoercedArguments) -> Result<Self, DebugError> {
        Ok(Self {
            namespace: args.optional("namespace").to_string(),
            name: args.optional("name").to_string(),
        })
    }
}

/// `podLogs` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogParams {
    pub namespace: String,
    pub name: String,
    pub container: String,
}

impl LogParams {
    pub fn query(&self) -> LogQuery {
        LogQuery::new(
            self.namespace.as_str(),
            self.name.as_str(),
            self.container.as_str(),
        )
    }
}

impl FromArguments for LogParams {
    fn from_arguments(args: &CoercedArguments) -> Result<Self, DebugError> {
        Ok(Self {
            namespace: args.optional("namespace").to_string(),
            name: args.require("name")?.to_string(),
            container: args.optional("container").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandId, InvocationArguments, coerce};

    fn coerced(id: CommandId, args: InvocationArguments) -> CoercedArguments {
        coerce(&id.definition(), &args).unwrap()
    }

    #[test]
    fn test_list_params_defaults() {
        let args = coerced(CommandId::Pods, InvocationArguments::new());
        let params = ListParams::from_arguments(&args).unwrap();
        assert_eq!(params.query(), ResourceQuery::new("default", ""));
    }

    #[test]
    fn test_list_params_with_name() {
        let args = coerced(
            CommandId::Services,
            InvocationArguments::new()
                .with_arg("namespace", "kube-system")
                .with_arg("name", "kube-dns"),
        );
        let query = ListParams::from_arguments(&args).unwrap().query();
        assert_eq!(query.namespace, "kube-system");
        assert_eq!(query.exact_name.as_deref(), Some("kube-dns"));
    }

    #[test]
    fn test_log_params_query() {
        let args = coerced(
            CommandId::PodLogs,
            InvocationArguments::new().with_arg("name", "web-1"),
        );
        let query = LogParams::from_arguments(&args).unwrap().query();
        assert_eq!(query, LogQuery::new("default", "web-1", ""));
        assert!(query.container.is_none());
    }

    #[test]
    fn test_context_params() {
        let args = coerced(
            CommandId::Context,
            InvocationArguments::new().with_arg("context", "staging"),
        );
        let params = ContextParams::from_arguments(&args).unwrap();
        assert_eq!(params.context, "staging");
    }

    #[test]
    fn test_context_params_reject_missing_value() {
        let err = ContextParams::from_arguments(&CoercedArguments::default()).unwrap_err();
        assert_eq!(err, DebugError::MissingRequiredParameter("context".into()));
    }
}
