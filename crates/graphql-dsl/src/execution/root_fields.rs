use crate::execution::ExecutionError;
use crate::execution::FieldAggregator;
use crate::operation::OperationDef;
use crate::operation::OperationKind;
use crate::operation::ResolverArgs;
use crate::schema::Schema;
use indexmap::IndexMap;
use serde_json::Value;
use std::time::Duration;

type Result<T> = std::result::Result<T, ExecutionError>;

/// One field of a root selection set: the operation to run, the key its
/// result is reported under, and the arguments it was called with.
#[derive(Clone, Debug, PartialEq)]
pub struct RootFieldSelection {
    pub args: IndexMap<String, Value>,
    pub operation: String,
    pub response_key: String,
}
impl RootFieldSelection {
    /// Select `operation` under its own name, without arguments.
    pub fn new(operation: impl Into<String>) -> Self {
        let operation = operation.into();
        Self {
            args: IndexMap::new(),
            response_key: operation.to_string(),
            operation,
        }
    }

    pub fn alias(mut self, response_key: impl Into<String>) -> Self {
        self.response_key = response_key.into();
        self
    }

    pub fn arg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.args.insert(name.into(), value);
        self
    }
}

/// The time limit for one call to
/// [`Schema::resolve_root_fields()`](crate::schema::Schema::resolve_root_fields).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ExecutionTimeout {
    /// Use the schema's configured execution timeout (which may be none).
    #[default]
    Configured,

    After(Duration),

    /// Wait for every field, however long it takes.
    Unbounded,
}
impl From<Duration> for ExecutionTimeout {
    fn from(timeout: Duration) -> Self {
        Self::After(timeout)
    }
}

impl Schema {
    /// Run the resolvers of a root selection set concurrently.
    ///
    /// The returned map follows the order of `selections`.
    pub async fn resolve_root_fields(
        &self,
        kind: OperationKind,
        selections: Vec<RootFieldSelection>,
        timeout: ExecutionTimeout,
    ) -> Result<IndexMap<String, Value>> {
        let timeout = match timeout {
            ExecutionTimeout::Configured => self.configuration().execution_timeout(),
            ExecutionTimeout::After(timeout) => Some(timeout),
            ExecutionTimeout::Unbounded => None,
        };

        // Resolve every selection before spawning anything so that a bad
        // selection never leaves computations running.
        let mut calls = Vec::with_capacity(selections.len());
        for selection in selections {
            let operation = self.operation(kind, &selection.operation).ok_or_else(|| {
                ExecutionError::UnknownOperation {
                    kind,
                    operation_name: selection.operation.to_string(),
                }
            })?;
            let arguments = coerce_arguments(operation, selection.args)?;
            calls.push((selection.response_key, operation.resolver().clone(), arguments));
        }

        tracing::debug!(?kind, fields = calls.len(), "resolving root fields");
        let mut aggregator = FieldAggregator::new(timeout);
        for (response_key, resolver, arguments) in calls {
            let args = ResolverArgs::new(Value::Null, arguments);
            if let Err(err) = aggregator.add_field(response_key, resolver.call(args)) {
                aggregator.cancel().await;
                return Err(err.into());
            }
        }
        Ok(aggregator.finish().await?)
    }
}

/// Fill in parameter defaults and reject unknown or missing arguments. The
/// result follows the parameter declaration order.
fn coerce_arguments(
    operation: &OperationDef,
    mut args: IndexMap<String, Value>,
) -> Result<IndexMap<String, Value>> {
    let mut arguments = IndexMap::with_capacity(operation.parameters().len());
    for (param_name, param) in operation.parameters() {
        match args.shift_remove(param_name.as_str()) {
            Some(value) => {
                arguments.insert(param_name.to_string(), value);
            },
            None => match param.default_value() {
                Some(default_value) => {
                    arguments.insert(param_name.to_string(), default_value.to_owned());
                },
                None if !param.type_annotation().nullable() => {
                    return Err(ExecutionError::MissingArgument {
                        argument_name: param_name.to_string(),
                        operation_name: operation.name().to_string(),
                    });
                },
                None => (),
            },
        }
    }

    if let Some(argument_name) = args.into_keys().next() {
        return Err(ExecutionError::UnknownArgument {
            argument_name,
            operation_name: operation.name().to_string(),
        });
    }

    Ok(arguments)
}
