use crate::execution::AggregationError;
use crate::operation::FieldError;
use crate::operation::OperationKind;
use thiserror::Error;

/// Errors raised by [`Schema::resolve_root_fields()`](crate::schema::Schema::resolve_root_fields).
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error(transparent)]
    Aggregation(#[from] AggregationError<FieldError>),

    #[error("The `{argument_name}` argument is required by `{operation_name}` but was not provided")]
    MissingArgument {
        argument_name: String,
        operation_name: String,
    },

    #[error("`{operation_name}` has no parameter named `{argument_name}`")]
    UnknownArgument {
        argument_name: String,
        operation_name: String,
    },

    #[error("No {kind:?} operation named `{operation_name}` is declared")]
    UnknownOperation {
        kind: OperationKind,
        operation_name: String,
    },
}
