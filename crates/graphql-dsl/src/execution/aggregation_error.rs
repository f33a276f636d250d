use std::time::Duration;
use thiserror::Error;

/// Why a [`FieldAggregator`](crate::execution::FieldAggregator) produced no
/// result. No partial results are ever returned alongside an error.
#[derive(Debug, Error)]
pub enum AggregationError<E> {
    #[error("Field aggregation was cancelled")]
    Cancelled,

    #[error("The `{field_name}` field was registered more than once")]
    DuplicateField {
        field_name: String,
    },

    #[error("The `{field_name}` field failed: {source}")]
    Field {
        field_name: String,
        #[source]
        source: E,
    },

    #[error("The `{field_name}` field panicked: {message}")]
    Panicked {
        field_name: String,
        message: String,
    },

    #[error(
        "Field aggregation timed out after {timeout:?} (still pending: {})",
        pending_fields.join(", "),
    )]
    Timeout {
        pending_fields: Vec<String>,
        timeout: Duration,
    },
}
