mod aggregation_error;
mod execution_error;
mod field_aggregator;
mod root_fields;

pub use aggregation_error::AggregationError;
pub use execution_error::ExecutionError;
pub use field_aggregator::FieldAggregator;
pub use field_aggregator::aggregate;
pub use root_fields::ExecutionTimeout;
pub use root_fields::RootFieldSelection;
