//! Declarative GraphQL schema definitions.
//!
//! A [`SchemaBuilder`](schema::SchemaBuilder) accumulates operation and type
//! declarations into a [`DeclarationRegistry`](schema::DeclarationRegistry),
//! validating each declaration as it is added. Finalizing the registry yields
//! an immutable [`SchemaDefinition`](schema::SchemaDefinition) which a
//! [`SchemaCompiler`](schema::SchemaCompiler) turns into a
//! [`Schema`](schema::Schema).
//!
//! At execution time, [`FieldAggregator`](execution::FieldAggregator) runs the
//! sibling fields of a selection set concurrently and assembles their results
//! in declaration order.

pub mod execution;
pub mod manifest;
mod named_ref;
pub mod operation;
pub mod schema;
pub mod types;

pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
