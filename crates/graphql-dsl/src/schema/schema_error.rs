use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use thiserror::Error;

/// Errors raised while turning declarations into a compiled
/// [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error(transparent)]
    Build(#[from] SchemaBuildError),

    #[error("No query operations were declared; a schema needs at least one")]
    NoQueryDefined,

    #[error(
        "Found {} type validation error(s):\n{}",
        errors.len(),
        errors.iter()
            .map(|err| format!("  * {err}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}
