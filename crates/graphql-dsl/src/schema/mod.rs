mod compiler;
mod declaration_category;
mod declaration_registry;
mod field_type_validator;
mod name_validator;
mod scalar_mapper;
#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_builder;
mod schema_configuration;
mod schema_definition;
mod schema_error;
mod type_validation_error;
mod union_type_validator;

pub use compiler::DefaultSchemaCompiler;
pub use compiler::SchemaCompiler;
pub use declaration_category::DeclarationCategory;
pub use declaration_registry::DeclarationRegistry;
pub(crate) use name_validator::NameValidator;
pub use scalar_mapper::ScalarMapper;
pub use schema::Schema;
pub use schema_build_error::DeclarationRule;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use schema_configuration::NameUniqueness;
pub use schema_configuration::SchemaConfiguration;
pub use schema_configuration::SchemaConfigurationBuilder;
pub use schema_configuration::SchemaSettings;
pub use schema_definition::SchemaDefinition;
pub use schema_error::SchemaError;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
