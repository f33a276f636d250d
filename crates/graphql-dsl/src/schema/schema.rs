use crate::operation::OperationDef;
use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaConfiguration;
use crate::schema::SchemaDefinition;
use crate::types::CoercionError;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use serde_json::Value;
use std::any::Any;

/// Represents a compiled, immutable schema.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) configuration: SchemaConfiguration,
    pub(crate) definition: SchemaDefinition,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, GraphQLType>`] containing all types
    /// known to this [`Schema`].
    ///
    /// [^note] This map includes both declared types and the built-in
    /// scalars (`Boolean`, `Float`, `ID`, `Int`, `Long` and `String`).
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn configuration(&self) -> &SchemaConfiguration {
        &self.configuration
    }

    /// Decode a wire value into the host type of a declared scalar.
    pub fn decode_scalar<T: Any>(&self, wire_value: Value) -> Result<T, CoercionError> {
        self.configuration.scalar_mapper().decode(wire_value)
    }

    /// Decode a wire value with the rule of the scalar named `scalar_name`.
    /// Needed when several scalars share a host type, as manifest scalars do.
    pub fn decode_named_scalar<T: Any>(
        &self,
        scalar_name: &str,
        wire_value: Value,
    ) -> Result<T, CoercionError> {
        self.configuration.scalar_mapper().decode_named(scalar_name, wire_value)
    }

    /// The definition this schema was compiled from.
    pub fn definition(&self) -> &SchemaDefinition {
        &self.definition
    }

    pub fn encode_scalar<T: Any>(&self, host_value: &T) -> Result<Value, CoercionError> {
        self.configuration.scalar_mapper().encode(host_value)
    }

    pub fn encode_named_scalar<T: Any>(
        &self,
        scalar_name: &str,
        host_value: &T,
    ) -> Result<Value, CoercionError> {
        self.configuration.scalar_mapper().encode_named(scalar_name, host_value)
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn operation(&self, kind: OperationKind, name: &str) -> Option<&OperationDef> {
        self.definition.operation(kind, name)
    }

    pub fn operations(&self, kind: OperationKind) -> &IndexMap<String, OperationDef> {
        self.definition.operations(kind)
    }
}
