use crate::operation::OperationKind;
use crate::operation::Resolver;
use crate::types::DeprecationState;
use crate::types::FieldDef;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// A declared query, mutation or subscription.
///
/// Operations are immutable once built; the name is unique among operations
/// of the same [`OperationKind`] within a registry.
#[derive(Clone, Debug)]
pub struct OperationDef {
    pub(crate) field: FieldDef,
    pub(crate) kind: OperationKind,
    pub(crate) resolver: Resolver,
}
impl OperationDef {
    pub fn deprecation_state(&self) -> &DeprecationState {
        self.field.deprecation_state()
    }

    pub fn description(&self) -> Option<&str> {
        self.field.description()
    }

    /// The root-type field this operation is exposed as.
    pub fn field(&self) -> &FieldDef {
        &self.field
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.field.name()
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        self.field.parameters()
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn result_type(&self) -> &TypeAnnotation {
        self.field.type_annotation()
    }
}
impl PartialEq for OperationDef {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.field == other.field
    }
}
