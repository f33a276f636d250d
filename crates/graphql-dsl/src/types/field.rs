use crate::operation::Resolver;
use crate::types::DeprecationState;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a field declared on an [`ObjectDef`](crate::types::ObjectDef)
/// (and, wrapped in an [`OperationDef`](crate::operation::OperationDef), on a
/// root operation type).
///
/// Fields derived from a [`StructuralType`](crate::types::StructuralType) are
/// read straight off the parent value and carry no [`Resolver`]; fields added
/// through the DSL always do.
#[derive(Clone, Debug)]
pub struct FieldDef {
    pub(crate) deprecation: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) resolver: Option<Resolver>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl FieldDef {
    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The parameters of this field, in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn resolver(&self) -> Option<&Resolver> {
        self.resolver.as_ref()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
// Resolvers are opaque, so equality only looks at the declared shape.
impl PartialEq for FieldDef {
    fn eq(&self, other: &Self) -> bool {
        self.deprecation == other.deprecation
            && self.description == other.description
            && self.name == other.name
            && self.parameters == other.parameters
            && self.resolver.is_some() == other.resolver.is_some()
            && self.type_annotation == other.type_annotation
    }
}
