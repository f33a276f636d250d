use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::schema::DeclarationCategory;
use crate::schema::SchemaDefinition;
use crate::types::EnumDef;
use crate::types::InputDef;
use crate::types::ObjectDef;
use crate::types::ScalarDef;
use crate::types::UnionDef;

/// A name-keyed reference to a declared type. Returned by every type
/// declaration and resolved against a [`SchemaDefinition`].
pub type TypeRef = NamedRef<SchemaDefinition, TypeDef>;

/// Represents a declared (non-operation) type.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDef {
    Enum(EnumDef),
    Input(InputDef),
    Object(ObjectDef),
    Scalar(ScalarDef),
    Union(UnionDef),
}
impl TypeDef {
    pub fn as_enum(&self) -> Option<&EnumDef> {
        if let Self::Enum(def) = self {
            Some(def)
        } else {
            None
        }
    }

    pub fn as_input(&self) -> Option<&InputDef> {
        if let Self::Input(def) = self {
            Some(def)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectDef> {
        if let Self::Object(def) = self {
            Some(def)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarDef> {
        if let Self::Scalar(def) = self {
            Some(def)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionDef> {
        if let Self::Union(def) = self {
            Some(def)
        } else {
            None
        }
    }

    pub fn category(&self) -> DeclarationCategory {
        match self {
            Self::Enum(_) => DeclarationCategory::Enum,
            Self::Input(_) => DeclarationCategory::InputObject,
            Self::Object(_) => DeclarationCategory::Object,
            Self::Scalar(_) => DeclarationCategory::Scalar,
            Self::Union(_) => DeclarationCategory::Union,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(def) => def.description(),
            Self::Input(def) => def.description(),
            Self::Object(def) => def.description(),
            Self::Scalar(def) => def.description(),
            Self::Union(def) => def.description(),
        }
    }

    /// Whether a value of this type may appear in an input position
    /// (parameters, input object fields).
    pub fn is_input_type(&self) -> bool {
        GraphQLTypeKind::from(self).is_input_type()
    }

    /// Whether a value of this type may appear in an output position
    /// (operation results, object fields).
    pub fn is_output_type(&self) -> bool {
        GraphQLTypeKind::from(self).is_output_type()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(def) => def.name(),
            Self::Input(def) => def.name(),
            Self::Object(def) => def.name(),
            Self::Scalar(def) => def.name(),
            Self::Union(def) => def.name(),
        }
    }

    pub fn type_ref(&self) -> TypeRef {
        TypeRef::new(self.name())
    }
}
impl std::convert::From<EnumDef> for TypeDef {
    fn from(value: EnumDef) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<InputDef> for TypeDef {
    fn from(value: InputDef) -> Self {
        Self::Input(value)
    }
}
impl std::convert::From<ObjectDef> for TypeDef {
    fn from(value: ObjectDef) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<ScalarDef> for TypeDef {
    fn from(value: ScalarDef) -> Self {
        Self::Scalar(value)
    }
}
impl std::convert::From<UnionDef> for TypeDef {
    fn from(value: UnionDef) -> Self {
        Self::Union(value)
    }
}
impl DerefByName for TypeDef {
    type Source = SchemaDefinition;

    fn deref_name<'a>(
        definition: &'a SchemaDefinition,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        definition.type_def(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}

/// The kind of a type a [`TypeAnnotation`](crate::types::TypeAnnotation) can
/// name: one of the declared kinds or a built-in scalar.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLTypeKind {
    Builtin,
    Enum,
    Input,
    Object,
    Scalar,
    Union,
}
impl GraphQLTypeKind {
    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Builtin | Self::Enum | Self::Input | Self::Scalar)
    }

    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::Input)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Builtin => "built-in scalar",
            Self::Enum => "enum",
            Self::Input => "input object",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }
}
impl std::convert::From<&TypeDef> for GraphQLTypeKind {
    fn from(value: &TypeDef) -> Self {
        match value {
            TypeDef::Enum(_) => Self::Enum,
            TypeDef::Input(_) => Self::Input,
            TypeDef::Object(_) => Self::Object,
            TypeDef::Scalar(_) => Self::Scalar,
            TypeDef::Union(_) => Self::Union,
        }
    }
}
impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
