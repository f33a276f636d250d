use crate::types::GraphQLTypeKind;
use crate::types::TypeDef;

/// The scalars every schema provides without a declaration.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BuiltinScalar {
    Boolean,
    Float,
    ID,
    Int,
    Long,
    String,
}
impl BuiltinScalar {
    pub const ALL: [BuiltinScalar; 6] = [
        Self::Boolean,
        Self::Float,
        Self::ID,
        Self::Int,
        Self::Long,
        Self::String,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::String => "String",
        }
    }
}

/// Represents any type a compiled schema knows about: a built-in scalar or a
/// declared type.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Builtin(BuiltinScalar),
    Declared(TypeDef),
}
impl GraphQLType {
    pub fn as_declared(&self) -> Option<&TypeDef> {
        if let Self::Declared(type_def) = self {
            Some(type_def)
        } else {
            None
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(builtin) => builtin.name(),
            Self::Declared(type_def) => type_def.name(),
        }
    }
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Builtin(_) => GraphQLTypeKind::Builtin,
            GraphQLType::Declared(type_def) => type_def.into(),
        }
    }
}
