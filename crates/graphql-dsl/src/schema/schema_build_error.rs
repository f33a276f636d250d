use crate::operation::OperationKind;
use crate::schema::DeclarationCategory;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "Cannot declare the {category} `{name}`: a {conflicting_category} with \
        the same name has already been declared"
    )]
    DuplicateName {
        category: DeclarationCategory,
        conflicting_category: DeclarationCategory,
        name: String,
    },

    #[error("Attempted to {attempted} after the declaration registry was finalized")]
    IllegalState {
        attempted: &'static str,
    },

    #[error("Invalid {category} declaration `{name}`: {rule}")]
    InvalidDeclaration {
        category: DeclarationCategory,
        name: String,
        rule: DeclarationRule,
    },
}
impl SchemaBuildError {
    pub(crate) fn invalid(
        category: DeclarationCategory,
        name: impl Into<String>,
        rule: DeclarationRule,
    ) -> Self {
        Self::InvalidDeclaration {
            category,
            name: name.into(),
            rule,
        }
    }
}

/// The structural rule broken by an
/// [`InvalidDeclaration`](SchemaBuildError::InvalidDeclaration).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DeclarationRule {
    #[error("the `{value_name}` value is declared more than once")]
    DuplicateEnumValue {
        value_name: String,
    },

    #[error("the `{field_name}` field is declared more than once")]
    DuplicateField {
        field_name: String,
    },

    #[error("the `{param_name}` parameter is declared more than once on `{field_name}`")]
    DuplicateParameter {
        field_name: String,
        param_name: String,
    },

    #[error("the `{member_name}` type is listed as a possible type more than once")]
    DuplicateUnionMember {
        member_name: String,
    },

    #[error("names must not start with `__` (found `{name}`)")]
    DunderPrefixedName {
        name: String,
    },

    #[error("enum must have at least one value")]
    EmptyEnum,

    #[error("declaration names must not be empty")]
    EmptyName,

    #[error("union must have at least one possible type")]
    EmptyUnion,

    #[error("scalar must declare a coercion from its wire representation")]
    MissingCoercion,

    #[error("resolver has to be specified for `{field_name}`")]
    MissingResolver {
        field_name: String,
    },

    #[error("a return type has to be specified for `{field_name}`")]
    MissingReturnType {
        field_name: String,
    },

    #[error("type must declare at least one field")]
    NoFields,

    #[error("cannot build a union from a non-closed type")]
    NonClosedUnionSource,

    #[error("a {actual:?} operation cannot be registered as a {expected:?}")]
    OperationKindMismatch {
        actual: OperationKind,
        expected: OperationKind,
    },

    #[error("metadata was declared for `{value_name}`, which is not a value of this enum")]
    UnknownEnumValue {
        value_name: String,
    },

    #[error("the `{field_name}` field does not exist on the source type")]
    UnknownField {
        field_name: String,
    },
}
