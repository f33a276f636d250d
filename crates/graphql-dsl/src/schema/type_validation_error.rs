use crate::schema::DeclarationCategory;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

/// A cross-declaration problem found while compiling a
/// [`SchemaDefinition`](crate::schema::SchemaDefinition).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "The name `{type_name}` is declared by more than one kind of type: {}",
        categories.iter()
            .map(|category| category.name())
            .collect::<Vec<_>>()
            .join(", "),
    )]
    DuplicateTypeName {
        categories: Vec<DeclarationCategory>,
        type_name: String,
    },

    #[error("The `{union_type_name}` union has no possible types")]
    EmptyUnion {
        union_type_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a {invalid_type_kind} type."
    )]
    InvalidInputFieldWithOutputType {
        field_name: String,
        invalid_type_kind: GraphQLTypeKind,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter of `{parent_type_name}.{field_name}` was \
        declared with the `{outputonly_type_name}` type, which is not an \
        input-compatible type."
    )]
    InvalidParameterWithOutputOnlyType {
        field_name: String,
        outputonly_type_name: String,
        parameter_name: String,
        parent_type_name: String,
    },

    #[error(
        "Invalid union member type: The `{union_type_name}` type defines one \
        of its members as `{member_type_name}`, but this type is a \
        {member_type_kind} type and union members can only be object types."
    )]
    InvalidUnionMemberTypeKind {
        member_type_kind: GraphQLTypeKind,
        member_type_name: String,
        union_type_name: String,
    },

    #[error(
        "The {category} `{type_name}` shadows the built-in `{type_name}` scalar"
    )]
    ShadowsBuiltinScalar {
        category: DeclarationCategory,
        type_name: String,
    },

    #[error(
        "There is no type defined with the name `{undefined_type_name}` \
        (referenced by `{referenced_by}`)"
    )]
    UndefinedTypeName {
        referenced_by: String,
        undefined_type_name: String,
    },
}
