mod deprecation_state;
mod enum_type;
mod enum_type_builder;
mod field;
mod field_builder;
mod graphql_type;
mod host_type;
mod input_object_type;
mod input_object_type_builder;
mod list_type_annotation;
mod named_type_annotation;
mod object_type;
mod object_type_builder;
mod parameter;
mod property_builder;
mod scalar_coercion;
mod scalar_type;
mod scalar_type_builder;
mod structural_type;
mod type_annotation;
mod type_builder;
mod type_def;
mod union_type;
mod union_type_builder;

pub use deprecation_state::DEFAULT_DEPRECATION_REASON;
pub use deprecation_state::DeprecationState;
pub use enum_type::EnumDef;
pub use enum_type::EnumValue;
pub use enum_type::EnumValueDef;
pub use enum_type::EnumValues;
pub use enum_type_builder::EnumTypeBuilder;
pub use enum_type_builder::EnumValueBuilder;
pub use field::FieldDef;
pub use field_builder::FieldBuilder;
pub use graphql_type::BuiltinScalar;
pub use graphql_type::GraphQLType;
pub use host_type::HostType;
pub use input_object_type::InputDef;
pub use input_object_type::InputFieldDef;
pub use input_object_type_builder::InputObjectTypeBuilder;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use object_type::ObjectDef;
pub use object_type_builder::ObjectTypeBuilder;
pub use parameter::Parameter;
pub use property_builder::PropertyBuilder;
pub use scalar_coercion::CoercionError;
pub use scalar_coercion::ScalarCoercion;
pub use scalar_coercion::WireScalar;
pub use scalar_type::ScalarDef;
pub use scalar_type::WireKind;
pub use scalar_type_builder::ScalarTypeBuilder;
pub use structural_type::DescribeType;
pub use structural_type::StructuralField;
pub use structural_type::StructuralType;
pub use type_annotation::TypeAnnotation;
pub use type_annotation::TypeAnnotationParseError;
pub use type_builder::TypeBuilder;
pub use type_def::GraphQLTypeKind;
pub use type_def::TypeDef;
pub use type_def::TypeRef;
pub use union_type::UnionDef;
pub use union_type_builder::UnionTypeBuilder;

#[cfg(test)]
pub(crate) mod tests;
