use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaConfiguration;
use crate::schema::SchemaDefinition;
use crate::schema::SchemaError;
use crate::schema::TypeValidationError;
use crate::schema::field_type_validator::FieldTypeValidator;
use crate::schema::union_type_validator::UnionTypeValidator;
use crate::types::BuiltinScalar;
use crate::types::GraphQLType;
use crate::types::TypeDef;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaError>;

/// Turns a finalized [`SchemaDefinition`] plus its resolved configuration into
/// an executable [`Schema`].
pub trait SchemaCompiler {
    fn compile(
        &self,
        definition: SchemaDefinition,
        configuration: SchemaConfiguration,
    ) -> Result<Schema>;
}

/// The compiler used by [`SchemaBuilder::build()`](crate::schema::SchemaBuilder::build).
///
/// Performs the checks that need every declaration at once: a query must
/// exist, type names must not collide across categories or shadow built-in
/// scalars, every referenced type must exist, union members must be objects,
/// and input/output positions must reference compatible types. All problems
/// are reported together.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSchemaCompiler;
impl SchemaCompiler for DefaultSchemaCompiler {
    fn compile(
        &self,
        definition: SchemaDefinition,
        configuration: SchemaConfiguration,
    ) -> Result<Schema> {
        if definition.queries().is_empty() {
            return Err(SchemaError::NoQueryDefined);
        }

        let mut errors = vec![];
        let types = build_types_map(&definition, &mut errors);

        let mut field_validator = FieldTypeValidator::new(&types);
        for kind in [OperationKind::Query, OperationKind::Mutation, OperationKind::Subscription] {
            for operation in definition.operations(kind).values() {
                field_validator.validate_output_field(kind.root_type_name(), operation.field());
            }
        }
        for type_def in definition.types() {
            match type_def {
                TypeDef::Enum(_) | TypeDef::Scalar(_) => (),

                TypeDef::Input(input_def) =>
                    field_validator.validate_input_fields(input_def),

                TypeDef::Object(object_def) => {
                    for field in object_def.fields().values() {
                        field_validator.validate_output_field(object_def.name(), field);
                    }
                },

                TypeDef::Union(union_def) => errors.append(
                    &mut UnionTypeValidator::new(union_def, &types).validate()
                ),
            }
        }
        errors.append(&mut field_validator.into_errors());

        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "schema compilation failed");
            return Err(SchemaError::TypeValidationErrors { errors });
        }

        tracing::debug!(types = types.len(), "compiled schema");
        Ok(Schema {
            configuration,
            definition,
            types,
        })
    }
}

/// Name → type map holding the built-in scalars followed by every declared
/// type. Collisions are recorded in `errors`; the first declaration of a
/// name is kept.
fn build_types_map(
    definition: &SchemaDefinition,
    errors: &mut Vec<TypeValidationError>,
) -> IndexMap<String, GraphQLType> {
    let mut types: IndexMap<String, GraphQLType> = BuiltinScalar::ALL.into_iter()
        .map(|builtin| (builtin.name().to_string(), GraphQLType::Builtin(builtin)))
        .collect();

    let mut collisions: IndexMap<&str, Vec<_>> = IndexMap::new();
    for type_def in definition.types() {
        let type_name = type_def.name();
        if BuiltinScalar::from_name(type_name).is_some() {
            errors.push(TypeValidationError::ShadowsBuiltinScalar {
                category: type_def.category(),
                type_name: type_name.to_string(),
            });
            continue;
        }

        match types.get(type_name) {
            Some(GraphQLType::Declared(existing)) => collisions
                .entry(type_name)
                .or_insert_with(|| vec![existing.category()])
                .push(type_def.category()),
            _ => {
                types.insert(type_name.to_string(), GraphQLType::Declared(type_def.to_owned()));
            },
        }
    }

    for (type_name, categories) in collisions {
        errors.push(TypeValidationError::DuplicateTypeName {
            categories,
            type_name: type_name.to_string(),
        });
    }

    types
}
