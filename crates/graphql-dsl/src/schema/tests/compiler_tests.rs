use crate::operation::OperationKind;
use crate::schema::DeclarationCategory;
use crate::schema::DefaultSchemaCompiler;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaCompiler;
use crate::schema::SchemaConfiguration;
use crate::schema::SchemaDefinition;
use crate::schema::SchemaError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLTypeKind;
use crate::types::Parameter;
use crate::types::StructuralType;
use crate::types::TypeAnnotation;
use crate::types::tests::test_utils::Droid;
use crate::types::tests::test_utils::Episode;
use crate::types::tests::test_utils::ReviewInput;
use serde_json::json;
use std::cell::Cell;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn with_hero_query(builder: &mut SchemaBuilder, returns: &str) -> Result<()> {
    builder.query("hero", |op| {
        op.returns(TypeAnnotation::named(returns))
            .resolver(|_args| async { Ok(json!(null)) });
    })?;
    Ok(())
}

fn validation_errors(builder: SchemaBuilder) -> Vec<TypeValidationError> {
    match builder.build() {
        Err(SchemaError::TypeValidationErrors { errors }) => errors,
        other => panic!("expected type validation errors, got {other:?}"),
    }
}

#[test]
fn schema_without_query_is_rejected() -> Result<()> {
    let mut builder = SchemaBuilder::new();
    builder.mutation("createReview", |op| {
        op.returns(TypeAnnotation::named("Boolean"))
            .resolver(|_args| async { Ok(json!(true)) });
    })?;

    assert_eq!(builder.build().map(|_| ()), Err(SchemaError::NoQueryDefined));

    Ok(())
}

#[test]
fn undefined_type_references_are_reported_together() -> Result<()> {
    let mut builder = SchemaBuilder::new();
    builder.object_from(
        StructuralType::dynamic("Starship").field("pilot", TypeAnnotation::named("Pilot")),
        |_| (),
    )?;
    builder.query("starship", |op| {
        op.param(Parameter::new("registry", TypeAnnotation::non_null("Registry")))
            .returns(TypeAnnotation::list_of(TypeAnnotation::named("Vessel")))
            .resolver(|_args| async { Ok(json!([])) });
    })?;

    assert_eq!(
        validation_errors(builder),
        vec![
            TypeValidationError::UndefinedTypeName {
                referenced_by: "Query.starship".to_string(),
                undefined_type_name: "Vessel".to_string(),
            },
            TypeValidationError::UndefinedTypeName {
                referenced_by: "Query.starship.registry".to_string(),
                undefined_type_name: "Registry".to_string(),
            },
            TypeValidationError::UndefinedTypeName {
                referenced_by: "Starship.pilot".to_string(),
                undefined_type_name: "Pilot".to_string(),
            },
        ],
    );

    Ok(())
}

#[test]
fn union_members_must_be_declared_objects() -> Result<()> {
    let mut builder = SchemaBuilder::new();
    builder.object::<Droid>(|_| ())?;
    builder.enum_type::<Episode>(|_| ())?;
    builder.union_type("SearchResult", |union_builder| {
        union_builder
            .possible_type("Droid")
            .possible_type("Episode")
            .possible_type("Planet");
    })?;
    with_hero_query(&mut builder, "SearchResult")?;

    assert_eq!(
        validation_errors(builder),
        vec![
            TypeValidationError::InvalidUnionMemberTypeKind {
                member_type_kind: GraphQLTypeKind::Enum,
                member_type_name: "Episode".to_string(),
                union_type_name: "SearchResult".to_string(),
            },
            TypeValidationError::UndefinedTypeName {
                referenced_by: "SearchResult".to_string(),
                undefined_type_name: "Planet".to_string(),
            },
        ],
    );

    Ok(())
}

#[test]
fn union_without_members_is_reported() -> Result<()> {
    let mut builder = SchemaBuilder::new();
    let nothing = StructuralType::dynamic("Nothing").closed(Vec::<String>::new());
    builder.union_from_source(&nothing, |_| ())?;
    with_hero_query(&mut builder, "Nothing")?;

    assert_eq!(
        validation_errors(builder),
        vec![TypeValidationError::EmptyUnion {
            union_type_name: "Nothing".to_string(),
        }],
    );

    Ok(())
}

#[test]
fn input_and_output_positions_are_checked() -> Result<()> {
    let mut builder = SchemaBuilder::new();
    builder.object::<Droid>(|_| ())?;
    builder.input_type::<ReviewInput>(|_| ())?;
    builder.input_from(
        StructuralType::dynamic("ReviewFilter").field("author", TypeAnnotation::named("Droid")),
        |_| (),
    )?;
    builder.query("review", |op| {
        op.param(Parameter::new("author", TypeAnnotation::named("Droid")))
            .returns(TypeAnnotation::named("ReviewInput"))
            .resolver(|_args| async { Ok(json!(null)) });
    })?;

    assert_eq!(
        validation_errors(builder),
        vec![
            TypeValidationError::InvalidOutputFieldWithInputType {
                field_name: "review".to_string(),
                input_type_name: "ReviewInput".to_string(),
                parent_type_name: "Query".to_string(),
            },
            TypeValidationError::InvalidParameterWithOutputOnlyType {
                field_name: "review".to_string(),
                outputonly_type_name: "Droid".to_string(),
                parameter_name: "author".to_string(),
                parent_type_name: "Query".to_string(),
            },
            TypeValidationError::InvalidInputFieldWithOutputType {
                field_name: "author".to_string(),
                invalid_type_kind: GraphQLTypeKind::Object,
                invalid_type_name: "Droid".to_string(),
                parent_type_name: "ReviewFilter".to_string(),
            },
        ],
    );

    Ok(())
}

#[test]
fn enums_and_scalars_are_valid_in_both_positions() -> Result<()> {
    let mut builder = SchemaBuilder::new();
    builder.enum_type::<Episode>(|_| ())?;
    builder.query("favoriteEpisode", |op| {
        op.param(Parameter::new("fallback", TypeAnnotation::named("Episode")))
            .param(Parameter::new("limit", TypeAnnotation::named("Int")))
            .returns(TypeAnnotation::non_null("Episode"))
            .resolver(|_args| async { Ok(json!("JEDI")) });
    })?;

    assert!(builder.build().is_ok());

    Ok(())
}

#[test]
fn declared_type_cannot_shadow_builtin_scalar() -> Result<()> {
    let mut builder = SchemaBuilder::new();
    builder.object_from(
        StructuralType::dynamic("Long").field("high", TypeAnnotation::named("Int")),
        |_| (),
    )?;
    with_hero_query(&mut builder, "Long")?;

    assert_eq!(
        validation_errors(builder),
        vec![TypeValidationError::ShadowsBuiltinScalar {
            category: DeclarationCategory::Object,
            type_name: "Long".to_string(),
        }],
    );

    Ok(())
}

#[test]
fn names_shared_across_categories_are_rejected() -> Result<()> {
    let mut builder = SchemaBuilder::new();
    builder.object::<Droid>(|_| ())?;
    builder.union_type("Droid", |union_builder| {
        union_builder.possible_type("Droid");
    })?;
    with_hero_query(&mut builder, "Droid")?;

    let errors = validation_errors(builder);
    assert_eq!(
        errors,
        vec![TypeValidationError::DuplicateTypeName {
            categories: vec![DeclarationCategory::Object, DeclarationCategory::Union],
            type_name: "Droid".to_string(),
        }],
    );
    assert_eq!(
        errors[0].to_string(),
        "The name `Droid` is declared by more than one kind of type: object, union",
    );

    Ok(())
}

#[test]
fn compiled_schema_knows_builtins_and_declared_types() -> std::result::Result<(), SchemaError> {
    let mut builder = SchemaBuilder::new();
    builder.object::<Droid>(|_| ())?;
    with_hero_query(&mut builder, "Droid")?;
    let schema = builder.build()?;

    assert_eq!(
        schema.all_types().keys().collect::<Vec<_>>(),
        vec!["Boolean", "Float", "ID", "Int", "Long", "String", "Droid"],
    );
    assert_eq!(
        schema.lookup_type("Droid").and_then(|type_| type_.as_declared()).map(|def| def.name()),
        Some("Droid"),
    );

    Ok(())
}

struct CountingCompiler {
    compiled: Cell<usize>,
}
impl SchemaCompiler for CountingCompiler {
    fn compile(
        &self,
        definition: SchemaDefinition,
        configuration: SchemaConfiguration,
    ) -> std::result::Result<Schema, SchemaError> {
        self.compiled.set(self.compiled.get() + 1);
        DefaultSchemaCompiler.compile(definition, configuration)
    }
}

#[test]
fn build_with_uses_given_compiler() -> std::result::Result<(), SchemaError> {
    let compiler = CountingCompiler {
        compiled: Cell::new(0),
    };
    let mut builder = SchemaBuilder::new();
    with_hero_query(&mut builder, "String")?;
    let schema = builder.build_with(&compiler)?;

    assert_eq!(compiler.compiled.get(), 1);
    assert!(schema.operation(OperationKind::Query, "hero").is_some());

    Ok(())
}
