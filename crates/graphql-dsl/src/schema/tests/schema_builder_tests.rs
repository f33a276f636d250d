use crate::operation::OperationKind;
use crate::schema::DeclarationCategory;
use crate::schema::DeclarationRule;
use crate::schema::NameUniqueness;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaError;
use crate::schema::SchemaSettings;
use crate::types::DescribeType;
use crate::types::GraphQLTypeKind;
use crate::types::HostType;
use crate::types::Parameter;
use crate::types::StructuralType;
use crate::types::TypeAnnotation;
use crate::types::TypeRef;
use crate::types::UnionTypeBuilder;
use crate::types::tests::test_utils::Character;
use crate::types::tests::test_utils::Date;
use crate::types::tests::test_utils::Droid;
use crate::types::tests::test_utils::Episode;
use crate::types::tests::test_utils::Human;
use crate::types::tests::test_utils::ReviewInput;
use serde_json::json;
use std::time::Duration;

type Result<T> = std::result::Result<T, SchemaError>;

fn star_wars_builder() -> std::result::Result<SchemaBuilder, SchemaBuildError> {
    let mut builder = SchemaBuilder::new();
    builder.string_scalar::<Date>(|scalar| {
        scalar
            .deserialize(|raw: String| Date::parse(&raw))
            .serialize(Date::format);
    })?;
    builder.enum_type::<Episode>(|enum_builder| {
        enum_builder.value(Episode::NewHope, |value| {
            value.description("Released in 1977");
        });
    })?;
    builder.object::<Droid>(|_| ())?;
    builder.object::<Human>(|_| ())?;
    builder.union_from::<Character>(|_| ())?;
    builder.input_type::<ReviewInput>(|_| ())?;
    builder
        .query("hero", |op| {
            op.param(Parameter::new("episode", TypeAnnotation::named("Episode")))
                .returns(TypeAnnotation::non_null("Character"))
                .resolver(|_args| async { Ok(json!({"name": "R2-D2"})) });
        })?
        .mutation("createReview", |op| {
            op.param(Parameter::new("review", TypeAnnotation::non_null("ReviewInput")))
                .returns(TypeAnnotation::named("Boolean"))
                .resolver(|_args| async { Ok(json!(true)) });
        })?
        .subscription("reviewAdded", |op| {
            op.returns(TypeAnnotation::named("Date"))
                .resolver(|_args| async { Ok(json!("1977-05-25")) });
        })?;
    Ok(builder)
}

#[test]
fn builds_complete_schema() -> Result<()> {
    let schema = star_wars_builder()?.build()?;

    let definition = schema.definition();
    assert_eq!(
        definition.types().iter().map(|type_def| type_def.name()).collect::<Vec<_>>(),
        vec!["Date", "Episode", "Droid", "Human", "Character", "ReviewInput"],
    );
    assert!(schema.operation(OperationKind::Query, "hero").is_some());
    assert!(schema.operation(OperationKind::Mutation, "createReview").is_some());
    assert_eq!(
        schema.operations(OperationKind::Subscription).keys().collect::<Vec<_>>(),
        vec!["reviewAdded"],
    );

    let character = definition.unions().next().expect("union is declared");
    assert_eq!(character.member_type_names(), vec!["Droid", "Human"]);
    let episode = definition.enums().next().expect("enum is declared");
    assert_eq!(
        episode.value("NEWHOPE").and_then(|value| value.description()),
        Some("Released in 1977"),
    );
    assert_eq!(episode.value("JEDI").and_then(|value| value.description()), None);

    assert_eq!(
        schema.lookup_type("Character").map(|type_| type_.kind()),
        Some(GraphQLTypeKind::Union),
    );
    assert_eq!(
        schema.lookup_type("Long").map(|type_| type_.kind()),
        Some(GraphQLTypeKind::Builtin),
    );

    Ok(())
}

#[test]
fn declared_scalar_drives_schema_coercion() -> Result<()> {
    let schema = star_wars_builder()?.build()?;

    assert_eq!(
        schema.decode_scalar::<Date>(json!("1980-05-21")),
        Ok(Date { year: 1980, month: 5, day: 21 }),
    );
    assert_eq!(
        schema.encode_scalar(&Date { year: 1983, month: 5, day: 25 }),
        Ok(json!("1983-05-25")),
    );
    assert_eq!(
        schema.configuration().scalar_mapper().scalar_name(HostType::of::<Date>()),
        Some("Date"),
    );

    Ok(())
}

#[test]
fn empty_enum_registers_nothing() -> std::result::Result<(), SchemaBuildError> {
    let mut builder = SchemaBuilder::new();

    assert_eq!(
        builder.enum_type_with_values::<Episode>(vec![], |_| ()),
        Err(SchemaBuildError::InvalidDeclaration {
            category: DeclarationCategory::Enum,
            name: "Episode".to_string(),
            rule: DeclarationRule::EmptyEnum,
        }),
    );
    assert!(builder.into_definition()?.types().is_empty());

    Ok(())
}

#[test]
fn enum_over_subset_of_values() -> std::result::Result<(), SchemaBuildError> {
    let mut builder = SchemaBuilder::new();
    builder.enum_type_with_values(vec![Episode::Empire, Episode::Jedi], |enum_builder| {
        enum_builder.name("OriginalSequel");
    })?;
    let definition = builder.into_definition()?;

    let enum_def = definition.enums().next().expect("enum is declared");
    assert_eq!(enum_def.name(), "OriginalSequel");
    assert_eq!(
        enum_def.values().iter().map(|value| value.name()).collect::<Vec<_>>(),
        vec!["EMPIRE", "JEDI"],
    );

    Ok(())
}

#[test]
fn union_from_non_closed_source_registers_nothing() -> std::result::Result<(), SchemaBuildError> {
    let mut builder = SchemaBuilder::new();

    assert_eq!(
        builder.union_from::<Droid>(|_| ()),
        Err(SchemaBuildError::InvalidDeclaration {
            category: DeclarationCategory::Union,
            name: "Droid".to_string(),
            rule: DeclarationRule::NonClosedUnionSource,
        }),
    );
    assert!(builder.into_definition()?.types().is_empty());

    Ok(())
}

#[test]
fn union_from_closed_source_has_one_member_per_variant() -> std::result::Result<(), SchemaBuildError> {
    let vehicle = StructuralType::dynamic("Vehicle")
        .closed(["Starship", "Speeder", "Walker"]);
    let mut builder = SchemaBuilder::new();
    let union_ref = builder.union_from_source(&vehicle, |union_builder| {
        union_builder.description("Anything that moves");
    })?;
    let definition = builder.into_definition()?;

    assert_eq!(union_ref, TypeRef::new("Vehicle"));
    let union_def = definition.unions().next().expect("union is declared");
    assert_eq!(union_def.member_type_names(), vec!["Starship", "Speeder", "Walker"]);
    assert_eq!(union_def.description(), Some("Anything that moves"));

    Ok(())
}

#[test]
fn failed_declaration_leaves_builder_usable() -> Result<()> {
    let mut builder = SchemaBuilder::new();
    builder.object::<Droid>(|_| ())?;

    let err = builder.object::<Droid>(|_| ()).expect_err("Droid is declared twice");
    assert!(matches!(err, SchemaBuildError::DuplicateName { .. }));
    let err = builder.query("hero", |op| {
        op.returns(TypeAnnotation::named("Droid"));
    }).expect_err("resolver is missing");
    assert!(matches!(err, SchemaBuildError::InvalidDeclaration { .. }));

    builder.query("hero", |op| {
        op.returns(TypeAnnotation::named("Droid"))
            .resolver(|_args| async { Ok(json!(null)) });
    })?;
    let schema = builder.build()?;

    assert_eq!(schema.definition().types().len(), 1);
    assert_eq!(schema.definition().queries().len(), 1);

    Ok(())
}

#[test]
fn declare_accepts_any_type_builder() -> Result<()> {
    let mut builder = SchemaBuilder::new();
    builder.object::<Droid>(|_| ())?;
    builder.object::<Human>(|_| ())?;
    let mut union_builder = UnionTypeBuilder::new("SearchResult");
    union_builder.possible_type("Droid").possible_type("Human");
    let union_ref = builder.declare(union_builder)?;
    builder.query("search", |op| {
        op.returns(TypeAnnotation::list_of(TypeAnnotation::named(union_ref.name())))
            .resolver(|_args| async { Ok(json!([])) });
    })?;
    let schema = builder.build()?;

    assert_eq!(
        schema.lookup_type("SearchResult").map(|type_| type_.kind()),
        Some(GraphQLTypeKind::Union),
    );

    Ok(())
}

#[test]
fn configure_applies_settings() -> Result<()> {
    let mut builder = SchemaBuilder::new();
    builder.configure(|config| {
        config
            .execution_timeout(Duration::from_millis(250))
            .name_uniqueness(NameUniqueness::Global);
    })?;
    builder.object::<Droid>(|_| ())?;

    let err = builder.union_type("Droid", |union_builder| {
        union_builder.possible_type("Droid");
    }).expect_err("names are globally unique");
    assert!(matches!(
        err,
        SchemaBuildError::DuplicateName {
            conflicting_category: DeclarationCategory::Object,
            ..
        }
    ));

    builder.query("droid", |op| {
        op.returns(TypeAnnotation::named("Droid"))
            .resolver(|_args| async { Ok(json!(null)) });
    })?;
    let schema = builder.build()?;
    assert_eq!(schema.configuration().execution_timeout(), Some(Duration::from_millis(250)));
    assert_eq!(schema.configuration().name_uniqueness(), NameUniqueness::Global);

    Ok(())
}

#[test]
fn rejected_configuration_is_reverted() -> Result<()> {
    let mut builder = SchemaBuilder::from_settings(SchemaSettings {
        execution_timeout_ms: Some(500),
        name_uniqueness: NameUniqueness::PerCategory,
    });
    builder.object::<Droid>(|_| ())?;
    builder.union_type("Droid", |union_builder| {
        union_builder.possible_type("Human");
    })?;

    let err = builder.configure(|config| {
        config
            .execution_timeout(Duration::from_secs(5))
            .name_uniqueness(NameUniqueness::Global);
    }).expect_err("Droid already names two types");
    assert!(matches!(err, SchemaBuildError::DuplicateName { .. }));

    builder.query("droid", |op| {
        op.returns(TypeAnnotation::named("Droid"))
            .resolver(|_args| async { Ok(json!(null)) });
    })?;
    let err = builder.build().expect_err("Droid names two types");
    assert!(matches!(err, SchemaError::TypeValidationErrors { .. }));

    Ok(())
}

#[test]
fn build_fails_after_nothing_but_types() {
    let mut builder = SchemaBuilder::new();
    builder.object::<Droid>(|_| ()).expect("Droid is valid");

    assert_eq!(builder.build().map(|_| ()), Err(SchemaError::NoQueryDefined));
}
