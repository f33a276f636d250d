use crate::schema::DeclarationCategory;
use crate::schema::DeclarationRule;
use crate::schema::SchemaBuildError;
use crate::types::DescribeType;
use crate::types::HostType;
use crate::types::ObjectTypeBuilder;
use crate::types::Parameter;
use crate::types::StructuralType;
use crate::types::TypeAnnotation;
use crate::types::tests::test_utils::Droid;
use serde_json::json;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn invalid_droid(rule: DeclarationRule) -> SchemaBuildError {
    SchemaBuildError::InvalidDeclaration {
        category: DeclarationCategory::Object,
        name: "Droid".to_string(),
        rule,
    }
}

#[test]
fn fields_follow_source_order() -> Result<()> {
    let object_def = ObjectTypeBuilder::new(Droid::describe()).build()?;

    assert_eq!(object_def.name(), "Droid");
    assert_eq!(object_def.host_type(), HostType::of::<Droid>());
    assert_eq!(
        object_def.fields().keys().collect::<Vec<_>>(),
        vec!["id", "name", "primaryFunction"],
    );

    let primary_function = object_def.field("primaryFunction").expect("field exists");
    assert_eq!(primary_function.description(), Some("What this droid was built for"));
    assert_eq!(primary_function.type_annotation(), &TypeAnnotation::named("String"));
    assert!(primary_function.resolver().is_none());

    Ok(())
}

#[test]
fn declared_fields_come_after_source_fields() -> Result<()> {
    let mut builder = ObjectTypeBuilder::new(Droid::describe());
    builder.field("friends", |field| {
        field
            .description("The friends of the droid")
            .param(Parameter::new("first", TypeAnnotation::named("Int")).with_default(json!(10)))
            .returns(TypeAnnotation::parse("[Character]").unwrap())
            .resolver(|_args| async { Ok(json!([])) });
    });
    let object_def = builder.build()?;

    assert_eq!(
        object_def.fields().keys().collect::<Vec<_>>(),
        vec!["id", "name", "primaryFunction", "friends"],
    );
    let friends = object_def.field("friends").expect("field exists");
    assert!(friends.resolver().is_some());
    assert_eq!(
        friends.parameters().get("first").and_then(|param| param.default_value()),
        Some(&json!(10)),
    );

    Ok(())
}

#[test]
fn ignored_fields_are_left_out() -> Result<()> {
    let mut builder = ObjectTypeBuilder::new(Droid::describe());
    builder.ignore("primaryFunction");
    let object_def = builder.build()?;

    assert_eq!(object_def.fields().keys().collect::<Vec<_>>(), vec!["id", "name"]);

    Ok(())
}

#[test]
fn property_overrides_description_and_deprecation() -> Result<()> {
    let mut builder = ObjectTypeBuilder::new(Droid::describe());
    builder
        .name("Robot")
        .description("A mechanical creature")
        .property("primaryFunction", |prop| {
            prop.description("Its job").deprecate("Droids are free now");
        });
    let object_def = builder.build()?;

    assert_eq!(object_def.name(), "Robot");
    assert_eq!(object_def.description(), Some("A mechanical creature"));
    let primary_function = object_def.field("primaryFunction").expect("field exists");
    assert_eq!(primary_function.description(), Some("Its job"));
    assert_eq!(
        primary_function.deprecation_state().reason(),
        Some("Droids are free now"),
    );

    Ok(())
}

#[test]
fn ignoring_unknown_field_is_rejected() {
    let mut builder = ObjectTypeBuilder::new(Droid::describe());
    builder.ignore("homePlanet");

    assert_eq!(
        builder.build(),
        Err(invalid_droid(DeclarationRule::UnknownField {
            field_name: "homePlanet".to_string(),
        })),
    );
}

#[test]
fn declared_field_without_resolver_is_rejected() {
    let mut builder = ObjectTypeBuilder::new(Droid::describe());
    builder.field("friends", |field| {
        field.returns(TypeAnnotation::named("Character"));
    });

    assert_eq!(
        builder.build(),
        Err(invalid_droid(DeclarationRule::MissingResolver {
            field_name: "friends".to_string(),
        })),
    );
}

#[test]
fn declared_field_without_return_type_is_rejected() {
    let mut builder = ObjectTypeBuilder::new(Droid::describe());
    builder.field("friends", |field| {
        field.resolver(|_args| async { Ok(json!([])) });
    });

    assert_eq!(
        builder.build(),
        Err(invalid_droid(DeclarationRule::MissingReturnType {
            field_name: "friends".to_string(),
        })),
    );
}

#[test]
fn declared_field_shadowing_source_field_is_rejected() {
    let mut builder = ObjectTypeBuilder::new(Droid::describe());
    builder.field("name", |field| {
        field
            .returns(TypeAnnotation::named("String"))
            .resolver(|_args| async { Ok(json!("R2-D2")) });
    });

    assert_eq!(
        builder.build(),
        Err(invalid_droid(DeclarationRule::DuplicateField {
            field_name: "name".to_string(),
        })),
    );
}

#[test]
fn duplicate_parameters_are_rejected() {
    let mut builder = ObjectTypeBuilder::new(Droid::describe());
    builder.field("friends", |field| {
        field
            .param(Parameter::new("first", TypeAnnotation::named("Int")))
            .param(Parameter::new("first", TypeAnnotation::named("Int")))
            .returns(TypeAnnotation::named("Character"))
            .resolver(|_args| async { Ok(json!([])) });
    });

    assert_eq!(
        builder.build(),
        Err(invalid_droid(DeclarationRule::DuplicateParameter {
            field_name: "friends".to_string(),
            param_name: "first".to_string(),
        })),
    );
}

#[test]
fn object_without_fields_is_rejected() {
    let mut builder = ObjectTypeBuilder::new(StructuralType::dynamic("Empty").field(
        "only",
        TypeAnnotation::named("String"),
    ));
    builder.ignore("only");

    assert_eq!(
        builder.build(),
        Err(SchemaBuildError::InvalidDeclaration {
            category: DeclarationCategory::Object,
            name: "Empty".to_string(),
            rule: DeclarationRule::NoFields,
        }),
    );
}

#[test]
fn reserved_field_names_are_rejected() {
    let builder = ObjectTypeBuilder::new(
        Droid::describe().field("__secret", TypeAnnotation::named("String")),
    );

    assert_eq!(
        builder.build(),
        Err(invalid_droid(DeclarationRule::DunderPrefixedName {
            name: "__secret".to_string(),
        })),
    );
}
