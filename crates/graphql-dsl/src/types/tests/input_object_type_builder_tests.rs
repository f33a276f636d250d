use crate::schema::DeclarationCategory;
use crate::schema::DeclarationRule;
use crate::schema::SchemaBuildError;
use crate::types::DescribeType;
use crate::types::HostType;
use crate::types::InputObjectTypeBuilder;
use crate::types::TypeAnnotation;
use crate::types::tests::test_utils::ReviewInput;
use serde_json::json;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn fields_carry_defaults_and_descriptions() -> Result<()> {
    let mut builder = InputObjectTypeBuilder::new(ReviewInput::describe());
    builder
        .description("The input object sent when someone is creating a new review")
        .property("stars", |prop| {
            prop.description("0-5 stars").default_value(json!(3));
        });
    let input_def = builder.build()?;

    assert_eq!(input_def.name(), "ReviewInput");
    assert_eq!(input_def.host_type(), HostType::of::<ReviewInput>());
    assert_eq!(input_def.fields().keys().collect::<Vec<_>>(), vec!["stars", "commentary"]);

    let stars = input_def.field("stars").expect("field exists");
    assert_eq!(stars.type_annotation(), &TypeAnnotation::non_null("Int"));
    assert_eq!(stars.default_value(), Some(&json!(3)));
    assert_eq!(stars.description(), Some("0-5 stars"));

    let commentary = input_def.field("commentary").expect("field exists");
    assert_eq!(commentary.default_value(), None);

    Ok(())
}

#[test]
fn ignored_fields_are_left_out() -> Result<()> {
    let mut builder = InputObjectTypeBuilder::new(ReviewInput::describe());
    builder.name("StarsOnly").ignore("commentary");
    let input_def = builder.build()?;

    assert_eq!(input_def.name(), "StarsOnly");
    assert_eq!(input_def.fields().keys().collect::<Vec<_>>(), vec!["stars"]);

    Ok(())
}

#[test]
fn unknown_property_is_rejected() {
    let mut builder = InputObjectTypeBuilder::new(ReviewInput::describe());
    builder.property("rating", |prop| {
        prop.default_value(json!(1));
    });

    assert_eq!(
        builder.build(),
        Err(SchemaBuildError::InvalidDeclaration {
            category: DeclarationCategory::InputObject,
            name: "ReviewInput".to_string(),
            rule: DeclarationRule::UnknownField {
                field_name: "rating".to_string(),
            },
        }),
    );
}

#[test]
fn input_without_fields_is_rejected() {
    let mut builder = InputObjectTypeBuilder::new(ReviewInput::describe());
    builder.ignore("stars").ignore("commentary");

    assert_eq!(
        builder.build(),
        Err(SchemaBuildError::InvalidDeclaration {
            category: DeclarationCategory::InputObject,
            name: "ReviewInput".to_string(),
            rule: DeclarationRule::NoFields,
        }),
    );
}
