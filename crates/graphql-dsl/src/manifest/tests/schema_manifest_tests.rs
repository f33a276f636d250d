use crate::execution::AggregationError;
use crate::execution::ExecutionError;
use crate::execution::ExecutionTimeout;
use crate::execution::RootFieldSelection;
use crate::manifest::DeprecationManifest;
use crate::manifest::ManifestError;
use crate::manifest::SchemaManifest;
use crate::operation::OperationKind;
use crate::schema::DeclarationCategory;
use crate::schema::NameUniqueness;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaError;
use crate::types::CoercionError;
use crate::types::TypeAnnotation;
use crate::types::WireKind;
use serde_json::Value;
use serde_json::json;
use std::time::Duration;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const STAR_WARS_MANIFEST: &str = r#"{
    "settings": {
        "executionTimeoutMs": 2000,
        "nameUniqueness": "global"
    },
    "scalars": [
        { "name": "Date", "wire": "string", "description": "A calendar date" }
    ],
    "enums": [
        {
            "name": "Episode",
            "values": [
                { "name": "NEWHOPE", "description": "Released in 1977" },
                { "name": "EMPIRE" },
                { "name": "JEDI", "deprecated": true },
                { "name": "HOLIDAY_SPECIAL", "deprecated": "Never happened" }
            ]
        }
    ],
    "inputs": [
        {
            "name": "ReviewInput",
            "fields": [
                { "name": "stars", "type": "Int!" },
                { "name": "commentary", "type": "String", "default": "" }
            ]
        }
    ],
    "objects": [
        {
            "name": "Droid",
            "description": "A mechanical creature",
            "fields": [
                { "name": "id", "type": "ID!" },
                { "name": "name", "type": "String!" },
                { "name": "serialNumber", "type": "String", "deprecated": true }
            ]
        },
        {
            "name": "Human",
            "fields": [
                { "name": "id", "type": "ID!" },
                { "name": "name", "type": "String!" },
                { "name": "born", "type": "Date" }
            ]
        }
    ],
    "unions": [
        { "name": "Character", "members": ["Droid", "Human"] }
    ],
    "queries": [
        {
            "name": "hero",
            "params": [{ "name": "episode", "type": "Episode", "default": "JEDI" }],
            "returns": "Character"
        },
        { "name": "characters", "returns": "[Character!]!" }
    ],
    "mutations": [
        {
            "name": "createReview",
            "description": "Review a film",
            "params": [
                { "name": "episode", "type": "Episode!" },
                { "name": "review", "type": "ReviewInput!" }
            ],
            "returns": "Boolean"
        }
    ]
}"#;

fn star_wars_schema() -> Result<Schema> {
    Ok(SchemaManifest::from_json_str(STAR_WARS_MANIFEST)?.into_builder()?.build()?)
}

#[test]
fn manifest_parses_every_section() -> Result<()> {
    let manifest = SchemaManifest::from_json_str(STAR_WARS_MANIFEST)?;

    assert_eq!(manifest.settings.execution_timeout_ms, Some(2_000));
    assert_eq!(manifest.settings.name_uniqueness, NameUniqueness::Global);
    assert_eq!(manifest.scalars[0].wire, WireKind::String);
    assert_eq!(
        manifest.enums[0].values[2].deprecated,
        Some(DeprecationManifest::Flag(true)),
    );
    assert_eq!(
        manifest.enums[0].values[3].deprecated,
        Some(DeprecationManifest::Reason("Never happened".to_string())),
    );
    assert_eq!(
        manifest.queries[1].returns,
        TypeAnnotation::parse("[Character!]!")?,
    );
    assert!(manifest.subscriptions.is_empty());

    Ok(())
}

#[test]
fn manifest_builds_declarations_in_order() -> Result<()> {
    let schema = star_wars_schema()?;
    let definition = schema.definition();

    assert_eq!(
        definition.types().iter().map(|type_def| type_def.name()).collect::<Vec<_>>(),
        vec!["Date", "Episode", "ReviewInput", "Droid", "Human", "Character"],
    );
    assert_eq!(
        definition.queries().keys().collect::<Vec<_>>(),
        vec!["hero", "characters"],
    );
    assert_eq!(schema.configuration().execution_timeout(), Some(Duration::from_secs(2)));
    assert_eq!(schema.configuration().name_uniqueness(), NameUniqueness::Global);

    Ok(())
}

#[test]
fn manifest_metadata_is_carried_over() -> Result<()> {
    let schema = star_wars_schema()?;
    let definition = schema.definition();

    let episode = definition.enums().next().ok_or("Episode is declared")?;
    assert_eq!(
        episode.value("NEWHOPE").and_then(|value| value.description()),
        Some("Released in 1977"),
    );
    assert_eq!(
        episode.value("JEDI").and_then(|value| value.deprecation_state().reason()),
        Some("No longer supported"),
    );
    assert_eq!(
        episode.value("HOLIDAY_SPECIAL").and_then(|value| value.deprecation_state().reason()),
        Some("Never happened"),
    );
    assert!(!episode.value("EMPIRE").ok_or("EMPIRE is declared")?.deprecation_state().is_deprecated());

    let droid = definition.objects().next().ok_or("Droid is declared")?;
    assert_eq!(droid.description(), Some("A mechanical creature"));
    assert!(droid.field("serialNumber")
        .ok_or("serialNumber is declared")?
        .deprecation_state()
        .is_deprecated());

    let review_input = definition.inputs().next().ok_or("ReviewInput is declared")?;
    assert_eq!(
        review_input.fields().get("commentary").and_then(|field| field.default_value()),
        Some(&json!("")),
    );

    let create_review = definition.mutation("createReview").ok_or("createReview is declared")?;
    assert_eq!(create_review.description(), Some("Review a film"));
    assert_eq!(
        create_review.parameters().keys().collect::<Vec<_>>(),
        vec!["episode", "review"],
    );

    Ok(())
}

#[test]
fn manifest_scalars_decode_into_json() -> Result<()> {
    let schema = star_wars_schema()?;

    assert_eq!(
        schema.decode_named_scalar::<Value>("Date", json!("1977-05-25")),
        Ok(json!("1977-05-25")),
    );
    assert!(matches!(
        schema.decode_named_scalar::<Value>("Date", json!(1977)),
        Err(CoercionError::UnexpectedWireValue { expected: WireKind::String, .. })
    ));
    assert_eq!(
        schema.encode_named_scalar("Date", &json!("1977-05-25")),
        Err(CoercionError::NotSerializable {
            scalar_name: "Date".to_string(),
        }),
    );
    assert_eq!(
        schema.decode_named_scalar::<Value>("Stardate", json!(41153.7)),
        Err(CoercionError::UnknownScalar {
            scalar_name: "Stardate".to_string(),
        }),
    );

    Ok(())
}

#[test]
fn each_manifest_scalar_keeps_its_own_rule() -> Result<()> {
    let manifest = SchemaManifest::from_json_str(r#"{
        "scalars": [
            { "name": "Date", "wire": "string" },
            { "name": "Counter", "wire": "int" }
        ],
        "queries": [
            { "name": "today", "returns": "Date" }
        ]
    }"#)?;
    let schema = manifest.into_builder()?.build()?;

    assert_eq!(
        schema.decode_named_scalar::<Value>("Date", json!("2024-01-01")),
        Ok(json!("2024-01-01")),
    );
    assert_eq!(
        schema.decode_named_scalar::<Value>("Counter", json!(42)),
        Ok(json!(42)),
    );
    assert!(matches!(
        schema.decode_named_scalar::<Value>("Counter", json!("2024-01-01")),
        Err(CoercionError::UnexpectedWireValue { ref scalar_name, expected: WireKind::Int, .. })
            if scalar_name == "Counter"
    ));
    assert_eq!(
        schema.decode_scalar::<Value>(json!("2024-01-01")),
        Err(CoercionError::AmbiguousHostType {
            host_type_name: std::any::type_name::<Value>().to_string(),
            scalar_names: vec!["Date".to_string(), "Counter".to_string()],
        }),
    );

    Ok(())
}

#[tokio::test]
async fn manifest_operations_have_no_resolver() -> Result<()> {
    let schema = star_wars_schema()?;

    let err = schema.resolve_root_fields(
        OperationKind::Query,
        vec![RootFieldSelection::new("hero")],
        ExecutionTimeout::Configured,
    ).await.expect_err("hero has no resolver");

    match err {
        ExecutionError::Aggregation(AggregationError::Field { field_name, source }) => {
            assert_eq!(field_name, "hero");
            assert_eq!(source.message(), "No resolver is bound to `hero`");
        },
        other => panic!("expected a field failure, got {other:?}"),
    }

    Ok(())
}

#[test]
fn unknown_manifest_keys_are_rejected() {
    let err = SchemaManifest::from_json_str(r#"{"interfaces": []}"#)
        .expect_err("interfaces are not a manifest section");

    assert!(matches!(err, ManifestError::Parse { path: None, .. }));
    assert!(err.to_string().starts_with("Failed to parse manifest: unknown field `interfaces`"));
}

#[test]
fn invalid_declarations_surface_as_build_errors() -> Result<()> {
    let manifest = SchemaManifest::from_json_str(r#"{
        "objects": [
            { "name": "Droid", "fields": [{ "name": "id", "type": "ID!" }] }
        ],
        "unions": [
            { "name": "Droid", "members": ["Droid"] }
        ],
        "settings": { "nameUniqueness": "global" }
    }"#)?;

    let err = manifest.into_builder().expect_err("Droid is declared twice");
    assert!(matches!(
        err,
        ManifestError::Build(SchemaBuildError::DuplicateName {
            category: DeclarationCategory::Union,
            conflicting_category: DeclarationCategory::Object,
            ..
        })
    ));

    Ok(())
}

#[test]
fn empty_manifest_has_no_query() -> Result<()> {
    let builder = SchemaManifest::from_json_str("{}")?.into_builder()?;

    assert_eq!(builder.build().map(|_| ()), Err(SchemaError::NoQueryDefined));

    Ok(())
}

#[test]
fn manifest_is_read_from_disk() -> Result<()> {
    let path = std::env::temp_dir().join(format!(
        "graphql-dsl-manifest-{}.json",
        std::process::id(),
    ));
    std::fs::write(&path, STAR_WARS_MANIFEST)?;
    let manifest = SchemaManifest::from_path(&path);
    std::fs::remove_file(&path)?;

    assert_eq!(manifest?, SchemaManifest::from_json_str(STAR_WARS_MANIFEST)?);

    Ok(())
}

#[test]
fn missing_manifest_file_is_reported() {
    let path = std::env::temp_dir().join("graphql-dsl-manifest-that-does-not-exist.json");

    let err = SchemaManifest::from_path(&path).expect_err("file does not exist");
    assert!(matches!(err, ManifestError::Io { path: ref err_path, .. } if err_path == &path));
}
