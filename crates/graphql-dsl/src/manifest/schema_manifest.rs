use crate::manifest::ManifestError;
use crate::operation::OperationBuilder;
use crate::operation::Resolver;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaSettings;
use crate::types::DeprecationState;
use crate::types::Parameter;
use crate::types::ScalarTypeBuilder;
use crate::types::StructuralType;
use crate::types::TypeAnnotation;
use crate::types::WireKind;
use crate::types::WireScalar;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

type Result<T> = std::result::Result<T, ManifestError>;

/// A schema declaration written as JSON.
///
/// Replaying a manifest through [`SchemaManifest::into_builder()`] produces
/// the same declarations the DSL would. Operations declared this way have no
/// resolver bound and fail when invoked; custom scalars decode their wire
/// value into a plain [`serde_json::Value`]. Every manifest scalar shares that
/// host type, so they are decoded by name through
/// [`Schema::decode_named_scalar()`](crate::schema::Schema::decode_named_scalar).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SchemaManifest {
    pub enums: Vec<EnumManifest>,
    pub inputs: Vec<InputManifest>,
    pub mutations: Vec<OperationManifest>,
    pub objects: Vec<ObjectManifest>,
    pub queries: Vec<OperationManifest>,
    pub scalars: Vec<ScalarManifest>,
    pub settings: SchemaSettings,
    pub subscriptions: Vec<OperationManifest>,
    pub unions: Vec<UnionManifest>,
}
impl SchemaManifest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| ManifestError::Parse {
            path: None,
            source,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(json.as_str()).map_err(|source| ManifestError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Replay every declaration of this manifest through a new
    /// [`SchemaBuilder`] seeded with the manifest's settings.
    ///
    /// Declarations are replayed scalars first, then enums, inputs, objects,
    /// unions, and finally queries, mutations and subscriptions.
    pub fn into_builder(self) -> Result<SchemaBuilder> {
        let mut builder = SchemaBuilder::from_settings(self.settings);

        for scalar in self.scalars {
            declare_scalar(&mut builder, scalar)?;
        }

        for enum_manifest in self.enums {
            let values: Vec<String> = enum_manifest.values.iter()
                .map(|value| value.name.to_string())
                .collect();
            builder.enum_type_with_values(values, |enum_builder| {
                enum_builder.name(enum_manifest.name);
                if let Some(description) = enum_manifest.description {
                    enum_builder.description(description);
                }
                for value in enum_manifest.values {
                    if value.description.is_none() && value.deprecated.is_none() {
                        continue;
                    }
                    enum_builder.value(value.name, |value_builder| {
                        if let Some(description) = value.description {
                            value_builder.description(description);
                        }
                        if let DeprecationState::Deprecated(reason) = DeprecationState::from(value.deprecated) {
                            value_builder.deprecate(reason);
                        }
                    });
                }
            })?;
        }

        for input in self.inputs {
            let mut source = StructuralType::dynamic(input.name);
            for field in &input.fields {
                source = source.field(field.name.as_str(), field.type_annotation.to_owned());
            }
            builder.input_from(source, |input_builder| {
                if let Some(description) = input.description {
                    input_builder.description(description);
                }
                for field in input.fields {
                    input_builder.property(field.name, |prop| {
                        if let Some(default_value) = field.default_value {
                            prop.default_value(default_value);
                        }
                        if let Some(description) = field.description {
                            prop.description(description);
                        }
                    });
                }
            })?;
        }

        for object in self.objects {
            let mut source = StructuralType::dynamic(object.name);
            for field in &object.fields {
                source = source.field(field.name.as_str(), field.type_annotation.to_owned());
            }
            builder.object_from(source, |object_builder| {
                if let Some(description) = object.description {
                    object_builder.description(description);
                }
                for field in object.fields {
                    object_builder.property(field.name, |prop| {
                        if let Some(description) = field.description {
                            prop.description(description);
                        }
                        if let DeprecationState::Deprecated(reason) = DeprecationState::from(field.deprecated) {
                            prop.deprecate(reason);
                        }
                    });
                }
            })?;
        }

        for union in self.unions {
            builder.union_type(union.name, |union_builder| {
                if let Some(description) = union.description {
                    union_builder.description(description);
                }
                for member in union.members {
                    union_builder.possible_type(member);
                }
            })?;
        }

        for query in self.queries {
            builder.query(query.name.to_string(), |op| configure_operation(op, query))?;
        }
        for mutation in self.mutations {
            builder.mutation(mutation.name.to_string(), |op| configure_operation(op, mutation))?;
        }
        for subscription in self.subscriptions {
            builder.subscription(
                subscription.name.to_string(),
                |op| configure_operation(op, subscription),
            )?;
        }

        Ok(builder)
    }
}

/// `"deprecated": true` uses the default reason; a string gives the reason.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DeprecationManifest {
    Flag(bool),
    Reason(String),
}
impl std::convert::From<Option<DeprecationManifest>> for DeprecationState {
    fn from(value: Option<DeprecationManifest>) -> Self {
        match value {
            Some(DeprecationManifest::Flag(true)) => DeprecationState::deprecated(None::<String>),
            Some(DeprecationManifest::Reason(reason)) => DeprecationState::Deprecated(reason),
            Some(DeprecationManifest::Flag(false)) | None => DeprecationState::NotDeprecated,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct EnumManifest {
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
    pub values: Vec<EnumValueManifest>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct EnumValueManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<DeprecationManifest>,
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct FieldManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<DeprecationManifest>,
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_annotation: TypeAnnotation,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct InputFieldManifest {
    #[serde(default, rename = "default")]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_annotation: TypeAnnotation,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct InputManifest {
    #[serde(default)]
    pub description: Option<String>,
    pub fields: Vec<InputFieldManifest>,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ObjectManifest {
    #[serde(default)]
    pub description: Option<String>,
    pub fields: Vec<FieldManifest>,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct OperationManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<DeprecationManifest>,
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
    #[serde(default)]
    pub params: Vec<InputFieldManifest>,
    pub returns: TypeAnnotation,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ScalarManifest {
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
    pub wire: WireKind,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UnionManifest {
    #[serde(default)]
    pub description: Option<String>,
    pub members: Vec<String>,
    pub name: String,
}

fn configure_operation(op: &mut OperationBuilder, manifest: OperationManifest) {
    op.resolver_handle(Resolver::unbound(manifest.name.as_str()))
        .returns(manifest.returns);
    if let Some(description) = manifest.description {
        op.description(description);
    }
    if let DeprecationState::Deprecated(reason) = DeprecationState::from(manifest.deprecated) {
        op.deprecate(reason);
    }
    for param in manifest.params {
        let mut parameter = Parameter::new(param.name, param.type_annotation);
        if let Some(default_value) = param.default_value {
            parameter = parameter.with_default(default_value);
        }
        if let Some(description) = param.description {
            parameter = parameter.with_description(description);
        }
        op.param(parameter);
    }
}

fn declare_scalar(builder: &mut SchemaBuilder, scalar: ScalarManifest) -> Result<()> {
    match scalar.wire {
        WireKind::Boolean => declare_json_scalar::<bool>(builder, scalar),
        WireKind::Float => declare_json_scalar::<f64>(builder, scalar),
        WireKind::Int => declare_json_scalar::<i32>(builder, scalar),
        WireKind::Long => declare_json_scalar::<i64>(builder, scalar),
        WireKind::String => declare_json_scalar::<String>(builder, scalar),
    }
}

fn declare_json_scalar<Raw>(builder: &mut SchemaBuilder, scalar: ScalarManifest) -> Result<()>
where
    Raw: WireScalar,
    Value: From<Raw>,
{
    builder.scalar::<Value, Raw>(|scalar_builder: &mut ScalarTypeBuilder<Value, Raw>| {
        scalar_builder
            .name(scalar.name)
            .deserialize(|raw: Raw| Ok::<_, std::convert::Infallible>(Value::from(raw)));
        if let Some(description) = scalar.description {
            scalar_builder.description(description);
        }
    })?;
    Ok(())
}
