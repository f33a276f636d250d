use crate::schema::DeclarationCategory;
use crate::schema::DeclarationRule;
use crate::schema::SchemaBuildError;
use crate::types::HostType;
use crate::types::ScalarDef;
use crate::types::TypeBuilder;
use crate::types::WireScalar;
use crate::types::scalar_coercion::DeserializeFn;
use crate::types::scalar_coercion::SerializeFn;
use crate::types::scalar_coercion::TypedCoercion;
use inherent::inherent;
use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Configures a custom scalar backed by the host type `T` and carried over
/// the wire as `Raw`.
pub struct ScalarTypeBuilder<T, Raw> {
    description: Option<String>,
    deserialize: Option<DeserializeFn<T, Raw>>,
    name: String,
    serialize: Option<SerializeFn<T, Raw>>,
}
impl<T: Any + Send, Raw: WireScalar> ScalarTypeBuilder<T, Raw> {
    /// A builder for a scalar named after the short Rust name of `T`.
    pub fn new() -> Self {
        Self {
            description: None,
            deserialize: None,
            name: HostType::of::<T>().short_name().to_string(),
            serialize: None,
        }
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// The wire → host coercion. Returning `Err` rejects the input value.
    pub fn deserialize<F, E>(&mut self, deserialize_fn: F) -> &mut Self
    where
        F: Fn(Raw) -> std::result::Result<T, E> + Send + Sync + 'static,
        E: std::fmt::Display,
    {
        self.deserialize = Some(Arc::new(move |raw| {
            deserialize_fn(raw).map_err(|err| err.to_string())
        }));
        self
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// The host → wire coercion.
    pub fn serialize<F>(&mut self, serialize_fn: F) -> &mut Self
    where
        F: Fn(&T) -> Raw + Send + Sync + 'static,
    {
        self.serialize = Some(Arc::new(serialize_fn));
        self
    }
}

#[inherent]
impl<T: Any + Send, Raw: WireScalar> TypeBuilder for ScalarTypeBuilder<T, Raw> {
    type Def = ScalarDef;

    pub fn build(self) -> Result<ScalarDef> {
        let deserialize = self.deserialize.ok_or_else(|| SchemaBuildError::invalid(
            DeclarationCategory::Scalar,
            self.name.as_str(),
            DeclarationRule::MissingCoercion,
        ))?;

        Ok(ScalarDef {
            coercion: Arc::new(TypedCoercion::<T, Raw> {
                deserialize,
                phantom: PhantomData,
                scalar_name: self.name.to_string(),
                serialize: self.serialize,
            }),
            description: self.description,
            host_type: HostType::of::<T>(),
            name: self.name,
            wire_kind: Raw::KIND,
        })
    }
}
impl<T: Any + Send, Raw: WireScalar> Default for ScalarTypeBuilder<T, Raw> {
    fn default() -> Self {
        Self::new()
    }
}
