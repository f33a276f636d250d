use crate::types::WireKind;
use serde_json::Value;
use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;

/// Rust types usable as the wire representation of a custom scalar.
pub trait WireScalar: serde::de::DeserializeOwned + serde::Serialize + Send + Sync + 'static {
    const KIND: WireKind;
}
impl WireScalar for bool {
    const KIND: WireKind = WireKind::Boolean;
}
impl WireScalar for f64 {
    const KIND: WireKind = WireKind::Float;
}
impl WireScalar for i32 {
    const KIND: WireKind = WireKind::Int;
}
impl WireScalar for i64 {
    const KIND: WireKind = WireKind::Long;
}
impl WireScalar for String {
    const KIND: WireKind = WireKind::String;
}

/// The type-erased pair of conversions between a scalar's wire value and its
/// host value.
pub trait ScalarCoercion: Send + Sync {
    fn decode(&self, wire_value: Value) -> Result<Box<dyn Any + Send>, CoercionError>;

    fn encode(&self, host_value: &dyn Any) -> Result<Value, CoercionError>;

    fn supports_encoding(&self) -> bool;
}

pub(crate) type DeserializeFn<T, Raw> = Arc<dyn Fn(Raw) -> Result<T, String> + Send + Sync>;
pub(crate) type SerializeFn<T, Raw> = Arc<dyn Fn(&T) -> Raw + Send + Sync>;

pub(crate) struct TypedCoercion<T, Raw> {
    pub(crate) deserialize: DeserializeFn<T, Raw>,
    pub(crate) phantom: PhantomData<fn() -> T>,
    pub(crate) scalar_name: String,
    pub(crate) serialize: Option<SerializeFn<T, Raw>>,
}
impl<T: Any + Send, Raw: WireScalar> ScalarCoercion for TypedCoercion<T, Raw> {
    fn decode(&self, wire_value: Value) -> Result<Box<dyn Any + Send>, CoercionError> {
        let raw: Raw = serde_json::from_value(wire_value)
            .map_err(|err| CoercionError::UnexpectedWireValue {
                scalar_name: self.scalar_name.to_string(),
                expected: Raw::KIND,
                reason: err.to_string(),
            })?;
        let host_value = (self.deserialize)(raw)
            .map_err(|reason| CoercionError::Rejected {
                scalar_name: self.scalar_name.to_string(),
                reason,
            })?;
        Ok(Box::new(host_value))
    }

    fn encode(&self, host_value: &dyn Any) -> Result<Value, CoercionError> {
        let serialize = self.serialize.as_ref().ok_or_else(|| {
            CoercionError::NotSerializable {
                scalar_name: self.scalar_name.to_string(),
            }
        })?;
        let host_value = host_value.downcast_ref::<T>().ok_or_else(|| {
            CoercionError::HostTypeMismatch {
                scalar_name: self.scalar_name.to_string(),
            }
        })?;
        serde_json::to_value(serialize(host_value))
            .map_err(|err| CoercionError::Rejected {
                scalar_name: self.scalar_name.to_string(),
                reason: err.to_string(),
            })
    }

    fn supports_encoding(&self) -> bool {
        self.serialize.is_some()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoercionError {
    #[error(
        "The host type `{host_type_name}` backs more than one scalar ({}); decode it by scalar name",
        scalar_names.join(", "),
    )]
    AmbiguousHostType {
        host_type_name: String,
        scalar_names: Vec<String>,
    },

    #[error("The host value given to the `{scalar_name}` scalar has an unexpected type")]
    HostTypeMismatch {
        scalar_name: String,
    },

    #[error("No scalar coercion is registered for the host type `{host_type_name}`")]
    NoMapping {
        host_type_name: String,
    },

    #[error("The `{scalar_name}` scalar declares no serialization to its wire representation")]
    NotSerializable {
        scalar_name: String,
    },

    #[error("The `{scalar_name}` scalar rejected its input: {reason}")]
    Rejected {
        scalar_name: String,
        reason: String,
    },

    #[error("No scalar named `{scalar_name}` is declared")]
    UnknownScalar {
        scalar_name: String,
    },

    #[error("The `{scalar_name}` scalar expected a {expected} wire value: {reason}")]
    UnexpectedWireValue {
        scalar_name: String,
        expected: WireKind,
        reason: String,
    },
}
