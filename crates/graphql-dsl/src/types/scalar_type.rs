use crate::types::CoercionError;
use crate::types::HostType;
use crate::types::ScalarCoercion;
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;

/// The wire (serialized) representation of a custom scalar.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WireKind {
    Boolean,
    Float,
    Int,
    Long,
    String,
}
impl WireKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Int => "int",
            Self::Long => "long",
            Self::String => "string",
        }
    }
}
impl std::fmt::Display for WireKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a custom scalar declaration: a host type, the wire
/// representation it travels as, and the coercions between the two.
#[derive(Clone)]
pub struct ScalarDef {
    pub(crate) coercion: Arc<dyn ScalarCoercion>,
    pub(crate) description: Option<String>,
    pub(crate) host_type: HostType,
    pub(crate) name: String,
    pub(crate) wire_kind: WireKind,
}
impl ScalarDef {
    pub fn coercion(&self) -> &Arc<dyn ScalarCoercion> {
        &self.coercion
    }

    /// Coerce a wire value into this scalar's host type.
    pub fn decode(&self, wire_value: Value) -> Result<Box<dyn Any + Send>, CoercionError> {
        self.coercion.decode(wire_value)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Coerce a host value back into its wire representation. Fails when the
    /// scalar was declared without a serializer.
    pub fn encode(&self, host_value: &dyn Any) -> Result<Value, CoercionError> {
        self.coercion.encode(host_value)
    }

    pub fn host_type(&self) -> HostType {
        self.host_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn wire_kind(&self) -> WireKind {
        self.wire_kind
    }
}
impl std::fmt::Debug for ScalarDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarDef")
            .field("description", &self.description)
            .field("host_type", &self.host_type)
            .field("name", &self.name)
            .field("wire_kind", &self.wire_kind)
            .finish_non_exhaustive()
    }
}
impl PartialEq for ScalarDef {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
            && self.host_type == other.host_type
            && self.name == other.name
            && self.wire_kind == other.wire_kind
            && self.coercion.supports_encoding() == other.coercion.supports_encoding()
    }
}
