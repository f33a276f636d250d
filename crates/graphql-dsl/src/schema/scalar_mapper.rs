use crate::types::CoercionError;
use crate::types::HostType;
use crate::types::ScalarCoercion;
use crate::types::ScalarDef;
use indexmap::IndexMap;
use serde_json::Value;
use std::any::Any;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
struct MappedScalar {
    coercion: Arc<dyn ScalarCoercion>,
    host_type: HostType,
}

/// Wire → host decode rules for custom scalars.
///
/// Rules are keyed by scalar name. A host type that backs exactly one scalar
/// can also be decoded by type alone; once several scalars share a host type
/// (e.g. every scalar declared from a manifest is hosted by
/// [`serde_json::Value`]) the typed lookups fail with
/// [`CoercionError::AmbiguousHostType`] and the named lookups must be used.
#[derive(Clone, Default)]
pub struct ScalarMapper {
    host_scalars: HashMap<TypeId, Vec<String>>,
    scalars: IndexMap<String, MappedScalar>,
}
impl ScalarMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, host_type: HostType) -> bool {
        self.host_scalars.contains_key(&host_type.id())
    }

    pub fn contains_scalar(&self, scalar_name: &str) -> bool {
        self.scalars.contains_key(scalar_name)
    }

    /// Decode a wire value into the host type `T` using the rule of the
    /// single scalar that was registered for `T`.
    pub fn decode<T: Any>(&self, wire_value: Value) -> Result<T, CoercionError> {
        let scalar_name = self.unique_scalar_name(HostType::of::<T>())?;
        self.decode_named(scalar_name, wire_value)
    }

    /// Decode a wire value with the rule of the scalar named `scalar_name`.
    pub fn decode_named<T: Any>(
        &self,
        scalar_name: &str,
        wire_value: Value,
    ) -> Result<T, CoercionError> {
        self.lookup_named(scalar_name)?
            .coercion
            .decode(wire_value)?
            .downcast::<T>()
            .map(|host_value| *host_value)
            .map_err(|_| CoercionError::HostTypeMismatch {
                scalar_name: scalar_name.to_string(),
            })
    }

    /// Encode a host value back into its wire representation.
    pub fn encode<T: Any>(&self, host_value: &T) -> Result<Value, CoercionError> {
        let scalar_name = self.unique_scalar_name(HostType::of::<T>())?;
        self.encode_named(scalar_name, host_value)
    }

    pub fn encode_named<T: Any>(
        &self,
        scalar_name: &str,
        host_value: &T,
    ) -> Result<Value, CoercionError> {
        self.lookup_named(scalar_name)?.coercion.encode(host_value)
    }

    /// Name of the scalar registered for `host_type`. `None` when no scalar
    /// or more than one scalar is backed by it.
    pub fn scalar_name(&self, host_type: HostType) -> Option<&str> {
        match self.scalar_names(host_type) {
            [scalar_name] => Some(scalar_name.as_str()),
            _ => None,
        }
    }

    /// Names of every scalar backed by `host_type`, in registration order.
    pub fn scalar_names(&self, host_type: HostType) -> &[String] {
        self.host_scalars
            .get(&host_type.id())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn install(&mut self, scalar: &ScalarDef) {
        let host_type = scalar.host_type();
        let previous = self.scalars.insert(scalar.name().to_string(), MappedScalar {
            coercion: scalar.coercion().clone(),
            host_type,
        });
        if let Some(previous) = previous {
            tracing::debug!(
                scalar = scalar.name(),
                previous_host_type = previous.host_type.rust_name(),
                "replaced scalar mapping",
            );
            if let Some(names) = self.host_scalars.get_mut(&previous.host_type.id()) {
                names.retain(|name| name != scalar.name());
                if names.is_empty() {
                    self.host_scalars.remove(&previous.host_type.id());
                }
            }
        }

        let names = self.host_scalars.entry(host_type.id()).or_default();
        names.push(scalar.name().to_string());
        if names.len() > 1 {
            tracing::debug!(
                host_type = host_type.rust_name(),
                scalars = ?names,
                "host type backs several scalars; typed lookups need a scalar name",
            );
        }
    }

    fn lookup_named(&self, scalar_name: &str) -> Result<&MappedScalar, CoercionError> {
        self.scalars.get(scalar_name).ok_or_else(|| CoercionError::UnknownScalar {
            scalar_name: scalar_name.to_string(),
        })
    }

    fn unique_scalar_name(&self, host_type: HostType) -> Result<&str, CoercionError> {
        match self.scalar_names(host_type) {
            [] => Err(CoercionError::NoMapping {
                host_type_name: host_type.rust_name().to_string(),
            }),
            [scalar_name] => Ok(scalar_name.as_str()),
            scalar_names => Err(CoercionError::AmbiguousHostType {
                host_type_name: host_type.rust_name().to_string(),
                scalar_names: scalar_names.to_vec(),
            }),
        }
    }
}
impl std::fmt::Debug for ScalarMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.scalars.iter().map(|(scalar_name, mapped)| {
                (scalar_name.as_str(), mapped.host_type.rust_name())
            }))
            .finish()
    }
}
