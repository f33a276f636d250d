use crate::types::DeprecationState;
use serde_json::Value;

/// Adjusts a field that comes from the source
/// [`StructuralType`](crate::types::StructuralType) of an object or input
/// object declaration.
#[derive(Clone, Debug, Default)]
pub struct PropertyBuilder {
    pub(crate) default_value: Option<Value>,
    pub(crate) deprecation: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) ignored: bool,
}
impl PropertyBuilder {
    /// Only meaningful on input object fields.
    pub fn default_value(&mut self, default_value: Value) -> &mut Self {
        self.default_value = Some(default_value);
        self
    }

    /// Only meaningful on object fields.
    pub fn deprecate(&mut self, reason: impl Into<String>) -> &mut Self {
        self.deprecation = DeprecationState::Deprecated(reason.into());
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Leave this field out of the declared type.
    pub fn ignore(&mut self) -> &mut Self {
        self.ignored = true;
        self
    }
}
