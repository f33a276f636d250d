use crate::types::DeprecationState;
use crate::types::HostType;

/// Implemented by host values that can appear as GraphQL enum values.
pub trait EnumValue: PartialEq + 'static {
    /// The name this value is exposed under in the schema.
    fn value_name(&self) -> String;
}
impl EnumValue for String {
    fn value_name(&self) -> String {
        self.to_string()
    }
}

/// Implemented by host enums whose full set of values is known statically.
pub trait EnumValues: EnumValue + Sized {
    fn values() -> Vec<Self>;
}

/// Represents an enumeration declaration. Always holds at least one value.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumDef {
    pub(crate) description: Option<String>,
    pub(crate) host_type: HostType,
    pub(crate) name: String,
    pub(crate) values: Vec<EnumValueDef>,
}
impl EnumDef {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn host_type(&self) -> HostType {
        self.host_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self, value_name: &str) -> Option<&EnumValueDef> {
        self.values.iter().find(|value| value.name == value_name)
    }

    /// The values of this enum, in the order the host enumeration lists them.
    pub fn values(&self) -> &[EnumValueDef] {
        self.values.as_slice()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDef {
    pub(crate) deprecation: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl EnumValueDef {
    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
