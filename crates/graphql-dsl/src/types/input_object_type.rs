use crate::types::HostType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use serde_json::Value;

/// Represents an input object type declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct InputDef {
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, InputFieldDef>,
    pub(crate) host_type: HostType,
    pub(crate) name: String,
}
impl InputDef {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, field_name: &str) -> Option<&InputFieldDef> {
        self.fields.get(field_name)
    }

    pub fn fields(&self) -> &IndexMap<String, InputFieldDef> {
        &self.fields
    }

    pub fn host_type(&self) -> HostType {
        self.host_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// A field declared on an [`InputDef`].
#[derive(Clone, Debug, PartialEq)]
pub struct InputFieldDef {
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputFieldDef {
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
