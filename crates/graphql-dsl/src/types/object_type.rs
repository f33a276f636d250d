use crate::types::FieldDef;
use crate::types::HostType;
use indexmap::IndexMap;

/// Represents an object type declaration, derived from a
/// [`StructuralType`](crate::types::StructuralType) plus any fields added
/// through the DSL.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectDef {
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, FieldDef>,
    pub(crate) host_type: HostType,
    pub(crate) name: String,
}
impl ObjectDef {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, field_name: &str) -> Option<&FieldDef> {
        self.fields.get(field_name)
    }

    /// The fields of this object: source-type fields first (in source order),
    /// then DSL-declared fields (in declaration order).
    pub fn fields(&self) -> &IndexMap<String, FieldDef> {
        &self.fields
    }

    pub fn host_type(&self) -> HostType {
        self.host_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
