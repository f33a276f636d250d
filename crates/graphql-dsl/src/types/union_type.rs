use crate::types::TypeRef;
use indexmap::IndexMap;

/// Represents a union type declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionDef {
    pub(crate) description: Option<String>,
    pub(crate) members: IndexMap<String, TypeRef>,
    pub(crate) name: String,
}
impl UnionDef {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// An ordered list of the names of each type declared as a member of this
    /// union.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// References to the member types, in declaration order.
    pub fn members(&self) -> impl Iterator<Item = &TypeRef> {
        self.members.values()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
