use crate::operation::OperationDef;
use crate::operation::OperationKind;
use crate::types::EnumDef;
use crate::types::InputDef;
use crate::types::ObjectDef;
use crate::types::ScalarDef;
use crate::types::TypeDef;
use crate::types::UnionDef;
use indexmap::IndexMap;

/// The immutable snapshot of a finalized
/// [`DeclarationRegistry`](crate::schema::DeclarationRegistry).
///
/// Every sequence keeps the order its declarations were added in. Resolvers
/// and scalar coercions are opaque, so two definitions compare equal when
/// their declared shapes match.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaDefinition {
    pub(crate) mutations: IndexMap<String, OperationDef>,
    pub(crate) queries: IndexMap<String, OperationDef>,
    pub(crate) subscriptions: IndexMap<String, OperationDef>,
    pub(crate) types: Vec<TypeDef>,
}
impl SchemaDefinition {
    pub fn enums(&self) -> impl Iterator<Item = &EnumDef> {
        self.types.iter().filter_map(TypeDef::as_enum)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &InputDef> {
        self.types.iter().filter_map(TypeDef::as_input)
    }

    pub fn mutation(&self, name: &str) -> Option<&OperationDef> {
        self.mutations.get(name)
    }

    pub fn mutations(&self) -> &IndexMap<String, OperationDef> {
        &self.mutations
    }

    pub fn objects(&self) -> impl Iterator<Item = &ObjectDef> {
        self.types.iter().filter_map(TypeDef::as_object)
    }

    pub fn operation(&self, kind: OperationKind, name: &str) -> Option<&OperationDef> {
        self.operations(kind).get(name)
    }

    pub fn operations(&self, kind: OperationKind) -> &IndexMap<String, OperationDef> {
        match kind {
            OperationKind::Mutation => &self.mutations,
            OperationKind::Query => &self.queries,
            OperationKind::Subscription => &self.subscriptions,
        }
    }

    pub fn queries(&self) -> &IndexMap<String, OperationDef> {
        &self.queries
    }

    pub fn query(&self, name: &str) -> Option<&OperationDef> {
        self.queries.get(name)
    }

    pub fn scalars(&self) -> impl Iterator<Item = &ScalarDef> {
        self.types.iter().filter_map(TypeDef::as_scalar)
    }

    pub fn subscription(&self, name: &str) -> Option<&OperationDef> {
        self.subscriptions.get(name)
    }

    pub fn subscriptions(&self) -> &IndexMap<String, OperationDef> {
        &self.subscriptions
    }

    /// Look up a declared type by name. When several categories declare the
    /// same name, the earliest declaration wins.
    pub fn type_def(&self, name: &str) -> Option<&TypeDef> {
        self.types.iter().find(|type_def| type_def.name() == name)
    }

    /// Every declared type, in declaration order across all categories.
    pub fn types(&self) -> &[TypeDef] {
        self.types.as_slice()
    }

    pub fn unions(&self) -> impl Iterator<Item = &UnionDef> {
        self.types.iter().filter_map(TypeDef::as_union)
    }
}
