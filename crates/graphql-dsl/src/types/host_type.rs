use std::any::Any;
use std::any::TypeId;

/// Identifies the Rust type that backs a declared GraphQL type (the "host"
/// representation).
///
/// Equality and hashing only consider the underlying [`TypeId`]; the stored
/// name is kept for diagnostics and for deriving default GraphQL type names.
#[derive(Clone, Copy, Debug)]
pub struct HostType {
    id: TypeId,
    name: &'static str,
}
impl HostType {
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The fully-qualified Rust name of this type (as reported by
    /// [`std::any::type_name`]).
    pub fn rust_name(&self) -> &'static str {
        self.name
    }

    /// The last path segment of [`HostType::rust_name()`] with any generic
    /// arguments stripped, e.g. `Droid` for `my_app::model::Droid`.
    pub fn short_name(&self) -> &'static str {
        let without_generics = match self.name.find('<') {
            Some(idx) => &self.name[..idx],
            None => self.name,
        };
        without_generics
            .rsplit("::")
            .next()
            .unwrap_or(without_generics)
    }
}
impl PartialEq for HostType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for HostType {}
impl std::hash::Hash for HostType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
