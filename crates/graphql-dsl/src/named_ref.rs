use std::marker::PhantomData;

/// Represents a strongly-typed, `String`-named reference to a "resource"
/// (`TResource`) stored within some other data-store (`TSource`) without
/// holding an explicit reference to the data-store. De-referencing a
/// [`NamedRef`] is done via [`NamedRef::deref()`] by providing an explicit
/// reference to the `TSource`.
///
/// As a more concrete example, [`TypeRef`](crate::types::TypeRef) is a
/// `NamedRef<SchemaDefinition, TypeDef>`. Declaring a type hands back a
/// [`TypeRef`](crate::types::TypeRef) that other declarations can hold on to
/// without borrowing the (still growing) registry the type lives in.
pub struct NamedRef<TSource, TResource: DerefByName<Source = TSource>> {
    name: String,
    phantom: PhantomData<fn() -> (TSource, TResource)>,
}
impl<TSource, TResource: DerefByName<Source = TSource>> NamedRef<TSource, TResource> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl AsRef<str>) -> NamedRef<TSource, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
        }
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}
impl<TSource, TResource: DerefByName<Source = TSource>> Clone for NamedRef<TSource, TResource> {
    fn clone(&self) -> Self {
        Self::new(self.name.as_str())
    }
}
impl<TSource, TResource: DerefByName<Source = TSource>> core::fmt::Debug for NamedRef<TSource, TResource> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("NamedRef")
            .field(&self.name)
            .finish()
    }
}
impl<TSource, TResource: DerefByName<Source = TSource>> PartialEq for NamedRef<TSource, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl<TSource, TResource: DerefByName<Source = TSource>> Eq for NamedRef<TSource, TResource> {}

/// Implement this trait for any type that could be referenced by name. This
/// will enable usage of [`NamedRef`] for that type.
pub trait DerefByName: Sized {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError>;

    fn named_ref(name: &str) -> NamedRef<Self::Source, Self> {
        NamedRef::<Self::Source, Self>::new(name)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No declaration named `{0}` exists")]
    DanglingReference(String),
}
