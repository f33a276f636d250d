use crate::types::HostType;
use crate::types::TypeAnnotation;
use std::any::Any;

/// An explicit description of a host type's shape: its name, its fields, and
/// (for closed polymorphic types) the full list of its direct variants.
///
/// Object, input object and union declarations are derived from a
/// [`StructuralType`] instead of from runtime reflection. Host types usually
/// provide one by implementing [`DescribeType`].
#[derive(Clone, Debug, PartialEq)]
pub struct StructuralType {
    fields: Vec<StructuralField>,
    host_type: HostType,
    name: String,
    variants: Option<Vec<String>>,
}
impl StructuralType {
    /// Describe the host type `T`, named after its short Rust name.
    pub fn of<T: Any>() -> Self {
        let host_type = HostType::of::<T>();
        Self::named::<T>(host_type.short_name())
    }

    /// Describe the host type `T` under an explicit GraphQL name.
    pub fn named<T: Any>(name: impl Into<String>) -> Self {
        Self {
            fields: vec![],
            host_type: HostType::of::<T>(),
            name: name.into(),
            variants: None,
        }
    }

    /// Describe a type that has no dedicated Rust type and is represented as
    /// plain JSON at runtime.
    pub fn dynamic(name: impl Into<String>) -> Self {
        Self::named::<serde_json::Value>(name)
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        type_annotation: TypeAnnotation,
    ) -> Self {
        self.fields.push(StructuralField {
            description: None,
            name: name.into(),
            type_annotation,
        });
        self
    }

    pub fn described_field(
        mut self,
        name: impl Into<String>,
        type_annotation: TypeAnnotation,
        description: impl Into<String>,
    ) -> Self {
        self.fields.push(StructuralField {
            description: Some(description.into()),
            name: name.into(),
            type_annotation,
        });
        self
    }

    /// Mark this type as closed over the given variant type names.
    pub fn closed<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = Some(variants.into_iter().map(Into::into).collect());
        self
    }

    pub fn fields(&self) -> &[StructuralField] {
        self.fields.as_slice()
    }

    pub fn host_type(&self) -> HostType {
        self.host_type
    }

    pub fn is_closed(&self) -> bool {
        self.variants.is_some()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The direct variants of a closed type, or `None` if the type is open.
    pub fn variants(&self) -> Option<&[String]> {
        self.variants.as_deref()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StructuralField {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl StructuralField {
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

/// Implemented by host types that can describe their own structure.
pub trait DescribeType: Any {
    fn describe() -> StructuralType;
}
