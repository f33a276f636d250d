use crate::schema::SchemaBuildError;
use crate::types::TypeDef;

/// Implemented by the builders of type declarations that can be validated
/// on their own (objects, input objects, scalars and unions).
pub trait TypeBuilder {
    type Def: Into<TypeDef>;

    fn build(self) -> Result<Self::Def, SchemaBuildError>;
}
