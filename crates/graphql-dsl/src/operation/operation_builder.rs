use crate::operation::OperationDef;
use crate::operation::OperationKind;
use crate::schema::DeclarationRule;
use crate::schema::NameValidator;
use crate::schema::SchemaBuildError;
use crate::types::FieldBuilder;
use std::ops::Deref;
use std::ops::DerefMut;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Configures a single query, mutation or subscription. All field-level
/// settings (description, parameters, return type, resolver) come from the
/// wrapped [`FieldBuilder`].
#[derive(Debug)]
pub struct OperationBuilder {
    field_builder: FieldBuilder,
    kind: OperationKind,
}
impl OperationBuilder {
    pub fn new(kind: OperationKind, name: impl Into<String>) -> Self {
        Self {
            field_builder: FieldBuilder::new(name),
            kind,
        }
    }

    pub fn build(self) -> Result<OperationDef> {
        let category = self.kind.into();
        let name = self.field_builder.name().to_string();
        NameValidator::check_declaration_name(category, &name)?;
        let field = self.field_builder.build(category, &name)?;
        let Some(resolver) = field.resolver().cloned() else {
            return Err(SchemaBuildError::invalid(
                category,
                name.as_str(),
                DeclarationRule::MissingResolver {
                    field_name: name.to_string(),
                },
            ));
        };
        Ok(OperationDef {
            field,
            kind: self.kind,
            resolver,
        })
    }
}
impl Deref for OperationBuilder {
    type Target = FieldBuilder;

    fn deref(&self) -> &FieldBuilder {
        &self.field_builder
    }
}
impl DerefMut for OperationBuilder {
    fn deref_mut(&mut self) -> &mut FieldBuilder {
        &mut self.field_builder
    }
}
