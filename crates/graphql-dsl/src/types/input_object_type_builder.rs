use crate::schema::DeclarationCategory;
use crate::schema::DeclarationRule;
use crate::schema::NameValidator;
use crate::schema::SchemaBuildError;
use crate::types::InputDef;
use crate::types::InputFieldDef;
use crate::types::PropertyBuilder;
use crate::types::StructuralType;
use crate::types::TypeBuilder;
use indexmap::IndexMap;
use inherent::inherent;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const CATEGORY: DeclarationCategory = DeclarationCategory::InputObject;

/// Configures an input object declaration derived from a [`StructuralType`].
#[derive(Debug)]
pub struct InputObjectTypeBuilder {
    description: Option<String>,
    name: String,
    properties: IndexMap<String, PropertyBuilder>,
    source: StructuralType,
}
impl InputObjectTypeBuilder {
    pub fn new(source: StructuralType) -> Self {
        Self {
            description: None,
            name: source.name().to_string(),
            properties: IndexMap::new(),
            source,
        }
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Leave the named source field out of the declared type.
    pub fn ignore(&mut self, field_name: impl Into<String>) -> &mut Self {
        self.property(field_name, |prop| {
            prop.ignore();
        })
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Adjust the description, default value or visibility of a source field.
    pub fn property(
        &mut self,
        field_name: impl Into<String>,
        configure: impl FnOnce(&mut PropertyBuilder),
    ) -> &mut Self {
        let prop = self.properties.entry(field_name.into()).or_default();
        configure(prop);
        self
    }
}

#[inherent]
impl TypeBuilder for InputObjectTypeBuilder {
    type Def = InputDef;

    pub fn build(mut self) -> Result<InputDef> {
        let mut fields = IndexMap::new();
        for source_field in self.source.fields() {
            let prop = self.properties
                .shift_remove(source_field.name())
                .unwrap_or_default();
            if prop.ignored {
                continue;
            }
            NameValidator::check_member_name(CATEGORY, &self.name, source_field.name())?;
            if fields.contains_key(source_field.name()) {
                return Err(SchemaBuildError::invalid(
                    CATEGORY,
                    self.name.as_str(),
                    DeclarationRule::DuplicateField {
                        field_name: source_field.name().to_string(),
                    },
                ));
            }
            fields.insert(source_field.name().to_string(), InputFieldDef {
                default_value: prop.default_value,
                description: prop.description.or_else(|| source_field.description.to_owned()),
                name: source_field.name().to_string(),
                type_annotation: source_field.type_annotation().to_owned(),
            });
        }

        if let Some(unknown_field) = self.properties.keys().next() {
            return Err(SchemaBuildError::invalid(
                CATEGORY,
                self.name.as_str(),
                DeclarationRule::UnknownField {
                    field_name: unknown_field.to_string(),
                },
            ));
        }

        if fields.is_empty() {
            return Err(SchemaBuildError::invalid(
                CATEGORY,
                self.name,
                DeclarationRule::NoFields,
            ));
        }

        Ok(InputDef {
            description: self.description,
            fields,
            host_type: self.source.host_type(),
            name: self.name,
        })
    }
}
