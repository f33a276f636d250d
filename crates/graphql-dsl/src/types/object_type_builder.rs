use crate::schema::DeclarationCategory;
use crate::schema::DeclarationRule;
use crate::schema::NameValidator;
use crate::schema::SchemaBuildError;
use crate::types::FieldBuilder;
use crate::types::FieldDef;
use crate::types::ObjectDef;
use crate::types::PropertyBuilder;
use crate::types::StructuralType;
use crate::types::TypeBuilder;
use indexmap::IndexMap;
use inherent::inherent;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const CATEGORY: DeclarationCategory = DeclarationCategory::Object;

/// Configures an object type declaration derived from a [`StructuralType`].
#[derive(Debug)]
pub struct ObjectTypeBuilder {
    description: Option<String>,
    extra_fields: Vec<FieldBuilder>,
    name: String,
    properties: IndexMap<String, PropertyBuilder>,
    source: StructuralType,
}
impl ObjectTypeBuilder {
    pub fn new(source: StructuralType) -> Self {
        Self {
            description: None,
            extra_fields: vec![],
            name: source.name().to_string(),
            properties: IndexMap::new(),
            source,
        }
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Add a resolver-backed field that does not exist on the source type.
    pub fn field(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut FieldBuilder),
    ) -> &mut Self {
        let mut field_builder = FieldBuilder::new(name);
        configure(&mut field_builder);
        self.extra_fields.push(field_builder);
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

    /// Adjust the description, deprecation or visibility of a source field.
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
impl TypeBuilder for ObjectTypeBuilder {
    type Def = ObjectDef;

    pub fn build(mut self) -> Result<ObjectDef> {
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
                return Err(duplicate_field(&self.name, source_field.name()));
            }
            fields.insert(source_field.name().to_string(), FieldDef {
                deprecation: prop.deprecation,
                description: prop.description.or_else(|| source_field.description.to_owned()),
                name: source_field.name().to_string(),
                parameters: IndexMap::new(),
                resolver: None,
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

        for field_builder in self.extra_fields {
            if fields.contains_key(field_builder.name()) {
                return Err(duplicate_field(&self.name, field_builder.name()));
            }
            let field = field_builder.build(CATEGORY, &self.name)?;
            fields.insert(field.name.to_string(), field);
        }

        if fields.is_empty() {
            return Err(SchemaBuildError::invalid(
                CATEGORY,
                self.name,
                DeclarationRule::NoFields,
            ));
        }

        Ok(ObjectDef {
            description: self.description,
            fields,
            host_type: self.source.host_type(),
            name: self.name,
        })
    }
}

fn duplicate_field(type_name: &str, field_name: &str) -> SchemaBuildError {
    SchemaBuildError::invalid(
        CATEGORY,
        type_name,
        DeclarationRule::DuplicateField {
            field_name: field_name.to_string(),
        },
    )
}
