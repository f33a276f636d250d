use crate::schema::DeclarationCategory;
use crate::schema::DeclarationRule;
use crate::schema::NameValidator;
use crate::schema::SchemaBuildError;
use crate::types::DeprecationState;
use crate::types::EnumDef;
use crate::types::EnumValue;
use crate::types::EnumValueDef;
use crate::types::HostType;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Configures an enum declaration backed by the host value type `E`.
///
/// Metadata declared through [`EnumTypeBuilder::value()`] is matched against
/// the host values by equality when the enum is built.
#[derive(Debug)]
pub struct EnumTypeBuilder<E> {
    description: Option<String>,
    name: String,
    value_definitions: Vec<(E, EnumValueBuilder)>,
}
impl<E: EnumValue> EnumTypeBuilder<E> {
    /// A builder for an enum named after the short Rust name of `E`.
    pub fn new() -> Self {
        Self {
            description: None,
            name: HostType::of::<E>().short_name().to_string(),
            value_definitions: vec![],
        }
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Attach metadata to a single host value. Declaring the same value again
    /// replaces its earlier metadata.
    pub fn value(
        &mut self,
        value: E,
        configure: impl FnOnce(&mut EnumValueBuilder),
    ) -> &mut Self {
        let mut value_builder = EnumValueBuilder::default();
        configure(&mut value_builder);
        match self.value_definitions.iter_mut().find(|(v, _)| *v == value) {
            Some((_, existing)) => *existing = value_builder,
            None => self.value_definitions.push((value, value_builder)),
        }
        self
    }

    /// Build the enum over the complete, ordered set of host `values`.
    pub fn build(self, values: Vec<E>) -> Result<EnumDef> {
        if values.is_empty() {
            return Err(SchemaBuildError::invalid(
                DeclarationCategory::Enum,
                self.name,
                DeclarationRule::EmptyEnum,
            ));
        }

        // Metadata for something that is not one of `values` is almost
        // certainly a typo.
        if let Some((unknown, _)) = self.value_definitions.iter().find(
            |(defined, _)| !values.contains(defined)
        ) {
            return Err(SchemaBuildError::invalid(
                DeclarationCategory::Enum,
                self.name,
                DeclarationRule::UnknownEnumValue {
                    value_name: unknown.value_name(),
                },
            ));
        }

        let mut seen_names = HashSet::new();
        let mut value_defs = Vec::with_capacity(values.len());
        for value in values {
            let value_name = value.value_name();
            NameValidator::check_member_name(
                DeclarationCategory::Enum,
                &self.name,
                &value_name,
            )?;
            if !seen_names.insert(value_name.to_string()) {
                return Err(SchemaBuildError::invalid(
                    DeclarationCategory::Enum,
                    self.name,
                    DeclarationRule::DuplicateEnumValue {
                        value_name,
                    },
                ));
            }

            let metadata = self.value_definitions.iter()
                .find(|(defined, _)| *defined == value)
                .map(|(_, value_builder)| value_builder.clone())
                .unwrap_or_default();
            value_defs.push(EnumValueDef {
                deprecation: metadata.deprecation,
                description: metadata.description,
                name: value_name,
            });
        }

        Ok(EnumDef {
            description: self.description,
            host_type: HostType::of::<E>(),
            name: self.name,
            values: value_defs,
        })
    }
}
impl<E: EnumValue> Default for EnumTypeBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Description and deprecation metadata for a single enum value.
#[derive(Clone, Debug, Default)]
pub struct EnumValueBuilder {
    deprecation: DeprecationState,
    description: Option<String>,
}
impl EnumValueBuilder {
    pub fn deprecate(&mut self, reason: impl Into<String>) -> &mut Self {
        self.deprecation = DeprecationState::Deprecated(reason.into());
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }
}
