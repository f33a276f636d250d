use crate::operation::OperationDef;
use crate::operation::OperationKind;
use crate::schema::DeclarationCategory;
use crate::schema::DeclarationRule;
use crate::schema::NameUniqueness;
use crate::schema::NameValidator;
use crate::schema::ScalarMapper;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaDefinition;
use crate::types::EnumDef;
use crate::types::InputDef;
use crate::types::ObjectDef;
use crate::types::ScalarDef;
use crate::types::TypeDef;
use crate::types::TypeRef;
use crate::types::UnionDef;
use indexmap::IndexMap;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The growing, mutable set of declarations that make up a schema.
///
/// Names are unique per [`DeclarationCategory`] (or across all type
/// categories under [`NameUniqueness::Global`]). A registry is consumed
/// exactly once by [`DeclarationRegistry::finalize()`]; every later call
/// fails with [`SchemaBuildError::IllegalState`].
#[derive(Debug, Default)]
pub struct DeclarationRegistry {
    finalized: bool,
    mutations: IndexMap<String, OperationDef>,
    name_uniqueness: NameUniqueness,
    queries: IndexMap<String, OperationDef>,
    subscriptions: IndexMap<String, OperationDef>,
    type_categories: HashMap<String, Vec<DeclarationCategory>>,
    types: Vec<TypeDef>,
}
impl DeclarationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_uniqueness(name_uniqueness: NameUniqueness) -> Self {
        Self {
            name_uniqueness,
            ..Self::default()
        }
    }

    pub fn add_mutation(&mut self, operation: OperationDef) -> Result<()> {
        self.add_operation(OperationKind::Mutation, operation)
    }

    pub fn add_query(&mut self, operation: OperationDef) -> Result<()> {
        self.add_operation(OperationKind::Query, operation)
    }

    pub fn add_subscription(&mut self, operation: OperationDef) -> Result<()> {
        self.add_operation(OperationKind::Subscription, operation)
    }

    pub fn add_enum(&mut self, enum_def: EnumDef) -> Result<TypeRef> {
        self.add_type(TypeDef::Enum(enum_def))
    }

    pub fn add_input_object(&mut self, input_def: InputDef) -> Result<TypeRef> {
        self.add_type(TypeDef::Input(input_def))
    }

    pub fn add_object(&mut self, object_def: ObjectDef) -> Result<TypeRef> {
        self.add_type(TypeDef::Object(object_def))
    }

    /// Register a scalar and, only once registration has succeeded, install
    /// its decode rule into `scalar_mapper`.
    pub fn add_scalar(
        &mut self,
        scalar_def: ScalarDef,
        scalar_mapper: &mut ScalarMapper,
    ) -> Result<TypeRef> {
        let mapping = scalar_def.clone();
        let type_ref = self.add_type(TypeDef::Scalar(scalar_def))?;
        scalar_mapper.install(&mapping);
        Ok(type_ref)
    }

    pub fn add_union(&mut self, union_def: UnionDef) -> Result<TypeRef> {
        self.add_type(TypeDef::Union(union_def))
    }

    /// Consume the registered declarations into an immutable
    /// [`SchemaDefinition`].
    pub fn finalize(&mut self) -> Result<SchemaDefinition> {
        self.check_not_finalized("finalize")?;
        self.finalized = true;
        self.type_categories.clear();

        let definition = SchemaDefinition {
            mutations: std::mem::take(&mut self.mutations),
            queries: std::mem::take(&mut self.queries),
            subscriptions: std::mem::take(&mut self.subscriptions),
            types: std::mem::take(&mut self.types),
        };
        tracing::debug!(
            queries = definition.queries.len(),
            mutations = definition.mutations.len(),
            subscriptions = definition.subscriptions.len(),
            types = definition.types.len(),
            "finalized declaration registry",
        );
        Ok(definition)
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn name_uniqueness(&self) -> NameUniqueness {
        self.name_uniqueness
    }

    /// Switch the uniqueness policy. Moving to [`NameUniqueness::Global`]
    /// fails (and leaves the policy unchanged) if the types registered so
    /// far already collide across categories.
    pub fn set_name_uniqueness(&mut self, name_uniqueness: NameUniqueness) -> Result<()> {
        self.check_not_finalized("change the name uniqueness policy")?;
        if name_uniqueness == NameUniqueness::Global {
            for type_def in &self.types {
                let categories = self.type_categories
                    .get(type_def.name())
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                if let Some(conflicting_category) = categories.iter()
                    .find(|category| **category != type_def.category())
                {
                    return Err(SchemaBuildError::DuplicateName {
                        category: type_def.category(),
                        conflicting_category: *conflicting_category,
                        name: type_def.name().to_string(),
                    });
                }
            }
        }
        self.name_uniqueness = name_uniqueness;
        Ok(())
    }

    fn add_operation(
        &mut self,
        expected: OperationKind,
        operation: OperationDef,
    ) -> Result<()> {
        let category = DeclarationCategory::from(expected);
        self.check_not_finalized("add a declaration")?;
        if operation.kind() != expected {
            return Err(SchemaBuildError::invalid(
                category,
                operation.name(),
                DeclarationRule::OperationKindMismatch {
                    actual: operation.kind(),
                    expected,
                },
            ));
        }
        NameValidator::check_declaration_name(category, operation.name())?;

        let operations = match expected {
            OperationKind::Mutation => &mut self.mutations,
            OperationKind::Query => &mut self.queries,
            OperationKind::Subscription => &mut self.subscriptions,
        };
        if operations.contains_key(operation.name()) {
            return Err(SchemaBuildError::DuplicateName {
                category,
                conflicting_category: category,
                name: operation.name().to_string(),
            });
        }

        tracing::debug!(%category, name = operation.name(), "registered declaration");
        operations.insert(operation.name().to_string(), operation);
        Ok(())
    }

    fn add_type(&mut self, type_def: TypeDef) -> Result<TypeRef> {
        let category = type_def.category();
        self.check_not_finalized("add a declaration")?;
        NameValidator::check_declaration_name(category, type_def.name())?;

        let categories = self.type_categories
            .get(type_def.name())
            .map(Vec::as_slice)
            .unwrap_or_default();
        let conflicting_category = match self.name_uniqueness {
            NameUniqueness::Global => categories.first(),
            NameUniqueness::PerCategory => categories.iter().find(|c| **c == category),
        };
        if let Some(conflicting_category) = conflicting_category {
            return Err(SchemaBuildError::DuplicateName {
                category,
                conflicting_category: *conflicting_category,
                name: type_def.name().to_string(),
            });
        }

        tracing::debug!(%category, name = type_def.name(), "registered declaration");
        let type_ref = type_def.type_ref();
        self.type_categories
            .entry(type_def.name().to_string())
            .or_default()
            .push(category);
        self.types.push(type_def);
        Ok(type_ref)
    }

    fn check_not_finalized(&self, attempted: &'static str) -> Result<()> {
        if self.finalized {
            return Err(SchemaBuildError::IllegalState {
                attempted,
            });
        }
        Ok(())
    }
}
