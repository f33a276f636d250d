use crate::schema::ScalarMapper;
use std::time::Duration;

/// How the [`DeclarationRegistry`](crate::schema::DeclarationRegistry)
/// scopes type-name uniqueness.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NameUniqueness {
    /// Names only need to be unique within a declaration category. Collisions
    /// across categories are left to the compiler.
    #[default]
    PerCategory,

    /// Type names must be unique across all type categories at declaration
    /// time. Operations are still scoped per kind.
    Global,
}

/// The serializable part of a [`SchemaConfiguration`].
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaSettings {
    /// `None` (`null`) lets field aggregation run without a deadline.
    pub execution_timeout_ms: Option<u64>,
    pub name_uniqueness: NameUniqueness,
}
impl SchemaSettings {
    pub const DEFAULT_EXECUTION_TIMEOUT_MS: u64 = 30_000;
}
impl std::default::Default for SchemaSettings {
    fn default() -> Self {
        Self {
            execution_timeout_ms: Some(Self::DEFAULT_EXECUTION_TIMEOUT_MS),
            name_uniqueness: NameUniqueness::default(),
        }
    }
}

/// The resolved configuration a schema is compiled with.
#[derive(Clone, Debug, Default)]
pub struct SchemaConfiguration {
    scalar_mapper: ScalarMapper,
    settings: SchemaSettings,
}
impl SchemaConfiguration {
    pub fn builder() -> SchemaConfigurationBuilder {
        SchemaConfigurationBuilder::new()
    }

    /// The overall time limit applied to a single aggregation of sibling
    /// fields, if any.
    pub fn execution_timeout(&self) -> Option<Duration> {
        self.settings.execution_timeout_ms.map(Duration::from_millis)
    }

    pub fn name_uniqueness(&self) -> NameUniqueness {
        self.settings.name_uniqueness
    }

    pub fn scalar_mapper(&self) -> &ScalarMapper {
        &self.scalar_mapper
    }

    pub fn settings(&self) -> &SchemaSettings {
        &self.settings
    }
}

/// Accumulates configuration while a schema is being declared.
///
/// Scalar registrations install their decode rules into this builder's
/// [`ScalarMapper`], so the mapper handed to the compiler always matches the
/// scalars that were successfully declared.
#[derive(Clone, Debug, Default)]
pub struct SchemaConfigurationBuilder {
    scalar_mapper: ScalarMapper,
    settings: SchemaSettings,
}
impl SchemaConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: SchemaSettings) -> Self {
        Self {
            scalar_mapper: ScalarMapper::new(),
            settings,
        }
    }

    pub fn execution_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.settings.execution_timeout_ms =
            Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Let field aggregation run without a deadline.
    pub fn no_execution_timeout(&mut self) -> &mut Self {
        self.settings.execution_timeout_ms = None;
        self
    }

    pub fn name_uniqueness(&mut self, name_uniqueness: NameUniqueness) -> &mut Self {
        self.settings.name_uniqueness = name_uniqueness;
        self
    }

    /// Replace every serializable setting at once.
    pub fn settings(&mut self, settings: SchemaSettings) -> &mut Self {
        self.settings = settings;
        self
    }

    pub(crate) fn current_settings(&self) -> &SchemaSettings {
        &self.settings
    }

    pub(crate) fn scalar_mapper_mut(&mut self) -> &mut ScalarMapper {
        &mut self.scalar_mapper
    }

    pub fn build(self) -> SchemaConfiguration {
        SchemaConfiguration {
            scalar_mapper: self.scalar_mapper,
            settings: self.settings,
        }
    }
}
