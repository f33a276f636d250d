/// The reason reported for deprecated declarations that do not give one.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Deprecation metadata attached to operations, fields and enum values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeprecationState {
    Deprecated(String),
    #[default]
    NotDeprecated,
}
impl DeprecationState {
    pub fn deprecated(reason: Option<impl Into<String>>) -> Self {
        Self::Deprecated(
            reason
                .map(Into::into)
                .unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()),
        )
    }

    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Deprecated(reason) => Some(reason.as_str()),
            Self::NotDeprecated => None,
        }
    }
}
