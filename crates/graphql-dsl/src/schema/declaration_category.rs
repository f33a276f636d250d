use crate::operation::OperationKind;

/// The categories within which declaration names must be unique.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DeclarationCategory {
    Enum,
    InputObject,
    Mutation,
    Object,
    Query,
    Scalar,
    Subscription,
    Union,
}
impl DeclarationCategory {
    pub const ALL: [DeclarationCategory; 8] = [
        Self::Query,
        Self::Mutation,
        Self::Subscription,
        Self::Scalar,
        Self::Object,
        Self::Enum,
        Self::Union,
        Self::InputObject,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::InputObject => "input object",
            Self::Mutation => "mutation",
            Self::Object => "object",
            Self::Query => "query",
            Self::Scalar => "scalar",
            Self::Subscription => "subscription",
            Self::Union => "union",
        }
    }

    pub fn is_operation(&self) -> bool {
        matches!(self, Self::Query | Self::Mutation | Self::Subscription)
    }
}
impl std::convert::From<OperationKind> for DeclarationCategory {
    fn from(value: OperationKind) -> Self {
        match value {
            OperationKind::Mutation => Self::Mutation,
            OperationKind::Query => Self::Query,
            OperationKind::Subscription => Self::Subscription,
        }
    }
}
impl std::fmt::Display for DeclarationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
