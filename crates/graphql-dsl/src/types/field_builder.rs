use crate::operation::FieldError;
use crate::operation::Resolver;
use crate::operation::ResolverArgs;
use crate::schema::DeclarationCategory;
use crate::schema::DeclarationRule;
use crate::schema::NameValidator;
use crate::schema::SchemaBuildError;
use crate::types::DeprecationState;
use crate::types::FieldDef;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use serde_json::Value;
use std::future::Future;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Configures a resolver-backed field: a root operation or an extra field
/// added to an object type.
#[derive(Debug)]
pub struct FieldBuilder {
    deprecation: DeprecationState,
    description: Option<String>,
    name: String,
    parameters: Vec<Parameter>,
    resolver: Option<Resolver>,
    returns: Option<TypeAnnotation>,
}
impl FieldBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            deprecation: DeprecationState::NotDeprecated,
            description: None,
            name: name.into(),
            parameters: vec![],
            resolver: None,
            returns: None,
        }
    }

    pub fn deprecate(&mut self, reason: impl Into<String>) -> &mut Self {
        self.deprecation = DeprecationState::Deprecated(reason.into());
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn param(&mut self, parameter: Parameter) -> &mut Self {
        self.parameters.push(parameter);
        self
    }

    pub fn resolver<F, Fut>(&mut self, resolve_fn: F) -> &mut Self
    where
        F: Fn(ResolverArgs) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<Value, FieldError>> + Send + 'static,
    {
        self.resolver = Some(Resolver::new(resolve_fn));
        self
    }

    pub fn resolver_handle(&mut self, resolver: Resolver) -> &mut Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn returns(&mut self, type_annotation: TypeAnnotation) -> &mut Self {
        self.returns = Some(type_annotation);
        self
    }

    pub(crate) fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Validates this field and produces its [`FieldDef`]. Errors are
    /// reported against the enclosing declaration (`category` +
    /// `declaration_name`).
    pub(crate) fn build(
        self,
        category: DeclarationCategory,
        declaration_name: &str,
    ) -> Result<FieldDef> {
        NameValidator::check_member_name(category, declaration_name, &self.name)?;

        let type_annotation = self.returns.ok_or_else(|| SchemaBuildError::invalid(
            category,
            declaration_name,
            DeclarationRule::MissingReturnType {
                field_name: self.name.to_string(),
            },
        ))?;

        let resolver = self.resolver.ok_or_else(|| SchemaBuildError::invalid(
            category,
            declaration_name,
            DeclarationRule::MissingResolver {
                field_name: self.name.to_string(),
            },
        ))?;

        let mut parameters = IndexMap::new();
        for param in self.parameters {
            NameValidator::check_member_name(category, declaration_name, &param.name)?;
            if parameters.contains_key(param.name.as_str()) {
                return Err(SchemaBuildError::invalid(
                    category,
                    declaration_name,
                    DeclarationRule::DuplicateParameter {
                        field_name: self.name.to_string(),
                        param_name: param.name,
                    },
                ));
            }
            parameters.insert(param.name.to_string(), param);
        }

        Ok(FieldDef {
            deprecation: self.deprecation,
            description: self.description,
            name: self.name,
            parameters,
            resolver: Some(resolver),
            type_annotation,
        })
    }
}
