use futures::future::BoxFuture;
use indexmap::IndexMap;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

type ResolverFn = dyn Fn(ResolverArgs) -> BoxFuture<'static, Result<Value, FieldError>>
    + Send
    + Sync;

/// An opaque handle to the function that computes the value of an operation
/// or a field. The schema-definition layer stores and clones it; only the
/// executor ever calls it.
#[derive(Clone)]
pub struct Resolver(Arc<ResolverFn>);
impl Resolver {
    pub fn new<F, Fut>(resolve_fn: F) -> Self
    where
        F: Fn(ResolverArgs) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, FieldError>> + Send + 'static,
    {
        Self(Arc::new(move |args| Box::pin(resolve_fn(args))))
    }

    /// A resolver for declarations that were made without one (e.g. from a
    /// manifest). Invoking it always fails.
    pub fn unbound(field_name: impl Into<String>) -> Self {
        let field_name = field_name.into();
        Self::new(move |_args| {
            let field_name = field_name.clone();
            async move {
                Err(FieldError::new(format!(
                    "No resolver is bound to `{field_name}`",
                )))
            }
        })
    }

    pub fn call(&self, args: ResolverArgs) -> BoxFuture<'static, Result<Value, FieldError>> {
        (self.0)(args)
    }
}
impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Resolver(..)")
    }
}

/// The inputs handed to a [`Resolver`]: the parent value being resolved
/// against (`null` for root operations) and the coerced arguments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolverArgs {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) parent: Value,
}
impl ResolverArgs {
    pub fn new(parent: Value, arguments: IndexMap<String, Value>) -> Self {
        Self {
            arguments,
            parent,
        }
    }

    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn parent(&self) -> &Value {
        &self.parent
    }
}

/// An error raised by a [`Resolver`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FieldError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}
impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn wrap(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
