mod operation_builder;
mod operation_def;
mod operation_kind;
mod resolver;

pub use operation_builder::OperationBuilder;
pub use operation_def::OperationDef;
pub use operation_kind::OperationKind;
pub use resolver::FieldError;
pub use resolver::Resolver;
pub use resolver::ResolverArgs;
