use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::schema::DeclarationRegistry;
use crate::schema::DefaultSchemaCompiler;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaCompiler;
use crate::schema::SchemaConfigurationBuilder;
use crate::schema::SchemaDefinition;
use crate::schema::SchemaError;
use crate::schema::SchemaSettings;
use crate::types::DescribeType;
use crate::types::EnumTypeBuilder;
use crate::types::EnumValue;
use crate::types::EnumValues;
use crate::types::InputObjectTypeBuilder;
use crate::types::ObjectTypeBuilder;
use crate::types::ScalarTypeBuilder;
use crate::types::StructuralType;
use crate::types::TypeBuilder;
use crate::types::TypeDef;
use crate::types::TypeRef;
use crate::types::UnionTypeBuilder;
use crate::types::WireScalar;
use std::any::Any;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for declaring a [`Schema`].
///
/// Every declaration method validates its declaration before adding it to
/// the underlying [`DeclarationRegistry`]; on error the registry is left
/// untouched.
///
/// ```
/// use graphql_dsl::schema::SchemaBuilder;
/// use graphql_dsl::types::TypeAnnotation;
/// use serde_json::json;
///
/// let mut builder = SchemaBuilder::new();
/// builder.query("hello", |op| {
///     op.returns(TypeAnnotation::non_null("String"))
///         .resolver(|_args| async { Ok(json!("world")) });
/// })?;
/// let schema = builder.build()?;
/// assert!(schema.definition().query("hello").is_some());
/// # Ok::<(), graphql_dsl::schema::SchemaError>(())
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    configuration: SchemaConfigurationBuilder,
    registry: DeclarationRegistry,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: SchemaSettings) -> Self {
        let registry = DeclarationRegistry::with_name_uniqueness(settings.name_uniqueness);
        Self {
            configuration: SchemaConfigurationBuilder::from_settings(settings),
            registry,
        }
    }

    /// Adjust the configuration the schema will be compiled with.
    pub fn configure(
        &mut self,
        configure: impl FnOnce(&mut SchemaConfigurationBuilder),
    ) -> Result<&mut Self> {
        let previous = self.configuration.current_settings().clone();
        configure(&mut self.configuration);
        let name_uniqueness = self.configuration.current_settings().name_uniqueness;
        if let Err(err) = self.registry.set_name_uniqueness(name_uniqueness) {
            self.configuration.settings(previous);
            return Err(err);
        }
        Ok(self)
    }

    pub fn query(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut OperationBuilder),
    ) -> Result<&mut Self> {
        let operation = build_operation(OperationKind::Query, name, configure)?;
        self.registry.add_query(operation)?;
        Ok(self)
    }

    pub fn mutation(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut OperationBuilder),
    ) -> Result<&mut Self> {
        let operation = build_operation(OperationKind::Mutation, name, configure)?;
        self.registry.add_mutation(operation)?;
        Ok(self)
    }

    pub fn subscription(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut OperationBuilder),
    ) -> Result<&mut Self> {
        let operation = build_operation(OperationKind::Subscription, name, configure)?;
        self.registry.add_subscription(operation)?;
        Ok(self)
    }

    /// Declare a custom scalar backed by `T` and carried over the wire as
    /// `Raw`.
    pub fn scalar<T: Any + Send, Raw: WireScalar>(
        &mut self,
        configure: impl FnOnce(&mut ScalarTypeBuilder<T, Raw>),
    ) -> Result<TypeRef> {
        let mut scalar_builder = ScalarTypeBuilder::<T, Raw>::new();
        configure(&mut scalar_builder);
        self.declare(scalar_builder)
    }

    pub fn boolean_scalar<T: Any + Send>(
        &mut self,
        configure: impl FnOnce(&mut ScalarTypeBuilder<T, bool>),
    ) -> Result<TypeRef> {
        self.scalar(configure)
    }

    pub fn float_scalar<T: Any + Send>(
        &mut self,
        configure: impl FnOnce(&mut ScalarTypeBuilder<T, f64>),
    ) -> Result<TypeRef> {
        self.scalar(configure)
    }

    pub fn int_scalar<T: Any + Send>(
        &mut self,
        configure: impl FnOnce(&mut ScalarTypeBuilder<T, i32>),
    ) -> Result<TypeRef> {
        self.scalar(configure)
    }

    pub fn long_scalar<T: Any + Send>(
        &mut self,
        configure: impl FnOnce(&mut ScalarTypeBuilder<T, i64>),
    ) -> Result<TypeRef> {
        self.scalar(configure)
    }

    pub fn string_scalar<T: Any + Send>(
        &mut self,
        configure: impl FnOnce(&mut ScalarTypeBuilder<T, String>),
    ) -> Result<TypeRef> {
        self.scalar(configure)
    }

    /// Declare an object type derived from `T`'s [`DescribeType`] descriptor.
    pub fn object<T: DescribeType>(
        &mut self,
        configure: impl FnOnce(&mut ObjectTypeBuilder),
    ) -> Result<TypeRef> {
        self.object_from(T::describe(), configure)
    }

    pub fn object_from(
        &mut self,
        source: StructuralType,
        configure: impl FnOnce(&mut ObjectTypeBuilder),
    ) -> Result<TypeRef> {
        let mut object_builder = ObjectTypeBuilder::new(source);
        configure(&mut object_builder);
        self.declare(object_builder)
    }

    /// Declare an enum over every value of `E`.
    pub fn enum_type<E: EnumValues>(
        &mut self,
        configure: impl FnOnce(&mut EnumTypeBuilder<E>),
    ) -> Result<TypeRef> {
        self.enum_type_with_values(E::values(), configure)
    }

    /// Declare an enum over an explicit, ordered list of host values.
    pub fn enum_type_with_values<E: EnumValue>(
        &mut self,
        values: Vec<E>,
        configure: impl FnOnce(&mut EnumTypeBuilder<E>),
    ) -> Result<TypeRef> {
        let mut enum_builder = EnumTypeBuilder::<E>::new();
        configure(&mut enum_builder);
        self.registry.add_enum(enum_builder.build(values)?)
    }

    pub fn union_type(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut UnionTypeBuilder),
    ) -> Result<TypeRef> {
        let mut union_builder = UnionTypeBuilder::new(name);
        configure(&mut union_builder);
        self.declare(union_builder)
    }

    /// Declare a union whose members are the variants of the closed type `T`.
    pub fn union_from<T: DescribeType>(
        &mut self,
        configure: impl FnOnce(&mut UnionTypeBuilder),
    ) -> Result<TypeRef> {
        self.union_from_source(&T::describe(), configure)
    }

    pub fn union_from_source(
        &mut self,
        source: &StructuralType,
        configure: impl FnOnce(&mut UnionTypeBuilder),
    ) -> Result<TypeRef> {
        let mut union_builder = UnionTypeBuilder::from_closed(source)?;
        configure(&mut union_builder);
        self.declare(union_builder)
    }

    /// Declare an input object derived from `T`'s [`DescribeType`] descriptor.
    pub fn input_type<T: DescribeType>(
        &mut self,
        configure: impl FnOnce(&mut InputObjectTypeBuilder),
    ) -> Result<TypeRef> {
        self.input_from(T::describe(), configure)
    }

    pub fn input_from(
        &mut self,
        source: StructuralType,
        configure: impl FnOnce(&mut InputObjectTypeBuilder),
    ) -> Result<TypeRef> {
        let mut input_builder = InputObjectTypeBuilder::new(source);
        configure(&mut input_builder);
        self.declare(input_builder)
    }

    /// Build a type declaration and add it to the registry.
    pub fn declare<B: TypeBuilder>(&mut self, type_builder: B) -> Result<TypeRef> {
        let type_def: TypeDef = type_builder.build()?.into();
        match type_def {
            TypeDef::Enum(enum_def) => self.registry.add_enum(enum_def),
            TypeDef::Input(input_def) => self.registry.add_input_object(input_def),
            TypeDef::Object(object_def) => self.registry.add_object(object_def),
            TypeDef::Scalar(scalar_def) => self.registry.add_scalar(
                scalar_def,
                self.configuration.scalar_mapper_mut(),
            ),
            TypeDef::Union(union_def) => self.registry.add_union(union_def),
        }
    }

    /// Finalize the declarations without compiling them.
    pub fn into_definition(mut self) -> Result<SchemaDefinition> {
        self.registry.finalize()
    }

    pub fn build(self) -> std::result::Result<Schema, SchemaError> {
        self.build_with(&DefaultSchemaCompiler)
    }

    pub fn build_with(
        mut self,
        compiler: &impl SchemaCompiler,
    ) -> std::result::Result<Schema, SchemaError> {
        let definition = self.registry.finalize()?;
        compiler.compile(definition, self.configuration.build())
    }
}

fn build_operation(
    kind: OperationKind,
    name: impl Into<String>,
    configure: impl FnOnce(&mut OperationBuilder),
) -> Result<crate::operation::OperationDef> {
    let mut operation_builder = OperationBuilder::new(kind, name);
    configure(&mut operation_builder);
    operation_builder.build()
}
