use crate::schema::TypeValidationError;
use crate::types::FieldDef;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputDef;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Checks that the types referenced by fields, parameters and input fields
/// exist and are allowed in the position they are used in.
pub(super) struct FieldTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> FieldTypeValidator<'a> {
    pub fn new(types_map: &'a IndexMap<String, GraphQLType>) -> Self {
        Self {
            errors: vec![],
            types_map,
        }
    }

    /// Validate an output field (an operation or an object field) together
    /// with its parameters.
    pub fn validate_output_field(&mut self, parent_type_name: &str, field: &FieldDef) {
        let field_name = field.name();
        let kind = self.lookup_kind(parent_type_name, field_name, field.type_annotation());
        if kind.is_some_and(|kind| !kind.is_output_type()) {
            self.errors.push(TypeValidationError::InvalidOutputFieldWithInputType {
                field_name: field_name.to_string(),
                input_type_name: innermost_type_name(field.type_annotation()).to_string(),
                parent_type_name: parent_type_name.to_string(),
            });
        }

        for param in field.parameters().values() {
            let referenced_by = format!("{parent_type_name}.{field_name}");
            let kind = self.lookup_kind(&referenced_by, param.name(), param.type_annotation());
            if kind.is_some_and(|kind| !kind.is_input_type()) {
                self.errors.push(TypeValidationError::InvalidParameterWithOutputOnlyType {
                    field_name: field_name.to_string(),
                    outputonly_type_name: innermost_type_name(param.type_annotation()).to_string(),
                    parameter_name: param.name().to_string(),
                    parent_type_name: parent_type_name.to_string(),
                });
            }
        }
    }

    pub fn validate_input_fields(&mut self, input_def: &InputDef) {
        for input_field in input_def.fields().values() {
            let kind = self.lookup_kind(
                input_def.name(),
                input_field.name(),
                input_field.type_annotation(),
            );
            if let Some(kind) = kind.filter(|kind| !kind.is_input_type()) {
                self.errors.push(TypeValidationError::InvalidInputFieldWithOutputType {
                    field_name: input_field.name().to_string(),
                    invalid_type_kind: kind,
                    invalid_type_name: innermost_type_name(input_field.type_annotation()).to_string(),
                    parent_type_name: input_def.name().to_string(),
                });
            }
        }
    }

    pub fn into_errors(self) -> Vec<TypeValidationError> {
        self.errors
    }

    fn lookup_kind(
        &mut self,
        owner_name: &str,
        member_name: &str,
        type_annotation: &TypeAnnotation,
    ) -> Option<GraphQLTypeKind> {
        let type_name = innermost_type_name(type_annotation);
        match self.types_map.get(type_name) {
            Some(type_) => Some(GraphQLTypeKind::from(type_)),
            None => {
                self.errors.push(TypeValidationError::UndefinedTypeName {
                    referenced_by: format!("{owner_name}.{member_name}"),
                    undefined_type_name: type_name.to_string(),
                });
                None
            },
        }
    }
}

fn innermost_type_name(type_annotation: &TypeAnnotation) -> &str {
    type_annotation.innermost_named_type_annotation().graphql_type_name()
}
