use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::TypeDef;
use crate::types::UnionDef;
use indexmap::IndexMap;

pub(super) struct UnionTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a UnionDef,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> UnionTypeValidator<'a> {
    pub fn new(
        type_: &'a UnionDef,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        if self.type_.member_type_names().is_empty() {
            self.errors.push(TypeValidationError::EmptyUnion {
                union_type_name: self.type_.name().to_string(),
            });
        }

        for member_type_name in self.type_.member_type_names() {
            // Member types of a union type can only be object types.
            // https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
            let member_type =
                if let Some(member_type) = self.types_map.get(member_type_name) {
                    member_type
                } else {
                    self.errors.push(
                        TypeValidationError::UndefinedTypeName {
                            referenced_by: self.type_.name().to_string(),
                            undefined_type_name: member_type_name.to_string(),
                        }
                    );
                    continue;
                };
            if !matches!(member_type, GraphQLType::Declared(TypeDef::Object(_))) {
                self.errors.push(
                    TypeValidationError::InvalidUnionMemberTypeKind {
                        member_type_kind: GraphQLTypeKind::from(member_type),
                        member_type_name: member_type_name.to_string(),
                        union_type_name: self.type_.name().to_string(),
                    }
                );
            }
        }

        self.errors
    }
}
