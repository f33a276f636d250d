use crate::schema::DeclarationCategory;
use crate::schema::DeclarationRule;
use crate::schema::NameValidator;
use crate::schema::SchemaBuildError;
use crate::types::StructuralType;
use crate::types::TypeBuilder;
use crate::types::TypeRef;
use crate::types::UnionDef;
use indexmap::IndexMap;
use inherent::inherent;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const CATEGORY: DeclarationCategory = DeclarationCategory::Union;

/// Configures a union type declaration.
#[derive(Debug)]
pub struct UnionTypeBuilder {
    closed_source: bool,
    description: Option<String>,
    name: String,
    possible_types: Vec<String>,
}
impl UnionTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            closed_source: false,
            description: None,
            name: name.into(),
            possible_types: vec![],
        }
    }

    /// Start a union whose possible types are the variants of a closed
    /// source type, one member per variant. Fails if `source` is not closed.
    ///
    /// A closed source without variants yields a union without members;
    /// only unions listed by hand must name at least one possible type.
    pub fn from_closed(source: &StructuralType) -> Result<Self> {
        let variants = source.variants().ok_or_else(|| SchemaBuildError::invalid(
            CATEGORY,
            source.name(),
            DeclarationRule::NonClosedUnionSource,
        ))?;
        Ok(Self {
            closed_source: true,
            description: None,
            name: source.name().to_string(),
            possible_types: variants.to_vec(),
        })
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn possible_type(&mut self, type_name: impl Into<String>) -> &mut Self {
        self.possible_types.push(type_name.into());
        self
    }

    pub fn possible_type_ref(&mut self, type_ref: &TypeRef) -> &mut Self {
        self.possible_type(type_ref.name())
    }
}

#[inherent]
impl TypeBuilder for UnionTypeBuilder {
    type Def = UnionDef;

    pub fn build(self) -> Result<UnionDef> {
        if self.possible_types.is_empty() && !self.closed_source {
            return Err(SchemaBuildError::invalid(
                CATEGORY,
                self.name,
                DeclarationRule::EmptyUnion,
            ));
        }

        let mut members = IndexMap::new();
        for member_name in self.possible_types {
            NameValidator::check_member_name(CATEGORY, &self.name, &member_name)?;
            if members.contains_key(member_name.as_str()) {
                return Err(SchemaBuildError::invalid(
                    CATEGORY,
                    self.name,
                    DeclarationRule::DuplicateUnionMember {
                        member_name,
                    },
                ));
            }
            let member_ref = TypeRef::new(member_name.as_str());
            members.insert(member_name, member_ref);
        }

        Ok(UnionDef {
            description: self.description,
            members,
            name: self.name,
        })
    }
}
