use crate::schema::DeclarationCategory;
use crate::schema::DeclarationRule;
use crate::schema::SchemaBuildError;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Naming rules shared by every declaration and every declared member
/// (field, parameter, enum value).
pub(crate) struct NameValidator;
impl NameValidator {
    pub fn check_declaration_name(
        category: DeclarationCategory,
        name: &str,
    ) -> Result<()> {
        if name.is_empty() {
            return Err(SchemaBuildError::invalid(
                category,
                name,
                DeclarationRule::EmptyName,
            ));
        }

        // Names starting with `__` are reserved for the introspection system.
        if name.starts_with("__") {
            return Err(SchemaBuildError::invalid(
                category,
                name,
                DeclarationRule::DunderPrefixedName {
                    name: name.to_string(),
                },
            ));
        }

        Ok(())
    }

    pub fn check_member_name(
        category: DeclarationCategory,
        declaration_name: &str,
        member_name: &str,
    ) -> Result<()> {
        if member_name.is_empty() {
            return Err(SchemaBuildError::invalid(
                category,
                declaration_name,
                DeclarationRule::EmptyName,
            ));
        }

        if member_name.starts_with("__") {
            return Err(SchemaBuildError::invalid(
                category,
                declaration_name,
                DeclarationRule::DunderPrefixedName {
                    name: member_name.to_string(),
                },
            ));
        }

        Ok(())
    }
}
