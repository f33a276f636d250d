use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;
use std::str::FromStr;
use thiserror::Error;

/// Represents the annotated type of an operation result, a
/// [`FieldDef`](crate::types::FieldDef), an
/// [`InputFieldDef`](crate::types::InputFieldDef) or a
/// [`Parameter`](crate::types::Parameter).
///
/// Annotations are written and displayed using GraphQL type syntax
/// (`String`, `[Droid!]!`, ...). Referenced type names are resolved by the
/// compiler, not at declaration time.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// A nullable reference to the type named `type_name`.
    pub fn named(type_name: impl Into<String>) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable: true,
            type_name: type_name.into(),
        })
    }

    /// A non-nullable reference to the type named `type_name`.
    pub fn non_null(type_name: impl Into<String>) -> Self {
        Self::named(type_name).into_non_nullable()
    }

    /// A nullable list whose items are annotated with `inner`.
    pub fn list_of(inner: TypeAnnotation) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type_annotation: Box::new(inner),
            nullable: true,
        })
    }

    pub fn into_non_nullable(self) -> Self {
        match self {
            Self::List(mut annot) => {
                annot.nullable = false;
                Self::List(annot)
            },
            Self::Named(mut annot) => {
                annot.nullable = false;
                Self::Named(annot)
            },
        }
    }

    pub fn parse(input: &str) -> Result<Self, TypeAnnotationParseError> {
        let mut parser = TypeAnnotationParser {
            chars: input.char_indices().peekable(),
            input,
        };
        let annot = parser.parse_annotation()?;
        parser.skip_whitespace();
        if let Some((position, found)) = parser.chars.next() {
            return Err(TypeAnnotationParseError::UnexpectedCharacter {
                input: input.to_string(),
                position,
                found,
            });
        }
        Ok(annot)
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_annotation, .. })
                => inner_type_annotation.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is nullable or non-nullable.
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::convert::From<TypeAnnotation> for String {
    fn from(value: TypeAnnotation) -> Self {
        value.to_string()
    }
}
impl std::convert::TryFrom<String> for TypeAnnotation {
    type Error = TypeAnnotationParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}
impl FromStr for TypeAnnotation {
    type Err = TypeAnnotationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeAnnotationParseError {
    #[error("Type annotation `{input}` ended unexpectedly")]
    UnexpectedEnd {
        input: String,
    },

    #[error("Unexpected character `{found}` at offset {position} in type annotation `{input}`")]
    UnexpectedCharacter {
        input: String,
        position: usize,
        found: char,
    },
}

struct TypeAnnotationParser<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    input: &'a str,
}
impl TypeAnnotationParser<'_> {
    fn parse_annotation(&mut self) -> Result<TypeAnnotation, TypeAnnotationParseError> {
        self.skip_whitespace();
        let annot = match self.chars.peek().copied() {
            Some((_, '[')) => {
                self.chars.next();
                let inner = self.parse_annotation()?;
                self.skip_whitespace();
                match self.chars.next() {
                    Some((_, ']')) => TypeAnnotation::list_of(inner),
                    Some((position, found)) =>
                        return Err(self.unexpected(position, found)),
                    None => return Err(self.unexpected_end()),
                }
            },

            Some((position, c)) if c == '_' || c.is_ascii_alphabetic() => {
                let mut end = position;
                while let Some((idx, c)) = self.chars.peek().copied() {
                    if c == '_' || c.is_ascii_alphanumeric() {
                        end = idx + c.len_utf8();
                        self.chars.next();
                    } else {
                        break;
                    }
                }
                TypeAnnotation::named(&self.input[position..end])
            },

            Some((position, found)) => return Err(self.unexpected(position, found)),
            None => return Err(self.unexpected_end()),
        };

        self.skip_whitespace();
        if let Some((_, '!')) = self.chars.peek() {
            self.chars.next();
            return Ok(annot.into_non_nullable());
        }
        Ok(annot)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn unexpected(&self, position: usize, found: char) -> TypeAnnotationParseError {
        TypeAnnotationParseError::UnexpectedCharacter {
            input: self.input.to_string(),
            position,
            found,
        }
    }

    fn unexpected_end(&self) -> TypeAnnotationParseError {
        TypeAnnotationParseError::UnexpectedEnd {
            input: self.input.to_string(),
        }
    }
}
