//! Type token parsing and mapping
//!
//! A raw type token from the command line (e.g. `"text"`, `"nulls.Int"`) is
//! parsed exactly once into a tagged [`TypeToken`]. The token then answers
//! every type question the renderers have: the Go type for the struct field,
//! the fizz column type for the migration, and whether the column is
//! nullable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal prefix marking a nullable wrapper type in raw tokens.
const NULLS_PREFIX: &str = "nulls.";

// ============================================================================
// TypeToken
// ============================================================================

/// A raw type token, parsed into its tagged representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name")]
pub enum TypeToken {
    /// A plain type name
    Plain(String),

    /// A `nulls.`-wrapped type; holds the inner name with the prefix stripped
    Nullable(String),
}

impl TypeToken {
    /// Parse a raw token. A token is nullable iff it carries the literal
    /// `nulls.` prefix followed by at least one character.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(NULLS_PREFIX) {
            Some(inner) if !inner.is_empty() => TypeToken::Nullable(inner.to_string()),
            _ => TypeToken::Plain(raw.to_string()),
        }
    }

    /// Whether the column backing this token accepts NULL.
    pub fn is_nullable(&self) -> bool {
        matches!(self, TypeToken::Nullable(_))
    }

    /// The Go type used for the generated struct field.
    ///
    /// Plain tokens map `text` to `string` and `time`/`timestamp` to
    /// `time.Time` (case-insensitive); everything else passes through
    /// unchanged. Nullable tokens keep their wrapper type verbatim, e.g.
    /// `nulls.String`.
    pub fn go_type(&self) -> String {
        match self {
            TypeToken::Plain(name) => match name.to_lowercase().as_str() {
                "text" => "string".to_string(),
                "time" | "timestamp" => "time.Time".to_string(),
                _ => name.clone(),
            },
            TypeToken::Nullable(_) => self.raw(),
        }
    }

    /// The fizz column type for the migration.
    ///
    /// Nullability is carried as a separate column option, so a nullable
    /// token resolves to the column type of its inner token.
    pub fn column_type(&self) -> String {
        match self {
            TypeToken::Plain(name) => {
                let lower = name.to_lowercase();
                match lower.as_str() {
                    "int" => "integer".to_string(),
                    "time" => "timestamp".to_string(),
                    _ => lower,
                }
            }
            TypeToken::Nullable(inner) => TypeToken::parse(inner).column_type(),
        }
    }

    /// The token exactly as it was given on the command line.
    pub fn raw(&self) -> String {
        match self {
            TypeToken::Plain(name) => name.clone(),
            TypeToken::Nullable(inner) => format!("{}{}", NULLS_PREFIX, inner),
        }
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_plain() {
        assert_eq!(TypeToken::parse("int"), TypeToken::Plain("int".to_string()));
        assert_eq!(
            TypeToken::parse("uuid"),
            TypeToken::Plain("uuid".to_string())
        );
    }

    #[test]
    fn test_parse_nullable_strips_prefix() {
        assert_eq!(
            TypeToken::parse("nulls.Int"),
            TypeToken::Nullable("Int".to_string())
        );
        assert!(TypeToken::parse("nulls.String").is_nullable());
        assert!(!TypeToken::parse("string").is_nullable());
    }

    #[test]
    fn test_bare_prefix_is_not_nullable() {
        assert_eq!(
            TypeToken::parse("nulls."),
            TypeToken::Plain("nulls.".to_string())
        );
    }

    #[test]
    fn test_go_type_mapping() {
        assert_eq!(TypeToken::parse("text").go_type(), "string");
        assert_eq!(TypeToken::parse("Text").go_type(), "string");
        assert_eq!(TypeToken::parse("time").go_type(), "time.Time");
        assert_eq!(TypeToken::parse("timestamp").go_type(), "time.Time");
        assert_eq!(TypeToken::parse("int").go_type(), "int");
        assert_eq!(TypeToken::parse("uuid").go_type(), "uuid");
    }

    #[test]
    fn test_go_type_keeps_nullable_wrapper() {
        assert_eq!(TypeToken::parse("nulls.String").go_type(), "nulls.String");
        assert_eq!(TypeToken::parse("nulls.Int").go_type(), "nulls.Int");
    }

    #[test]
    fn test_column_type_mapping() {
        assert_eq!(TypeToken::parse("int").column_type(), "integer");
        assert_eq!(TypeToken::parse("time").column_type(), "timestamp");
        assert_eq!(TypeToken::parse("timestamp").column_type(), "timestamp");
        assert_eq!(TypeToken::parse("text").column_type(), "text");
        assert_eq!(TypeToken::parse("VarChar").column_type(), "varchar");
    }

    #[test]
    fn test_column_type_of_nullable_matches_inner() {
        assert_eq!(
            TypeToken::parse("nulls.Int").column_type(),
            TypeToken::parse("Int").column_type()
        );
        assert_eq!(TypeToken::parse("nulls.String").column_type(), "string");
    }

    #[test]
    fn test_column_type_unwraps_nested_prefixes() {
        assert_eq!(TypeToken::parse("nulls.nulls.Int").column_type(), "integer");
    }

    #[test]
    fn test_raw_round_trip() {
        for raw in ["int", "nulls.Int", "time.Time", "nulls.custom"] {
            assert_eq!(TypeToken::parse(raw).raw(), raw);
            assert_eq!(TypeToken::parse(raw).to_string(), raw);
        }
    }
}
