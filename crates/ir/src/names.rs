//! Naming variants for raw identifiers
//!
//! One raw identifier from the command line fans out into every naming form
//! the renderers need: the database table, the Go type, the plural slice
//! alias, and the output file stem. All variants are pure functions of the
//! raw input, so the source and schema renderers can never disagree on a
//! name.

use heck::{ToPascalCase, ToSnakeCase};
use serde::{Deserialize, Serialize};

// ============================================================================
// NameSet
// ============================================================================

/// The derived naming variants of one raw identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSet {
    /// The identifier exactly as given on the command line
    pub original: String,

    /// Database table name (snake_case, pluralized)
    pub table: String,

    /// Go type name (PascalCase, singular)
    pub proper: String,

    /// Plural form of the type name (PascalCase)
    pub plural: String,

    /// Stem of the generated source file, equal to `original`
    pub file: String,
}

impl NameSet {
    /// Derive every naming variant from a raw identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        let original = raw.into();
        let proper = original.to_pascal_case();
        let table = pluralize(&original.to_snake_case());
        let plural = pluralize(&proper);
        let file = original.clone();

        Self {
            original,
            table,
            proper,
            plural,
            file,
        }
    }
}

// ============================================================================
// Pluralization
// ============================================================================

/// Pluralize a word with simple English suffix heuristics.
pub fn pluralize(word: &str) -> String {
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with("ch")
        || word.ends_with("sh")
        || word.ends_with("ss")
    {
        format!("{}es", word)
    } else if word.ends_with('y')
        && !word.ends_with("ey")
        && !word.ends_with("ay")
        && !word.ends_with("oy")
        && !word.ends_with("uy")
    {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{}s", word)
    }
}

// ============================================================================
// Tests
// ============================================================================
