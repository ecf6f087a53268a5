//! Attribute definitions for model fields
//!
//! An [`Attribute`] pairs the naming variants of a field with its parsed
//! type token. The three reserved bookkeeping attributes have fixed,
//! parameter-less constructors and are injected at the front of every model.

use serde::{Deserialize, Serialize};

use crate::names::NameSet;
use crate::types::TypeToken;

/// Default type for attributes declared without an explicit type token.
pub const DEFAULT_TYPE: &str = "string";

// ============================================================================
// Attribute
// ============================================================================

/// One field of a model (maps to a database column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Naming variants of the field
    pub names: NameSet,

    /// Parsed type token
    pub ty: TypeToken,
}

impl Attribute {
    /// Build an attribute from a raw name and an optional raw type token.
    pub fn new(raw_name: &str, raw_type: Option<&str>) -> Self {
        let mut names = NameSet::new(raw_name);
        // Acronym convention: `id` becomes `ID`, not `Id`.
        if raw_name == "id" {
            names.proper = "ID".to_string();
        }

        Self {
            names,
            ty: TypeToken::parse(raw_type.unwrap_or(DEFAULT_TYPE)),
        }
    }

    /// The reserved integer primary key.
    pub fn id() -> Self {
        Self::new("id", Some("int"))
    }

    /// The reserved creation timestamp.
    pub fn created_at() -> Self {
        Self::new("created_at", Some("time.Time"))
    }

    /// The reserved update timestamp.
    pub fn updated_at() -> Self {
        Self::new("updated_at", Some("time.Time"))
    }

    /// The Go type of the generated struct field.
    pub fn go_type(&self) -> String {
        self.ty.go_type()
    }

    /// Whether the backing column accepts NULL.
    pub fn is_nullable(&self) -> bool {
        self.ty.is_nullable()
    }
}

// ============================================================================
// Tests
// ============================================================================
