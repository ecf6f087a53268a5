//! Model assembly from raw command-line tokens
//!
//! A [`Model`] is the single specification both renderers consume. It is
//! assembled once per invocation: the reserved attributes come first, then
//! one attribute per `name:type` token in the order given, with the import
//! set tracked along the way.

use modelsmith_core::{ScaffoldError, ScaffoldResult, is_reserved_column};
use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::names::NameSet;

/// Go package every generated model belongs to.
pub const MODEL_PACKAGE: &str = "models";

/// Import required by the reserved timestamp fields.
pub const TIME_IMPORT: &str = "time";

/// Import required as soon as any attribute is nullable.
pub const NULLS_IMPORT: &str = "github.com/markbates/going/nulls";

// ============================================================================
// Model
// ============================================================================

/// A complete model specification, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Go package of the generated source file
    pub package: String,

    /// Required import paths, in insertion order
    pub imports: Vec<String>,

    /// Naming variants of the model itself
    pub names: NameSet,

    /// Reserved attributes first, then user attributes in CLI order
    pub attributes: Vec<Attribute>,
}

impl Model {
    /// Create a model carrying only the reserved attributes.
    pub fn new(name: &str) -> Self {
        Self {
            package: MODEL_PACKAGE.to_string(),
            imports: vec![TIME_IMPORT.to_string()],
            names: NameSet::new(name),
            attributes: vec![
                Attribute::id(),
                Attribute::created_at(),
                Attribute::updated_at(),
            ],
        }
    }

    /// Assemble a model from its name and raw `name:type` attribute tokens.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty model name, an empty
    /// attribute name or type segment, an attribute that clashes with a
    /// reserved column, or a duplicate attribute name.
    pub fn assemble(name: &str, tokens: &[String]) -> ScaffoldResult<Self> {
        if name.trim().is_empty() {
            return Err(ScaffoldError::validation(
                "you must supply a name for your model",
            ));
        }

        let mut model = Self::new(name);
        for token in tokens {
            model.push_token(token)?;
        }
        Ok(model)
    }

    /// Attributes that map to user-managed columns (reserved ones excluded).
    pub fn user_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes
            .iter()
            .filter(|a| !is_reserved_column(&a.names.original))
    }

    /// Whether any attribute is nullable.
    pub fn has_nullable(&self) -> bool {
        self.attributes.iter().any(Attribute::is_nullable)
    }

    /// Parse one `name:type` token and append the attribute.
    ///
    /// Tokens split on the first `:` only; further separators stay in the
    /// type segment. A missing type defaults to the generic string type.
    fn push_token(&mut self, token: &str) -> ScaffoldResult<()> {
        let (raw_name, raw_type) = match token.split_once(':') {
            Some((name, ty)) => (name, Some(ty)),
            None => (token, None),
        };

        if raw_name.is_empty() {
            return Err(ScaffoldError::validation(format!(
                "attribute token '{}' has no name",
                token
            )));
        }
        if raw_type == Some("") {
            return Err(ScaffoldError::validation(format!(
                "attribute token '{}' has an empty type",
                token
            )));
        }
        if is_reserved_column(raw_name) {
            return Err(ScaffoldError::ReservedAttribute(raw_name.to_string()));
        }
        if self.attributes.iter().any(|a| a.names.original == raw_name) {
            return Err(ScaffoldError::DuplicateAttribute(raw_name.to_string()));
        }

        let attribute = Attribute::new(raw_name, raw_type);
        if attribute.is_nullable() && !self.imports.iter().any(|i| i == NULLS_IMPORT) {
            self.imports.push(NULLS_IMPORT.to_string());
        }
        self.attributes.push(attribute);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
