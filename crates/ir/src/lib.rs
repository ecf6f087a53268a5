//! # Modelsmith IR (Intermediate Representation)
//!
//! This crate provides the intermediate representation for scaffolded
//! models. One raw command-line specification is parsed into a [`Model`]
//! that both renderers consume, which keeps the generated Go source and the
//! fizz migration structurally consistent by construction.
//!
//! ## Core Concepts
//!
//! - **NameSet**: every naming variant derived from one raw identifier
//! - **TypeToken**: a raw type token, parsed once into its tagged form
//! - **Attribute**: a field of a model (maps to a database column)
//! - **Model**: the full specification: names, imports, ordered attributes
//!

// Module declarations
pub mod attribute;
pub mod model;
pub mod names;
pub mod types;

// Re-export commonly used types at crate root
pub use attribute::{Attribute, DEFAULT_TYPE};
pub use model::{MODEL_PACKAGE, Model, NULLS_IMPORT, TIME_IMPORT};
pub use names::{NameSet, pluralize};
pub use types::TypeToken;

// Re-export core types that are commonly used with the IR
pub use modelsmith_core::{RESERVED_COLUMNS, ScaffoldError, ScaffoldResult, is_reserved_column};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_serialization_round_trip() {
        let model = Model::assemble(
            "comment",
            &["body:nulls.String".to_string(), "rating:int".to_string()],
        )
        .unwrap();

        let json = serde_json::to_string(&model).unwrap();
        let restored: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(model, restored);
    }

    #[test]
    fn test_type_token_serialization_is_tagged() {
        let json = serde_json::to_value(TypeToken::parse("nulls.Int")).unwrap();
        assert_eq!(json["kind"], "Nullable");
        assert_eq!(json["name"], "Int");
    }
}
