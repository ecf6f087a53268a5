//! Error types for modelsmith
//!
//! This module provides unified error handling across the workspace. The
//! pure parts of the pipeline (naming, type mapping, rendering) cannot fail;
//! everything that can (attribute validation, file writes, the migration
//! writer, the external formatter) is represented here.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for modelsmith
#[derive(Debug, Error)]
pub enum ScaffoldError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General input validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// The user declared an attribute whose column is managed automatically
    #[error("Attribute '{0}' is reserved and added to every model automatically")]
    ReservedAttribute(String),

    /// The same attribute name was declared twice
    #[error("Duplicate attribute name: '{0}' already exists")]
    DuplicateAttribute(String),

    // ========================================================================
    // External Tool Errors
    // ========================================================================
    /// The source formatter could not be run or exited with an error.
    /// Formatting is best-effort; callers downgrade this to a warning.
    #[error("Formatter failed: {message}")]
    Format { message: String },

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Migration Errors
    // ========================================================================
    /// Writing a migration file failed
    #[error("Failed to write migration '{path}': {message}")]
    MigrationWrite { path: PathBuf, message: String },
}

impl ScaffoldError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ScaffoldError::Validation(msg.into())
    }

    /// Create a formatter error
    pub fn format(msg: impl Into<String>) -> Self {
        ScaffoldError::Format { message: msg.into() }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScaffoldError::Validation(_)
                | ScaffoldError::ReservedAttribute(_)
                | ScaffoldError::DuplicateAttribute(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ScaffoldError::Io(_)
                | ScaffoldError::FileRead { .. }
                | ScaffoldError::FileWrite { .. }
                | ScaffoldError::DirectoryCreate { .. }
                | ScaffoldError::MigrationWrite { .. }
        )
    }
}

/// Result type alias using ScaffoldError
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_error() {
        let err = ScaffoldError::validation("you must supply a name for your model");
        assert!(err.is_validation());
        assert!(!err.is_io());
        assert_eq!(
            err.to_string(),
            "Validation error: you must supply a name for your model"
        );
    }

    #[test]
    fn test_reserved_attribute_error() {
        let err = ScaffoldError::ReservedAttribute("created_at".to_string());
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Attribute 'created_at' is reserved and added to every model automatically"
        );
    }

    #[test]
    fn test_duplicate_attribute_error() {
        let err = ScaffoldError::DuplicateAttribute("title".to_string());
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Duplicate attribute name: 'title' already exists"
        );
    }

    #[test]
    fn test_format_error_is_not_io() {
        let err = ScaffoldError::format("gofmt: executable file not found");
        assert!(!err.is_io());
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "Formatter failed: gofmt: executable file not found"
        );
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ScaffoldError = io_err.into();
        assert!(err.is_io());
    }

    #[test]
    fn test_migration_write_error() {
        let err = ScaffoldError::MigrationWrite {
            path: PathBuf::from("./migrations/x.up.fizz"),
            message: "permission denied".to_string(),
        };
        assert!(err.is_io());
        assert_eq!(
            err.to_string(),
            "Failed to write migration './migrations/x.up.fizz': permission denied"
        );
    }
}
