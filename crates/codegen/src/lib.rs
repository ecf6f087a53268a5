//! # Modelsmith Codegen
//!
//! Rendering and persistence for scaffolded models.
//!
//! This crate turns an assembled model specification into its two coupled
//! artifacts:
//!
//! - **Source rendering**: the Go model declaration plus plural slice alias
//! - **Schema rendering**: the fizz `create_table` / `drop_table` pair
//! - **Migration persistence**: timestamped up/down migration files
//! - **Formatting**: best-effort `gofmt` over the written source
//!

// ============================================================================
// Modules
// ============================================================================

pub mod format;
pub mod migrations;
pub mod scaffolder;
pub mod schema;
pub mod source;

// ============================================================================
// Re-exports
// ============================================================================

pub use migrations::{MigrationPair, create_slug, write_migration_pair};
pub use scaffolder::Scaffolder;
pub use schema::{render_create, render_drop};
pub use source::render_model;

use modelsmith_core::{ScaffoldError, ScaffoldResult};
use std::path::{Path, PathBuf};

// ============================================================================
// ScaffoldConfig
// ============================================================================

/// Configuration for a scaffold run
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Directory model source files are written to
    pub models_dir: PathBuf,

    /// Directory migration files are written to
    pub migrations_dir: PathBuf,

    /// Whether to create the migration pair
    pub create_migration: bool,

    /// Whether to format the written source with gofmt
    pub format_code: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from("models"),
            migrations_dir: PathBuf::from("./migrations"),
            create_migration: true,
            format_code: true,
        }
    }
}

impl ScaffoldConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the models output directory
    pub fn with_models_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.models_dir = dir.into();
        self
    }

    /// Set the migrations output directory
    pub fn with_migrations_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.migrations_dir = dir.into();
        self
    }

    /// Skip migration creation
    pub fn without_migration(mut self) -> Self {
        self.create_migration = false;
        self
    }

    /// Skip the formatter pass
    pub fn without_formatting(mut self) -> Self {
        self.format_code = false;
        self
    }
}

// ============================================================================
// GeneratedFile
// ============================================================================

/// Represents a single generated file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Path relative to the working directory
    pub path: PathBuf,

    /// File content
    pub content: String,

    /// File type for categorization
    pub file_type: FileType,
}

impl GeneratedFile {
    /// Create a new generated file
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, file_type: FileType) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            file_type,
        }
    }

    /// Create a Go source file
    pub fn go(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileType::Go)
    }

    /// Create a fizz migration file
    pub fn fizz(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileType::Fizz)
    }

    /// Get the file extension
    pub fn extension(&self) -> &str {
        self.file_type.extension()
    }
}

/// Type of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Go,
    Fizz,
    Other,
}

impl FileType {
    /// Get the file extension for this type
    pub fn extension(&self) -> &str {
        match self {
            FileType::Go => "go",
            FileType::Fizz => "fizz",
            FileType::Other => "txt",
        }
    }
}

// ============================================================================
// Scaffold
// ============================================================================

/// Collection of all generated artifacts for one model
#[derive(Debug, Clone, Default)]
pub struct Scaffold {
    /// Model name as given on the command line
    pub model_name: String,

    /// All generated source files
    pub files: Vec<GeneratedFile>,

    /// Migration pair, once written
    pub migration: Option<MigrationPair>,

    /// Warnings collected during scaffolding (e.g. formatter failures)
    pub warnings: Vec<String>,
}

impl Scaffold {
    /// Create a new scaffold for a model
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            files: Vec::new(),
            migration: None,
            warnings: Vec::new(),
        }
    }

    /// Add a file to the scaffold
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Get the number of source files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Write all source files to disk, creating parent directories
    pub fn write_to_disk(&self, base_dir: impl AsRef<Path>) -> ScaffoldResult<()> {
        let base_dir = base_dir.as_ref();

        for file in &self.files {
            let full_path = base_dir.join(&file.path);

            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| ScaffoldError::DirectoryCreate {
                    path: parent.to_path_buf(),
                    message: e.to_string(),
                })?;
            }

            std::fs::write(&full_path, &file.content).map_err(|e| ScaffoldError::FileWrite {
                path: full_path.clone(),
                message: e.to_string(),
            })?;
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
