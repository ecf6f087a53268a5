//! # Scaffold Orchestrator
//!
//! The [`Scaffolder`] is the top-level entry point for generation. It takes
//! an assembled [`Model`] and a [`ScaffoldConfig`] and produces a
//! [`Scaffold`] holding every generated file.
//!
//! ## Pipeline
//!
//! ```text
//! Model + ScaffoldConfig
//!         │
//!         ├──► source::render_model()   → models/<name>.go
//!         ├──► test stub                → models/<name>_test.go
//!         ▼
//!   Scaffold { files, warnings }
//!         │  (scaffold_and_write only)
//!         ├──► write files, run gofmt (best-effort)
//!         └──► schema::render_create/render_drop → migration pair
//! ```

use modelsmith_core::ScaffoldResult;
use modelsmith_ir::Model;
use std::path::PathBuf;

use crate::migrations;
use crate::schema;
use crate::source;
use crate::{GeneratedFile, Scaffold, ScaffoldConfig, format};

/// Fixed content of the companion test stub.
const TEST_STUB: &str = "package models_test";

// ============================================================================
// Scaffolder
// ============================================================================

/// Top-level scaffolder, stateless aside from its configuration.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    config: ScaffoldConfig,
}

impl Scaffolder {
    /// Create a new scaffolder with the given configuration.
    pub fn new(config: ScaffoldConfig) -> Self {
        Self { config }
    }

    /// Create a scaffolder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ScaffoldConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Path of the generated model source file.
    pub fn model_path(&self, model: &Model) -> PathBuf {
        self.config
            .models_dir
            .join(format!("{}.go", model.names.file))
    }

    /// Build the in-memory scaffold for a model. No filesystem access.
    pub fn scaffold(&self, model: &Model) -> Scaffold {
        let mut scaffold = Scaffold::new(&model.names.original);

        scaffold.add_file(GeneratedFile::go(
            self.model_path(model),
            source::render_model(model),
        ));
        scaffold.add_file(GeneratedFile::go(
            self.config
                .models_dir
                .join(format!("{}_test.go", model.names.file)),
            TEST_STUB,
        ));

        scaffold
    }

    /// Scaffold a model and persist every artifact.
    ///
    /// Source files are written first, then formatted, then the migration
    /// pair is created. A formatter failure becomes a warning on the
    /// returned [`Scaffold`]; every other failure aborts.
    pub fn scaffold_and_write(&self, model: &Model) -> ScaffoldResult<Scaffold> {
        let mut scaffold = self.scaffold(model);
        scaffold.write_to_disk(".")?;

        if self.config.format_code {
            if let Err(e) = format::gofmt(&self.model_path(model)) {
                tracing::warn!("{}", e);
                scaffold.add_warning(e.to_string());
            }
        }

        if self.config.create_migration {
            let pair = migrations::write_migration_pair(
                &self.config.migrations_dir,
                &migrations::create_slug(&model.names.table),
                &schema::render_create(model),
                &schema::render_drop(model),
            )?;
            scaffold.migration = Some(pair);
        }

        tracing::info!(
            files = scaffold.file_count(),
            model = %model.names.proper,
            "scaffold complete",
        );

        Ok(scaffold)
    }
}

impl Default for Scaffolder {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// Tests
// ============================================================================
