//! `generate model` command execution
//!
//! Ties the pipeline together: assemble the model, write the scaffold,
//! then echo the generated source (as written, post-formatting) to stdout
//! and report created files on stderr.

use colored::Colorize;
use modelsmith_codegen::{ScaffoldConfig, Scaffolder};
use modelsmith_core::{ScaffoldError, ScaffoldResult};
use modelsmith_ir::Model;
use std::fs;

use crate::ModelArgs;

/// Scaffold a model from parsed command-line arguments.
pub fn model(args: &ModelArgs) -> ScaffoldResult<()> {
    let model = Model::assemble(&args.name, &args.attributes)?;

    let mut config = ScaffoldConfig::new().with_migrations_dir(&args.path);
    if args.skip_migration {
        config = config.without_migration();
    }

    let scaffolder = Scaffolder::new(config);
    let scaffold = scaffolder.scaffold_and_write(&model)?;

    // Echo the file as it landed on disk, after any gofmt pass.
    let model_path = scaffolder.model_path(&model);
    let source = fs::read_to_string(&model_path).map_err(|e| ScaffoldError::FileRead {
        path: model_path.clone(),
        message: e.to_string(),
    })?;
    println!("{}", source);

    for file in &scaffold.files {
        eprintln!("{} {}", "created".green().bold(), file.path.display());
    }
    if let Some(pair) = &scaffold.migration {
        eprintln!("{} {}", "created".green().bold(), pair.up.display());
        eprintln!("{} {}", "created".green().bold(), pair.down.display());
    }
    for warning in &scaffold.warnings {
        eprintln!("{} {}", "warning".yellow().bold(), warning);
    }

    Ok(())
}
