//! # Modelsmith CLI
//!
//! Command-line interface for modelsmith.
//!
//! ## Commands
//!
//! - `generate model` (aliases: `g m`) - Scaffold a model and its migration
//!

pub mod generate;

use clap::{Args, Parser, Subcommand};
use modelsmith_core::ScaffoldResult;
use std::path::PathBuf;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Argument surface
// ============================================================================

/// Scaffolds pop models and fizz migrations for Go applications
#[derive(Debug, Parser)]
#[command(name = "modelsmith", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate application scaffolding
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        target: GenerateTarget,
    },
}

#[derive(Debug, Subcommand)]
pub enum GenerateTarget {
    /// Generate a model for your database
    #[command(visible_alias = "m")]
    Model(ModelArgs),
}

/// Arguments of `generate model`
#[derive(Debug, Args)]
pub struct ModelArgs {
    /// Name of the model to generate
    pub name: String,

    /// Attribute definitions as name:type tokens (type defaults to string)
    pub attributes: Vec<String>,

    /// Skip creating a new fizz migration for this model
    #[arg(short = 's', long)]
    pub skip_migration: bool,

    /// Directory migrations are written to
    #[arg(long, default_value = "./migrations")]
    pub path: PathBuf,
}

// ============================================================================
// Dispatch
// ============================================================================

/// Execute a parsed command.
pub fn run(cli: Cli) -> ScaffoldResult<()> {
    match cli.command {
        Command::Generate { target } => match target {
            GenerateTarget::Model(args) => generate::model(&args),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_model_args_parsing() {
        let cli = Cli::parse_from([
            "modelsmith",
            "generate",
            "model",
            "post",
            "title:text",
            "body:nulls.String",
            "-s",
        ]);
        let Command::Generate {
            target: GenerateTarget::Model(args),
        } = cli.command;
        assert_eq!(args.name, "post");
        assert_eq!(args.attributes, vec!["title:text", "body:nulls.String"]);
        assert!(args.skip_migration);
        assert_eq!(args.path, PathBuf::from("./migrations"));
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::parse_from(["modelsmith", "g", "m", "widget"]);
        let Command::Generate {
            target: GenerateTarget::Model(args),
        } = cli.command;
        assert_eq!(args.name, "widget");
        assert!(args.attributes.is_empty());
        assert!(!args.skip_migration);
    }
}
