mod check;
mod completions;
mod explain;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use explain::ExplainCommand;
use eyre::Result;
use generate::GenerateCommand;
use gut_codegen_typescript::{NamingOptions, TypeScriptFile};
use gut_manifest::{Declaration, Manifest};

/// Extension trait for exiting on diagnostics with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gut_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for gut_codegen_typescript::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "gut")]
#[command(version)]
#[command(about = "Generate TypeScript interfaces from struct shapes")]
pub(crate) struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript interfaces from gut.toml
    Generate(GenerateCommand),

    /// Validate gut.toml without writing output
    Check(CheckCommand),

    /// Show how a type is lowered and rendered
    Explain(ExplainCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Naming options for a declaration; `None` when nothing is configured so
/// the name is not validated.
pub(crate) fn naming_options(
    name: Option<&str>,
    with_array: bool,
    array_name: Option<&str>,
) -> Option<NamingOptions> {
    if name.is_none() && !with_array && array_name.is_none() {
        return None;
    }
    let mut options = NamingOptions::new();
    if let Some(name) = name {
        options = options.name(name);
    }
    if with_array {
        options = options.with_array();
    }
    if let Some(array_name) = array_name {
        options = options.array_type_name(array_name);
    }
    Some(options)
}

fn declaration_options(declaration: &Declaration) -> Option<NamingOptions> {
    naming_options(
        declaration.name.as_deref(),
        declaration.with_array,
        declaration.array_name.as_deref(),
    )
}

/// Lower and declare every emitted type, exiting on the first diagnostic.
pub(crate) fn build_file(manifest: &Manifest) -> (TypeScriptFile, Vec<Declaration>) {
    let declarations = manifest.declarations().unwrap_or_exit();
    let mut file = TypeScriptFile::new(manifest.settings.clone());
    for declaration in &declarations {
        file.declare_type(&declaration.ty, declaration_options(declaration).as_ref())
            .unwrap_or_exit();
    }
    (file, declarations)
}
