use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use gut_core::WriteResult;
use gut_manifest::GutToml;

use super::{UnwrapOrExit, build_file};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to gut.toml (defaults to ./gut.toml)
    #[arg(short, long, default_value = "gut.toml")]
    pub config: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "types.gen.ts")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let gut_toml = GutToml::open(&self.config).unwrap_or_exit();
        let (file, declarations) = build_file(gut_toml.manifest());

        if self.dry_run {
            println!("── {} ──", self.output.display());
            print!("{}", file.render());
            return Ok(());
        }

        let result = file
            .write(&self.output)
            .wrap_err_with(|| format!("Failed to write {}", self.output.display()))?;

        let status = match result {
            WriteResult::Written => "Generated",
            WriteResult::Unchanged => "Unchanged",
        };
        println!(
            "{}: {} ({} interface{})",
            status,
            self.output.display(),
            declarations.len(),
            if declarations.len() == 1 { "" } else { "s" }
        );
        for declaration in &declarations {
            println!("  + {}", declaration.key);
        }

        Ok(())
    }
}
