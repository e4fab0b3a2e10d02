use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gut_manifest::{GutToml, TypeKind};

use super::{UnwrapOrExit, build_file};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to gut.toml (defaults to ./gut.toml)
    #[arg(short, long, default_value = "gut.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let gut_toml = GutToml::open(&self.config).unwrap_or_exit();
        let manifest = gut_toml.manifest();

        // Lowering and rendering surface every error generate would hit
        let (_, declarations) = build_file(manifest);

        println!("✓ {} is valid\n", self.config.display());

        let count = declarations.len();
        println!("  {} type{} to declare:", count, if count == 1 { "" } else { "s" });
        for declaration in &declarations {
            let is_array = declaration.with_array || declaration.ty.collection_element().is_some();
            println!(
                "    {}{}",
                declaration.key,
                if is_array { " (with array alias)" } else { "" }
            );
        }

        let skipped: Vec<_> = manifest
            .types
            .iter()
            .filter(|(_, def)| !def.is_emitted())
            .map(|(name, def)| {
                let kind = if def.is_template() {
                    "template"
                } else if def.kind() == TypeKind::Alias {
                    "alias"
                } else {
                    "not emitted"
                };
                format!("{} ({})", name, kind)
            })
            .collect();
        if !skipped.is_empty() {
            println!("\n  {} helper type{}:", skipped.len(), if skipped.len() == 1 { "" } else { "s" });
            for entry in skipped {
                println!("    {}", entry);
            }
        }

        Ok(())
    }
}
