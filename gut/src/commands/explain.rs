use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use gut_codegen_typescript::convert_with_registry;
use gut_manifest::GutToml;

use super::{UnwrapOrExit, naming_options};

#[derive(Args)]
pub struct ExplainCommand {
    /// Type to explain, as named under [types]
    pub name: String,

    /// Path to gut.toml (defaults to ./gut.toml)
    #[arg(short, long, default_value = "gut.toml")]
    pub config: PathBuf,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let gut_toml = GutToml::open(&self.config).unwrap_or_exit();
        let manifest = gut_toml.manifest();
        let ty = manifest.lower_type(&self.name).unwrap_or_exit();

        println!("── Structural type ──");
        println!(
            "{}",
            serde_json::to_string_pretty(&ty).wrap_err("Failed to serialize type")?
        );
        println!();

        let options = manifest.types.get(&self.name).and_then(|def| {
            naming_options(def.name.as_deref(), def.with_array, def.array_name.as_deref())
        });

        match convert_with_registry(&ty, options.as_ref()) {
            Ok((declaration, registry)) => {
                println!("── Declaration ──");
                print!("{}", declaration);
                if !registry.is_empty() {
                    println!("── Named types ──");
                    for (name, token) in registry.iter() {
                        println!("  {} -> {}", name, token);
                    }
                }
            }
            Err(e) => {
                println!("── Declaration ──");
                println!("  not declarable on its own: {}", e);
            }
        }

        Ok(())
    }
}
