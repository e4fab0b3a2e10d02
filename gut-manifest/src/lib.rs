//! `gut.toml` manifests for the gut TypeScript generator.
//!
//! A manifest declares struct shapes, aliases and generic templates in TOML.
//! Parsing validates names and references against the source so errors point
//! at the offending line; lowering turns each emitted definition into a
//! [`gut_ir::StructuralType`] for the renderer.
//!
//! ```
//! let manifest = gut_manifest::parse_manifest(
//!     r#"
//!     [types.User]
//!     fields = [{ name = "Name", type = "string", tag = "name" }]
//!     "#,
//!     "gut.toml",
//! )
//! .unwrap();
//!
//! let declarations = manifest.declarations().unwrap();
//! assert_eq!(declarations[0].key, "User");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod lower;
mod manifest;
mod type_expr;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use lower::Declaration;
pub use manifest::{FieldDef, GutToml, Manifest, TypeDef, TypeKind, parse_manifest};
pub use type_expr::{ParseError, TypeExpr};
