//! TypeScript interface generator for gut.
//!
//! Converts [`StructuralType`] descriptions into exported TypeScript
//! interfaces and writes them, behind a preamble of shared aliases, to disk.
//!
//! # Usage
//!
//! ```no_run
//! use gut_codegen_typescript::{NamingOptions, convert, emit};
//! use gut_core::Settings;
//! use gut_ir::{Describe, Field, StructType, StructuralType, Uuid};
//!
//! struct Employee;
//!
//! impl Describe for Employee {
//!     fn describe() -> StructuralType {
//!         StructType::new("Employee")
//!             .field(Field::of::<Uuid>("UserID").tag("user_id"))
//!             .field(Field::of::<String>("Name").tag("name,omitempty"))
//!             .into()
//!     }
//! }
//!
//! let content = convert(&Employee::describe(), Some(&NamingOptions::new().with_array()))?;
//! emit("types.gen.ts", &content, Some(&Settings::default()))?;
//! # Ok::<(), gut_codegen_typescript::Error>(())
//! ```
//!
//! # Generated Output
//!
//! ```text
//! export type UuidType = string
//! export type BigIntType = BigInt
//! export type DateType = Date
//!
//! export type EmployeeArray = Employee[]
//!
//! export interface Employee {
//!   user_id: UuidType
//!   name?: string
//! }
//! ```

mod code_file;
mod declaration;
mod error;
mod field;
mod preamble;
mod registry;
mod renderer;
mod type_mapper;

pub mod ast;
pub mod naming;

use std::path::Path;

pub use code_file::TypeScriptFile;
pub use declaration::{NamingOptions, assemble};
pub use error::{Error, Result};
pub use field::resolve_field_name;
use gut_core::{Settings, WriteResult};
use gut_ir::{Describe, StructuralType};
pub use preamble::build_preamble;
pub use registry::{AliasRegistry, AliasToken, BIG_INT_ALIAS, DATE_ALIAS, UUID_ALIAS};
pub use renderer::TypeRenderer;
pub use type_mapper::TypeScriptTypeMapper;

/// Convert a struct, or a collection of structs, into an interface
/// declaration.
///
/// Each call uses a fresh alias registry.
pub fn convert(ty: &StructuralType, options: Option<&NamingOptions>) -> Result<String> {
    convert_with_registry(ty, options).map(|(declaration, _)| declaration)
}

/// Like [`convert`], also returning the named types met while rendering.
pub fn convert_with_registry(
    ty: &StructuralType,
    options: Option<&NamingOptions>,
) -> Result<(String, AliasRegistry)> {
    let mut renderer = TypeRenderer::new();
    let declaration = assemble(ty, &mut renderer, options)?;
    Ok((declaration, renderer.into_registry()))
}

/// Convert a type implementing [`Describe`].
pub fn convert_type<T: Describe + ?Sized>(options: Option<&NamingOptions>) -> Result<String> {
    convert(&T::describe(), options)
}

/// Write the preamble for `settings` followed by `content` to `path`.
///
/// Without settings the defaults are used. Parent directories are created.
pub fn emit(
    path: impl AsRef<Path>,
    content: &str,
    settings: Option<&Settings>,
) -> Result<WriteResult> {
    let default_settings = Settings::default();
    let settings = settings.unwrap_or(&default_settings);
    let mut output = build_preamble(settings);
    output.push_str(content);
    code_file::write_output(path.as_ref(), output)
}
