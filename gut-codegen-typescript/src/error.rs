use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for TypeScript generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while declaring or writing TypeScript types.
///
/// Naming and shape errors are programming errors in the caller's type
/// descriptions; see [`Error::is_fatal`].
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid TypeScript type name '{name}'")]
    #[diagnostic(
        code(gut::invalid_name),
        help(
            "{reason}. Type names start with a letter, '_' or '$' and contain only letters, digits, '_' and '$'."
        )
    )]
    InvalidName { name: String, reason: &'static str },

    #[error("'{name}' is a TypeScript reserved word")]
    #[diagnostic(
        code(gut::reserved_name),
        help("rename the type, e.g. '{name}Type' or '{name}Data'")
    )]
    ReservedName { name: String },

    #[error("the interface name cannot be empty")]
    #[diagnostic(
        code(gut::empty_name),
        help("anonymous structs need a name, pass one through NamingOptions::name")
    )]
    EmptyName,

    #[error("the name for the array of structs cannot be empty")]
    #[diagnostic(
        code(gut::empty_array_name),
        help("collections of anonymous structs need a name, pass one through NamingOptions::name")
    )]
    EmptyArrayName,

    #[error("cannot declare an interface for '{ty}'")]
    #[diagnostic(
        code(gut::not_a_struct),
        help("only structs and collections of structs can be declared")
    )]
    NotAStruct { ty: String },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(gut::write_error))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the error comes from an invalid type description rather than
    /// the environment. Fatal errors must abort the generation run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::Write { .. })
    }
}
