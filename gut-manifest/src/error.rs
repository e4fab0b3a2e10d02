use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for gut-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "gut.toml");
/// ctx.unknown_type_error("Usr", "Order", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an invalid type name error.
    pub fn invalid_type_name_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidTypeName {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create a malformed type expression error.
    pub fn invalid_type_expr_error(
        &self,
        expr: impl Into<String>,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidTypeExpr {
            src: self.named_source(),
            span,
            expr: expr.into(),
            message: message.into(),
        })
    }

    /// Create an unknown type error.
    pub fn unknown_type_error(
        &self,
        name: impl Into<String>,
        referenced_by: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownType {
            src: self.named_source(),
            span,
            name: name.into(),
            referenced_by: referenced_by.into(),
        })
    }

    /// Create a generic arity error.
    pub fn generic_arity_error(
        &self,
        name: impl Into<String>,
        expected: usize,
        found: usize,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::GenericArity {
            src: self.named_source(),
            span,
            name: name.into(),
            expected,
            found,
        })
    }

    /// Create a recursive type error.
    pub fn recursive_type_error(
        &self,
        name: impl Into<String>,
        cycle: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::RecursiveType {
            src: self.named_source(),
            span,
            name: name.into(),
            cycle: cycle.into(),
        })
    }

    /// Create a conflicting definition error.
    pub fn conflicting_definition_error(
        &self,
        name: impl Into<String>,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ConflictingDefinition {
            src: self.named_source(),
            span,
            name: name.into(),
            message: message.into(),
        })
    }

    /// Create a duplicate field error.
    pub fn duplicate_field_error(
        &self,
        ty: impl Into<String>,
        field: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateField {
            src: self.named_source(),
            span,
            ty: ty.into(),
            field: field.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a gut.toml or pass its path with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse gut.toml")]
    #[diagnostic(code(gut::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid type name '{name}'")]
    #[diagnostic(
        code(gut::invalid_type_name),
        help("{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore.")
    )]
    InvalidTypeName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("invalid type expression '{expr}'")]
    #[diagnostic(
        code(gut::invalid_type_expr),
        help("type expressions look like 'string', '[]int', 'map[string]*User' or 'Page[User]'")
    )]
    InvalidTypeExpr {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        expr: String,
        message: String,
    },

    #[error("unknown type '{name}'")]
    #[diagnostic(
        code(gut::unknown_type),
        help("declare it under [types.{name}] or use a built-in type such as string, int64, time or uuid")
    )]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("referenced by '{referenced_by}'")]
        span: Option<SourceSpan>,
        name: String,
        referenced_by: String,
    },

    #[error("'{name}' takes {expected} type argument(s) but {found} were given")]
    #[diagnostic(code(gut::generic_arity))]
    GenericArity {
        #[source_code]
        src: NamedSource<String>,
        #[label("wrong number of type arguments")]
        span: Option<SourceSpan>,
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("type '{name}' contains itself")]
    #[diagnostic(
        code(gut::recursive_type),
        help("recursive structs cannot be rendered inline: {cycle}")
    )]
    RecursiveType {
        #[source_code]
        src: NamedSource<String>,
        #[label("recursion starts here")]
        span: Option<SourceSpan>,
        name: String,
        cycle: String,
    },

    #[error("conflicting definition of '{name}'")]
    #[diagnostic(code(gut::conflicting_definition), help("{message}"))]
    ConflictingDefinition {
        #[source_code]
        src: NamedSource<String>,
        #[label("defined here")]
        span: Option<SourceSpan>,
        name: String,
        message: String,
    },

    #[error("duplicate field '{field}' in '{ty}'")]
    #[diagnostic(code(gut::duplicate_field), help("field names must be unique within a type"))]
    DuplicateField {
        #[source_code]
        src: NamedSource<String>,
        #[label("duplicate field")]
        span: Option<SourceSpan>,
        ty: String,
        field: String,
    },
}
