//! TypeScript naming rules for declared types and properties.

use crate::{Error, Result};

/// Words that cannot be used as a declared type name.
///
/// Compared case-insensitively, so `Class` and `STRING` are rejected too.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "as",
    "async",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "declare",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "from",
    "function",
    "get",
    "if",
    "implements",
    "import",
    "in",
    "infer",
    "instanceof",
    "interface",
    "is",
    "keyof",
    "let",
    "module",
    "namespace",
    "never",
    "new",
    "null",
    "number",
    "object",
    "package",
    "private",
    "protected",
    "public",
    "readonly",
    "require",
    "return",
    "set",
    "static",
    "string",
    "super",
    "switch",
    "symbol",
    "this",
    "throw",
    "true",
    "try",
    "type",
    "typeof",
    "unique",
    "unknown",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Check whether `name` is a reserved word, ignoring case.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(name))
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Check the identifier syntax, returning the reason it is invalid.
pub fn identifier_error(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("name cannot be empty");
    };
    if first.is_ascii_digit() {
        return Some("name cannot start with a digit");
    }
    if !is_identifier_start(first) {
        return Some("name must start with a letter, '_' or '$'");
    }
    if !chars.all(is_identifier_continue) {
        return Some("name contains invalid characters");
    }
    None
}

/// Whether `name` can be written as a bare identifier.
pub fn is_identifier(name: &str) -> bool {
    identifier_error(name).is_none()
}

/// Validate a name used for an exported interface or type alias.
pub fn validate_type_name(name: &str) -> Result<()> {
    if let Some(reason) = identifier_error(name) {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason,
        });
    }
    if is_reserved(name) {
        return Err(Error::ReservedName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Render a property key, quoting it when it is not a plain identifier.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
    }
}
