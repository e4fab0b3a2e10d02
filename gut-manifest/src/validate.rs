//! Validation utilities for manifest names.

use miette::SourceSpan;

/// Built-in type names; they cannot be redefined under `[types]`.
pub(crate) const BUILTIN_TYPES: &[&str] = &[
    "bool", "string", "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16",
    "uint32", "uint64", "float32", "float64", "any", "time", "uuid", "duration", "map",
];

/// Check if a name is a built-in type
pub(crate) fn is_builtin(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name)
}

/// Find the span of a name in the TOML source
/// Searches for patterns like `.name]`, `.name.`, or `.name =`
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Search for common TOML patterns where the name appears
    let patterns = [
        format!(".{}]", name), // [types.name]
        format!(".{}.", name), // [[types.name.fields]]
        format!(".{} ", name), // dotted key: types.name = { ... }
        format!(".{}=", name), // dotted key without space
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot
            let start = pos + 1;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    // Fallback: just find the name anywhere (less precise)
    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Find the span of a quoted string value in the TOML source.
///
/// The span covers the value without its quotes.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

/// Validate that a name is a valid type or parameter identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if is_builtin(name) {
        return Some("name shadows a built-in type");
    }

    None
}
