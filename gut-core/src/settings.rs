//! Output settings for generated TypeScript files.

use serde::Deserialize;

/// TypeScript type used for `DateType` when none is configured.
pub const DEFAULT_DATE_TYPE: &str = "Date";

/// TypeScript type used for `UuidType` when none is configured.
pub const DEFAULT_UUID_TYPE: &str = "string";

/// TypeScript type used for `BigIntType` when none is configured.
pub const DEFAULT_BIG_INT_TYPE: &str = "BigInt";

/// Settings for a generated file.
///
/// Chooses the TypeScript types that stand in for date/time values,
/// identifiers and 64-bit integers, and an optional first line. Empty or
/// missing values fall back to the defaults.
///
/// Deserializes from the `[settings]` table of `gut.toml`:
///
/// ```toml
/// [settings]
/// first_line = "// Code generated by gut. DO NOT EDIT."
/// date_type = "string"
/// big_int_type = "number"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Written at the top of the file, followed by a newline if it has none.
    pub first_line: Option<String>,
    pub date_type: Option<String>,
    pub uuid_type: Option<String>,
    pub big_int_type: Option<String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_line(mut self, line: impl Into<String>) -> Self {
        self.first_line = Some(line.into());
        self
    }

    pub fn with_date_type(mut self, ty: impl Into<String>) -> Self {
        self.date_type = Some(ty.into());
        self
    }

    pub fn with_uuid_type(mut self, ty: impl Into<String>) -> Self {
        self.uuid_type = Some(ty.into());
        self
    }

    pub fn with_big_int_type(mut self, ty: impl Into<String>) -> Self {
        self.big_int_type = Some(ty.into());
        self
    }

    /// The first line, if one is set and non-empty.
    pub fn first_line(&self) -> Option<&str> {
        non_empty(&self.first_line)
    }

    pub fn date_type(&self) -> &str {
        non_empty(&self.date_type).unwrap_or(DEFAULT_DATE_TYPE)
    }

    pub fn uuid_type(&self) -> &str {
        non_empty(&self.uuid_type).unwrap_or(DEFAULT_UUID_TYPE)
    }

    pub fn big_int_type(&self) -> &str {
        non_empty(&self.big_int_type).unwrap_or(DEFAULT_BIG_INT_TYPE)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
