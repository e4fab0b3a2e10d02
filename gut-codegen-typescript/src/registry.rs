//! Per-conversion registry of named types.

use std::fmt;

use gut_ir::IDENTIFIER_TYPE_NAME;
use indexmap::IndexMap;
use tracing::debug;

/// Alias the identifier type renders as.
pub const UUID_ALIAS: &str = "UuidType";

/// Alias 64-bit integers render as.
pub const BIG_INT_ALIAS: &str = "BigIntType";

/// Alias the date/time struct renders as.
pub const DATE_ALIAS: &str = "DateType";

/// What a registered name renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasToken {
    /// The identifier type, rendered as [`UUID_ALIAS`].
    Identifier,
    /// Any other named type, rendered as its own name.
    Named(String),
}

impl AliasToken {
    pub fn for_name(name: &str) -> Self {
        if name == IDENTIFIER_TYPE_NAME {
            AliasToken::Identifier
        } else {
            AliasToken::Named(name.to_string())
        }
    }
}

impl fmt::Display for AliasToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasToken::Identifier => f.write_str(UUID_ALIAS),
            AliasToken::Named(name) => f.write_str(name),
        }
    }
}

/// Named types seen during one conversion, in first-seen order.
///
/// A name is registered the first time the renderer meets it; later
/// registrations of the same name are ignored.
#[derive(Debug, Clone, Default)]
pub struct AliasRegistry {
    entries: IndexMap<String, AliasToken>,
}

impl AliasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`, returning `true` if it was not seen before.
    pub fn register(&mut self, name: &str) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        let token = AliasToken::for_name(name);
        debug!(name, alias = %token, "registered named type");
        self.entries.insert(name.to_string(), token);
        true
    }

    pub fn get(&self, name: &str) -> Option<&AliasToken> {
        self.entries.get(name)
    }

    /// Registered names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AliasToken)> {
        self.entries.iter().map(|(name, token)| (name.as_str(), token))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
