//! Manifest types for `gut.toml`.

mod file;
mod parse;
mod validate;

use std::sync::Arc;

pub use file::GutToml;
use gut_core::Settings;
use indexmap::IndexMap;
pub use parse::parse_manifest;
use serde::Deserialize;
pub(crate) use validate::ParseContext;

use crate::error::SourceContext;

/// Root schema for gut.toml
///
/// ```toml
/// [settings]
/// date_type = "string"
///
/// [types.User]
/// fields = [
///     { name = "ID", type = "uuid", tag = "id" },
///     { name = "Name", type = "string", tag = "name,omitempty" },
/// ]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output settings for the generated file.
    #[serde(default)]
    pub settings: Settings,

    /// Type definitions, in declaration order.
    #[serde(default)]
    pub types: IndexMap<String, TypeDef>,

    /// Source the manifest was parsed from, for diagnostics.
    #[serde(skip)]
    source: Option<Arc<SourceContext>>,
}

/// How a type definition is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// A struct with a field list, possibly generic.
    Struct,
    /// A named alias of another type expression.
    Alias,
    /// A substituted instantiation of a generic struct.
    Instance,
}

/// A `[types.<Name>]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDef {
    /// Struct fields, in order.
    #[serde(default)]
    pub fields: Vec<FieldDef>,

    /// Type parameters; a struct with parameters is a generic template.
    #[serde(default)]
    pub params: Vec<String>,

    /// Generic instantiation, e.g. `Page[User]`.
    pub instance: Option<String>,

    /// Aliased type expression, e.g. `string`.
    pub alias: Option<String>,

    /// Declare a collection of this struct rather than the struct itself.
    #[serde(default)]
    pub collection: bool,

    /// Whether `gut generate` declares this type. Defaults to `true` for
    /// structs and instances, `false` for templates and aliases.
    pub emit: Option<bool>,

    /// Interface name override.
    pub name: Option<String>,

    /// Also declare an array alias.
    #[serde(default)]
    pub with_array: bool,

    /// Array alias name override.
    pub array_name: Option<String>,
}

impl TypeDef {
    pub fn kind(&self) -> TypeKind {
        if self.alias.is_some() {
            TypeKind::Alias
        } else if self.instance.is_some() {
            TypeKind::Instance
        } else {
            TypeKind::Struct
        }
    }

    /// Whether this is a generic template.
    pub fn is_template(&self) -> bool {
        !self.params.is_empty()
    }

    /// Whether `gut generate` declares this type.
    pub fn is_emitted(&self) -> bool {
        if self.is_template() {
            return false;
        }
        self.emit.unwrap_or(self.kind() != TypeKind::Alias)
    }
}

/// A struct field.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    /// Declared field name.
    pub name: String,

    /// Type expression.
    #[serde(rename = "type")]
    pub ty: String,

    /// JSON-style tag, e.g. `updated_at,omitempty`.
    pub tag: Option<String>,

    /// Unexported field, skipped when rendering.
    #[serde(default)]
    pub hidden: bool,
}

impl Manifest {
    /// Context for diagnostics against the parsed source.
    ///
    /// Manifests built in code report errors without source spans.
    pub(crate) fn parse_context(&self) -> ParseContext<'_> {
        match &self.source {
            Some(source) => ParseContext::from_source(Arc::clone(source)),
            None => ParseContext::new("", "gut.toml"),
        }
    }

    /// Check if a type is defined.
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Names of the types `gut generate` declares, in order.
    pub fn emitted_types(&self) -> impl Iterator<Item = &str> {
        self.types
            .iter()
            .filter(|(_, def)| def.is_emitted())
            .map(|(name, _)| name.as_str())
    }
}
