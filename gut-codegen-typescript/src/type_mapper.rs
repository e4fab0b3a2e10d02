//! Primitive kind to TypeScript type mapping.

use gut_ir::PrimitiveKind;

use crate::registry::BIG_INT_ALIAS;

/// Maps primitive kinds to their TypeScript counterparts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl TypeScriptTypeMapper {
    /// The TypeScript type for `kind`.
    ///
    /// Returns `None` for [`PrimitiveKind::Any`], whose rendering depends on
    /// the declared name and the alias registry.
    pub fn map_kind(&self, kind: PrimitiveKind) -> Option<&'static str> {
        match kind {
            PrimitiveKind::String => Some("string"),
            PrimitiveKind::Bool => Some("boolean"),
            PrimitiveKind::Int64 | PrimitiveKind::Uint64 => Some(BIG_INT_ALIAS),
            kind if kind.is_number() => Some("number"),
            _ => None,
        }
    }
}
