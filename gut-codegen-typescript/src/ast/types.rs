//! `export type` aliases.

use gut_codegen::{CodeBuilder, CodeFragment, Renderable};

/// An exported type alias, `export type Name = Type`.
///
/// Written without a trailing semicolon, like every line gut emits.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Alias for an array of `element`.
    pub fn array_of(name: impl Into<String>, element: &str) -> Self {
        Self::new(name, format!("{}[]", element))
    }

    fn declaration(&self) -> String {
        format!("export type {} = {}", self.name, self.ty)
    }

    pub fn build(&self) -> String {
        CodeBuilder::typescript().line(&self.declaration()).build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.declaration())]
    }
}
