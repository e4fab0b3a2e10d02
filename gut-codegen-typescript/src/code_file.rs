//! Output file holding several declarations under one preamble.

use std::path::Path;

use gut_core::{File, Settings, WriteResult};
use gut_ir::StructuralType;
use tracing::info;

use crate::{
    Error, Result,
    declaration::{NamingOptions, assemble},
    preamble::build_preamble,
    renderer::TypeRenderer,
};

/// A generated TypeScript file.
///
/// Declarations are rendered as they are added and written after the
/// preamble in insertion order. Every declaration gets its own registry.
///
/// # Example
///
/// ```
/// use gut_codegen_typescript::{NamingOptions, TypeScriptFile};
/// use gut_core::Settings;
/// use gut_ir::{Field, StructType};
///
/// let user = StructType::new("User").field(Field::of::<String>("Name").tag("name"));
/// let code = TypeScriptFile::new(Settings::default())
///     .declare(&user.into(), Some(&NamingOptions::new().with_array()))?
///     .render();
///
/// assert!(code.contains("export type UserArray = User[]"));
/// assert!(code.contains("  name: string"));
/// # Ok::<(), gut_codegen_typescript::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeScriptFile {
    settings: Settings,
    body: Vec<String>,
}

impl TypeScriptFile {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            body: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Declare a type.
    pub fn declare(mut self, ty: &StructuralType, options: Option<&NamingOptions>) -> Result<Self> {
        self.declare_type(ty, options)?;
        Ok(self)
    }

    /// Declare a type (mutable).
    pub fn declare_type(
        &mut self,
        ty: &StructuralType,
        options: Option<&NamingOptions>,
    ) -> Result<&mut Self> {
        let declaration = assemble(ty, &mut TypeRenderer::new(), options)?;
        self.body.push(declaration);
        Ok(self)
    }

    /// Append already rendered declarations.
    pub fn push(mut self, content: impl Into<String>) -> Self {
        self.body.push(content.into());
        self
    }

    /// The rendered declarations, without preamble.
    pub fn body(&self) -> String {
        self.body.concat()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Render the preamble followed by the declarations.
    pub fn render(&self) -> String {
        let mut out = build_preamble(&self.settings);
        for declaration in &self.body {
            out.push_str(declaration);
        }
        out
    }

    /// Write the rendered file to `path`.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<WriteResult> {
        write_output(path.as_ref(), self.render())
    }
}

pub(crate) fn write_output(path: &Path, content: String) -> Result<WriteResult> {
    let result = File::new(path, content)
        .write()
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
    match result {
        WriteResult::Written => info!(path = %path.display(), "created"),
        WriteResult::Unchanged => info!(path = %path.display(), "unchanged"),
    }
    Ok(result)
}
