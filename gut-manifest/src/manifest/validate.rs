//! Validation context and utilities for manifest parsing.

use std::{collections::HashSet, sync::Arc};

use miette::SourceSpan;

use super::{Manifest, TypeDef, TypeKind};
use crate::{
    Result, TypeExpr,
    error::SourceContext,
    validate::{find_name_span, find_value_span, is_builtin, validate_identifier},
};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest, making it easier to pass validation context
/// through recursive operations.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "gut.toml");
/// ctx.validate_type_name("User")?;
///
/// // For nested validation
/// let nested = ctx.push("User").push("fields");
/// nested.parse_expr("[]Address")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Order", "fields"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self::from_source(Arc::new(SourceContext::new(src, filename)))
    }

    /// Create a parse context sharing an existing source.
    pub fn from_source(source: Arc<SourceContext>) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Find the span of a type name in the source.
    pub fn name_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.src(), name)
    }

    /// Find the span of a string value in the source.
    pub fn value_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.src(), value)
    }

    /// Validate a type or parameter name.
    pub fn validate_type_name(&self, name: &str) -> Result<()> {
        match validate_identifier(name) {
            Some(reason) => Err(self.source.invalid_type_name_error(
                name,
                reason,
                self.name_span(name),
            )),
            None => Ok(()),
        }
    }

    /// Parse a type expression, reporting syntax errors against the source.
    pub fn parse_expr(&self, raw: &str) -> Result<TypeExpr> {
        raw.parse::<TypeExpr>().map_err(|err| {
            self.source
                .invalid_type_expr_error(raw, err.to_string(), self.value_span(raw))
        })
    }
}

/// Validate the manifest after parsing.
pub(crate) fn validate_manifest<'a>(manifest: &'a Manifest, ctx: &ParseContext<'a>) -> Result<()> {
    for (name, def) in &manifest.types {
        ctx.validate_type_name(name)?;
        let type_ctx = ctx.push(name);
        validate_definition(manifest, name, def, &type_ctx)?;
    }
    Ok(())
}

fn validate_definition(
    manifest: &Manifest,
    name: &str,
    def: &TypeDef,
    ctx: &ParseContext<'_>,
) -> Result<()> {
    let conflict = |message: &str| {
        ctx.source_context()
            .conflicting_definition_error(name, message, ctx.name_span(name))
    };

    if def.alias.is_some() && def.instance.is_some() {
        return Err(conflict("a type is either an alias or an instance, not both"));
    }
    if def.kind() != TypeKind::Struct && (!def.fields.is_empty() || def.is_template()) {
        return Err(conflict("aliases and instances cannot declare fields or params"));
    }
    if def.kind() == TypeKind::Alias && def.collection {
        return Err(conflict("aliases cannot be collections, alias a '[]T' expression instead"));
    }
    if def.is_template() && def.emit == Some(true) {
        return Err(conflict("generic templates are never emitted, declare an instance instead"));
    }

    let mut params = HashSet::new();
    for param in &def.params {
        ctx.validate_type_name(param)?;
        if !params.insert(param.as_str()) {
            return Err(conflict("type parameters must be unique"));
        }
    }

    let mut seen = HashSet::new();
    for field in &def.fields {
        if !seen.insert(field.name.as_str()) {
            return Err(ctx.source_context().duplicate_field_error(
                name,
                &field.name,
                ctx.value_span(&field.name),
            ));
        }
        check_references(manifest, &params, &field.ty, ctx)?;
    }

    for raw in [&def.alias, &def.instance].into_iter().flatten() {
        check_references(manifest, &params, raw, ctx)?;
    }
    Ok(())
}

/// Parse `raw` and check every name it references is defined.
fn check_references(
    manifest: &Manifest,
    params: &HashSet<&str>,
    raw: &str,
    ctx: &ParseContext<'_>,
) -> Result<()> {
    let expr = ctx.parse_expr(raw)?;
    for referenced in expr.names() {
        if !is_builtin(referenced) && !params.contains(referenced) && !manifest.has_type(referenced)
        {
            return Err(ctx.source_context().unknown_type_error(
                referenced,
                ctx.path_string(),
                ctx.value_span(raw),
            ));
        }
    }
    Ok(())
}
