//! Recursive rendering of structural types to TypeScript type expressions.

use gut_codegen::CodeBuilder;
use gut_ir::{PrimitiveKind, PrimitiveType, StructType, StructuralType};

use crate::{
    field::resolve_field_name,
    naming::property_key,
    registry::{AliasRegistry, DATE_ALIAS},
    type_mapper::TypeScriptTypeMapper,
};

/// Renders structural types while recording named types in a registry.
///
/// One renderer is scoped to one conversion. Object literals are rendered
/// multi-line with two-space indentation; nested literals are re-indented by
/// the enclosing object.
///
/// ```
/// use gut_codegen_typescript::TypeRenderer;
/// use gut_ir::{Field, PrimitiveKind, StructType, StructuralType};
///
/// let ty = StructuralType::map(
///     StructuralType::string(),
///     StructType::anonymous().field(Field::new("id", PrimitiveKind::Int64)),
/// );
///
/// let mut renderer = TypeRenderer::new();
/// assert_eq!(renderer.render(&ty), "{[key: string]: {\n  id: BigIntType\n}}");
/// ```
#[derive(Debug, Default)]
pub struct TypeRenderer {
    registry: AliasRegistry,
    mapper: TypeScriptTypeMapper,
}

impl TypeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue rendering with an existing registry.
    pub fn with_registry(registry: AliasRegistry) -> Self {
        Self {
            registry,
            mapper: TypeScriptTypeMapper,
        }
    }

    pub fn registry(&self) -> &AliasRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> AliasRegistry {
        self.registry
    }

    /// Render a type expression.
    pub fn render(&mut self, ty: &StructuralType) -> String {
        match ty {
            StructuralType::Primitive(p) => self.render_primitive(p),
            StructuralType::Struct(st) if st.is_date => DATE_ALIAS.to_string(),
            StructuralType::Struct(st) => self.render_object(st),
            StructuralType::Slice { elem } => format!("{}[]", self.render(elem)),
            StructuralType::Map { key, value } => {
                let key = self.render(key);
                let value = self.render(value);
                format!("{{[key: {}]: {}}}", key, value)
            }
            StructuralType::Optional { inner } => self.render(inner),
        }
    }

    /// Render a type, splicing struct members when `inline_context` is set.
    ///
    /// In inline context a struct yields its member lines without braces;
    /// every other type renders as with [`TypeRenderer::render`].
    pub fn render_with(&mut self, ty: &StructuralType, inline_context: bool) -> String {
        match ty.as_struct() {
            Some(st) if inline_context && !st.is_date => self.struct_members(st).join("\n"),
            _ => self.render(ty),
        }
    }

    /// Member lines of a struct, with inline fields spliced in place.
    ///
    /// Members may span several lines when their type is an object literal.
    pub fn struct_members(&mut self, st: &StructType) -> Vec<String> {
        let mut members = Vec::new();
        for field in st.visible_fields() {
            let inline = field.parsed_tag().inline
                && field.ty.as_struct().is_some_and(|inner| !inner.is_date);
            if inline {
                let spliced = self.render_with(&field.ty, true);
                if !spliced.is_empty() {
                    members.push(spliced);
                }
                continue;
            }

            let (name, optional) = resolve_field_name(field);
            let ty = self.render(&field.ty);
            let marker = if optional { "?" } else { "" };
            members.push(format!("{}{}: {}", property_key(&name), marker, ty));
        }
        members
    }

    fn render_object(&mut self, st: &StructType) -> String {
        let members = self.struct_members(st);
        if members.is_empty() {
            return "{}".to_string();
        }

        let mut builder = CodeBuilder::typescript();
        builder.push_line("{").push_indent();
        for member in &members {
            builder.push_text(member);
        }
        builder.push_dedent().push_raw("}");
        builder.build()
    }

    fn render_primitive(&mut self, p: &PrimitiveType) -> String {
        if let Some(name) = p.declared_name() {
            self.registry.register(name);
        }

        if let Some(ts) = self.mapper.map_kind(p.kind) {
            return ts.to_string();
        }

        debug_assert_eq!(p.kind, PrimitiveKind::Any);
        match p.declared_name().and_then(|name| self.registry.get(name)) {
            Some(token) => token.to_string(),
            None => "any".to_string(),
        }
    }
}
