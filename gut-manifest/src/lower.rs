//! Lowering manifest definitions into structural types.
//!
//! Generic templates are expanded at their use sites: every `Page[User]`
//! becomes a fresh struct with `User` substituted for the template's
//! parameter, so the renderer only ever sees concrete shapes.

use std::collections::HashMap;

use gut_ir::{Field, PrimitiveKind, PrimitiveType, StructType, StructuralType};
use tracing::debug;

use crate::{
    Error, Result, TypeExpr,
    manifest::{Manifest, ParseContext, TypeDef, TypeKind},
};

/// Type parameters bound to their lowered arguments.
type Scope<'m> = HashMap<&'m str, StructuralType>;

/// A type `gut generate` declares, with its naming options.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Key under `[types]`.
    pub key: String,
    pub ty: StructuralType,
    /// Interface name override.
    pub name: Option<String>,
    pub with_array: bool,
    pub array_name: Option<String>,
}

impl Declaration {
    /// Whether any naming option is set.
    pub fn has_naming_options(&self) -> bool {
        self.name.is_some() || self.with_array || self.array_name.is_some()
    }
}

impl Manifest {
    /// Lower a single type definition.
    ///
    /// Templates cannot be lowered on their own; they need arguments.
    pub fn lower_type(&self, name: &str) -> Result<StructuralType> {
        let mut lowerer = Lowerer::new(self);
        lowerer.lower_expr(&TypeExpr::named(name), name, &Scope::new())
    }

    /// Lower every emitted type, in declaration order.
    pub fn declarations(&self) -> Result<Vec<Declaration>> {
        self.types
            .iter()
            .filter(|(_, def)| def.is_emitted())
            .map(|(key, def)| {
                Ok(Declaration {
                    key: key.clone(),
                    ty: self.lower_type(key)?,
                    name: def.name.clone(),
                    with_array: def.with_array,
                    array_name: def.array_name.clone(),
                })
            })
            .collect()
    }
}

struct Lowerer<'m> {
    manifest: &'m Manifest,
    ctx: ParseContext<'m>,
    /// Definitions currently being expanded, outermost first.
    stack: Vec<&'m str>,
}

impl<'m> Lowerer<'m> {
    fn new(manifest: &'m Manifest) -> Self {
        Self {
            manifest,
            ctx: manifest.parse_context(),
            stack: Vec::new(),
        }
    }

    fn referenced_by(&self) -> String {
        match self.stack.last() {
            Some(name) => name.to_string(),
            None => self.ctx.source_context().filename().to_string(),
        }
    }

    fn arity_error(&self, name: &str, expected: usize, found: usize, raw: &str) -> Box<Error> {
        let span = self.ctx.value_span(raw).or_else(|| self.ctx.name_span(name));
        self.ctx
            .source_context()
            .generic_arity_error(name, expected, found, span)
    }

    /// Lower `expr`, a parsed form of `raw`, with type parameters from `scope`.
    fn lower_expr(
        &mut self,
        expr: &TypeExpr,
        raw: &str,
        scope: &Scope<'m>,
    ) -> Result<StructuralType> {
        match expr {
            TypeExpr::Named { name, args } => self.lower_named(name, args, raw, scope),
            TypeExpr::Slice(elem) => Ok(StructuralType::slice(self.lower_expr(elem, raw, scope)?)),
            TypeExpr::Map(key, value) => Ok(StructuralType::map(
                self.lower_expr(key, raw, scope)?,
                self.lower_expr(value, raw, scope)?,
            )),
            TypeExpr::Pointer(inner) => {
                Ok(StructuralType::optional(self.lower_expr(inner, raw, scope)?))
            }
        }
    }

    fn lower_named(
        &mut self,
        name: &str,
        args: &[TypeExpr],
        raw: &str,
        scope: &Scope<'m>,
    ) -> Result<StructuralType> {
        if let Some(bound) = scope.get(name) {
            if !args.is_empty() {
                return Err(self.arity_error(name, 0, args.len(), raw));
            }
            return Ok(bound.clone());
        }

        if let Some(builtin) = builtin(name) {
            if !args.is_empty() {
                return Err(self.arity_error(name, 0, args.len(), raw));
            }
            return Ok(builtin);
        }

        let manifest = self.manifest;
        let Some((key, def)) = manifest.types.get_key_value(name) else {
            return Err(self.ctx.source_context().unknown_type_error(
                name,
                self.referenced_by(),
                self.ctx.value_span(raw),
            ));
        };

        if def.params.len() != args.len() {
            return Err(self.arity_error(name, def.params.len(), args.len(), raw));
        }

        let args = args
            .iter()
            .map(|arg| self.lower_expr(arg, raw, scope))
            .collect::<Result<Vec<_>>>()?;

        if let Some(start) = self.stack.iter().position(|entry| *entry == name) {
            let mut cycle = self.stack[start..].to_vec();
            cycle.push(key);
            return Err(self.ctx.source_context().recursive_type_error(
                name,
                cycle.join(" -> "),
                self.ctx.name_span(name),
            ));
        }

        self.stack.push(key);
        let lowered = self.lower_def(key, def, args);
        self.stack.pop();
        lowered
    }

    fn lower_def(
        &mut self,
        name: &'m str,
        def: &'m TypeDef,
        args: Vec<StructuralType>,
    ) -> Result<StructuralType> {
        let scope: Scope<'m> = def.params.iter().map(String::as_str).zip(args).collect();

        let ty = match (def.kind(), def.alias.as_deref(), def.instance.as_deref()) {
            (TypeKind::Alias, Some(raw), _) | (TypeKind::Instance, _, Some(raw)) => {
                let expr = self.ctx.parse_expr(raw)?;
                rename(self.lower_expr(&expr, raw, &scope)?, name)
            }
            _ => {
                let mut st = StructType::new(name);
                for field in &def.fields {
                    let expr = self.ctx.parse_expr(&field.ty)?;
                    let mut lowered = Field::new(&field.name, self.lower_expr(&expr, &field.ty, &scope)?);
                    if let Some(tag) = &field.tag {
                        lowered = lowered.tag(tag);
                    }
                    if field.hidden {
                        lowered = lowered.hidden();
                    }
                    st = st.field(lowered);
                }
                if def.collection {
                    StructuralType::slice(st)
                } else {
                    st.into()
                }
            }
        };

        debug!(name, kind = ?def.kind(), "lowered type");
        Ok(ty)
    }
}

/// Built-in type names and their shapes.
fn builtin(name: &str) -> Option<StructuralType> {
    match name {
        "time" => Some(StructuralType::date()),
        "uuid" => Some(StructuralType::uuid()),
        "duration" => Some(StructuralType::duration()),
        _ => PrimitiveKind::from_name(name).map(StructuralType::primitive),
    }
}

/// Give an aliased or instantiated type the definition's name.
///
/// Well-known named types (`uuid`, `duration`, `time`) keep their own name,
/// and composite types have no name to give.
fn rename(ty: StructuralType, name: &str) -> StructuralType {
    match ty {
        StructuralType::Primitive(PrimitiveType { kind, name: None }) => {
            StructuralType::named(kind, name)
        }
        StructuralType::Struct(mut st) if !st.is_date => {
            st.name = Some(name.to_string());
            st.into()
        }
        other => other,
    }
}
