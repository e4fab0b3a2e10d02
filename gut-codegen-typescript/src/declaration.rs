//! Top-level interface declarations.

use gut_codegen::CodeBuilder;
use gut_ir::{StructType, StructuralType};
use tracing::debug;

use crate::{
    Error, Result,
    ast::{Interface, TypeAlias},
    naming::validate_type_name,
    renderer::TypeRenderer,
};

/// Naming options for one declaration.
///
/// ```
/// use gut_codegen_typescript::NamingOptions;
///
/// let options = NamingOptions::new()
///     .name("SingleRow")
///     .with_array()
///     .array_type_name("Rows");
/// assert_eq!(options.name.as_deref(), Some("SingleRow"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingOptions {
    /// Interface name, defaults to the type's declared name.
    pub name: Option<String>,
    /// Also declare an array alias of the interface.
    pub is_array: bool,
    /// Array alias name, defaults to `<Name>Array`.
    pub array_type_name: Option<String>,
}

impl NamingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_array(mut self) -> Self {
        self.is_array = true;
        self
    }

    pub fn array_type_name(mut self, name: impl Into<String>) -> Self {
        self.array_type_name = Some(name.into());
        self
    }

    fn custom_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    fn custom_array_name(&self) -> Option<&str> {
        self.array_type_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// What a top-level type declares, before rendering.
struct Target<'a> {
    st: &'a StructType,
    name: String,
    array_name: Option<String>,
}

fn resolve_target<'a>(ty: &'a StructuralType, options: Option<&NamingOptions>) -> Result<Target<'a>> {
    let custom_name = options.and_then(NamingOptions::custom_name);
    let custom_array_name = options.and_then(NamingOptions::custom_array_name);

    if let Some(st) = ty.collection_element() {
        let name = custom_name
            .or(st.declared_name())
            .ok_or(Error::EmptyArrayName)?
            .to_string();
        validate_type_name(&name)?;
        let array_name = array_alias_name(&name, custom_array_name)?;
        return Ok(Target {
            st,
            name,
            array_name: Some(array_name),
        });
    }

    let st = ty
        .as_struct()
        .filter(|st| !st.is_date)
        .ok_or_else(|| Error::NotAStruct { ty: ty.to_string() })?;

    let is_array = options.is_some_and(|options| options.is_array);
    let name = custom_name
        .or(st.declared_name())
        .ok_or(if is_array {
            Error::EmptyArrayName
        } else {
            Error::EmptyName
        })?
        .to_string();

    let Some(options) = options else {
        return Ok(Target {
            st,
            name,
            array_name: None,
        });
    };

    validate_type_name(&name)?;
    let array_name = if options.is_array {
        Some(array_alias_name(&name, custom_array_name)?)
    } else {
        None
    };
    Ok(Target {
        st,
        name,
        array_name,
    })
}

fn array_alias_name(name: &str, custom: Option<&str>) -> Result<String> {
    match custom {
        Some(custom) => {
            validate_type_name(custom)?;
            Ok(custom.to_string())
        }
        None => Ok(format!("{}Array", name)),
    }
}

/// Declare `ty` as an exported interface, preceded by an array alias when
/// requested or when `ty` is a collection of structs.
///
/// The declaration ends with a blank line so declarations concatenate.
pub fn assemble(
    ty: &StructuralType,
    renderer: &mut TypeRenderer,
    options: Option<&NamingOptions>,
) -> Result<String> {
    let target = resolve_target(ty, options)?;
    debug!(
        name = %target.name,
        array = target.array_name.as_deref(),
        "declaring interface"
    );

    let interface = Interface::new(&target.name).members(renderer.struct_members(target.st));

    let mut builder = CodeBuilder::typescript();
    if let Some(array_name) = &target.array_name {
        builder
            .emit(&TypeAlias::array_of(array_name, &target.name))
            .push_blank();
    }
    builder.emit(&interface).push_blank();
    Ok(builder.build())
}
