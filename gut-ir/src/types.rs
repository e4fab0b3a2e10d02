//! Core type definitions.

use std::fmt;

use serde::Serialize;

use crate::FieldTag;

/// Declared name of the well-known identifier type.
pub const IDENTIFIER_TYPE_NAME: &str = "UUID";

/// Declared name of the well-known date/time struct.
pub const DATE_TYPE_NAME: &str = "Time";

/// Declared name of the nanosecond duration type (a named 64-bit integer).
pub const DURATION_TYPE_NAME: &str = "Duration";

/// Primitive kinds understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Bool,
    /// Platform sized signed integer.
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    /// Platform sized unsigned integer.
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
    /// Interface, dynamic or otherwise unmapped kind.
    Any,
}

impl PrimitiveKind {
    /// Every kind, in declaration order.
    pub const ALL: [PrimitiveKind; 15] = [
        PrimitiveKind::Bool,
        PrimitiveKind::Int,
        PrimitiveKind::Int8,
        PrimitiveKind::Int16,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::Uint,
        PrimitiveKind::Uint8,
        PrimitiveKind::Uint16,
        PrimitiveKind::Uint32,
        PrimitiveKind::Uint64,
        PrimitiveKind::Float32,
        PrimitiveKind::Float64,
        PrimitiveKind::String,
        PrimitiveKind::Any,
    ];

    /// Get the canonical (Go flavoured) name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Int8 => "int8",
            PrimitiveKind::Int16 => "int16",
            PrimitiveKind::Int32 => "int32",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::Uint => "uint",
            PrimitiveKind::Uint8 => "uint8",
            PrimitiveKind::Uint16 => "uint16",
            PrimitiveKind::Uint32 => "uint32",
            PrimitiveKind::Uint64 => "uint64",
            PrimitiveKind::Float32 => "float32",
            PrimitiveKind::Float64 => "float64",
            PrimitiveKind::String => "string",
            PrimitiveKind::Any => "any",
        }
    }

    /// Look up a kind by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Returns true for the 64-bit integer kinds.
    pub fn is_wide_integer(&self) -> bool {
        matches!(self, PrimitiveKind::Int64 | PrimitiveKind::Uint64)
    }

    /// Returns true for kinds that fit a JavaScript number.
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::Int
                | PrimitiveKind::Int8
                | PrimitiveKind::Int16
                | PrimitiveKind::Int32
                | PrimitiveKind::Uint
                | PrimitiveKind::Uint8
                | PrimitiveKind::Uint16
                | PrimitiveKind::Uint32
                | PrimitiveKind::Float32
                | PrimitiveKind::Float64
        )
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A primitive kind, optionally carrying the declared name of a named type
/// (`Duration` over `int64`, `Status` over `string`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimitiveType {
    pub kind: PrimitiveKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PrimitiveType {
    pub fn new(kind: PrimitiveKind) -> Self {
        Self { kind, name: None }
    }

    pub fn named(kind: PrimitiveKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
        }
    }

    /// The declared name, if it is non-empty.
    pub fn declared_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// A struct: an ordered list of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub fields: Vec<Field>,
    /// Marks the well-known date/time struct; its fields are never visited.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_date: bool,
}

impl StructType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            fields: Vec::new(),
            is_date: false,
        }
    }

    /// A struct without a declared name (`struct { ... }` literal).
    pub fn anonymous() -> Self {
        Self {
            name: None,
            fields: Vec::new(),
            is_date: false,
        }
    }

    /// The well-known date/time struct.
    pub fn date() -> Self {
        Self {
            name: Some(DATE_TYPE_NAME.to_string()),
            fields: Vec::new(),
            is_date: true,
        }
    }

    /// Append a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// The declared name, if it is non-empty.
    pub fn declared_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Fields that are exported and not excluded by their tag.
    pub fn visible_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.is_visible())
    }
}

/// A struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: StructuralType,
    /// Raw JSON-style tag annotation, e.g. `"updated_at,omitempty"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Unexported fields are skipped by the renderer.
    pub exported: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<StructuralType>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            tag: None,
            exported: true,
        }
    }

    /// Create a field whose type is described by `T`.
    pub fn of<T: crate::Describe + ?Sized>(name: impl Into<String>) -> Self {
        Self::new(name, T::describe())
    }

    /// Attach a tag annotation.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Mark the field as unexported.
    pub fn hidden(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Parse the tag annotation. Fields without a tag get an empty tag.
    pub fn parsed_tag(&self) -> FieldTag {
        self.tag.as_deref().map(FieldTag::parse).unwrap_or_default()
    }

    /// Whether the field takes part in rendering.
    pub fn is_visible(&self) -> bool {
        self.exported && !self.parsed_tag().skip
    }
}

/// A description of a data shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructuralType {
    Primitive(PrimitiveType),
    Struct(StructType),
    Slice {
        elem: Box<StructuralType>,
    },
    Map {
        key: Box<StructuralType>,
        value: Box<StructuralType>,
    },
    /// Pointer or optional wrapper; rendered transparently.
    Optional {
        inner: Box<StructuralType>,
    },
}

impl StructuralType {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::Primitive(PrimitiveType::new(kind))
    }

    /// A named primitive type.
    pub fn named(kind: PrimitiveKind, name: impl Into<String>) -> Self {
        Self::Primitive(PrimitiveType::named(kind, name))
    }

    pub fn string() -> Self {
        Self::primitive(PrimitiveKind::String)
    }

    pub fn bool() -> Self {
        Self::primitive(PrimitiveKind::Bool)
    }

    pub fn any() -> Self {
        Self::primitive(PrimitiveKind::Any)
    }

    /// The well-known identifier type.
    pub fn uuid() -> Self {
        Self::named(PrimitiveKind::Any, IDENTIFIER_TYPE_NAME)
    }

    /// A nanosecond duration, a named `int64`.
    pub fn duration() -> Self {
        Self::named(PrimitiveKind::Int64, DURATION_TYPE_NAME)
    }

    /// The well-known date/time struct.
    pub fn date() -> Self {
        Self::Struct(StructType::date())
    }

    pub fn slice(elem: impl Into<StructuralType>) -> Self {
        Self::Slice {
            elem: Box::new(elem.into()),
        }
    }

    pub fn map(key: impl Into<StructuralType>, value: impl Into<StructuralType>) -> Self {
        Self::Map {
            key: Box::new(key.into()),
            value: Box::new(value.into()),
        }
    }

    pub fn optional(inner: impl Into<StructuralType>) -> Self {
        Self::Optional {
            inner: Box::new(inner.into()),
        }
    }

    /// Strip any number of optional wrappers.
    pub fn unwrap_optional(&self) -> &StructuralType {
        let mut current = self;
        while let StructuralType::Optional { inner } = current {
            current = inner;
        }
        current
    }

    /// The struct behind optional wrappers, if any.
    pub fn as_struct(&self) -> Option<&StructType> {
        match self.unwrap_optional() {
            StructuralType::Struct(st) => Some(st),
            _ => None,
        }
    }

    /// If this is a collection of (non-date) structs, return the element struct.
    pub fn collection_element(&self) -> Option<&StructType> {
        match self.unwrap_optional() {
            StructuralType::Slice { elem } => elem.as_struct().filter(|st| !st.is_date),
            _ => None,
        }
    }
}

impl From<StructType> for StructuralType {
    fn from(st: StructType) -> Self {
        StructuralType::Struct(st)
    }
}

impl From<PrimitiveType> for StructuralType {
    fn from(p: PrimitiveType) -> Self {
        StructuralType::Primitive(p)
    }
}

impl From<PrimitiveKind> for StructuralType {
    fn from(kind: PrimitiveKind) -> Self {
        StructuralType::primitive(kind)
    }
}

/// Go flavoured type expression, used in diagnostics and dumps.
impl fmt::Display for StructuralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralType::Primitive(p) => match p.declared_name() {
                Some(name) => f.write_str(name),
                None => write!(f, "{}", p.kind),
            },
            StructuralType::Struct(st) => match st.declared_name() {
                Some(name) => f.write_str(name),
                None => {
                    f.write_str("struct {")?;
                    for (i, field) in st.fields.iter().enumerate() {
                        let sep = if i == 0 { " " } else { "; " };
                        write!(f, "{}{} {}", sep, field.name, field.ty)?;
                    }
                    if st.fields.is_empty() {
                        f.write_str("}")
                    } else {
                        f.write_str(" }")
                    }
                }
            },
            StructuralType::Slice { elem } => write!(f, "[]{}", elem),
            StructuralType::Map { key, value } => write!(f, "map[{}]{}", key, value),
            StructuralType::Optional { inner } => write!(f, "*{}", inner),
        }
    }
}
