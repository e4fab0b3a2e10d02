//! Structural type representation for the gut TypeScript generator.
//!
//! This crate provides the language-agnostic description of data shapes that
//! the TypeScript renderer consumes. Values are built once per input by an
//! adapter and never inspected through runtime reflection.
//!
//! # Architecture
//!
//! ```text
//! Rust types (Describe) ─┐
//!                        ├→ gut-ir (StructuralType) → gut-codegen-typescript
//! gut.toml (gut-manifest)┘
//! ```
//!
//! Generic containers reach this crate already substituted: a `Page<User>`
//! describes itself with `User`'s fields in place of its type parameter.

mod describe;
mod tag;
mod types;

pub use describe::{AnyValue, DateTime, Describe, Uuid};
pub use tag::FieldTag;
pub use types::{
    DATE_TYPE_NAME, DURATION_TYPE_NAME, Field, IDENTIFIER_TYPE_NAME, PrimitiveKind, PrimitiveType,
    StructType, StructuralType,
};
