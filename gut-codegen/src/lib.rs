//! Shared code generation utilities for the gut TypeScript generator.

pub mod builder;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
