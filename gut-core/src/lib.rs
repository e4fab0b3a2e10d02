//! Core utilities and types for the gut TypeScript generator.
//!
//! This crate provides the output [`Settings`] and the file writer that
//! persists generated code.

mod file;
mod settings;

// File operations
pub use file::{File, WriteResult};
// Output configuration
pub use settings::{DEFAULT_BIG_INT_TYPE, DEFAULT_DATE_TYPE, DEFAULT_UUID_TYPE, Settings};
