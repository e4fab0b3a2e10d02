//! TypeScript declaration builders.
//!
//! These provide a small API for the declarations gut writes, rendered via
//! CodeBuilder.

mod interface;
mod types;

pub use interface::Interface;
pub use types::TypeAlias;
