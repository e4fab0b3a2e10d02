//! Line-oriented code building.
//!
//! [`CodeBuilder`] tracks indentation; AST nodes implement [`Renderable`] to
//! describe themselves as [`CodeFragment`]s.

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
