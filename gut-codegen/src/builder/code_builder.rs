//! Indentation-aware string building.

use super::{CodeFragment, Indent, Renderable};

/// Builds indented code line by line.
///
/// Consuming methods chain for one-off snippets; `push_` methods work on a
/// `&mut` builder for incremental output.
///
/// ```
/// use gut_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("export interface User {")
///     .indent()
///     .text("address: {\n  city: string\n}")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(
///     code,
///     "export interface User {\n  address: {\n    city: string\n  }\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// A builder with two-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TwoSpaces)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(&self.indent.at(self.level));
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add multi-line text, indenting every non-empty line.
    pub fn push_text(&mut self, s: &str) -> &mut Self {
        for line in s.split('\n') {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Write a node's fragments at the current level.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply(fragment);
        }
        self
    }

    fn apply(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Text(s) => {
                self.push_text(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                for inner in body {
                    self.apply(inner);
                }
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn text(mut self, s: &str) -> Self {
        self.push_text(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}
