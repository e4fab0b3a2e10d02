//! `export interface` declarations.

use gut_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// An exported interface. Members are rendered text such as `name?: string`. A member may span
/// several lines (an object literal type); every line is indented with the
/// interface body.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    members: Vec<String>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a rendered member.
    pub fn member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Add rendered members from an iterator.
    pub fn members(mut self, members: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }

    /// Add a property.
    pub fn field(self, name: &str, ty: &str) -> Self {
        self.member(format!("{}: {}", name, ty))
    }

    /// Add an optional property.
    pub fn optional_field(self, name: &str, ty: &str) -> Self {
        self.member(format!("{}?: {}", name, ty))
    }

    fn header(&self) -> String {
        format!("export interface {}", self.name)
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.members.is_empty() {
            vec![CodeFragment::Line(format!("{} {{}}", self.header()))]
        } else {
            vec![CodeFragment::block(
                format!("{} {{", self.header()),
                self.members.iter().map(CodeFragment::text).collect(),
                "}",
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface() {
        let i = Interface::new("Empty").build();
        assert_eq!(i, "export interface Empty {}\n");
    }

    #[test]
    fn test_interface_with_fields() {
        let i = Interface::new("Person")
            .field("name", "string")
            .optional_field("age", "number")
            .build();
        assert_eq!(i, "export interface Person {\n  name: string\n  age?: number\n}\n");
    }

    #[test]
    fn test_multi_line_member() {
        let i = Interface::new("Order")
            .member("address: {\n  city: string\n}")
            .build();
        assert_eq!(
            i,
            "export interface Order {\n  address: {\n    city: string\n  }\n}\n"
        );
    }
}
