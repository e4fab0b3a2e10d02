//! Go-flavoured type expressions used in `gut.toml`.

use std::{fmt, str::FromStr};

/// A parsed type expression.
///
/// ```
/// use gut_manifest::TypeExpr;
///
/// let expr: TypeExpr = "map[string][]*Page[User]".parse().unwrap();
/// assert_eq!(expr.to_string(), "map[string][]*Page[User]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A built-in, a declared type or a type parameter, with optional
    /// generic arguments.
    Named { name: String, args: Vec<TypeExpr> },
    /// `[]T`
    Slice(Box<TypeExpr>),
    /// `map[K]V`
    Map(Box<TypeExpr>, Box<TypeExpr>),
    /// `*T`
    Pointer(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Every name referenced by this expression, outermost first.
    pub fn names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            TypeExpr::Named { name, args } => {
                names.push(name);
                for arg in args {
                    arg.collect_names(names);
                }
            }
            TypeExpr::Slice(elem) | TypeExpr::Pointer(elem) => elem.collect_names(names),
            TypeExpr::Map(key, value) => {
                key.collect_names(names);
                value.collect_names(names);
            }
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named { name, args } => {
                f.write_str(name)?;
                if !args.is_empty() {
                    f.write_str("[")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    f.write_str("]")?;
                }
                Ok(())
            }
            TypeExpr::Slice(elem) => write!(f, "[]{}", elem),
            TypeExpr::Map(key, value) => write!(f, "map[{}]{}", key, value),
            TypeExpr::Pointer(inner) => write!(f, "*{}", inner),
        }
    }
}

/// A type expression syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// Byte offset in the expression.
    pub offset: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message, self.offset)
    }
}

impl std::error::Error for ParseError {}

impl FromStr for TypeExpr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser {
            src: s,
            pos: 0,
            depth: 0,
        };
        let expr = parser.expr()?;
        parser.skip_whitespace();
        if parser.pos < s.len() {
            return Err(parser.error("unexpected trailing input"));
        }
        Ok(expr)
    }
}

/// Deepest nesting accepted in one expression.
const MAX_DEPTH: usize = 64;

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn error(&self, message: &str) -> ParseError {
        ParseError {
            message: message.to_string(),
            offset: self.pos,
        }
    }

    fn rest(&self) -> &str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char) -> Result<(), ParseError> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", c)))
        }
    }

    fn expr(&mut self) -> Result<TypeExpr, ParseError> {
        self.skip_whitespace();
        if self.depth == MAX_DEPTH {
            return Err(self.error("type expression nested too deeply"));
        }
        self.depth += 1;
        let expr = self.nested_expr();
        self.depth -= 1;
        expr
    }

    fn nested_expr(&mut self) -> Result<TypeExpr, ParseError> {
        if self.eat('*') {
            return Ok(TypeExpr::Pointer(Box::new(self.expr()?)));
        }
        if self.eat('[') {
            self.expect(']')?;
            return Ok(TypeExpr::Slice(Box::new(self.expr()?)));
        }

        let name = self.ident()?;
        if name == "map" {
            self.expect('[')?;
            let key = self.expr()?;
            self.expect(']')?;
            let value = self.expr()?;
            return Ok(TypeExpr::Map(Box::new(key), Box::new(value)));
        }

        let mut args = Vec::new();
        if self.eat('[') {
            loop {
                args.push(self.expr()?);
                if self.eat(']') {
                    break;
                }
                self.expect(',')?;
            }
        }
        Ok(TypeExpr::Named { name, args })
    }

    fn ident(&mut self) -> Result<String, ParseError> {
        let rest = self.rest();
        let mut end = 0;
        for (i, c) in rest.char_indices() {
            let valid = if i == 0 {
                c.is_ascii_alphabetic() || c == '_'
            } else {
                c.is_ascii_alphanumeric() || c == '_'
            };
            if !valid {
                break;
            }
            end = i + c.len_utf8();
        }
        if end == 0 {
            return Err(if rest.is_empty() {
                self.error("expected a type")
            } else {
                self.error("expected a type name")
            });
        }
        let ident = rest[..end].to_string();
        self.pos += end;
        Ok(ident)
    }
}
