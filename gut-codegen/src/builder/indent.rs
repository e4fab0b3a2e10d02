//! Indentation units for generated code.

/// One level of indentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indent {
    /// Two spaces, the TypeScript convention.
    #[default]
    TwoSpaces,
    FourSpaces,
    Tab,
}

impl Indent {
    /// The text written for one level.
    pub fn unit(self) -> &'static str {
        match self {
            Indent::TwoSpaces => "  ",
            Indent::FourSpaces => "    ",
            Indent::Tab => "\t",
        }
    }

    /// The text written for `level` nested levels.
    pub fn at(self, level: usize) -> String {
        self.unit().repeat(level)
    }
}
