//! JSON-style field tag annotations.

/// Parsed view of a field's tag annotation.
///
/// The annotation follows JSON tag conventions: a primary token naming the
/// property, followed by comma separated options.
///
/// ```
/// use gut_ir::FieldTag;
///
/// let tag = FieldTag::parse("updated_at,omitempty");
/// assert_eq!(tag.name.as_deref(), Some("updated_at"));
/// assert!(tag.omit_empty);
/// assert!(!tag.inline);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTag {
    /// Property name override. `None` when the primary token is empty.
    pub name: Option<String>,
    /// `omitempty`: the property is optional.
    pub omit_empty: bool,
    /// `inline`: the field's own fields are spliced into the parent.
    pub inline: bool,
    /// A bare `-` tag: the field is not emitted.
    pub skip: bool,
}

impl FieldTag {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == "-" {
            return Self {
                skip: true,
                ..Self::default()
            };
        }

        let mut parts = raw.split(',');
        let name = parts
            .next()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        let mut tag = Self {
            name,
            ..Self::default()
        };
        for option in parts {
            match option.trim() {
                "omitempty" => tag.omit_empty = true,
                "inline" => tag.inline = true,
                _ => {}
            }
        }
        tag
    }
}
