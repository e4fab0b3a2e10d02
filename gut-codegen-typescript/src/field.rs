//! Property naming for struct fields.

use gut_ir::Field;

/// Derive the emitted property name of a field and whether it is optional.
///
/// The tag's primary token renames the property; an empty token keeps the
/// declared name. `omitempty` makes the property optional whatever its type.
pub fn resolve_field_name(field: &Field) -> (String, bool) {
    let tag = field.parsed_tag();
    let name = tag.name.unwrap_or_else(|| field.name.clone());
    (name, tag.omit_empty)
}

#[cfg(test)]
mod tests {
    use gut_ir::StructuralType;

    use super::*;

    fn field(tag: Option<&str>) -> Field {
        let field = Field::new("UpdatedAt", StructuralType::date());
        match tag {
            Some(tag) => field.tag(tag),
            None => field,
        }
    }

    #[test]
    fn test_untagged_field_keeps_declared_name() {
        assert_eq!(resolve_field_name(&field(None)), ("UpdatedAt".into(), false));
    }

    #[test]
    fn test_tag_renames_field() {
        assert_eq!(
            resolve_field_name(&field(Some("updated_at"))),
            ("updated_at".into(), false)
        );
    }

    #[test]
    fn test_omitempty_marks_optional() {
        assert_eq!(
            resolve_field_name(&field(Some("updated_at,omitempty"))),
            ("updated_at".into(), true)
        );
    }

    #[test]
    fn test_empty_primary_token_uses_declared_name() {
        assert_eq!(
            resolve_field_name(&field(Some(",omitempty"))),
            ("UpdatedAt".into(), true)
        );
        assert_eq!(resolve_field_name(&field(Some(""))), ("UpdatedAt".into(), false));
    }
}
