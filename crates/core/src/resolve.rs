//! Member/map resolution and literal-dot escaping.

use crate::chain::AccessStep;
use crate::defaults::zero_value;
use crate::error::CompileError;
use pathlinq_types::Shape;
use std::borrow::Cow;

/// The escape for a `.` that belongs to a member or key name.
pub const ESCAPED_DOT: &str = "\\.";

/// Stands in for an escaped dot while the path goes through the normalizer.
/// A private-use code point, so it never appears in path syntax.
pub const DOT_PLACEHOLDER: char = '\u{E000}';

/// Replaces every `\.` with [`DOT_PLACEHOLDER`] so the normalizer keeps the dot
/// inside the name. Paths that already contain the placeholder are rejected.
pub fn escape_literal_dots(raw: &str) -> Result<Cow<'_, str>, CompileError> {
    if raw.contains(DOT_PLACEHOLDER) {
        return Err(CompileError::ReservedPlaceholder(raw.to_string()));
    }
    if !raw.contains(ESCAPED_DOT) {
        return Ok(Cow::Borrowed(raw));
    }
    let mut placeholder = [0u8; 4];
    Ok(Cow::Owned(
        raw.replace(ESCAPED_DOT, DOT_PLACEHOLDER.encode_utf8(&mut placeholder)),
    ))
}

/// Turns placeholders in a normalized name back into literal dots.
pub fn restore_literal_dots(name: &str) -> Cow<'_, str> {
    if name.contains(DOT_PLACEHOLDER) {
        Cow::Owned(name.replace(DOT_PLACEHOLDER, "."))
    } else {
        Cow::Borrowed(name)
    }
}

/// Decides how `name` is read from a value of shape `current`.
///
/// Mappings resolve by key lookup and yield their value type; structs resolve by
/// member lookup and yield the member's type. `Any` resolves dynamically.
pub fn resolve_property(current: &Shape, name: &str) -> Result<(AccessStep, Shape), CompileError> {
    match current.non_null() {
        Shape::Map(value) => Ok((
            AccessStep::MapKey {
                key: name.to_string(),
                miss: zero_value(value),
            },
            (**value).clone(),
        )),
        Shape::Struct(s) => {
            let member = s.field(name).ok_or_else(|| CompileError::UnknownMember {
                type_name: s.name.clone(),
                member: name.to_string(),
            })?;
            Ok((
                AccessStep::Member {
                    name: name.to_string(),
                },
                member.clone(),
            ))
        }
        Shape::Any => Ok((
            AccessStep::Member {
                name: name.to_string(),
            },
            Shape::Any,
        )),
        other => Err(CompileError::NotNavigable {
            type_name: other.to_string(),
            member: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlinq_types::StructShape;
    use serde_json::Value;

    fn root() -> Shape {
        StructShape::new("TestObject")
            .with_member("stringValue", Shape::optional(Shape::Text))
            .with_member("dictionary", Shape::map_of(Shape::Text))
            .into()
    }

    #[test]
    fn test_escape_round_trip() {
        let raw = ".dictionary.crossplane\\.io/external-name";
        let escaped = escape_literal_dots(raw).unwrap();
        assert!(!escaped.contains('\\'));
        assert_eq!(escaped.matches('.').count(), 2);
        let name = escaped.rsplit('.').next().unwrap();
        assert_eq!(restore_literal_dots(name), "crossplane.io/external-name");
    }

    #[test]
    fn test_escape_multiple_dots() {
        let escaped = escape_literal_dots(".labels.a\\.b\\.c").unwrap();
        let name = escaped.rsplit('.').next().unwrap();
        assert_eq!(restore_literal_dots(name), "a.b.c");
    }

    #[test]
    fn test_unescaped_path_is_borrowed() {
        assert!(matches!(
            escape_literal_dots(".a.b").unwrap(),
            Cow::Borrowed(".a.b")
        ));
    }

    #[test]
    fn test_placeholder_in_raw_path_is_rejected() {
        let raw = format!(".a{}b", DOT_PLACEHOLDER);
        assert!(matches!(
            escape_literal_dots(&raw),
            Err(CompileError::ReservedPlaceholder(_))
        ));
    }

    #[test]
    fn test_map_resolves_by_key() {
        let (step, _) = resolve_property(&root(), "dictionary").unwrap();
        assert_eq!(
            step,
            AccessStep::Member {
                name: "dictionary".into()
            }
        );
        let (step, shape) = resolve_property(&Shape::map_of(Shape::Text), "key").unwrap();
        assert_eq!(
            step,
            AccessStep::MapKey {
                key: "key".into(),
                miss: Value::Null
            }
        );
        assert_eq!(shape, Shape::Text);

        let (step, _) = resolve_property(&Shape::map_of(Shape::Integer), "absent").unwrap();
        assert_eq!(
            step,
            AccessStep::MapKey {
                key: "absent".into(),
                miss: Value::from(0)
            }
        );
    }

    #[test]
    fn test_unknown_member() {
        assert_eq!(
            resolve_property(&root(), "missing").unwrap_err(),
            CompileError::UnknownMember {
                type_name: "TestObject".into(),
                member: "missing".into()
            }
        );
    }

    #[test]
    fn test_scalars_are_not_navigable() {
        assert!(matches!(
            resolve_property(&Shape::Text, "Length"),
            Err(CompileError::NotNavigable { .. })
        ));
    }
}
