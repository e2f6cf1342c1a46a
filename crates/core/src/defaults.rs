//! Fallback and zero values per shape.

use crate::error::CompileError;
use pathlinq_types::Shape;
use serde_json::{Map, Value, json};

/// Resolves the value substituted by a null-safety guard for `shape`.
///
/// Text resolves to the empty string, value kinds to their zero, collections and maps
/// to empty instances. A struct resolves to its declared fallback; a struct that
/// declares none cannot be default-constructed and fails compilation, as does one whose
/// declared default failed to serialize.
pub fn default_value(shape: &Shape) -> Result<Value, CompileError> {
    match shape {
        Shape::Text => Ok(json!("")),
        Shape::Bool => Ok(json!(false)),
        Shape::Integer => Ok(json!(0)),
        Shape::Float => Ok(json!(0.0)),
        Shape::List(_) => Ok(Value::Array(Vec::new())),
        Shape::Map(_) | Shape::Any => Ok(Value::Object(Map::new())),
        Shape::Optional(inner) => default_value(inner),
        Shape::Struct(s) => match (&s.fallback, &s.fallback_error) {
            (Some(fallback), _) => Ok(fallback.clone()),
            (None, Some(reason)) => Err(CompileError::FallbackSerialization {
                type_name: s.name.clone(),
                reason: reason.clone(),
            }),
            (None, None) => Err(CompileError::DefaultConstruction(s.name.clone())),
        },
    }
}

/// The value a filter step yields when no element matches, and a map lookup yields
/// when the key is absent: `null` for reference kinds, the natural zero for value kinds.
pub fn zero_value(shape: &Shape) -> Value {
    match shape {
        Shape::Bool => json!(false),
        Shape::Integer => json!(0),
        Shape::Float => json!(0.0),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlinq_types::StructShape;

    #[test]
    fn test_scalar_defaults() {
        assert_eq!(default_value(&Shape::Text).unwrap(), json!(""));
        assert_eq!(default_value(&Shape::Integer).unwrap(), json!(0));
        assert_eq!(default_value(&Shape::Bool).unwrap(), json!(false));
        assert_eq!(
            default_value(&Shape::optional(Shape::Text)).unwrap(),
            json!("")
        );
        assert_eq!(
            default_value(&Shape::list_of(Shape::Integer)).unwrap(),
            json!([])
        );
    }

    #[test]
    fn test_struct_default_uses_declared_fallback() {
        let shape: Shape = StructShape::new("Nested")
            .with_member("Name", Shape::Text)
            .with_fallback(json!({ "Name": "Test3" }))
            .into();
        assert_eq!(default_value(&shape).unwrap(), json!({ "Name": "Test3" }));
    }

    #[test]
    fn test_struct_without_fallback_fails() {
        let shape: Shape = StructShape::new("Nested")
            .with_member("Name", Shape::Text)
            .into();
        assert_eq!(
            default_value(&shape),
            Err(CompileError::DefaultConstruction("Nested".into()))
        );
    }

    #[test]
    fn test_unserializable_fallback_reports_the_reason() {
        let shape: Shape = StructShape::new("Opaque")
            .with_fallback_error("key must be a string")
            .into();
        assert_eq!(
            default_value(&shape),
            Err(CompileError::FallbackSerialization {
                type_name: "Opaque".into(),
                reason: "key must be a string".into()
            })
        );
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(zero_value(&Shape::Integer), json!(0));
        assert_eq!(zero_value(&Shape::Text), Value::Null);
        assert_eq!(zero_value(&Shape::optional(Shape::Integer)), Value::Null);
    }
}
