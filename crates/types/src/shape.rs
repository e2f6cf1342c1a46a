//! Runtime type descriptors consulted by the path compiler.
//!
//! A `Shape` describes what a serialized value looks like: which members a struct
//! exposes, which element type a collection holds, and whether a position can be
//! `null`. The compiler walks shapes instead of reflecting over Rust types.

use serde_json::Value;
use std::fmt;

/// The descriptor for one type as it appears in its serialized form.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Bool,
    Integer,
    Float,
    Text,
    /// A structured type with named members.
    Struct(StructShape),
    /// A string-keyed mapping; the box holds the value type.
    Map(Box<Shape>),
    /// A homogeneous collection; the box holds the element type.
    List(Box<Shape>),
    /// A nullable wrapper around another shape.
    Optional(Box<Shape>),
    /// An untyped JSON value. Members resolve dynamically to `Any`.
    Any,
}

impl Shape {
    pub fn map_of(value: Shape) -> Self {
        Shape::Map(Box::new(value))
    }

    pub fn list_of(element: Shape) -> Self {
        Shape::List(Box::new(element))
    }

    pub fn optional(inner: Shape) -> Self {
        match inner {
            // `Option<Option<T>>` serializes the same as `Option<T>`.
            Shape::Optional(_) => inner,
            other => Shape::Optional(Box::new(other)),
        }
    }

    /// Value kinds are never `null` and never need a null guard.
    pub fn is_value_kind(&self) -> bool {
        matches!(self, Shape::Bool | Shape::Integer | Shape::Float)
    }

    /// Checks if a value of this shape may be `null` at runtime.
    pub fn is_nullable(&self) -> bool {
        !self.is_value_kind()
    }

    /// Strips any `Optional` wrapper.
    pub fn non_null(&self) -> &Shape {
        match self {
            Shape::Optional(inner) => inner.non_null(),
            other => other,
        }
    }

    /// The element type, if this shape (ignoring nullability) is a collection.
    pub fn element(&self) -> Option<&Shape> {
        match self.non_null() {
            Shape::List(element) => Some(element),
            _ => None,
        }
    }

    /// The value type, if this shape (ignoring nullability) is a key/value mapping.
    pub fn map_value(&self) -> Option<&Shape> {
        match self.non_null() {
            Shape::Map(value) => Some(value),
            _ => None,
        }
    }

    /// Looks up a struct member by its serialized name.
    pub fn member(&self, name: &str) -> Option<&Shape> {
        match self.non_null() {
            Shape::Struct(s) => s.field(name),
            _ => None,
        }
    }

    /// Checks if values of this shape have a natural ordering.
    pub fn is_orderable(&self) -> bool {
        matches!(
            self.non_null(),
            Shape::Bool | Shape::Integer | Shape::Float | Shape::Text | Shape::Any
        )
    }

    /// Checks whether a value of this shape can be read as `target`.
    ///
    /// `Any` accepts everything, integers widen to floats, and an `Optional` target
    /// accepts its inner shape.
    pub fn converts_to(&self, target: &Shape) -> bool {
        if self == target {
            return true;
        }
        match (self, target) {
            (_, Shape::Any) => true,
            (Shape::Integer, Shape::Float) => true,
            (Shape::Optional(inner), Shape::Optional(target_inner)) => {
                inner.converts_to(target_inner)
            }
            (source, Shape::Optional(target_inner)) => source.converts_to(target_inner),
            (Shape::List(a), Shape::List(b)) => a.converts_to(b),
            (Shape::Map(a), Shape::Map(b)) => a.converts_to(b),
            (Shape::Struct(a), Shape::Struct(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Bool => write!(f, "bool"),
            Shape::Integer => write!(f, "integer"),
            Shape::Float => write!(f, "float"),
            Shape::Text => write!(f, "text"),
            Shape::Struct(s) => write!(f, "{}", s.name),
            Shape::Map(value) => write!(f, "map<text, {}>", value),
            Shape::List(element) => write!(f, "list<{}>", element),
            Shape::Optional(inner) => write!(f, "{}?", inner),
            Shape::Any => write!(f, "any"),
        }
    }
}

/// A named member of a struct.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    pub name: String,
    pub shape: Shape,
}

/// The descriptor for a structured type.
#[derive(Debug, Clone, PartialEq)]
pub struct StructShape {
    pub name: String,
    pub fields: Vec<FieldShape>,
    /// The declared default instance, used as a null-safety fallback.
    /// `None` means the type cannot be default-constructed.
    pub fallback: Option<Value>,
    /// Why a declared default instance could not be recorded as `fallback`.
    pub fallback_error: Option<String>,
}

impl StructShape {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            fallback: None,
            fallback_error: None,
        }
    }

    /// Adds a member. Later members with the same name replace earlier ones.
    pub fn with_member(mut self, name: impl Into<String>, shape: Shape) -> Self {
        let name = name.into();
        self.fields.retain(|f| f.name != name);
        self.fields.push(FieldShape { name, shape });
        self
    }

    /// Declares the value substituted when this type is a null-safety fallback.
    pub fn with_fallback(mut self, fallback: Value) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Records that the declared default instance could not be projected to JSON.
    pub fn with_fallback_error(mut self, reason: impl Into<String>) -> Self {
        self.fallback_error = Some(reason.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&Shape> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.shape)
    }
}

impl From<StructShape> for Shape {
    fn from(s: StructShape) -> Self {
        Shape::Struct(s)
    }
}
