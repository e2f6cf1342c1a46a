//! The `Described` trait: how a Rust type publishes its `Shape`.

use crate::shape::Shape;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, VecDeque};

/// A type that can describe its own serialized shape.
///
/// Implemented here for primitives and standard containers. User structs implement it
/// by hand or through [`describe_struct!`](crate::describe_struct).
pub trait Described {
    fn shape() -> Shape;
}

macro_rules! impl_described {
    ($shape:expr => $($t:ty),+ $(,)?) => {
        $(
            impl Described for $t {
                fn shape() -> Shape {
                    $shape
                }
            }
        )+
    };
}

impl_described!(Shape::Bool => bool);
impl_described!(Shape::Integer => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_described!(Shape::Float => f32, f64);
impl_described!(Shape::Text => String, char);
impl_described!(Shape::Any => Value);

impl<T: Described> Described for Option<T> {
    fn shape() -> Shape {
        Shape::optional(T::shape())
    }
}

impl<T: Described> Described for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }
}

impl<T: Described> Described for Vec<T> {
    fn shape() -> Shape {
        Shape::list_of(T::shape())
    }
}

impl<T: Described> Described for VecDeque<T> {
    fn shape() -> Shape {
        Shape::list_of(T::shape())
    }
}

impl<T: Described, const N: usize> Described for [T; N] {
    fn shape() -> Shape {
        Shape::list_of(T::shape())
    }
}

impl<V: Described, S> Described for HashMap<String, V, S> {
    fn shape() -> Shape {
        Shape::map_of(V::shape())
    }
}

impl<V: Described> Described for BTreeMap<String, V> {
    fn shape() -> Shape {
        Shape::map_of(V::shape())
    }
}

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

/// Implements [`Described`] for a struct by listing its serialized member names.
///
/// The `default` form serializes `T::default()` each time the shape is built. If that
/// fails, the shape carries the serializer's message in `fallback_error` instead of a
/// fallback, and null-safe compilation that needs the fallback reports it.
///
/// ```ignore
/// describe_struct!(Order { "id": String, "lines": Vec<Line> });
/// // Records `Order::default()` as the null-safety fallback:
/// describe_struct!(default Order { "id": String, "lines": Vec<Line> });
/// ```
#[macro_export]
macro_rules! describe_struct {
    (default $ty:ty { $($name:literal : $field:ty),* $(,)? }) => {
        impl $crate::Described for $ty {
            fn shape() -> $crate::Shape {
                let shape = $crate::StructShape::new(stringify!($ty))
                    $(.with_member($name, <$field as $crate::Described>::shape()))*;
                let fallback = $crate::described::__private::serde_json::to_value(
                    <$ty as ::core::default::Default>::default(),
                );
                match fallback {
                    Ok(value) => shape.with_fallback(value).into(),
                    Err(err) => shape.with_fallback_error(err.to_string()).into(),
                }
            }
        }
    };
    ($ty:ty { $($name:literal : $field:ty),* $(,)? }) => {
        impl $crate::Described for $ty {
            fn shape() -> $crate::Shape {
                $crate::StructShape::new(stringify!($ty))
                    $(.with_member($name, <$field as $crate::Described>::shape()))*
                    .into()
            }
        }
    };
}
