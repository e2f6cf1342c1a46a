//! Type descriptors for the path compiler.
//!
//! The compiler never inspects Rust types directly. Each root type publishes a
//! [`Shape`] through [`Described`], and the compiler resolves members, map keys,
//! collection elements and fallback values against that table.

pub mod described;
pub mod shape;

pub use described::Described;
pub use shape::{FieldShape, Shape, StructShape};
