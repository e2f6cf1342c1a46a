//! JSONPath normalizer.
//!
//! Turns a raw path string such as `.orders[?(@.id=='A')].total` into an ordered
//! sequence of typed [`PathElement`]s. The element sequence is what the accessor
//! compiler consumes; this crate never evaluates anything.

pub mod ast;
pub mod error;
mod parser;

// --- Public API ---
pub use ast::{PathElement, to_normalized_string};
pub use error::JPathError;
pub use parser::normalize;
