//! # pathlinq
//!
//! Compiles JSONPath-style strings such as `$.items[?(@.Type=='3')].Status` into
//! reusable accessors over any `serde`-serializable root type.
//!
//! ```
//! use pathlinq::{describe_struct, compile};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Pod {
//!     name: Option<String>,
//!     labels: std::collections::HashMap<String, String>,
//! }
//!
//! describe_struct!(Pod { "name": Option<String>, "labels": std::collections::HashMap<String, String> });
//!
//! let accessor = compile::<Pod>(".labels.app\\.kubernetes\\.io/name", false).unwrap();
//! let pod = Pod {
//!     name: None,
//!     labels: [("app.kubernetes.io/name".to_string(), "web".to_string())].into(),
//! };
//! assert_eq!(accessor.evaluate(&pod).unwrap(), "web");
//! ```

// Re-export foundation crates
pub use pathlinq_core as compiler;
pub use pathlinq_jpath as jpath;
pub use pathlinq_types as types;

pub mod ordering;

pub use ordering::{filter_by_accessor, sort_by_accessor};
#[cfg(feature = "rayon")]
pub use ordering::par_sort_by_accessor;

pub use pathlinq_core::{
    AccessError, Accessor, CompileError, CompileOptions, Expr, PathCompiler,
    UnsupportedElementPolicy, total_order,
};
pub use pathlinq_jpath::{JPathError, PathElement, normalize};
pub use pathlinq_types::{Described, Shape, StructShape, describe_struct};

/// Compiles `path` into an untyped accessor over `T`.
///
/// With `null_safe` set, a `null` anywhere along the path yields the default value
/// of the path's result type instead of an error.
pub fn compile<T: Described>(path: &str, null_safe: bool) -> Result<Accessor<T>, CompileError> {
    PathCompiler::new(CompileOptions::default().with_null_safety(null_safe)).compile(path)
}

/// Compiles `path` into an accessor over `T` producing `R`.
pub fn compile_as<T: Described, R: Described>(
    path: &str,
    null_safe: bool,
) -> Result<Accessor<T, R>, CompileError> {
    PathCompiler::new(CompileOptions::default().with_null_safety(null_safe)).compile_as(path)
}
