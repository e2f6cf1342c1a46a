//! # pathlinq-core
//!
//! Compiles JSONPath-style strings into typed accessors.
//!
//! The compiler works in layers:
//! - **resolve**: member and map-key resolution, literal-dot escaping
//! - **filter**: translation of `[?(...)]` comparisons into predicates
//! - **chain**: folds normalized path elements into a linear access chain
//! - **null_safety**: rewrites a chain into nested null guards
//! - **compiler** / **accessor**: the public entry point and the compiled result
//! - **engine**: evaluates a plan against a JSON value
//!
//! Root values are read through their `serde` projection, and the compiler resolves
//! members against the [`Shape`](pathlinq_types::Shape) each root type publishes.

pub use pathlinq_jpath as jpath;
pub use pathlinq_types as types;

pub mod accessor;
pub mod chain;
pub mod compare;
pub mod compiler;
pub mod config;
pub mod defaults;
pub mod engine;
pub mod error;
pub mod filter;
pub mod null_safety;
pub mod plan;
pub mod resolve;

pub use accessor::Accessor;
pub use chain::{AccessChain, AccessStep};
pub use compare::total_order;
pub use compiler::PathCompiler;
pub use config::{CompileOptions, UnsupportedElementPolicy};
pub use error::{AccessError, CompileError};
pub use filter::{ComparisonOp, Predicate};
pub use plan::Expr;
