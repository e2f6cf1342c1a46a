//! Compiled accessors: a plan bound to a root type and a result type.

use crate::engine::evaluate;
use crate::error::{AccessError, CompileError};
use crate::plan::Expr;
use pathlinq_types::Shape;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// A compiled path from a root of type `T` to a result of type `R`.
///
/// Accessors are immutable once built and can be shared freely between threads.
/// With the default result type the accessor yields the raw JSON value.
pub struct Accessor<T, R = Value> {
    path: String,
    plan: Expr,
    result_shape: Shape,
    null_safe: bool,
    _types: PhantomData<fn(&T) -> R>,
}

impl<T, R> Accessor<T, R> {
    pub(crate) fn new(path: String, plan: Expr, result_shape: Shape, null_safe: bool) -> Self {
        Self {
            path,
            plan,
            result_shape,
            null_safe,
            _types: PhantomData,
        }
    }

    /// The path as the caller wrote it.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn plan(&self) -> &Expr {
        &self.plan
    }

    /// The shape the plan produces.
    pub fn result_shape(&self) -> &Shape {
        &self.result_shape
    }

    pub fn is_null_safe(&self) -> bool {
        self.null_safe
    }
}

impl<T, R: DeserializeOwned> Accessor<T, R> {
    /// Evaluates the accessor against an already projected root.
    pub fn evaluate_value(&self, root: &Value) -> Result<R, AccessError> {
        let result = evaluate(&self.plan, root)?;
        Ok(serde_json::from_value(result.into_owned())?)
    }
}

impl<T: Serialize, R: DeserializeOwned> Accessor<T, R> {
    /// Projects `root` to JSON and evaluates the accessor against it.
    ///
    /// The projection serializes the whole root on every call, so the cost follows the
    /// size of `root` rather than the length of the path. When the same roots are read
    /// repeatedly, project them once with `serde_json::to_value` and call
    /// [`evaluate_value`](Self::evaluate_value) instead.
    pub fn evaluate(&self, root: &T) -> Result<R, AccessError> {
        let root = serde_json::to_value(root)?;
        self.evaluate_value(&root)
    }

    /// Borrows the accessor as a plain callable.
    pub fn as_fn(&self) -> impl Fn(&T) -> Result<R, AccessError> + '_ {
        move |root| self.evaluate(root)
    }
}

impl<T, R> Clone for Accessor<T, R> {
    fn clone(&self) -> Self {
        Self::new(
            self.path.clone(),
            self.plan.clone(),
            self.result_shape.clone(),
            self.null_safe,
        )
    }
}

impl<T, R> fmt::Debug for Accessor<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("path", &self.path)
            .field("plan", &self.plan.to_string())
            .field("result_shape", &self.result_shape.to_string())
            .field("null_safe", &self.null_safe)
            .finish()
    }
}

impl<T, R> fmt::Display for Accessor<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x => {}", self.plan)
    }
}

/// Checks that the shape a plan produces can be read as `requested`.
///
/// Nullability is not part of the check: a `null` read into a non-optional result
/// surfaces as an `AccessError::Serialization` at evaluation. An `Any` result is only
/// known at evaluation and always passes.
pub(crate) fn check_result_shape(produced: &Shape, requested: &Shape) -> Result<(), CompileError> {
    let produced = produced.non_null();
    if matches!(produced, Shape::Any) || produced.converts_to(requested.non_null()) {
        Ok(())
    } else {
        Err(CompileError::TypeMismatch {
            expected: requested.to_string(),
            found: produced.to_string(),
        })
    }
}
