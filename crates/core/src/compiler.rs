//! The path compiler: raw path text in, accessor out.

use crate::accessor::{Accessor, check_result_shape};
use crate::chain::build_chain;
use crate::config::CompileOptions;
use crate::error::CompileError;
use crate::null_safety::add_null_checks;
use crate::plan::Expr;
use crate::resolve::escape_literal_dots;
use log::debug;
use pathlinq_jpath::normalize;
use pathlinq_types::{Described, Shape};
use serde_json::Value;

/// Compiles JSONPath-style strings into accessors.
///
/// A compiler holds nothing but its options, so one instance can be reused for any
/// number of paths and root types.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathCompiler {
    options: CompileOptions,
}

impl PathCompiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compiles `path` against a root of shape `root`, returning the plan and the
    /// shape it produces.
    pub fn compile_plan(&self, root: &Shape, path: &str) -> Result<(Expr, Shape), CompileError> {
        let escaped = escape_literal_dots(path)?;
        let elements = normalize(&escaped)?;
        let chain = build_chain(root, &elements, self.options.unsupported_elements)?;
        let shape = chain.final_shape().clone();

        let plan = if self.options.null_safety {
            add_null_checks(&chain)?
        } else {
            chain.to_expr()
        };
        debug!("Compiled '{}' against {} as `{}`", path, root, plan);
        Ok((plan, shape))
    }

    /// Compiles an untyped accessor for `T`.
    pub fn compile<T: Described>(&self, path: &str) -> Result<Accessor<T>, CompileError> {
        self.compile_as::<T, Value>(path)
    }

    /// Compiles an accessor for `T` producing `R`. A chain whose result cannot be read
    /// as `R` fails here rather than at evaluation.
    pub fn compile_as<T: Described, R: Described>(
        &self,
        path: &str,
    ) -> Result<Accessor<T, R>, CompileError> {
        let (plan, shape) = self.compile_plan(&T::shape(), path)?;
        check_result_shape(&shape, &R::shape())?;
        Ok(Accessor::new(
            path.to_string(),
            plan,
            shape,
            self.options.null_safety,
        ))
    }

    /// Compiles an untyped accessor against a shape known only at runtime.
    pub fn compile_for_shape(&self, root: &Shape, path: &str) -> Result<Accessor<Value>, CompileError> {
        let (plan, shape) = self.compile_plan(root, path)?;
        Ok(Accessor::new(
            path.to_string(),
            plan,
            shape,
            self.options.null_safety,
        ))
    }
}
