//! The evaluation engine for executing an accessor plan against a JSON value.

use crate::chain::AccessStep;
use crate::error::AccessError;
use crate::plan::Expr;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Evaluates `expr` with `root` bound to the parameter.
///
/// Reads borrow from `root` wherever they can; only guard fallbacks, absent map keys
/// and filter misses produce owned values.
pub fn evaluate<'v>(expr: &Expr, root: &'v Value) -> Result<Cow<'v, Value>, AccessError> {
    match expr {
        Expr::Root => Ok(Cow::Borrowed(root)),
        Expr::Access { base, step } => match evaluate(base, root)? {
            Cow::Borrowed(value) => apply_step(value, step, expr),
            Cow::Owned(value) => {
                apply_step(&value, step, expr).map(|result| Cow::Owned(result.into_owned()))
            }
        },
        Expr::Guard {
            subject,
            fallback,
            then,
        } => {
            if evaluate(subject, root)?.is_null() {
                Ok(Cow::Owned(fallback.clone()))
            } else {
                evaluate(then, root)
            }
        }
    }
}

fn apply_step<'a>(
    base: &'a Value,
    step: &AccessStep,
    expr: &Expr,
) -> Result<Cow<'a, Value>, AccessError> {
    if base.is_null() {
        return Err(AccessError::NullReference(expr.to_string()));
    }
    match step {
        AccessStep::Member { name } => Ok(object_of(base, expr)?
            .get(name)
            .map_or(Cow::Owned(Value::Null), Cow::Borrowed)),
        AccessStep::MapKey { key, miss } => Ok(object_of(base, expr)?
            .get(key)
            .map_or_else(|| Cow::Owned(miss.clone()), Cow::Borrowed)),
        AccessStep::FilterFirst { predicate, miss } => {
            let items = base.as_array().ok_or_else(|| AccessError::UnexpectedValue {
                step: expr.to_string(),
                expected: "an array",
            })?;
            Ok(items
                .iter()
                .find(|item| predicate.matches(item))
                .map_or_else(|| Cow::Owned(miss.clone()), Cow::Borrowed))
        }
    }
}

fn object_of<'a>(value: &'a Value, expr: &Expr) -> Result<&'a Map<String, Value>, AccessError> {
    value.as_object().ok_or_else(|| AccessError::UnexpectedValue {
        step: expr.to_string(),
        expected: "an object",
    })
}
