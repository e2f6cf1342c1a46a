//! The executable accessor plan.

use crate::chain::AccessStep;
use serde_json::Value;
use std::fmt;

/// An accessor plan: a tree of reads rooted at the accessor's parameter.
///
/// Renders in lambda notation with `x` as the parameter, e.g.
/// `x.subClass == null ? "" : x.subClass.Type`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// The root object passed to the accessor.
    Root,
    /// Applies `step` to the value produced by `base`.
    Access { base: Box<Expr>, step: AccessStep },
    /// `subject == null ? fallback : then`
    Guard {
        subject: Box<Expr>,
        fallback: Value,
        then: Box<Expr>,
    },
}

impl Expr {
    pub fn then(self, step: AccessStep) -> Self {
        Expr::Access {
            base: Box::new(self),
            step,
        }
    }

    pub fn is_guarded(&self) -> bool {
        matches!(self, Expr::Guard { .. })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Root => write!(f, "x"),
            Expr::Access { base, step } => write!(f, "{}{}", base, step),
            Expr::Guard {
                subject,
                fallback,
                then,
            } => write!(f, "{} == null ? {} : {}", subject, fallback, then),
        }
    }
}
