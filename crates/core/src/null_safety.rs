//! Rewrites a linear access chain into nested null guards.

use crate::chain::AccessChain;
use crate::defaults::default_value;
use crate::error::CompileError;
use crate::plan::Expr;
use log::trace;

/// Wraps every nullable link of `chain` in a guard that yields the default value of
/// the chain's final shape when the link is `null`.
///
/// Links are visited leaf to root, so the outermost guard checks the link closest to
/// the root and every deeper read only runs once its base is known to be non-null.
/// Value-kind links are never guarded. A chain of one link is returned unchanged.
pub fn add_null_checks(chain: &AccessChain) -> Result<Expr, CompileError> {
    let links = chain.links();
    if links.len() <= 1 {
        return Ok(chain.to_expr());
    }

    let fallback = default_value(chain.final_shape())?;
    let mut current = chain.to_expr();

    for (index, link) in links.iter().enumerate().rev() {
        if !link.shape.is_nullable() {
            continue;
        }
        let subject = chain.prefix(index + 1);
        trace!("Guarding `{}` with {}", subject, fallback);
        current = Expr::Guard {
            subject: Box::new(subject),
            fallback: fallback.clone(),
            then: Box::new(current),
        };
    }
    Ok(current)
}
