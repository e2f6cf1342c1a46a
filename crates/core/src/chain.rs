//! Folds a normalized element sequence into a linear access chain.

use crate::config::UnsupportedElementPolicy;
use crate::defaults::zero_value;
use crate::error::CompileError;
use crate::filter::Predicate;
use crate::plan::Expr;
use crate::resolve::{resolve_property, restore_literal_dots};
use log::{trace, warn};
use pathlinq_jpath::PathElement;
use pathlinq_types::Shape;
use serde_json::Value;
use std::fmt;

/// One step of the traversal plan.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessStep {
    /// Reads a struct member.
    Member { name: String },
    /// Reads a mapping entry by key, or yields `miss` when the key is absent.
    MapKey { key: String, miss: Value },
    /// Reduces a collection to its first element matching `predicate`, or to `miss`
    /// when nothing matches.
    FilterFirst { predicate: Predicate, miss: Value },
}

impl fmt::Display for AccessStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessStep::Member { name } => write!(f, ".{}", name),
            AccessStep::MapKey { key, .. } => write!(f, "[{}]", Value::String(key.clone())),
            AccessStep::FilterFirst { predicate, .. } => {
                write!(f, ".first_or_default({})", predicate)
            }
        }
    }
}

/// A step together with the shape it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub step: AccessStep,
    pub shape: Shape,
}

/// An ordered chain of links from the root parameter to the leaf. Each link reads
/// from the value produced by the link before it.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessChain {
    root: Shape,
    links: Vec<Link>,
}

impl AccessChain {
    pub fn new(root: Shape) -> Self {
        Self {
            root,
            links: Vec::new(),
        }
    }

    pub fn push(&mut self, step: AccessStep, shape: Shape) {
        self.links.push(Link { step, shape });
    }

    pub fn root(&self) -> &Shape {
        &self.root
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The shape of the leaf, or of the root for an empty chain.
    pub fn final_shape(&self) -> &Shape {
        self.links.last().map_or(&self.root, |link| &link.shape)
    }

    /// The expression reading the first `len` links.
    pub fn prefix(&self, len: usize) -> Expr {
        self.links[..len.min(self.links.len())]
            .iter()
            .fold(Expr::Root, |base, link| base.then(link.step.clone()))
    }

    /// The expression reading the whole chain.
    pub fn to_expr(&self) -> Expr {
        self.prefix(self.links.len())
    }
}

/// Builds the access chain for `elements`, starting at a root of shape `root`.
pub fn build_chain(
    root: &Shape,
    elements: &[PathElement],
    policy: UnsupportedElementPolicy,
) -> Result<AccessChain, CompileError> {
    let mut chain = AccessChain::new(root.clone());

    for element in elements {
        match element {
            PathElement::Root => {}
            PathElement::Property { name } => {
                let name = restore_literal_dots(name);
                let (step, shape) = resolve_property(chain.final_shape(), &name)?;
                trace!("Resolved '{}' as `{}` -> {}", name, step, shape);
                chain.push(step, shape);
            }
            PathElement::FilterExpression { predicate } => {
                let element_shape = chain
                    .final_shape()
                    .element()
                    .cloned()
                    .ok_or_else(|| CompileError::NotACollection(chain.final_shape().to_string()))?;
                let predicate = Predicate::compile(predicate, &element_shape)?;
                let miss = zero_value(&element_shape);
                trace!("Filter `{}` -> {}", predicate, element_shape);
                chain.push(AccessStep::FilterFirst { predicate, miss }, element_shape);
            }
            unsupported => match policy {
                UnsupportedElementPolicy::Reject => {
                    return Err(CompileError::UnsupportedElement {
                        kind: unsupported.kind(),
                        element: unsupported.to_string(),
                    });
                }
                UnsupportedElementPolicy::Ignore => {
                    warn!(
                        "Ignoring unsupported {} element '{}'",
                        unsupported.kind(),
                        unsupported
                    );
                }
            },
        }
    }
    Ok(chain)
}
