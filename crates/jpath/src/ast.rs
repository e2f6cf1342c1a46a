//! Defines the normalized element model for JSONPath expressions.
use std::fmt;

/// One normalized step of a JSONPath expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathElement {
    /// The document root (`$`). Always the first element.
    Root,
    /// Recursive descent (`..`).
    RecursiveDescent,
    /// A named member (`.name` or `['name']`).
    Property { name: String },
    /// Any member (`.*`).
    AnyProperty,
    /// Several named members (`['a','b']`).
    PropertyList { names: Vec<String> },
    /// A single array position (`[2]`, `[-1]`).
    ArrayIndex { index: i64 },
    /// Any array position (`[*]`).
    AnyArrayIndex,
    /// Several array positions (`[0,2]`).
    ArrayIndexList { indexes: Vec<i64> },
    /// A slice (`[start:end:step]`).
    ArraySlice {
        start: Option<i64>,
        end: Option<i64>,
        step: Option<i64>,
    },
    /// A script expression (`[(...)]`).
    Expression { text: String },
    /// A filter expression (`[?(...)]`). The text excludes the brackets and parentheses.
    FilterExpression { predicate: String },
}

impl PathElement {
    pub fn property(name: impl Into<String>) -> Self {
        PathElement::Property { name: name.into() }
    }

    pub fn filter(predicate: impl Into<String>) -> Self {
        PathElement::FilterExpression {
            predicate: predicate.into(),
        }
    }

    /// A stable name for the element variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            PathElement::Root => "root",
            PathElement::RecursiveDescent => "recursive descent",
            PathElement::Property { .. } => "property",
            PathElement::AnyProperty => "any property",
            PathElement::PropertyList { .. } => "property list",
            PathElement::ArrayIndex { .. } => "array index",
            PathElement::AnyArrayIndex => "any array index",
            PathElement::ArrayIndexList { .. } => "array index list",
            PathElement::ArraySlice { .. } => "array slice",
            PathElement::Expression { .. } => "expression",
            PathElement::FilterExpression { .. } => "filter expression",
        }
    }
}

fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], quote: bool) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        if quote {
            write!(f, "'{}'", item)?;
        } else {
            write!(f, "{}", item)?;
        }
    }
    Ok(())
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::Root => write!(f, "$"),
            PathElement::RecursiveDescent => write!(f, ".."),
            PathElement::Property { name } => write!(f, "['{}']", name),
            PathElement::AnyProperty => write!(f, ".*"),
            PathElement::PropertyList { names } => {
                write!(f, "[")?;
                join(f, names, true)?;
                write!(f, "]")
            }
            PathElement::ArrayIndex { index } => write!(f, "[{}]", index),
            PathElement::AnyArrayIndex => write!(f, "[*]"),
            PathElement::ArrayIndexList { indexes } => {
                write!(f, "[")?;
                join(f, indexes, false)?;
                write!(f, "]")
            }
            PathElement::ArraySlice { start, end, step } => {
                write!(f, "[")?;
                if let Some(start) = start {
                    write!(f, "{}", start)?;
                }
                write!(f, ":")?;
                if let Some(end) = end {
                    write!(f, "{}", end)?;
                }
                if let Some(step) = step {
                    write!(f, ":{}", step)?;
                }
                write!(f, "]")
            }
            PathElement::Expression { text } => write!(f, "[({})]", text),
            PathElement::FilterExpression { predicate } => write!(f, "[?({})]", predicate),
        }
    }
}

/// Renders a normalized element sequence, e.g. `$['orders'][?(@.id=='A')]`.
pub fn to_normalized_string(elements: &[PathElement]) -> String {
    elements.iter().map(ToString::to_string).collect()
}
