//! Translation of a single filter comparison such as `@.Nested.Name=='Nested3'`.

use crate::chain::AccessStep;
use crate::compare::{compare_values, values_equal};
use crate::error::CompileError;
use crate::resolve::{resolve_property, restore_literal_dots};
use pathlinq_types::Shape;
use serde_json::{Number, Value};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

/// Two-character tokens come before their one-character prefixes so that `<=`
/// is never read as `<` followed by a stray `=`.
const OPERATORS: [(&str, ComparisonOp); 6] = [
    ("==", ComparisonOp::Equal),
    ("!=", ComparisonOp::NotEqual),
    ("<=", ComparisonOp::LessThanOrEqual),
    (">=", ComparisonOp::GreaterThanOrEqual),
    ("<", ComparisonOp::LessThan),
    (">", ComparisonOp::GreaterThan),
];

impl ComparisonOp {
    pub fn token(self) -> &'static str {
        match self {
            ComparisonOp::Equal => "==",
            ComparisonOp::NotEqual => "!=",
            ComparisonOp::LessThan => "<",
            ComparisonOp::LessThanOrEqual => "<=",
            ComparisonOp::GreaterThan => ">",
            ComparisonOp::GreaterThanOrEqual => ">=",
        }
    }

    pub fn is_relational(self) -> bool {
        !matches!(self, ComparisonOp::Equal | ComparisonOp::NotEqual)
    }

    /// Applies the operator. Relational operators are false for values without a
    /// common ordering, including `null`.
    pub fn test(self, left: &Value, right: &Value) -> bool {
        let ordering = || compare_values(left, right);
        match self {
            ComparisonOp::Equal => values_equal(left, right),
            ComparisonOp::NotEqual => !values_equal(left, right),
            ComparisonOp::LessThan => ordering() == Some(Ordering::Less),
            ComparisonOp::LessThanOrEqual => {
                matches!(ordering(), Some(Ordering::Less | Ordering::Equal))
            }
            ComparisonOp::GreaterThan => ordering() == Some(Ordering::Greater),
            ComparisonOp::GreaterThanOrEqual => {
                matches!(ordering(), Some(Ordering::Greater | Ordering::Equal))
            }
        }
    }
}

/// Finds the first operator in `text`, preferring the longer token at each position.
fn find_operator(text: &str) -> Option<(usize, &'static str, ComparisonOp)> {
    text.char_indices().find_map(|(pos, _)| {
        OPERATORS
            .iter()
            .find(|(token, _)| text[pos..].starts_with(token))
            .map(|&(token, op)| (pos, token, op))
    })
}

fn strip_quotes(literal: &str) -> (&str, bool) {
    let start = literal.strip_prefix(['"', '\'']);
    let inner = start.unwrap_or(literal);
    let end = inner.strip_suffix(['"', '\'']);
    (end.unwrap_or(inner), start.is_some() || end.is_some())
}

/// One parsed comparison: `@.<left_path> <op> <right_literal>`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    /// Member names from the loop variable to the compared field. Empty when the
    /// element itself is compared.
    pub left_path: Vec<String>,
    pub op: ComparisonOp,
    /// The right-hand literal with one surrounding quote removed.
    pub right_literal: String,
    /// Whether the literal was quoted in the source.
    pub quoted: bool,
}

impl FilterClause {
    pub fn parse(text: &str) -> Result<Self, CompileError> {
        let trimmed = text.trim();
        let body = trimmed
            .strip_prefix(['@', '*'])
            .unwrap_or(trimmed);

        let (pos, token, op) =
            find_operator(body).ok_or_else(|| CompileError::FilterTranslation {
                text: text.to_string(),
                reason: "no comparison operator found".to_string(),
            })?;

        let left_path = body[..pos]
            .split('.')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| restore_literal_dots(segment).into_owned())
            .collect();
        let (right_literal, quoted) = strip_quotes(body[pos + token.len()..].trim());

        Ok(Self {
            left_path,
            op,
            right_literal: restore_literal_dots(right_literal).into_owned(),
            quoted,
        })
    }
}

/// Builds the constant a field of `shape` is compared against.
fn literal_for(shape: &Shape, clause: &FilterClause) -> Result<Value, CompileError> {
    let literal = clause.right_literal.as_str();
    let mismatch = || CompileError::TypeMismatch {
        expected: format!("a {} literal", shape),
        found: format!("'{}'", literal),
    };
    match shape {
        Shape::Text => Ok(Value::String(literal.to_string())),
        Shape::Integer => literal
            .parse::<i64>()
            .map(Value::from)
            .or_else(|_| literal.parse::<u64>().map(Value::from))
            .map_err(|_| mismatch()),
        Shape::Float => literal
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(mismatch),
        Shape::Bool => literal
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|_| mismatch()),
        Shape::Optional(_) if literal == "null" && !clause.quoted => Ok(Value::Null),
        Shape::Optional(inner) => literal_for(inner, clause),
        Shape::Any if clause.quoted => Ok(Value::String(literal.to_string())),
        Shape::Any => Ok(serde_json::from_str(literal)
            .unwrap_or_else(|_| Value::String(literal.to_string()))),
        Shape::Struct(_) | Shape::List(_) | Shape::Map(_) => Err(mismatch()),
    }
}

/// A filter comparison resolved against the collection's element shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    steps: Vec<AccessStep>,
    op: ComparisonOp,
    operand: Value,
}

impl Predicate {
    pub fn compile(text: &str, element: &Shape) -> Result<Self, CompileError> {
        let clause = FilterClause::parse(text)?;

        let mut field = element.clone();
        let mut steps = Vec::with_capacity(clause.left_path.len());
        for name in &clause.left_path {
            let (step, next) = resolve_property(&field, name)?;
            steps.push(step);
            field = next;
        }

        if clause.op.is_relational() && !field.is_orderable() {
            return Err(CompileError::FilterTranslation {
                text: text.to_string(),
                reason: format!("operator '{}' needs an ordered field, found {}", clause.op.token(), field),
            });
        }
        let operand = literal_for(&field, &clause)?;

        Ok(Self {
            steps,
            op: clause.op,
            operand,
        })
    }

    /// Tests one collection element. A `null` met along the left path makes the
    /// left operand `null`.
    pub fn matches(&self, element: &Value) -> bool {
        let mut current = element;
        for step in &self.steps {
            let name = match step {
                AccessStep::Member { name } => name,
                AccessStep::MapKey { key, .. } => key,
                AccessStep::FilterFirst { .. } => return false,
            };
            current = current.get(name.as_str()).unwrap_or(&Value::Null);
        }
        self.op.test(current, &self.operand)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y => y")?;
        for step in &self.steps {
            write!(f, "{}", step)?;
        }
        write!(f, " {} {}", self.op.token(), self.operand)
    }
}
