//! Defines the error types for path compilation and accessor evaluation.

use pathlinq_jpath::JPathError;
use thiserror::Error;

/// Errors raised while compiling a path into an accessor. All of them are
/// reported synchronously by the compiler; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Path syntax error: {0}")]
    PathSyntax(#[from] JPathError),

    #[error("Path contains the reserved escape placeholder: '{0}'")]
    ReservedPlaceholder(String),

    #[error("Unsupported path element '{element}' ({kind})")]
    UnsupportedElement { kind: &'static str, element: String },

    #[error("Cannot translate filter '{text}': {reason}")]
    FilterTranslation { text: String, reason: String },

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Type '{0}' has no default value to use as a null-safety fallback")]
    DefaultConstruction(String),

    #[error("Default value of type '{type_name}' could not be serialized: {reason}")]
    FallbackSerialization { type_name: String, reason: String },

    #[error("Type '{type_name}' has no member '{member}'")]
    UnknownMember { type_name: String, member: String },

    #[error("Filter requires a collection, found {0}")]
    NotACollection(String),

    #[error("Cannot access '{member}' on a value of type {type_name}")]
    NotNavigable { type_name: String, member: String },
}

/// Errors raised while evaluating a compiled accessor.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Null reference while evaluating '{0}'")]
    NullReference(String),

    #[error("Expected {expected} while evaluating '{step}'")]
    UnexpectedValue { step: String, expected: &'static str },

    #[error("JSON serialization/deserialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
