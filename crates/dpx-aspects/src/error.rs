use std::fmt;

use thiserror::Error;

/// Transform that raised an [`AspectError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectOp {
    CollectKeys,
    Filter,
    Expand,
    Flatten,
}

impl fmt::Display for AspectOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AspectOp::CollectKeys => "collect_aspect_keys",
            AspectOp::Filter => "filter_aspects",
            AspectOp::Expand => "expand_aspects",
            AspectOp::Flatten => "flatten_aspects",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AspectError {
    #[error("{op}: '{field}' is not a {expected}, got {found}")]
    TypeMismatch {
        op: AspectOp,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{op}: {subject} at index {index} is not a {expected}, got {found}")]
    IndexedTypeMismatch {
        op: AspectOp,
        subject: String,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{op}: value for key '{key}' is not a {expected}, got {found}")]
    KeyedTypeMismatch {
        op: AspectOp,
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{op}: '{field}' not found in aspect item at index {index}")]
    MissingField {
        op: AspectOp,
        field: &'static str,
        index: usize,
    },
}

impl AspectError {
    pub fn op(&self) -> AspectOp {
        match self {
            AspectError::TypeMismatch { op, .. }
            | AspectError::IndexedTypeMismatch { op, .. }
            | AspectError::KeyedTypeMismatch { op, .. }
            | AspectError::MissingField { op, .. } => *op,
        }
    }
}
