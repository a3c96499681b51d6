//! Field validators run during the provider's validation pass.
//!
//! Validators never fail hard: they return the diagnostics for one field and
//! leave severity to the caller.

use thiserror::Error;

use crate::{MAX_ASPECTS, Value};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected {field} to be array, but got {found}")]
    NotArray { field: String, found: &'static str },
    #[error("The maximal number of aspects is {max}.")]
    TooManyAspects { field: String, max: usize },
    #[error("expected {field} to be string, but got {found}")]
    NotString { field: String, found: &'static str },
    #[error("{field} has an invalid format: '{value}' does not match {expected}")]
    InvalidFormat {
        field: String,
        value: String,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Field the diagnostic is attached to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::NotArray { field, .. }
            | ValidationError::TooManyAspects { field, .. }
            | ValidationError::NotString { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

const PROJECT_NUMBER_PATH: &str = "projects/<project number>/<path>";
const ASPECT_PROJECT_NUMBER: &str = "<project number>.<name>";

/// Checks the number of configured aspects against [`MAX_ASPECTS`].
pub fn validate_aspect_count(value: &Value, field: &str) -> Vec<ValidationError> {
    validate_aspect_count_with_limit(value, field, MAX_ASPECTS)
}

pub fn validate_aspect_count_with_limit(
    value: &Value,
    field: &str,
    max: usize,
) -> Vec<ValidationError> {
    let count = match value {
        Value::List(items) => items.len(),
        Value::Map(entries) => entries.len(),
        other => {
            return vec![ValidationError::NotArray {
                field: field.to_owned(),
                found: other.kind(),
            }];
        }
    };
    if count > max {
        return vec![ValidationError::TooManyAspects {
            field: field.to_owned(),
            max,
        }];
    }
    Vec::new()
}

/// Checks a `projects/<number>/<rest>` resource path.
pub fn validate_project_number_path(value: &Value, field: &str) -> Vec<ValidationError> {
    validate_text(value, field, PROJECT_NUMBER_PATH, is_project_number_path)
}

/// Checks a `<number>.<rest>` aspect type key such as
/// `1234567890.compute.googleapis.com/Disk`.
pub fn validate_aspect_project_number(value: &Value, field: &str) -> Vec<ValidationError> {
    validate_text(value, field, ASPECT_PROJECT_NUMBER, is_aspect_project_number)
}

fn validate_text(
    value: &Value,
    field: &str,
    expected: &'static str,
    is_valid: fn(&str) -> bool,
) -> Vec<ValidationError> {
    let Some(text) = value.as_str() else {
        return vec![ValidationError::NotString {
            field: field.to_owned(),
            found: value.kind(),
        }];
    };
    if is_valid(text) {
        Vec::new()
    } else {
        vec![ValidationError::InvalidFormat {
            field: field.to_owned(),
            value: text.to_owned(),
            expected,
        }]
    }
}

fn is_project_number_path(value: &str) -> bool {
    let Some(rest) = value.strip_prefix("projects/") else {
        return false;
    };
    match split_project_number(rest) {
        Some(('/', tail)) => is_path_tail(tail),
        _ => false,
    }
}

fn is_aspect_project_number(value: &str) -> bool {
    match split_project_number(value) {
        Some(('.', tail)) => is_path_tail(tail),
        _ => false,
    }
}

/// Non-empty remainder on a single line.
fn is_path_tail(tail: &str) -> bool {
    !tail.is_empty() && !tail.contains('\n')
}

/// Consumes a project number (no leading zero) and returns the character that
/// follows it together with the remainder after that character.
fn split_project_number(value: &str) -> Option<(char, &str)> {
    if !value.starts_with(|c: char| matches!(c, '1'..='9')) {
        return None;
    }
    let digits = value.bytes().take_while(u8::is_ascii_digit).count();
    let mut rest = value[digits..].chars();
    let separator = rest.next()?;
    Some((separator, rest.as_str()))
}
