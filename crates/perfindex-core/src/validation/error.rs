//! Validation error kinds

use serde::Serialize;
use thiserror::Error;

use crate::record::Field;

/// Broad category of a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingField,
    TypeCoercion,
    Range,
    CrossFieldConsistency,
}

/// A single violated rule
///
/// `Display` yields the user-facing string: `"<field>: <message>"` for
/// field-attributed errors, the bare message for whole-record errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field}: This field cannot be null.")]
    MissingField { field: Field },

    #[error("{field}: {message}")]
    TypeCoercion { field: Field, message: String },

    #[error("{field}: {message}")]
    Range { field: Field, message: String },

    #[error(
        "Impossible schedule: Study hours ({hours_studied}) and sleep hours ({sleep_hours}) \
         combined ({total}h) exceed a 24-hour day."
    )]
    ImpossibleSchedule {
        hours_studied: f64,
        sleep_hours: f64,
        total: f64,
    },

    #[error("{field}: {message}")]
    Implausible { field: Field, message: String },
}

impl ValidationError {
    pub(crate) fn type_coercion(field: Field, message: impl Into<String>) -> Self {
        ValidationError::TypeCoercion {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn range(field: Field, message: impl Into<String>) -> Self {
        ValidationError::Range {
            field,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MissingField { .. } => ErrorKind::MissingField,
            ValidationError::TypeCoercion { .. } => ErrorKind::TypeCoercion,
            ValidationError::Range { .. } => ErrorKind::Range,
            ValidationError::ImpossibleSchedule { .. } | ValidationError::Implausible { .. } => {
                ErrorKind::CrossFieldConsistency
            }
        }
    }

    /// Field the error is attributed to; `None` for whole-record errors
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::TypeCoercion { field, .. }
            | ValidationError::Range { field, .. }
            | ValidationError::Implausible { field, .. } => Some(*field),
            ValidationError::ImpossibleSchedule { .. } => None,
        }
    }
}
