//! Validation pipeline
//!
//! Stages run in a fixed order and every error is collected:
//! 1. coerce the `extracurricular` flag
//! 2. check each field on its own (missing, type, bounds)
//! 3. check cross-field rules on the fields that survived step 2
//!
//! Only a record with zero errors becomes a [`ValidatedRecord`].

pub mod coerce;
pub mod cross;
pub mod error;
pub mod field;

use std::time::Instant;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::Result;
use crate::record::{PerformanceRecord, ValidatedRecord};
use crate::trace_time;

pub use coerce::coerce_flag;
pub use cross::check_cross_fields;
pub use error::{ErrorKind, ValidationError};
pub use field::{validate_fields, CheckedFields};

/// Result of validating one record
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid(ValidatedRecord),
    Invalid(Vec<ValidationError>),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    pub fn record(&self) -> Option<&ValidatedRecord> {
        match self {
            ValidationOutcome::Valid(record) => Some(record),
            ValidationOutcome::Invalid(_) => None,
        }
    }

    /// Errors in report order; empty when valid
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidationOutcome::Valid(_) => &[],
            ValidationOutcome::Invalid(errors) => errors,
        }
    }

    /// User-facing error strings in report order
    pub fn messages(&self) -> Vec<String> {
        self.errors().iter().map(ToString::to_string).collect()
    }

    /// Split into the accepted record or the errors that rejected it
    pub fn into_result(self) -> std::result::Result<ValidatedRecord, Vec<ValidationError>> {
        match self {
            ValidationOutcome::Valid(record) => Ok(record),
            ValidationOutcome::Invalid(errors) => Err(errors),
        }
    }
}

/// Serializes as `{"valid": true, "record": {..}}` or
/// `{"valid": false, "errors": [..]}`
impl Serialize for ValidationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            ValidationOutcome::Valid(record) => {
                map.serialize_entry("valid", &true)?;
                map.serialize_entry("record", record)?;
            }
            ValidationOutcome::Invalid(_) => {
                map.serialize_entry("valid", &false)?;
                map.serialize_entry("errors", &self.messages())?;
            }
        }
        map.end()
    }
}

/// Validate an untrusted record
///
/// Pure: the same input always yields the same outcome.
pub fn validate_input(record: &PerformanceRecord) -> ValidationOutcome {
    let start = Instant::now();
    let mut errors = Vec::new();

    let flag = match coerce_flag(record.extracurricular.as_ref()) {
        Ok(flag) => flag,
        Err(err) => {
            errors.push(err);
            None
        }
    };

    let checked = validate_fields(record, flag, &mut errors);
    check_cross_fields(&checked, &mut errors);

    trace_time!(start, "validate_input");

    if !errors.is_empty() {
        tracing::debug!(error_count = errors.len(), "validate_input rejected record");
        return ValidationOutcome::Invalid(errors);
    }

    match checked {
        CheckedFields {
            hours_studied: Some(hours_studied),
            previous_scores: Some(previous_scores),
            extracurricular: Some(extracurricular),
            sleep_hours: Some(sleep_hours),
            sample_papers: Some(sample_papers),
        } => {
            tracing::debug!("validate_input accepted record");
            ValidationOutcome::Valid(ValidatedRecord::new(
                hours_studied,
                previous_scores,
                extracurricular,
                sleep_hours,
                sample_papers,
            ))
        }
        // Every field stage either fills its slot or reports an error.
        _ => unreachable!("field stage left a slot empty without reporting an error"),
    }
}

/// Validate a JSON document; non-object documents are input errors
pub fn validate_json(value: &Value) -> Result<ValidationOutcome> {
    let record = PerformanceRecord::from_json(value)?;
    Ok(validate_input(&record))
}
