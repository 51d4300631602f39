//! Single-field type and bounds checks

use super::error::ValidationError;
use crate::record::{Field, PerformanceRecord, RawValue};

/// Declared numeric domain of a bounded field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub field: Field,
    /// Human label used in range messages
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

impl FieldBounds {
    fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn range_error(&self) -> ValidationError {
        ValidationError::range(
            self.field,
            format!(
                "{} must be between {} and {}.",
                self.label, self.min, self.max
            ),
        )
    }
}

pub const HOURS_STUDIED: FieldBounds = FieldBounds {
    field: Field::HoursStudied,
    label: "Hours studied",
    min: 0.0,
    max: 24.0,
};

pub const PREVIOUS_SCORES: FieldBounds = FieldBounds {
    field: Field::PreviousScores,
    label: "Previous scores",
    min: 0.0,
    max: 100.0,
};

pub const SLEEP_HOURS: FieldBounds = FieldBounds {
    field: Field::SleepHours,
    label: "Sleep hours",
    min: 0.0,
    max: 24.0,
};

pub const SAMPLE_PAPERS: FieldBounds = FieldBounds {
    field: Field::SamplePapers,
    label: "Sample papers",
    min: 0.0,
    max: 30.0,
};

/// Per-field results of the field stage
///
/// A value is `Some` only when the field was present and individually
/// valid; cross-field rules only ever look at those.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CheckedFields {
    pub hours_studied: Option<f64>,
    pub previous_scores: Option<u32>,
    pub extracurricular: Option<bool>,
    pub sleep_hours: Option<f64>,
    pub sample_papers: Option<u32>,
}

/// Check every field independently, collecting all violations
///
/// `flag` is the already-coerced `extracurricular` value; coercion errors
/// were reported by the coercer, so only its absence is checked here.
pub fn validate_fields(
    record: &PerformanceRecord,
    flag: Option<bool>,
    errors: &mut Vec<ValidationError>,
) -> CheckedFields {
    let mut checked = CheckedFields::default();

    for field in Field::ALL {
        let Some(raw) = record.get(field) else {
            errors.push(ValidationError::MissingField { field });
            continue;
        };

        let outcome = match field {
            Field::HoursStudied => check_real(&HOURS_STUDIED, raw).map(|v| {
                checked.hours_studied = Some(v);
            }),
            Field::PreviousScores => check_integer(&PREVIOUS_SCORES, raw).map(|v| {
                checked.previous_scores = Some(v);
            }),
            Field::Extracurricular => {
                checked.extracurricular = flag;
                Ok(())
            }
            Field::SleepHours => check_real(&SLEEP_HOURS, raw).map(|v| {
                checked.sleep_hours = Some(v);
            }),
            Field::SamplePapers => check_integer(&SAMPLE_PAPERS, raw).map(|v| {
                checked.sample_papers = Some(v);
            }),
        };

        if let Err(err) = outcome {
            errors.push(err);
        }
    }

    checked
}

/// Coerce a raw value to a finite real and check its bounds
pub fn check_real(bounds: &FieldBounds, raw: &RawValue) -> Result<f64, ValidationError> {
    let value = match raw {
        RawValue::Integer(i) => *i as f64,
        RawValue::Real(r) if r.is_finite() => *r,
        RawValue::Text(text) => match text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                return Err(ValidationError::type_coercion(
                    bounds.field,
                    format!("'{}' value must be a number.", text),
                ))
            }
        },
        other => {
            return Err(ValidationError::type_coercion(
                bounds.field,
                format!("Expected a number, got {}.", other.kind()),
            ))
        }
    };

    if bounds.contains(value) {
        Ok(value)
    } else {
        Err(bounds.range_error())
    }
}

/// Coerce a raw value to a whole number and check its bounds
pub fn check_integer(bounds: &FieldBounds, raw: &RawValue) -> Result<u32, ValidationError> {
    let not_integer = |shown: &dyn std::fmt::Display| {
        ValidationError::type_coercion(
            bounds.field,
            format!("'{}' value must be an integer.", shown),
        )
    };

    let value = match raw {
        RawValue::Integer(i) => *i,
        RawValue::Real(r) if r.is_finite() && r.fract() == 0.0 => {
            if *r < i64::MIN as f64 || *r > i64::MAX as f64 {
                return Err(bounds.range_error());
            }
            *r as i64
        }
        RawValue::Real(r) => return Err(not_integer(r)),
        RawValue::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| not_integer(text))?,
        other => {
            return Err(ValidationError::type_coercion(
                bounds.field,
                format!("Expected an integer, got {}.", other.kind()),
            ))
        }
    };

    if !bounds.contains(value as f64) {
        return Err(bounds.range_error());
    }
    u32::try_from(value).map_err(|_| bounds.range_error())
}
