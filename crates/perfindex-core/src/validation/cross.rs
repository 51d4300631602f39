//! Cross-field plausibility rules
//!
//! Only fields that are present and individually valid take part; a rule
//! whose inputs are not all available is skipped.

use super::error::ValidationError;
use super::field::CheckedFields;
use crate::record::Field;

/// Hours in a day; study plus sleep may not exceed it
pub const DAY_HOURS: f64 = 24.0;

/// Below this many study hours the sample-paper cap applies
pub const LOW_STUDY_HOURS: f64 = 1.0;

/// Most sample papers plausible with low study hours
pub const LOW_STUDY_MAX_PAPERS: u32 = 5;

/// Apply both rules in order, collecting every violation
pub fn check_cross_fields(fields: &CheckedFields, errors: &mut Vec<ValidationError>) {
    if let Some(err) = check_schedule(fields) {
        errors.push(err);
    }
    if let Some(err) = check_practice(fields) {
        errors.push(err);
    }
}

/// Study plus sleep must fit in one day
pub fn check_schedule(fields: &CheckedFields) -> Option<ValidationError> {
    let (hours_studied, sleep_hours) = (fields.hours_studied?, fields.sleep_hours?);
    let total = hours_studied + sleep_hours;

    (total > DAY_HOURS).then_some(ValidationError::ImpossibleSchedule {
        hours_studied,
        sleep_hours,
        total,
    })
}

/// Many sample papers with under an hour of study is implausible
pub fn check_practice(fields: &CheckedFields) -> Option<ValidationError> {
    let (hours_studied, sample_papers) = (fields.hours_studied?, fields.sample_papers?);

    (hours_studied < LOW_STUDY_HOURS && sample_papers > LOW_STUDY_MAX_PAPERS).then(|| {
        ValidationError::Implausible {
            field: Field::SamplePapers,
            message: "Unrealistic number of sample papers for the amount of study time."
                .to_string(),
        }
    })
}
