//! Record types flowing through the pipeline
//!
//! A [`PerformanceRecord`] holds untrusted, loosely typed values exactly as
//! they arrived. A [`ValidatedRecord`] can only be produced by
//! [`crate::validation::validate_input`].

pub mod raw;

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{PerfIndexError, Result};

pub use raw::RawValue;

/// The five input fields, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    HoursStudied,
    PreviousScores,
    Extracurricular,
    SleepHours,
    SamplePapers,
}

impl Field {
    /// All fields in canonical order (also the feature order)
    pub const ALL: [Field; 5] = [
        Field::HoursStudied,
        Field::PreviousScores,
        Field::Extracurricular,
        Field::SleepHours,
        Field::SamplePapers,
    ];

    /// Key used for this field in input mappings
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::HoursStudied => "hours_studied",
            Field::PreviousScores => "previous_scores",
            Field::Extracurricular => "extracurricular",
            Field::SleepHours => "sleep_hours",
            Field::SamplePapers => "sample_papers",
        }
    }

    /// Look up a field by its input key
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.as_str() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Untrusted input record, one optional raw value per field
///
/// `None` means the key was absent (or JSON `null`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceRecord {
    pub hours_studied: Option<RawValue>,
    pub previous_scores: Option<RawValue>,
    pub extracurricular: Option<RawValue>,
    pub sleep_hours: Option<RawValue>,
    pub sample_papers: Option<RawValue>,
}

impl PerformanceRecord {
    /// Raw value for a field, if present
    pub fn get(&self, field: Field) -> Option<&RawValue> {
        match field {
            Field::HoursStudied => self.hours_studied.as_ref(),
            Field::PreviousScores => self.previous_scores.as_ref(),
            Field::Extracurricular => self.extracurricular.as_ref(),
            Field::SleepHours => self.sleep_hours.as_ref(),
            Field::SamplePapers => self.sample_papers.as_ref(),
        }
    }

    /// Set (or clear) the raw value of a field
    pub fn set(&mut self, field: Field, value: Option<RawValue>) {
        let slot = match field {
            Field::HoursStudied => &mut self.hours_studied,
            Field::PreviousScores => &mut self.previous_scores,
            Field::Extracurricular => &mut self.extracurricular,
            Field::SleepHours => &mut self.sleep_hours,
            Field::SamplePapers => &mut self.sample_papers,
        };
        *slot = value;
    }

    /// Builder-style variant of [`PerformanceRecord::set`]
    pub fn with(mut self, field: Field, value: impl Into<RawValue>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    /// Build a record from a JSON object. Unknown keys are ignored.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mut record = PerformanceRecord::default();
        for (key, value) in map {
            match Field::from_key(key) {
                Some(field) => record.set(field, RawValue::from_json(value)),
                None => tracing::debug!(key = key.as_str(), "ignoring unknown input key"),
            }
        }
        record
    }

    /// Build a record from an arbitrary JSON document
    ///
    /// The document must be a JSON object; anything else is an input error
    /// rather than a validation failure.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(PerfIndexError::InvalidInput {
                reason: format!(
                    "expected a JSON object of fields, got {}",
                    raw::json_kind(other)
                ),
            }),
        }
    }

    /// Parse a record from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| PerfIndexError::InvalidInput {
            reason: format!("malformed JSON: {}", e),
        })?;
        Self::from_json(&value)
    }
}

/// A record that passed every field and cross-field check
///
/// Fields are private; the only constructor lives in the validation module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidatedRecord {
    hours_studied: f64,
    previous_scores: u32,
    extracurricular: bool,
    sleep_hours: f64,
    sample_papers: u32,
}

impl ValidatedRecord {
    pub(crate) fn new(
        hours_studied: f64,
        previous_scores: u32,
        extracurricular: bool,
        sleep_hours: f64,
        sample_papers: u32,
    ) -> Self {
        Self {
            hours_studied,
            previous_scores,
            extracurricular,
            sleep_hours,
            sample_papers,
        }
    }

    pub fn hours_studied(&self) -> f64 {
        self.hours_studied
    }

    pub fn previous_scores(&self) -> u32 {
        self.previous_scores
    }

    pub fn extracurricular(&self) -> bool {
        self.extracurricular
    }

    pub fn sleep_hours(&self) -> f64 {
        self.sleep_hours
    }

    pub fn sample_papers(&self) -> u32 {
        self.sample_papers
    }
}
