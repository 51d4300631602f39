//! Feature-vector assembly
//!
//! The model consumes five numbers in a fixed order. Preprocessing cannot
//! fail: a [`ValidatedRecord`] only exists once validation has passed.

use std::fmt;
use std::ops::Index;

use serde::Serialize;

use crate::record::ValidatedRecord;

/// Number of model inputs
pub const FEATURE_COUNT: usize = 5;

/// Model input names, in feature order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "hours_studied",
    "previous_scores",
    "extracurricular",
    "sleep_hours",
    "sample_papers",
];

/// Fixed-order numeric encoding of a validated record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_array(self) -> [f64; FEATURE_COUNT] {
        self.0
    }

    /// Pairs of (feature name, value) in feature order
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }

    #[cfg(test)]
    pub(crate) fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        FeatureVector(values)
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl From<&ValidatedRecord> for FeatureVector {
    fn from(record: &ValidatedRecord) -> Self {
        preprocess(record)
    }
}

/// Map a validated record onto the model's input layout
pub fn preprocess(record: &ValidatedRecord) -> FeatureVector {
    let features = FeatureVector([
        record.hours_studied(),
        f64::from(record.previous_scores()),
        if record.extracurricular() { 1.0 } else { 0.0 },
        record.sleep_hours(),
        f64::from(record.sample_papers()),
    ]);
    tracing::debug!(features = %features, "preprocess");
    features
}
