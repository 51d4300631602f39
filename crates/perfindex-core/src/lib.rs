//! Perfindex Core Library
//!
//! Validation, normalization and inference pipeline for student
//! performance records.

pub mod config;
pub mod error;
pub mod features;
pub mod format;
pub mod logging;
pub mod model;
pub mod predict;
pub mod record;
pub mod validation;

pub use features::{preprocess, FeatureVector, FEATURE_NAMES};
pub use predict::{PredictionResult, PredictionService};
pub use record::{Field, PerformanceRecord, RawValue, ValidatedRecord};
pub use validation::{validate_input, ValidationError, ValidationOutcome};
