//! Linear regression artifact

use serde::Deserialize;

use super::Predictor;
use crate::error::InferenceError;
use crate::features::{FeatureVector, FEATURE_COUNT};

/// `intercept + sum(coefficients[i] * x[i])`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearModel {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Result<Self, String> {
        let model = LinearModel {
            intercept,
            coefficients,
        };
        model.check()?;
        Ok(model)
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Structural check run after deserialization
    pub(crate) fn check(&self) -> Result<(), String> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(format!(
                "expected {} coefficients, found {}",
                FEATURE_COUNT,
                self.coefficients.len()
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("coefficients must be finite".to_string());
        }
        Ok(())
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.as_slice())
                .map(|(c, x)| c * x)
                .sum::<f64>())
    }
}
