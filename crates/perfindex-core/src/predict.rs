//! Prediction service
//!
//! Wraps the shared prediction function. One call per request, result
//! rounded to two decimals. Failures of any kind come back as
//! [`InferenceError`], never as validation errors.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::InferenceError;
use crate::features::{preprocess, FeatureVector};
use crate::model::{LoadedModel, Predictor};
use crate::record::ValidatedRecord;
use crate::trace_time;

/// Model output, rounded for presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub performance_index: f64,
}

/// Round to two decimal places, ties to even after scaling
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Invokes the prediction function, optionally under a deadline
#[derive(Clone)]
pub struct PredictionService {
    model: Arc<dyn Predictor>,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for PredictionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionService")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl PredictionService {
    pub fn new(model: Arc<dyn Predictor>) -> Self {
        Self {
            model,
            timeout: None,
        }
    }

    pub fn from_model(model: &LoadedModel) -> Self {
        Self::new(model.predictor())
    }

    /// Bound every prediction call by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Preprocess a validated record and predict from it
    pub fn predict(&self, record: &ValidatedRecord) -> Result<PredictionResult, InferenceError> {
        self.predict_features(&preprocess(record))
    }

    /// Predict from an already assembled feature vector
    pub fn predict_features(
        &self,
        features: &FeatureVector,
    ) -> Result<PredictionResult, InferenceError> {
        let start = Instant::now();

        let raw = match self.timeout {
            Some(timeout) => self.call_with_deadline(*features, timeout)?,
            None => call_guarded(self.model.as_ref(), features)?,
        };

        if !raw.is_finite() {
            return Err(InferenceError::NonFinite);
        }

        let result = PredictionResult {
            performance_index: round2(raw),
        };
        trace_time!(start, "predict");
        tracing::debug!(raw, performance_index = result.performance_index, "predict");
        Ok(result)
    }

    /// Run the call on a worker thread and wait at most `timeout`
    ///
    /// A worker that misses the deadline is left to finish on its own; its
    /// result is dropped with the channel.
    fn call_with_deadline(
        &self,
        features: FeatureVector,
        timeout: Duration,
    ) -> Result<f64, InferenceError> {
        let (tx, rx) = mpsc::channel();
        let model = Arc::clone(&self.model);

        thread::Builder::new()
            .name("perfindex-inference".to_string())
            .spawn(move || {
                let _ = tx.send(call_guarded(model.as_ref(), &features));
            })
            .map_err(|e| InferenceError::failed(format!("failed to start inference: {}", e)))?;

        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!(timeout_ms = timeout.as_millis() as u64, "prediction timed out");
                Err(InferenceError::TimedOut(timeout))
            }
            Err(RecvTimeoutError::Disconnected) => Err(InferenceError::failed(
                "inference worker exited without a result",
            )),
        }
    }
}

/// Call the predictor, turning a panic into an inference failure
fn call_guarded(model: &dyn Predictor, features: &FeatureVector) -> Result<f64, InferenceError> {
    panic::catch_unwind(AssertUnwindSafe(|| model.predict(features)))
        .unwrap_or_else(|_| Err(InferenceError::failed("prediction function panicked")))
}
