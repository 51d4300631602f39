//! Model artifacts and the prediction-function seam
//!
//! A model artifact is a JSON file produced by an external training job:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "kind": "linear",
//!   "feature_names": ["hours_studied", "previous_scores", "extracurricular",
//!                     "sleep_hours", "sample_papers"],
//!   "intercept": -34.07,
//!   "coefficients": [2.85, 1.02, 0.61, 0.48, 0.19]
//! }
//! ```
//!
//! `kind = "forest"` artifacts carry `trees` instead (see [`forest`]).
//! The artifact is loaded once, checked against [`FEATURE_NAMES`], and then
//! shared read-only.

pub mod forest;
pub mod linear;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::InferenceError;
use crate::features::{FeatureVector, FEATURE_NAMES};
use crate::trace_time;

pub use forest::{ForestModel, RegressionTree, TreeNode};
pub use linear::LinearModel;

/// Current artifact format version
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// The opaque prediction function
///
/// Implementations must be read-only: one instance is shared by every
/// concurrent request.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError>;
}

/// Adapter turning a closure into a [`Predictor`]
pub struct FnPredictor<F>(pub F);

impl<F> FnPredictor<F>
where
    F: Fn(&FeatureVector) -> Result<f64, InferenceError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        FnPredictor(f)
    }
}

impl<F> Predictor for FnPredictor<F>
where
    F: Fn(&FeatureVector) -> Result<f64, InferenceError> + Send + Sync,
{
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        (self.0)(features)
    }
}

/// Supported model families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Linear,
    Forest,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Linear => write!(f, "linear"),
            ModelKind::Forest => write!(f, "forest"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum ModelBody {
    Linear(LinearModel),
    Forest(ForestModel),
}

#[derive(Debug, Clone, Deserialize)]
struct ModelArtifact {
    format_version: u32,
    feature_names: Vec<String>,
    #[serde(flatten)]
    body: ModelBody,
}

/// Summary of a loaded artifact
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub path: PathBuf,
    pub kind: ModelKind,
    pub format_version: u32,
    pub feature_names: Vec<String>,
    /// SHA-256 of the artifact bytes, hex encoded
    pub fingerprint: String,
    /// Trees for forests, coefficients for linear models
    pub size: usize,
}

/// A checked, ready-to-use model
#[derive(Clone)]
pub struct LoadedModel {
    info: ModelInfo,
    predictor: Arc<dyn Predictor>,
}

impl fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedModel")
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

impl LoadedModel {
    /// Read and check a model artifact from disk
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        let start = Instant::now();

        let bytes = fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => InferenceError::ArtifactMissing {
                path: path.to_path_buf(),
            },
            _ => InferenceError::invalid_artifact(path, e),
        })?;

        let model = Self::from_bytes(path, &bytes)?;

        trace_time!(start, "load_model");
        tracing::debug!(
            path = %path.display(),
            kind = %model.info.kind,
            fingerprint = model.info.fingerprint.as_str(),
            "load_model"
        );
        Ok(model)
    }

    /// Parse and check artifact bytes; `path` is only used for reporting
    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Result<Self, InferenceError> {
        let artifact: ModelArtifact = serde_json::from_slice(bytes)
            .map_err(|e| InferenceError::invalid_artifact(path, e))?;

        if artifact.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(InferenceError::invalid_artifact(
                path,
                format!(
                    "unsupported format_version {} (expected {})",
                    artifact.format_version, ARTIFACT_FORMAT_VERSION
                ),
            ));
        }

        if artifact.feature_names != FEATURE_NAMES {
            return Err(InferenceError::invalid_artifact(
                path,
                format!(
                    "feature_names {:?} do not match expected layout {:?}",
                    artifact.feature_names, FEATURE_NAMES
                ),
            ));
        }

        let (kind, size, predictor) = match artifact.body {
            ModelBody::Linear(model) => {
                model
                    .check()
                    .map_err(|reason| InferenceError::invalid_artifact(path, reason))?;
                let size = model.coefficients().len();
                let predictor: Arc<dyn Predictor> = Arc::new(model);
                (ModelKind::Linear, size, predictor)
            }
            ModelBody::Forest(model) => {
                model
                    .check()
                    .map_err(|reason| InferenceError::invalid_artifact(path, reason))?;
                let size = model.trees().len();
                let predictor: Arc<dyn Predictor> = Arc::new(model);
                (ModelKind::Forest, size, predictor)
            }
        };

        Ok(LoadedModel {
            info: ModelInfo {
                path: path.to_path_buf(),
                kind,
                format_version: artifact.format_version,
                feature_names: artifact.feature_names,
                fingerprint: hex::encode(Sha256::digest(bytes)),
                size,
            },
            predictor,
        })
    }

    pub fn info(&self) -> &ModelInfo {
        &self.info
    }

    pub fn kind(&self) -> ModelKind {
        self.info.kind
    }

    pub fn fingerprint(&self) -> &str {
        &self.info.fingerprint
    }

    /// Shared handle to the prediction function
    pub fn predictor(&self) -> Arc<dyn Predictor> {
        Arc::clone(&self.predictor)
    }
}
