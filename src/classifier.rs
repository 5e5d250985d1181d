//! Classifier adapter
//!
//! Wraps the bundled, pre-trained binary classifier as a pure
//! function. The artifact is a JSON coefficient file (binary logistic
//! regression over the 14-feature stat line); it is loaded once at
//! startup, validated, and never mutated afterwards, so prediction is
//! deterministic and side-effect free.

use std::fs::File;
use std::path::Path;

use ndarray::{Array1, ArrayView1};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("failed to read classifier artifact {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed classifier artifact {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("inconsistent classifier artifact {path}: {reason}")]
    Artifact { path: String, reason: String },

    #[error("invalid feature vector: {0}")]
    InvalidFeatureVector(String),
}

/// On-disk artifact layout.
#[derive(Debug, Deserialize)]
struct ClassifierArtifact {
    model_type: String,
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
    classes: [i32; 2],
}

/// A classification verdict: the predicted label and the model's
/// probability for that label specifically (not the positive class
/// unconditionally).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub label: i32,
    pub confidence: f64,
}

/// Inference-only logistic regression over a fixed feature layout.
#[derive(Debug)]
pub struct Classifier {
    feature_names: Vec<String>,
    weights: Array1<f64>,
    intercept: f64,
    classes: [i32; 2],
}

impl Classifier {
    /// Load and validate the artifact. Any inconsistency is fatal at
    /// startup; nothing is coerced or repaired.
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let file = File::open(path).map_err(|source| ClassifierError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let artifact: ClassifierArtifact =
            serde_json::from_reader(file).map_err(|source| ClassifierError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        if artifact.model_type != "logistic_regression" {
            return Err(ClassifierError::Artifact {
                path: path.display().to_string(),
                reason: format!("unsupported model type {:?}", artifact.model_type),
            });
        }
        if artifact.feature_names.len() != artifact.coefficients.len() {
            return Err(ClassifierError::Artifact {
                path: path.display().to_string(),
                reason: format!(
                    "{} feature names for {} coefficients",
                    artifact.feature_names.len(),
                    artifact.coefficients.len()
                ),
            });
        }

        Ok(Self {
            feature_names: artifact.feature_names,
            weights: Array1::from_vec(artifact.coefficients),
            intercept: artifact.intercept,
            classes: artifact.classes,
        })
    }

    /// Number of features the artifact was trained with.
    pub fn feature_count(&self) -> usize {
        self.weights.len()
    }

    /// Feature names in model order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Classify one feature vector.
    ///
    /// The vector must carry exactly [`feature_count`](Self::feature_count)
    /// finite values in model order.
    pub fn predict(&self, features: &[f64]) -> Result<Verdict, ClassifierError> {
        if features.len() != self.weights.len() {
            return Err(ClassifierError::InvalidFeatureVector(format!(
                "expected {} values, got {}",
                self.weights.len(),
                features.len()
            )));
        }
        if let Some(index) = features.iter().position(|v| !v.is_finite()) {
            return Err(ClassifierError::InvalidFeatureVector(format!(
                "non-finite value at index {index}"
            )));
        }

        let z = self.weights.dot(&ArrayView1::from(features)) + self.intercept;
        let p_positive = 1.0 / (1.0 + (-z).exp());

        let (class_index, confidence) = if p_positive >= 0.5 {
            (1, p_positive)
        } else {
            (0, 1.0 - p_positive)
        };
        Ok(Verdict {
            label: self.classes[class_index],
            confidence,
        })
    }
}
