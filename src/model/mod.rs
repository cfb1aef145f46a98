//! Scoring models: the trait seam to the classifier and a concrete
//! logistic scorer.
//!
//! Models here are pre-trained and immutable: they are loaded or constructed
//! once at process start and shared read-only across prediction requests.
//! Training lives in an external pipeline and is out of scope.

use crate::error::Result;
use crate::record::FeatureVector;
use serde::{Deserialize, Serialize};

/// Opaque pre-trained binary classifier.
///
/// Implementors never mutate on prediction, so a loaded model can serve
/// concurrent requests without locking.
pub trait ScoringModel: Send + Sync {
    /// Predicts the probability of the positive class for one record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is incompatible with the model
    /// (wrong dimensionality, internal numeric failure). Callers in the
    /// scoring pipeline surface this as a model failure rather than a
    /// validation error.
    fn predict_probability(&self, record: &FeatureVector) -> Result<f32>;
}

/// Logistic scorer: sigmoid over a linear combination of features.
///
/// Holds the coefficients and intercept of an externally trained logistic
/// regression. Inference only.
///
/// # Examples
///
/// ```
/// use predecir::model::{LogisticScorer, ScoringModel};
/// use predecir::record::FeatureVector;
///
/// let scorer = LogisticScorer::new(vec![0.0, 0.0], 0.0);
/// let record = FeatureVector::from_vec(vec![34.0, 1.0]);
/// let p = scorer.predict_probability(&record).expect("dimensions match");
/// assert!((p - 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticScorer {
    /// Model coefficients (weights), one per feature
    coefficients: Vec<f32>,
    /// Intercept (bias) term
    intercept: f32,
}

impl LogisticScorer {
    /// Creates a scorer from trained coefficients and intercept.
    #[must_use]
    pub fn new(coefficients: Vec<f32>, intercept: f32) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Sigmoid activation function: σ(z) = 1 / (1 + e^(-z))
    fn sigmoid(z: f32) -> f32 {
        1.0 / (1.0 + (-z).exp())
    }

    /// Returns the number of features the scorer expects.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns the model coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &[f32] {
        &self.coefficients
    }

    /// Returns the intercept (bias) term.
    #[must_use]
    pub fn intercept(&self) -> f32 {
        self.intercept
    }
}

impl ScoringModel for LogisticScorer {
    fn predict_probability(&self, record: &FeatureVector) -> Result<f32> {
        if record.len() != self.coefficients.len() {
            return Err(format!(
                "record has {} features, model expects {}",
                record.len(),
                self.coefficients.len()
            )
            .into());
        }

        let mut z = self.intercept;
        for (coef, value) in self.coefficients.iter().zip(record.as_slice()) {
            z += coef * value;
        }

        let p = Self::sigmoid(z);
        if !p.is_finite() {
            return Err(format!("non-finite probability for z = {z}").into());
        }

        Ok(p)
    }
}
