//! Prediction pipeline: validate raw inputs, invoke the model, surface a
//! typed result.
//!
//! Validation failures are detected before any model invocation, and a
//! model-internal failure is converted into a typed error rather than
//! terminating the request path. The probability is returned raw;
//! [`format_probability`] is applied by the display boundary.

use crate::error::{PredecirError, Result};
use crate::model::{LogisticScorer, ScoringModel};
use crate::record::{FeatureRecordBuilder, RawInputs};
use crate::schema::FeatureSchema;
use crate::serialization;
use std::path::Path;
use std::sync::Arc;

/// Predicts the positive-class probability for one set of raw inputs.
///
/// Stateless and synchronous; every call is independent.
///
/// # Errors
///
/// Returns a validation error ([`PredecirError::MissingField`] or
/// [`PredecirError::InvalidType`]) without touching the model, or
/// [`PredecirError::ModelFailure`] if the model rejects a well-formed
/// record.
pub fn predict_probability(
    inputs: &RawInputs,
    schema: &FeatureSchema,
    model: &dyn ScoringModel,
) -> Result<f32> {
    let record = FeatureRecordBuilder::new(schema).build(inputs)?;
    model
        .predict_probability(&record)
        .map_err(PredecirError::model_failure)
}

/// Formats a probability as a percentage with two decimal digits.
///
/// # Examples
///
/// ```
/// use predecir::scoring::format_probability;
///
/// assert_eq!(format_probability(0.2345), "23.45%");
/// ```
#[must_use]
pub fn format_probability(p: f32) -> String {
    format!("{:.2}%", p * 100.0)
}

/// Process-lifetime prediction handle: one schema, one loaded model.
///
/// The model is held behind an [`Arc`] and never mutated, so clones of a
/// `Predictor` (or references to one) can serve concurrent requests without
/// locking.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use predecir::model::LogisticScorer;
/// use predecir::record::RawInputs;
/// use predecir::schema::{FeatureSchema, FeatureSlot};
/// use predecir::scoring::Predictor;
///
/// let schema = FeatureSchema::new(vec![
///     FeatureSlot::continuous("Age"),
///     FeatureSlot::categorical("OverTime"),
/// ]).expect("valid slots");
/// let model = Arc::new(LogisticScorer::new(vec![0.0, 0.0], 0.0));
/// let predictor = Predictor::new(schema, model);
///
/// let inputs = RawInputs::from([
///     ("Age".to_string(), 34.0.into()),
///     ("OverTime".to_string(), "1".into()),
/// ]);
/// let p = predictor.predict(&inputs).expect("valid inputs");
/// assert!((p - 0.5).abs() < 1e-6);
/// ```
#[derive(Clone)]
pub struct Predictor {
    schema: FeatureSchema,
    model: Arc<dyn ScoringModel>,
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl Predictor {
    /// Creates a predictor from a schema and a shared model handle.
    #[must_use]
    pub fn new(schema: FeatureSchema, model: Arc<dyn ScoringModel>) -> Self {
        Self { schema, model }
    }

    /// Loads a predictor from a PRD artifact file.
    ///
    /// Intended to run once at process start.
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact cannot be read or is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (scorer, schema) = serialization::load_scorer(path)?;
        Ok(Self::new(schema, Arc::new(scorer)))
    }

    /// Returns the schema the loaded model expects.
    #[must_use]
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Predicts the positive-class probability for one set of raw inputs.
    ///
    /// # Errors
    ///
    /// Same failure semantics as [`predict_probability`].
    pub fn predict(&self, inputs: &RawInputs) -> Result<f32> {
        log::debug!("Scoring request with {} input fields", inputs.len());
        predict_probability(inputs, &self.schema, self.model.as_ref())
    }

    /// Predicts and formats the result for display.
    ///
    /// # Errors
    ///
    /// Same failure semantics as [`predict_probability`]; the error's
    /// `Display` form is the user-facing diagnostic.
    pub fn predict_formatted(&self, inputs: &RawInputs) -> Result<String> {
        self.predict(inputs).map(format_probability)
    }
}

impl From<(FeatureSchema, LogisticScorer)> for Predictor {
    fn from((schema, scorer): (FeatureSchema, LogisticScorer)) -> Self {
        Self::new(schema, Arc::new(scorer))
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
