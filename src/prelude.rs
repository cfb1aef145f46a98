//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use predecir::prelude::*;
//! ```

pub use crate::error::{PredecirError, Result};
pub use crate::model::{LogisticScorer, ScoringModel};
pub use crate::record::{FeatureRecordBuilder, FeatureVector, RawInputs, RawValue};
pub use crate::schema::{FeatureKind, FeatureSchema, FeatureSlot};
pub use crate::scoring::{format_probability, predict_probability, Predictor};
