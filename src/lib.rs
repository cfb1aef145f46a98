//! Predecir: schema-driven feature validation and probability scoring for
//! tabular classifiers, in pure Rust.
//!
//! Predecir sits between an input surface (a form, an API handler) and a
//! pre-trained binary classifier. It turns heterogeneous raw field values
//! into an ordered, fully-typed feature vector matching the column order the
//! model was trained on, or reports exactly why it cannot — before any
//! inference runs.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use predecir::prelude::*;
//!
//! // The schema fixes the training-time column order.
//! let schema = FeatureSchema::new(vec![
//!     FeatureSlot::continuous("Age"),
//!     FeatureSlot::categorical("OverTime"),
//! ]).unwrap();
//!
//! // Coefficients come from an external training pipeline.
//! let model = Arc::new(LogisticScorer::new(vec![0.04, 1.2], -2.5));
//! let predictor = Predictor::new(schema, model);
//!
//! // Raw form inputs, keyed by slot name. Order of insertion is irrelevant;
//! // the schema dictates the record layout.
//! let inputs = RawInputs::from([
//!     ("OverTime".to_string(), "1".into()),
//!     ("Age".to_string(), 34.0.into()),
//! ]);
//!
//! let probability = predictor.predict(&inputs).unwrap();
//! println!("Attrition risk: {}", format_probability(probability));
//! ```
//!
//! # Modules
//!
//! - [`schema`]: Ordered, typed feature slot descriptions
//! - [`record`]: Raw input values and schema-driven record assembly
//! - [`model`]: The [`ScoringModel`] seam and a concrete logistic scorer
//! - [`serialization`]: PRD artifact format (model + schema, checksummed)
//! - [`scoring`]: The validate-then-infer pipeline and the [`Predictor`] handle
//! - [`error`]: Crate-wide error type
//!
//! # Pipeline
//!
//! ```text
//! Raw inputs → FeatureRecordBuilder → FeatureVector → ScoringModel → probability
//! ```
//!
//! Every failure along the way is a typed [`PredecirError`] whose `Display`
//! form is the user-facing diagnostic; nothing panics on bad input.

#![warn(clippy::all)]

pub mod error;
pub mod model;
pub mod prelude;
pub mod record;
pub mod schema;
pub mod scoring;
pub mod serialization;

pub use error::{PredecirError, Result};
pub use model::{LogisticScorer, ScoringModel};
pub use record::{FeatureRecordBuilder, FeatureVector, RawInputs, RawValue};
pub use schema::{FeatureKind, FeatureSchema, FeatureSlot};
pub use scoring::{format_probability, predict_probability, Predictor};
