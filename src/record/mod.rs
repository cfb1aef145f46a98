//! Raw input values and schema-driven record assembly.
//!
//! [`FeatureRecordBuilder`] converts a map of raw form values into an ordered
//! [`FeatureVector`] matching a [`FeatureSchema`](crate::schema::FeatureSchema),
//! or reports the first slot (in schema order) that is missing or malformed.
//!
//! Output order is dictated by the schema, never by input iteration order.
//! A reordering against the training-time schema would produce a
//! syntactically valid but semantically meaningless vector, so the builder
//! makes ordering explicit and schema-driven.

use crate::error::{PredecirError, Result};
use crate::schema::{FeatureKind, FeatureSchema};
use std::collections::HashMap;
use std::ops::Index;

/// A field value as received from the input surface. No inherent validity.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Numeric input (a filled number box or a pre-encoded category code).
    Number(f32),
    /// String input, not yet parsed.
    Text(String),
    /// No value supplied.
    Missing,
}

impl RawValue {
    /// True if no usable value was supplied.
    ///
    /// Empty and whitespace-only strings arrive from blank form inputs and
    /// count as missing.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        match self {
            RawValue::Missing => true,
            RawValue::Text(s) => s.trim().is_empty(),
            RawValue::Number(_) => false,
        }
    }
}

impl From<f32> for RawValue {
    fn from(n: f32) -> Self {
        RawValue::Number(n)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n as f32)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Number(n as f32)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<Option<f32>> for RawValue {
    fn from(opt: Option<f32>) -> Self {
        match opt {
            Some(n) => RawValue::Number(n),
            None => RawValue::Missing,
        }
    }
}

/// Raw form inputs keyed by schema slot name.
pub type RawInputs = HashMap<String, RawValue>;

/// A fixed-length ordered numeric record, one value per schema slot.
///
/// Constructed fresh per prediction request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f32>,
}

impl FeatureVector {
    /// Creates a vector directly from ordered values.
    ///
    /// Callers are responsible for matching the schema order; prefer
    /// [`FeatureRecordBuilder::build`] for anything user-supplied.
    #[must_use]
    pub fn from_vec(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the vector has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the values as a slice, in schema order.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}

impl Index<usize> for FeatureVector {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.values[index]
    }
}

/// Assembles validated, schema-ordered records from raw form inputs.
///
/// # Examples
///
/// ```
/// use predecir::record::{FeatureRecordBuilder, RawInputs};
/// use predecir::schema::{FeatureSchema, FeatureSlot};
///
/// let schema = FeatureSchema::new(vec![
///     FeatureSlot::continuous("Age"),
///     FeatureSlot::categorical("OverTime"),
/// ]).expect("valid slots");
///
/// let inputs = RawInputs::from([
///     ("Age".to_string(), 34.0.into()),
///     ("OverTime".to_string(), "1".into()),
/// ]);
///
/// let builder = FeatureRecordBuilder::new(&schema);
/// let record = builder.build(&inputs).expect("all fields present and numeric");
/// assert_eq!(record.as_slice(), &[34.0, 1.0]);
/// ```
#[derive(Debug)]
pub struct FeatureRecordBuilder<'a> {
    schema: &'a FeatureSchema,
}

impl<'a> FeatureRecordBuilder<'a> {
    /// Creates a builder for the given schema.
    #[must_use]
    pub fn new(schema: &'a FeatureSchema) -> Self {
        Self { schema }
    }

    /// Builds an ordered feature vector from raw inputs.
    ///
    /// Completeness is checked over the whole schema before any coercion,
    /// so a missing field is always reported ahead of a malformed one and
    /// no partial coercion is observable. Both passes walk the schema in
    /// slot order and report the first failing slot.
    ///
    /// Pure function of its inputs; calling twice with identical inputs
    /// yields bit-identical vectors.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::MissingField`] if a schema slot has no
    /// non-empty entry in `inputs`, or [`PredecirError::InvalidType`] if a
    /// value cannot be coerced to its slot's kind.
    pub fn build(&self, inputs: &RawInputs) -> Result<FeatureVector> {
        for slot in self.schema.iter() {
            match inputs.get(slot.name()) {
                Some(value) if !value.is_missing() => {}
                _ => return Err(PredecirError::missing_field(slot.name())),
            }
        }

        let mut values = Vec::with_capacity(self.schema.len());
        for slot in self.schema.iter() {
            let raw = &inputs[slot.name()];
            values.push(coerce(slot.name(), slot.kind(), raw)?);
        }

        Ok(FeatureVector { values })
    }
}

/// Coerces one raw value to the numeric kind declared by its slot.
fn coerce(field: &str, kind: FeatureKind, raw: &RawValue) -> Result<f32> {
    match kind {
        FeatureKind::Continuous => match raw {
            RawValue::Number(n) => Ok(*n),
            RawValue::Text(s) => s
                .trim()
                .parse::<f32>()
                .map_err(|_| PredecirError::invalid_type(field, s)),
            RawValue::Missing => Err(PredecirError::missing_field(field)),
        },
        FeatureKind::Categorical => match raw {
            // Codes are option indices; a fractional code is never valid.
            RawValue::Number(n) if n.fract() == 0.0 => Ok(*n),
            RawValue::Number(n) => Err(PredecirError::invalid_type(field, n)),
            RawValue::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(|code| code as f32)
                .map_err(|_| PredecirError::invalid_type(field, s)),
            RawValue::Missing => Err(PredecirError::missing_field(field)),
        },
    }
}
