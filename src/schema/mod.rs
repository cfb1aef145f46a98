//! Feature schema: the ordered, typed column description a model expects.
//!
//! A [`FeatureSchema`] is fixed per deployed model and must match the column
//! order the model was trained on. Every record submitted for scoring
//! supplies exactly one value per slot, in slot order.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Kind of a feature slot, dictating how raw input is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Continuous numeric value (e.g., age, monthly income).
    Continuous,
    /// Category pre-encoded as an integer code by the input surface
    /// (e.g., "Travel Rarely" arrives as `0`).
    Categorical,
}

/// A single named, typed slot in a feature schema.
///
/// # Examples
///
/// ```
/// use predecir::schema::{FeatureKind, FeatureSlot};
///
/// let slot = FeatureSlot::continuous("Age");
/// assert_eq!(slot.name(), "Age");
/// assert_eq!(slot.kind(), FeatureKind::Continuous);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSlot {
    name: String,
    kind: FeatureKind,
}

impl FeatureSlot {
    /// Creates a continuous numeric slot.
    #[must_use]
    pub fn continuous(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FeatureKind::Continuous,
        }
    }

    /// Creates a categorical slot holding a pre-encoded integer code.
    #[must_use]
    pub fn categorical(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FeatureKind::Categorical,
        }
    }

    /// Returns the slot name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the slot kind.
    #[must_use]
    pub fn kind(&self) -> FeatureKind {
        self.kind
    }
}

/// An ordered sequence of named feature slots.
///
/// Slot order is the model's training-time column order; it never changes
/// after construction.
///
/// # Examples
///
/// ```
/// use predecir::schema::{FeatureSchema, FeatureSlot};
///
/// let schema = FeatureSchema::new(vec![
///     FeatureSlot::continuous("Age"),
///     FeatureSlot::categorical("OverTime"),
/// ]).expect("valid slots");
/// assert_eq!(schema.len(), 2);
/// assert_eq!(schema.position("OverTime"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureSchema {
    slots: Vec<FeatureSlot>,
}

impl FeatureSchema {
    /// Creates a new schema from ordered slots.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot list is empty, a slot name is empty,
    /// or two slots share a name.
    pub fn new(slots: Vec<FeatureSlot>) -> Result<Self> {
        if slots.is_empty() {
            return Err("Schema must have at least one slot".into());
        }

        for slot in &slots {
            if slot.name.is_empty() {
                return Err("Slot names cannot be empty".into());
            }
        }

        // Check for duplicate slot names
        let mut names: Vec<&str> = slots.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        for i in 1..names.len() {
            if names[i] == names[i - 1] {
                return Err(format!("Duplicate slot name: {}", names[i]).into());
            }
        }

        Ok(Self { slots })
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; construction rejects empty slot lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the slots in schema order.
    #[must_use]
    pub fn slots(&self) -> &[FeatureSlot] {
        &self.slots
    }

    /// Returns an iterator over slots in schema order.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureSlot> {
        self.slots.iter()
    }

    /// Returns slot names in schema order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.name.as_str()).collect()
    }

    /// Returns the position of a named slot, if present.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.name == name)
    }
}
