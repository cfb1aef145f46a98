//! Error types for Predecir operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Predecir operations.
///
/// Distinguishes input-validation failures (a missing or malformed form
/// field) from model-side failures (the classifier rejecting a well-formed
/// record) and artifact failures (a corrupt model file).
///
/// # Examples
///
/// ```
/// use predecir::error::PredecirError;
///
/// let err = PredecirError::MissingField {
///     field: "OverTime".to_string(),
/// };
/// assert!(err.to_string().contains("OverTime"));
/// ```
#[derive(Debug)]
pub enum PredecirError {
    /// A required input field is absent or empty.
    MissingField {
        /// Schema slot name with no supplied value
        field: String,
    },

    /// An input value cannot be coerced to its slot's numeric kind.
    InvalidType {
        /// Schema slot name
        field: String,
        /// The value as received
        value: String,
    },

    /// The scoring model failed on an otherwise well-formed record.
    ModelFailure {
        /// Failure details from the model
        message: String,
    },

    /// Invalid or corrupt model artifact.
    FormatError {
        /// Error description
        message: String,
    },

    /// Artifact checksum verification failed.
    ChecksumMismatch {
        /// Expected checksum
        expected: u32,
        /// Actual checksum
        actual: u32,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for PredecirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredecirError::MissingField { field } => {
                write!(f, "Missing required field: {field}")
            }
            PredecirError::InvalidType { field, value } => {
                write!(f, "Invalid value for field {field}: {value:?} is not numeric")
            }
            PredecirError::ModelFailure { message } => {
                write!(f, "Model failure: {message}")
            }
            PredecirError::FormatError { message } => {
                write!(f, "Invalid model format: {message}")
            }
            PredecirError::ChecksumMismatch { expected, actual } => {
                write!(
                    f,
                    "Checksum mismatch: expected 0x{expected:08X}, got 0x{actual:08X}"
                )
            }
            PredecirError::Io(e) => write!(f, "I/O error: {e}"),
            PredecirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PredecirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PredecirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PredecirError {
    fn from(err: std::io::Error) -> Self {
        PredecirError::Io(err)
    }
}

impl From<&str> for PredecirError {
    fn from(msg: &str) -> Self {
        PredecirError::Other(msg.to_string())
    }
}

impl From<String> for PredecirError {
    fn from(msg: String) -> Self {
        PredecirError::Other(msg)
    }
}

impl PredecirError {
    /// Create a missing-field error for a schema slot
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }

    /// Create an invalid-type error carrying the offending value
    #[must_use]
    pub fn invalid_type(field: &str, value: impl fmt::Display) -> Self {
        Self::InvalidType {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a model-failure error from any model-side error
    #[must_use]
    pub fn model_failure(message: impl fmt::Display) -> Self {
        Self::ModelFailure {
            message: message.to_string(),
        }
    }

    /// True for errors produced by input validation, before any model call.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PredecirError::MissingField { .. } | PredecirError::InvalidType { .. }
        )
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PredecirError>;
