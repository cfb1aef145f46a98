//! PRD binary artifact format with JSON metadata.
//!
//! A compact on-disk format for a trained scorer plus the feature schema it
//! was trained against, so a loaded model can never be paired with the wrong
//! column order.
//!
//! Format:
//! ```text
//! [4-byte magic: "PRD1"]
//! [4-byte metadata_len: u32 little-endian]
//! [JSON metadata: model kind + ordered schema slots]
//! [4-byte n_coefficients: u32 little-endian]
//! [coefficients: f32 values in little-endian]
//! [intercept: f32 little-endian]
//! [4-byte CRC32: checksum of all preceding bytes]
//! ```
//!
//! The checksum is verified on load; a truncated or bit-flipped artifact is
//! rejected before any value reaches the scorer.

use crate::error::{PredecirError, Result};
use crate::model::LogisticScorer;
use crate::schema::{FeatureSchema, FeatureSlot};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Magic bytes for the PRD artifact format - "PRD1"
pub const PRD_MAGIC: [u8; 4] = [b'P', b'R', b'D', b'1'];

/// JSON metadata section of an artifact.
#[derive(Debug, Serialize, Deserialize)]
struct ArtifactMetadata {
    /// Model kind tag (currently always "logistic")
    model: String,
    /// Ordered schema slots, training-time column order
    schema: Vec<FeatureSlot>,
}

/// Saves a scorer and its schema to a PRD artifact file.
///
/// # Errors
///
/// Returns an error if the coefficient count does not match the schema
/// length, if metadata serialization fails, or if the file cannot be
/// written.
pub fn save_scorer<P: AsRef<Path>>(
    path: P,
    scorer: &LogisticScorer,
    schema: &FeatureSchema,
) -> Result<()> {
    let bytes = to_bytes(scorer, schema)?;
    log::debug!(
        "Saving scorer artifact: {} features, {} bytes",
        schema.len(),
        bytes.len()
    );
    fs::write(path, bytes)?;
    Ok(())
}

/// Loads a scorer and its schema from a PRD artifact file.
///
/// Intended to run once at process start; the returned pair is immutable
/// and safe to share across request handlers.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the format is invalid,
/// or the checksum does not match.
pub fn load_scorer<P: AsRef<Path>>(path: P) -> Result<(LogisticScorer, FeatureSchema)> {
    log::debug!("Loading scorer artifact from {}", path.as_ref().display());
    let data = fs::read(path)?;
    from_bytes(&data)
}

/// Serializes a scorer and schema to PRD bytes.
///
/// # Errors
///
/// Returns an error if the coefficient count does not match the schema
/// length or if metadata serialization fails.
pub fn to_bytes(scorer: &LogisticScorer, schema: &FeatureSchema) -> Result<Vec<u8>> {
    if scorer.n_features() != schema.len() {
        return Err(PredecirError::FormatError {
            message: format!(
                "scorer has {} coefficients, schema has {} slots",
                scorer.n_features(),
                schema.len()
            ),
        });
    }

    let metadata = ArtifactMetadata {
        model: "logistic".to_string(),
        schema: schema.slots().to_vec(),
    };
    let metadata_json =
        serde_json::to_vec(&metadata).map_err(|e| PredecirError::FormatError {
            message: format!("metadata serialization failed: {e}"),
        })?;

    let mut output = Vec::with_capacity(16 + metadata_json.len() + 4 * scorer.n_features());
    output.extend_from_slice(&PRD_MAGIC);
    output.extend_from_slice(&(metadata_json.len() as u32).to_le_bytes());
    output.extend_from_slice(&metadata_json);
    output.extend_from_slice(&(scorer.n_features() as u32).to_le_bytes());
    for coef in scorer.coefficients() {
        output.extend_from_slice(&coef.to_le_bytes());
    }
    output.extend_from_slice(&scorer.intercept().to_le_bytes());

    let crc = crc32(&output);
    output.extend_from_slice(&crc.to_le_bytes());

    Ok(output)
}

/// Parses PRD bytes into a scorer and schema.
///
/// # Errors
///
/// Returns an error on bad magic, truncation, checksum mismatch, invalid
/// metadata, or a coefficient/schema length disagreement.
pub fn from_bytes(data: &[u8]) -> Result<(LogisticScorer, FeatureSchema)> {
    if data.len() < 16 {
        return Err(PredecirError::FormatError {
            message: "file too short".to_string(),
        });
    }

    let magic = &data[0..4];
    if magic != PRD_MAGIC {
        return Err(PredecirError::FormatError {
            message: format!("invalid magic: expected PRD1, got {magic:?}"),
        });
    }

    // Checksum first, so later parse errors always mean a malformed writer
    // rather than transport damage.
    let body = &data[..data.len() - 4];
    let stored = u32::from_le_bytes([
        data[data.len() - 4],
        data[data.len() - 3],
        data[data.len() - 2],
        data[data.len() - 1],
    ]);
    let computed = crc32(body);
    if stored != computed {
        return Err(PredecirError::ChecksumMismatch {
            expected: stored,
            actual: computed,
        });
    }

    let metadata_len = u32::from_le_bytes([data[4], data[5], data[6], data[7]]) as usize;
    let coef_count_offset = 8 + metadata_len;
    if body.len() < coef_count_offset + 4 {
        return Err(PredecirError::FormatError {
            message: "file too short for metadata".to_string(),
        });
    }

    let metadata: ArtifactMetadata =
        serde_json::from_slice(&data[8..coef_count_offset]).map_err(|e| {
            PredecirError::FormatError {
                message: format!("invalid metadata JSON: {e}"),
            }
        })?;
    if metadata.model != "logistic" {
        return Err(PredecirError::FormatError {
            message: format!("unsupported model kind: {}", metadata.model),
        });
    }

    let n_coefficients = u32::from_le_bytes([
        data[coef_count_offset],
        data[coef_count_offset + 1],
        data[coef_count_offset + 2],
        data[coef_count_offset + 3],
    ]) as usize;

    let coef_offset = coef_count_offset + 4;
    let expected_len = coef_offset + 4 * n_coefficients + 4;
    if body.len() != expected_len {
        return Err(PredecirError::FormatError {
            message: format!(
                "body length {} does not match {} coefficients",
                body.len(),
                n_coefficients
            ),
        });
    }

    let coefficients: Vec<f32> = data[coef_offset..coef_offset + 4 * n_coefficients]
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    let intercept_offset = coef_offset + 4 * n_coefficients;
    let intercept = f32::from_le_bytes([
        data[intercept_offset],
        data[intercept_offset + 1],
        data[intercept_offset + 2],
        data[intercept_offset + 3],
    ]);

    let schema = FeatureSchema::new(metadata.schema)?;
    if coefficients.len() != schema.len() {
        return Err(PredecirError::FormatError {
            message: format!(
                "{} coefficients for {} schema slots",
                coefficients.len(),
                schema.len()
            ),
        });
    }

    Ok((LogisticScorer::new(coefficients, intercept), schema))
}

/// CRC32 (IEEE polynomial), bitwise.
fn crc32(data: &[u8]) -> u32 {
    let mut crc: u32 = 0xFFFF_FFFF;
    for &byte in data {
        crc ^= u32::from(byte);
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}
