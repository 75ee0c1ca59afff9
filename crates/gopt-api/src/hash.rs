use gopt_core::errors::{ErrorInfo, GoptError};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Computes a stable hexadecimal hash for the provided serializable payload.
///
/// Used to tag request log records so identical inputs are recognizable
/// across runs without echoing the payload itself.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, GoptError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}

/// Encodes a payload as canonical JSON: a value round-trip forces map keys
/// into sorted order before the bytes are produced.
fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, GoptError> {
    let value = serde_json::to_value(value)
        .map_err(|err| GoptError::Serde(ErrorInfo::new("json-encode", err.to_string())))?;
    serde_json::to_vec(&value)
        .map_err(|err| GoptError::Serde(ErrorInfo::new("json-encode", err.to_string())))
}
