use math::error::RadixError;
use thiserror::Error;

/// Problems with the shape or content of a share document.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Share document is not a valid JSON object")]
    Json(#[source] serde_json::Error),
    #[error("Share document has no \"keys\" entry with the threshold")]
    MissingThreshold,
    #[error("Malformed \"keys\" entry")]
    InvalidKeys(#[source] serde_json::Error),
    #[error("\"keys.{field}\" value {raw:?} is not a non-negative integer")]
    InvalidKeysField { field: &'static str, raw: String },
    #[error("Share key {0:?} is not a decimal integer")]
    InvalidShareKey(String),
    #[error("Share {key:?} is malformed")]
    InvalidShareEntry {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Share {key:?} has base {raw:?}, which is not a decimal integer")]
    InvalidBaseField { key: String, raw: String },
    #[error("Document declares {declared} shares but contains {found}")]
    InvalidShareCount { declared: u64, found: usize },
    #[error("Share {key:?} could not be decoded")]
    Decode {
        key: String,
        #[source]
        source: RadixError,
    },
}
