//! The JSON share document.
//!
//! ```json
//! {
//!     "keys": { "n": 3, "k": 2 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": 16, "value": "c" }
//! }
//! ```
//!
//! Every key other than `keys` is a share. The key is the share's
//! x-coordinate; `value` is a numeral in `base`. Shares keep the order in
//! which they appear in the document.

pub mod error;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{RecoveryError, RecoveryResult};
use crate::recovery::{Recovery, SecretRecovery};
use crate::share::{Share, ShareSet};

pub use error::DocumentError;

const THRESHOLD_KEY: &str = "keys";

/// A parsed and validated share document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDocument {
    recovery: SecretRecovery,
    shares: ShareSet,
}

impl ShareDocument {
    pub fn threshold(&self) -> usize {
        self.recovery.threshold()
    }

    pub fn shares(&self) -> &ShareSet {
        &self.shares
    }

    pub fn recovery(&self) -> SecretRecovery {
        self.recovery
    }

    /// Reconstruct the secret and report inconsistent shares.
    pub fn recover(&self) -> RecoveryResult<Recovery> {
        self.recovery.recover(&self.shares)
    }
}

impl FromStr for ShareDocument {
    type Err = RecoveryError;

    fn from_str(input: &str) -> RecoveryResult<Self> {
        let entries: Map<String, Value> =
            serde_json::from_str(input).map_err(DocumentError::Json)?;

        let mut keys = None;
        let mut shares = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            if key == THRESHOLD_KEY {
                keys = Some(
                    serde_json::from_value::<Keys>(value)
                        .map_err(DocumentError::InvalidKeys)?,
                );
            } else {
                shares.push(parse_share(key, value)?);
            }
        }

        let keys = keys.ok_or(DocumentError::MissingThreshold)?;
        let threshold = keys
            .k
            .value()
            .and_then(|k| usize::try_from(k).ok())
            .ok_or_else(|| DocumentError::InvalidKeysField {
                field: "k",
                raw: keys.k.raw(),
            })?;

        if let Some(declared) = &keys.n {
            let declared = declared.value().ok_or_else(|| {
                DocumentError::InvalidKeysField {
                    field: "n",
                    raw: declared.raw(),
                }
            })?;
            if usize::try_from(declared).ok() != Some(shares.len()) {
                return Err(DocumentError::InvalidShareCount {
                    declared,
                    found: shares.len(),
                }
                .into());
            }
        }

        let shares = ShareSet::new(shares)?;
        let recovery = SecretRecovery::new(threshold, shares.len())?;
        Ok(ShareDocument { recovery, shares })
    }
}

/// Read and parse the share document at `path`.
pub fn load(path: impl AsRef<Path>) -> RecoveryResult<ShareDocument> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| RecoveryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    raw.parse()
}

#[derive(Debug, Deserialize)]
struct Keys {
    k: NumberField,
    #[serde(default)]
    n: Option<NumberField>,
}

#[derive(Debug, Deserialize)]
struct ShareEntry {
    base: NumberField,
    value: String,
}

/// Integers may arrive as JSON numbers or as decimal strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberField {
    Number(u64),
    Text(String),
}

impl NumberField {
    fn value(&self) -> Option<u64> {
        match self {
            NumberField::Number(n) => Some(*n),
            NumberField::Text(text) => text.trim().parse().ok(),
        }
    }

    fn raw(&self) -> String {
        match self {
            NumberField::Number(n) => n.to_string(),
            NumberField::Text(text) => text.clone(),
        }
    }
}

fn parse_share(key: String, value: Value) -> RecoveryResult<Share> {
    let x: BigInt = key
        .trim()
        .parse()
        .map_err(|_| DocumentError::InvalidShareKey(key.clone()))?;

    let entry: ShareEntry = match serde_json::from_value(value) {
        Ok(entry) => entry,
        Err(source) => {
            return Err(DocumentError::InvalidShareEntry { key, source }.into())
        }
    };

    let Some(base) = entry.base.value().and_then(|b| u32::try_from(b).ok())
    else {
        return Err(DocumentError::InvalidBaseField {
            raw: entry.base.raw(),
            key,
        }
        .into());
    };

    match math::radix::decode(&entry.value, base) {
        Ok(y) => Ok(Share { x, y }),
        Err(source) => Err(DocumentError::Decode { key, source }.into()),
    }
}
