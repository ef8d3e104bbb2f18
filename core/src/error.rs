use std::path::PathBuf;

use math::error::{InterpolationError, MathError, RadixError};
use num_bigint::BigInt;
use thiserror::Error;

use crate::document::DocumentError;

/// Result type specialized for secret recovery.
pub type RecoveryResult<T> = std::result::Result<T, RecoveryError>;

/// Errors that can arise while loading shares and recovering the secret.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error(
        "Invalid threshold configuration: threshold {0} must be between 1 and the share count {1}"
    )]
    InvalidThreshold(usize, usize),
    #[error("Insufficient shares: need {0}, got {1}")]
    InsufficientShares(usize, usize),
    #[error("Duplicate share x-coordinate: {0}")]
    DuplicateXCoordinate(BigInt),
    #[error(transparent)]
    Math(#[from] MathError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("Failed to read share document {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<InterpolationError> for RecoveryError {
    fn from(value: InterpolationError) -> Self {
        match value {
            InterpolationError::DuplicateXCoordinate(x) => {
                RecoveryError::DuplicateXCoordinate(x)
            }
            InterpolationError::InsufficientPoints { required, provided } => {
                RecoveryError::InsufficientShares(required, provided)
            }
            other => RecoveryError::Math(other.into()),
        }
    }
}

impl From<RadixError> for RecoveryError {
    fn from(value: RadixError) -> Self {
        RecoveryError::Math(value.into())
    }
}
