//! Shamir secret recovery over the integers.
//!
//! Shares arrive as numerals in bases 2 through 36, are decoded into integer
//! points, and the secret is read off the Lagrange polynomial through the
//! first `k` of them. Every share is then checked against that polynomial so
//! corrupted or malicious shares can be reported.

pub mod document;
pub mod error;
pub mod recovery;
pub mod report;
pub mod share;

pub use document::{load, ShareDocument};
pub use error::{RecoveryError, RecoveryResult};
pub use recovery::{reconstruct_secret, verify, Recovery, SecretRecovery};
pub use report::BadShareReport;
pub use share::{Share, ShareSet};
