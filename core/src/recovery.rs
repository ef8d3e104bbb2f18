use std::fmt;

use math::{lagrange::Interpolant, traits::PointSource};
use num_bigint::BigInt;
use serde::Serialize;

use crate::error::{RecoveryError, RecoveryResult};
use crate::report::BadShareReport;
use crate::share::{serialize_decimal, ShareSet};

/// Threshold `k` is usable for `share_count` shares when `1 <= k <= n`.
pub fn validate_threshold_config(threshold: usize, share_count: usize) -> bool {
    threshold >= 1 && threshold <= share_count
}

/// Secret recovery for a fixed `k`-of-`n` configuration.
///
/// The defining polynomial is always built from the first `k` shares in
/// input order; every share, those included, is then checked against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretRecovery {
    threshold: usize,
    share_count: usize,
}

impl SecretRecovery {
    /// Create a recovery for the provided threshold/share-count configuration.
    pub fn new(threshold: usize, share_count: usize) -> RecoveryResult<Self> {
        if !validate_threshold_config(threshold, share_count) {
            return Err(RecoveryError::InvalidThreshold(
                threshold,
                share_count,
            ));
        }

        Ok(SecretRecovery {
            threshold,
            share_count,
        })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn share_count(&self) -> usize {
        self.share_count
    }

    /// Reconstruct f(0) from the first `threshold` shares.
    pub fn reconstruct_secret(
        &self,
        shares: &ShareSet,
    ) -> RecoveryResult<BigInt> {
        reconstruct_secret(shares, self.threshold)
    }

    /// Check every share against the polynomial through the first
    /// `threshold` shares.
    pub fn verify(&self, shares: &ShareSet) -> RecoveryResult<BadShareReport> {
        verify(shares, shares.leading(self.threshold)?)
    }

    /// Reconstruct and verify in one pass over a single interpolant.
    pub fn recover(&self, shares: &ShareSet) -> RecoveryResult<Recovery> {
        let polynomial = Interpolant::new(shares.leading(self.threshold)?)?;

        Ok(Recovery {
            threshold: self.threshold,
            secret: polynomial.constant_term(),
            bad_shares: report_against(&polynomial, shares),
        })
    }
}

/// Outcome of one reconstruction-and-verification pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Recovery {
    pub threshold: usize,
    #[serde(serialize_with = "serialize_decimal")]
    pub secret: BigInt,
    pub bad_shares: BadShareReport,
}

impl Recovery {
    /// `true` when no share disagrees with the reconstructed polynomial.
    pub fn is_consistent(&self) -> bool {
        self.bad_shares.is_empty()
    }
}

impl fmt::Display for Recovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Secret (f(0)): {}", self.secret)?;
        write!(f, "Incorrect shares: {}", self.bad_shares)
    }
}

/// Reconstruct the secret from the first `threshold` shares of `shares`.
pub fn reconstruct_secret(
    shares: &ShareSet,
    threshold: usize,
) -> RecoveryResult<BigInt> {
    let polynomial = Interpolant::new(shares.leading(threshold)?)?;
    Ok(polynomial.constant_term())
}

/// Report every share of `shares` that does not lie on the polynomial
/// through `polynomial_points`.
pub fn verify<P: PointSource>(
    shares: &ShareSet,
    polynomial_points: &[P],
) -> RecoveryResult<BadShareReport> {
    let polynomial = Interpolant::new(polynomial_points)?;
    Ok(report_against(&polynomial, shares))
}

fn report_against<P: PointSource>(
    polynomial: &Interpolant<'_, P>,
    shares: &ShareSet,
) -> BadShareReport {
    shares
        .iter()
        .filter(|share| !polynomial.passes_through(*share))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::Share;

    fn share_set(points: &[(i64, i64)]) -> ShareSet {
        ShareSet::new(points.iter().map(|&(x, y)| Share::new(x, y)).collect())
            .expect("distinct x-coordinates")
    }

    mod secret_recovery_tests {
        use super::*;

        #[test]
        fn test_invalid_threshold_config() {
            assert!(matches!(
                SecretRecovery::new(0, 5),
                Err(RecoveryError::InvalidThreshold(0, 5))
            ));
            assert!(matches!(
                SecretRecovery::new(6, 5),
                Err(RecoveryError::InvalidThreshold(6, 5))
            ));
            assert!(matches!(
                SecretRecovery::new(1, 0),
                Err(RecoveryError::InvalidThreshold(1, 0))
            ));
        }

        #[test]
        fn test_edge_case_thresholds() {
            let one = SecretRecovery::new(1, 1).unwrap();
            assert_eq!(one.threshold(), 1);
            assert_eq!(one.share_count(), 1);

            let all = SecretRecovery::new(5, 5).unwrap();
            assert_eq!(all.threshold(), 5);
        }

        #[test]
        fn test_recover_flags_off_line_share() {
            let shares = share_set(&[(1, 4), (2, 7), (3, 12)]);
            let recovery = SecretRecovery::new(2, shares.len()).unwrap();

            let outcome = recovery.recover(&shares).unwrap();
            assert_eq!(outcome.secret, BigInt::from(1));
            assert_eq!(outcome.bad_shares.shares(), &[Share::new(3, 12)]);
            assert!(!outcome.is_consistent());
            assert_eq!(
                outcome.to_string(),
                "Secret (f(0)): 1\nIncorrect shares: [(3, 12)]"
            );
        }

        #[test]
        fn test_recover_consistent_shares() {
            let shares = share_set(&[(1, 3), (2, 5), (3, 7)]);
            let recovery = SecretRecovery::new(2, shares.len()).unwrap();

            let outcome = recovery.recover(&shares).unwrap();
            assert_eq!(outcome.secret, BigInt::from(1));
            assert!(outcome.is_consistent());
            assert_eq!(
                outcome.to_string(),
                "Secret (f(0)): 1\nIncorrect shares: []"
            );
        }

        #[test]
        fn test_recover_matches_separate_operations() {
            let shares =
                share_set(&[(1, 6), (2, 11), (3, 18), (4, 0), (5, 38)]);
            let recovery = SecretRecovery::new(3, shares.len()).unwrap();

            let outcome = recovery.recover(&shares).unwrap();
            assert_eq!(
                outcome.secret,
                recovery.reconstruct_secret(&shares).unwrap()
            );
            assert_eq!(outcome.bad_shares, recovery.verify(&shares).unwrap());
            assert_eq!(outcome.bad_shares.shares(), &[Share::new(4, 0)]);
        }

        #[test]
        fn test_insufficient_shares() {
            let recovery = SecretRecovery::new(3, 3).unwrap();
            let shares = share_set(&[(1, 4), (2, 7)]);

            assert!(matches!(
                recovery.reconstruct_secret(&shares),
                Err(RecoveryError::InsufficientShares(3, 2))
            ));
            assert!(matches!(
                recovery.recover(&shares),
                Err(RecoveryError::InsufficientShares(3, 2))
            ));
        }

        #[test]
        fn test_consistency_across_repeated_runs() {
            let shares = share_set(&[(1, 4), (2, 7), (3, 12)]);
            let recovery = SecretRecovery::new(2, 3).unwrap();

            let first = recovery.recover(&shares).unwrap();
            for _ in 0..3 {
                assert_eq!(recovery.recover(&shares).unwrap(), first);
            }
        }
    }

    mod free_function_tests {
        use super::*;

        #[test]
        fn reconstructs_from_leading_shares_only() {
            // Only (2, 5) and (4, 9) define the line y = 2x + 1.
            let shares = share_set(&[(2, 5), (4, 9), (1, 100)]);
            assert_eq!(
                reconstruct_secret(&shares, 2).unwrap(),
                BigInt::from(1)
            );
        }

        #[test]
        fn order_decides_the_defining_shares() {
            let forward = share_set(&[(1, 4), (2, 7), (3, 12)]);
            let rotated = share_set(&[(3, 12), (1, 4), (2, 7)]);

            assert_eq!(
                reconstruct_secret(&forward, 2).unwrap(),
                BigInt::from(1)
            );
            // Line through (3, 12) and (1, 4): y = 4x.
            assert_eq!(
                reconstruct_secret(&rotated, 2).unwrap(),
                BigInt::from(0)
            );
            assert_eq!(
                SecretRecovery::new(2, 3)
                    .unwrap()
                    .verify(&rotated)
                    .unwrap()
                    .shares(),
                &[Share::new(2, 7)]
            );
        }

        #[test]
        fn threshold_zero_is_rejected() {
            let shares = share_set(&[(1, 4)]);
            assert!(matches!(
                reconstruct_secret(&shares, 0),
                Err(RecoveryError::InvalidThreshold(0, 1))
            ));
        }

        #[test]
        fn verify_never_reports_defining_shares() {
            // The line through (1, 2) and (3, 3) is not integral, yet both
            // defining shares must still pass.
            let shares = share_set(&[(1, 2), (3, 3), (5, 4)]);
            let report = verify(&shares, &shares.as_slice()[..2]).unwrap();
            assert!(!report.iter().any(|share| {
                share.x == BigInt::from(1) || share.x == BigInt::from(3)
            }));
        }

        #[test]
        fn verify_accepts_plain_points() {
            let shares = share_set(&[(1, 4), (2, 7), (3, 12)]);
            let defining = vec![
                (BigInt::from(1), BigInt::from(4)),
                (BigInt::from(2), BigInt::from(7)),
            ];
            let report = verify(&shares, &defining).unwrap();
            assert_eq!(report.shares(), &[Share::new(3, 12)]);
        }

        #[test]
        fn verify_rejects_duplicate_defining_points() {
            let shares = share_set(&[(1, 4), (2, 7)]);
            let defining = [Share::new(1, 4), Share::new(1, 5)];
            assert!(matches!(
                verify(&shares, &defining),
                Err(RecoveryError::DuplicateXCoordinate(_))
            ));
        }

        #[test]
        fn verify_with_no_defining_points_fails() {
            let shares = share_set(&[(1, 4)]);
            let defining: [Share; 0] = [];
            assert!(matches!(
                verify(&shares, &defining),
                Err(RecoveryError::InsufficientShares(1, 0))
            ));
        }
    }
}
