//! Lagrange interpolation over the integers.
//!
//! Each basis term `y_i * prod(x - x_j) / prod(x_i - x_j)` is divided out on
//! its own with truncating integer division before the terms are summed. The
//! result is exact whenever every term divides evenly, which holds for shares
//! generated from an integer polynomial at consecutive abscissae. Other inputs
//! can come out off by a small amount; that truncation is kept as-is.
//!
//! Evaluating at one of the defining abscissae always reproduces its `y`
//! exactly: every other term carries a zero factor and the matching term's
//! numerator and denominator share the same product.

use std::collections::HashSet;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::InterpolationError;
use crate::traits::PointSource;

/// The polynomial of lowest degree through a fixed set of points.
///
/// Construction validates the points and precomputes each basis
/// denominator, so repeated [`evaluate`](Self::evaluate) calls only pay for
/// the numerators.
#[derive(Debug, Clone)]
pub struct Interpolant<'a, P> {
    points: &'a [P],
    denominators: Vec<BigInt>,
}

impl<'a, P: PointSource> Interpolant<'a, P> {
    /// Interpolate through every point in `points`.
    pub fn new(points: &'a [P]) -> Result<Self, InterpolationError> {
        if points.is_empty() {
            return Err(InterpolationError::InsufficientPoints {
                required: 1,
                provided: 0,
            });
        }
        ensure_distinct_x(points)?;

        let denominators: Vec<BigInt> = points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                others(points, i)
                    .map(|other| point.x() - other.x())
                    .product::<BigInt>()
            })
            .collect();

        Ok(Self {
            points,
            denominators,
        })
    }

    /// Value of the polynomial at `at_x`, with per-term truncating division.
    pub fn evaluate(&self, at_x: &BigInt) -> BigInt {
        self.points
            .iter()
            .zip(&self.denominators)
            .enumerate()
            .map(|(i, (point, denominator))| {
                let numerator = others(self.points, i)
                    .fold(point.y().clone(), |acc, other| {
                        acc * (at_x - other.x())
                    });
                numerator / denominator
            })
            .sum()
    }

    /// Value at x = 0, i.e. the shared secret.
    pub fn constant_term(&self) -> BigInt {
        self.evaluate(&BigInt::zero())
    }

    /// Whether `point` lies on the polynomial.
    pub fn passes_through<Q: PointSource>(&self, point: &Q) -> bool {
        self.evaluate(point.x()) == *point.y()
    }

    pub fn points(&self) -> &'a [P] {
        self.points
    }

    /// Upper bound on the degree: one less than the number of points.
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }
}

/// Evaluate the polynomial through the first `threshold` points at `at_x`.
pub fn evaluate_at<P: PointSource>(
    points: &[P],
    threshold: usize,
    at_x: &BigInt,
) -> Result<BigInt, InterpolationError> {
    let defining =
        points
            .get(..threshold)
            .ok_or(InterpolationError::InsufficientPoints {
                required: threshold,
                provided: points.len(),
            })?;
    Interpolant::new(defining).map(|f| f.evaluate(at_x))
}

/// Lagrange interpolate through all of `points` and return f(0).
pub fn interpolate_at_zero<P: PointSource>(
    points: &[P],
) -> Result<BigInt, InterpolationError> {
    Interpolant::new(points).map(|f| f.constant_term())
}

/// Fail with the first x-coordinate that repeats an earlier one.
pub fn ensure_distinct_x<P: PointSource>(
    points: &[P],
) -> Result<(), InterpolationError> {
    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if !seen.insert(point.x()) {
            return Err(InterpolationError::DuplicateXCoordinate(
                point.x().clone(),
            ));
        }
    }
    Ok(())
}

fn others<P>(points: &[P], skip: usize) -> impl Iterator<Item = &P> {
    points
        .iter()
        .enumerate()
        .filter(move |&(j, _)| j != skip)
        .map(|(_, point)| point)
}
