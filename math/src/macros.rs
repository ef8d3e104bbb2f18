//! Shared macros for constructing interpolation points.

/// Build a `Vec<(BigInt, BigInt)>` of points from integer literals.
///
/// ```
/// use math::prelude::*;
///
/// let pts = points![(1, 4), (2, 7)];
/// assert_eq!(pts[1], (BigInt::from(2), BigInt::from(7)));
/// ```
#[macro_export]
macro_rules! points {
    () => {
        ::std::vec::Vec::<(
            $crate::num_bigint::BigInt,
            $crate::num_bigint::BigInt,
        )>::new()
    };
    ($(($x:expr, $y:expr)),+ $(,)?) => {
        vec![$((
            $crate::num_bigint::BigInt::from($x),
            $crate::num_bigint::BigInt::from($y),
        )),+]
    };
}
