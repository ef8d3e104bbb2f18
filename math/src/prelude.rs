pub use crate::points;
pub use crate::{
    error::{InterpolationError, MathError, RadixError},
    lagrange::{evaluate_at, interpolate_at_zero, Interpolant},
    radix::decode,
    traits::PointSource,
};
pub use num_bigint::BigInt;
