use thiserror::Error;

pub mod radix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("digit string is empty")]
        EmptyInput,
        #[error("base {0} is outside the supported range 2..=36")]
        InvalidBase(u32),
        #[error(
            "invalid digit {digit:?} at position {position} for base {base}"
        )]
        InvalidDigit {
            digit: char,
            position: usize,
            base: u32,
        },
    }
}

pub mod interpolation {
    use num_bigint::BigInt;
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("duplicate x-coordinate {0} among interpolation points")]
        DuplicateXCoordinate(BigInt),
        #[error("insufficient points: need {required}, got {provided}")]
        InsufficientPoints { required: usize, provided: usize },
    }
}

pub use interpolation::Error as InterpolationError;
pub use radix::Error as RadixError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Radix(#[from] RadixError),
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

pub type Error = MathError;
