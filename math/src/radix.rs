//! Positional decoding of digit strings written in bases 2 through 36.
//!
//! Digits run `0-9` then `a-z`, case-insensitive. Values are accumulated
//! into a [`BigInt`], so there is no upper bound on the decoded magnitude.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::RadixError;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Value of `digit` in `base`, or `None` when it is not a digit of that base.
///
/// `base` must already lie in `MIN_BASE..=MAX_BASE`.
#[inline]
pub fn decode_digit(digit: char, base: u32) -> Option<u32> {
    digit.to_digit(base)
}

/// Decode `digits` as an unsigned numeral in `base`.
///
/// ```
/// use math::radix::decode;
/// use num_bigint::BigInt;
///
/// assert_eq!(decode("ff", 16), Ok(BigInt::from(255)));
/// assert_eq!(decode("111", 2), Ok(BigInt::from(7)));
/// ```
pub fn decode(digits: &str, base: u32) -> Result<BigInt, RadixError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(RadixError::InvalidBase(base));
    }
    if digits.is_empty() {
        return Err(RadixError::EmptyInput);
    }

    digits.chars().enumerate().try_fold(
        BigInt::zero(),
        |acc, (position, digit)| {
            let value = decode_digit(digit, base).ok_or(
                RadixError::InvalidDigit {
                    digit,
                    position,
                    base,
                },
            )?;
            Ok(acc * base + value)
        },
    )
}
