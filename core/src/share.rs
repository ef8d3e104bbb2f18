use std::fmt;

use math::{lagrange::ensure_distinct_x, radix, traits::PointSource};
use num_bigint::BigInt;
use serde::{Serialize, Serializer};

use crate::error::{RecoveryError, RecoveryResult};

/// One decoded secret share: the point (x, y) on the sharing polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Share {
    #[serde(serialize_with = "serialize_decimal")]
    pub x: BigInt,
    #[serde(serialize_with = "serialize_decimal")]
    pub y: BigInt,
}

impl Share {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Share {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Build a share whose value is a numeral written in `base`.
    pub fn from_radix(
        x: impl Into<BigInt>,
        value: &str,
        base: u32,
    ) -> RecoveryResult<Self> {
        let y = radix::decode(value, base)?;
        Ok(Share { x: x.into(), y })
    }
}

impl PointSource for Share {
    fn x(&self) -> &BigInt {
        &self.x
    }

    fn y(&self) -> &BigInt {
        &self.y
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Shares in input order, with pairwise distinct x-coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareSet {
    shares: Vec<Share>,
}

impl ShareSet {
    pub fn new(shares: Vec<Share>) -> RecoveryResult<Self> {
        ensure_distinct_x(&shares)?;
        Ok(ShareSet { shares })
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Share> {
        self.shares.iter()
    }

    pub fn as_slice(&self) -> &[Share] {
        &self.shares
    }

    /// The first `count` shares in input order.
    pub fn leading(&self, count: usize) -> RecoveryResult<&[Share]> {
        if count == 0 {
            return Err(RecoveryError::InvalidThreshold(count, self.len()));
        }
        self.shares
            .get(..count)
            .ok_or(RecoveryError::InsufficientShares(count, self.len()))
    }
}

impl TryFrom<Vec<Share>> for ShareSet {
    type Error = RecoveryError;

    fn try_from(shares: Vec<Share>) -> RecoveryResult<Self> {
        ShareSet::new(shares)
    }
}

impl<'a> IntoIterator for &'a ShareSet {
    type Item = &'a Share;
    type IntoIter = std::slice::Iter<'a, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.iter()
    }
}

pub(crate) fn serialize_decimal<S: Serializer>(
    value: &BigInt,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
