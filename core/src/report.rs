use std::fmt;

use serde::Serialize;

use crate::share::Share;

/// Shares that disagree with the reconstructed polynomial, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BadShareReport {
    shares: Vec<Share>,
}

impl BadShareReport {
    /// `true` when every share was consistent.
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Share> {
        self.shares.iter()
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn into_shares(self) -> Vec<Share> {
        self.shares
    }
}

impl FromIterator<Share> for BadShareReport {
    fn from_iter<I: IntoIterator<Item = Share>>(iter: I) -> Self {
        BadShareReport {
            shares: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BadShareReport {
    type Item = &'a Share;
    type IntoIter = std::slice::Iter<'a, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.iter()
    }
}

impl fmt::Display for BadShareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, share) in self.shares.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{share}")?;
        }
        f.write_str("]")
    }
}
