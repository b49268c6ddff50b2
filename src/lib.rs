mod decode;
mod input;
mod lagrange;
mod share;

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A share value contains a character that is not a digit in its base.
    #[error("value {digits:?} is not a valid base-{base} number")]
    InvalidDigit { digits: String, base: u32 },
    #[error("base {0} is outside the supported range 2..=36")]
    UnsupportedBase(u32),
    #[error("threshold must be at least 1")]
    InvalidThreshold,
    #[error("reconstruction needs {needed} shares but only {available} are available")]
    NotEnoughShares { needed: usize, available: usize },
    #[error("share index {0} was submitted more than once")]
    DuplicateShare(u32),
    /// The shares do not lie on a single polynomial of degree k - 1: either
    /// two of them disagree at the same x, or the interpolated constant term
    /// is not an integer.
    #[error("shares do not lie on a single polynomial of the expected degree")]
    InconsistentShares,
    #[error("malformed share document: {0}")]
    MalformedDocument(String),
}

pub use decode::{decode, MAX_BASE, MIN_BASE};
pub use input::{parse_document, Document};
pub use lagrange::interpolate_at_zero;
pub use share::{select, Point, Share};

/// Recovers the secret from raw shares: decode every value, keep the k
/// lowest-indexed points, and interpolate the polynomial through them at
/// x = 0.
pub fn reconstruct(k: usize, shares: &[Share]) -> Result<BigInt, Error> {
    let points = shares
        .iter()
        .map(Share::to_point)
        .collect::<Result<Vec<_>, _>>()?;
    let selected = select(points, k)?;
    interpolate_at_zero(&selected)
}
