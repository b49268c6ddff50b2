use num_bigint::BigInt;

use crate::decode::decode;
use crate::Error;

/// One share of a split secret, exactly as it appears in an input document:
/// the x-coordinate, the encoding base, and the still-encoded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub x: u32,
    pub base: u32,
    pub value: String,
}

impl Share {
    pub fn new(x: u32, base: u32, value: impl Into<String>) -> Self {
        Share {
            x,
            base,
            value: value.into(),
        }
    }

    /// Decodes the share value into the point (x, y) it stands for.
    pub fn to_point(&self) -> Result<Point, Error> {
        Ok(Point {
            x: self.x,
            y: decode(&self.value, self.base)?,
        })
    }
}

/// A point (x, y = f(x)) on the secret polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: u32, y: impl Into<BigInt>) -> Self {
        Point { x, y: y.into() }
    }
}

/// Picks the k points used for interpolation: stable-sort by ascending x and
/// keep the first k.
///
/// Any subset of k genuine points recovers the same secret, so which k are
/// kept is a pure determinism choice. This one matches the observable output
/// of existing share documents and must not change.
pub fn select(mut points: Vec<Point>, k: usize) -> Result<Vec<Point>, Error> {
    if k == 0 {
        return Err(Error::InvalidThreshold);
    }
    if points.len() < k {
        return Err(Error::NotEnoughShares {
            needed: k,
            available: points.len(),
        });
    }

    points.sort_by_key(|p| p.x);
    points.truncate(k);

    // A repeated x breaks the interpolation precondition. Two copies of the
    // same point are a submission mistake; the same x with different values
    // means the shares cannot lie on one polynomial at all.
    for pair in points.windows(2) {
        if pair[0].x == pair[1].x {
            if pair[0].y == pair[1].y {
                return Err(Error::DuplicateShare(pair[0].x));
            }
            return Err(Error::InconsistentShares);
        }
    }

    Ok(points)
}
