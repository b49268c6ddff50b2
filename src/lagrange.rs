use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::share::Point;
use crate::Error;

/// Evaluates the unique polynomial of degree <= points.len() - 1 through the
/// given points at x = 0, which for Shamir shares is the secret.
///
/// For each point i the Lagrange basis contributes
///     y_i * prod_{j != i} (-x_j) / prod_{j != i} (x_i - x_j)
/// and the secret is the sum over i. The individual terms are not integers in
/// general, only their sum is, so the sum is accumulated as an exact fraction
/// and divided out once at the end. A non-zero final remainder means the
/// points do not lie on a single polynomial of the expected degree.
///
/// The x values must be pairwise distinct; `select` guarantees this for
/// points coming out of the normal pipeline.
pub fn interpolate_at_zero(points: &[Point]) -> Result<BigInt, Error> {
    if points.is_empty() {
        return Err(Error::InvalidThreshold);
    }

    // Running sum as acc_num / acc_den with acc_den kept positive.
    let mut acc_num = BigInt::zero();
    let mut acc_den = BigInt::one();

    for (i, pi) in points.iter().enumerate() {
        let xi = BigInt::from(pi.x);
        let mut num = BigInt::one();
        let mut den = BigInt::one();
        for (j, pj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let xj = BigInt::from(pj.x);
            num *= -&xj;
            den *= &xi - &xj;
        }
        if den.is_zero() {
            return Err(Error::DuplicateShare(pi.x));
        }
        num *= &pi.y;

        // acc += num / den, then reduce by the gcd so the fraction stays as
        // small as the inputs allow.
        acc_num = acc_num * &den + &num * &acc_den;
        acc_den *= den;
        let g = acc_num.gcd(&acc_den);
        if !g.is_one() {
            acc_num /= &g;
            acc_den /= g;
        }
        if acc_den.is_negative() {
            acc_num = -acc_num;
            acc_den = -acc_den;
        }
    }

    let (secret, remainder) = acc_num.div_rem(&acc_den);
    if !remainder.is_zero() {
        return Err(Error::InconsistentShares);
    }
    Ok(secret)
}
