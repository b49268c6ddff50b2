use num_bigint::BigInt;

use crate::Error;

/// The smallest base a share value may be encoded in.
pub const MIN_BASE: u32 = 2;

/// The largest base a share value may be encoded in. Digits beyond 9 are the
/// letters a-z, matching `BigInt::parse_bytes`.
pub const MAX_BASE: u32 = 36;

/// Decodes a string-encoded magnitude in `base` into an exact integer.
///
/// Letters are accepted in either case, so `"2A"` and `"2a"` both decode to
/// 42 in base 16. The magnitude is unbounded; there is no overflow.
pub fn decode(digits: &str, base: u32) -> Result<BigInt, Error> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::UnsupportedBase(base));
    }

    // parse_bytes also accepts a leading sign, which a share value must not
    // carry, so every character is checked as a digit first.
    if digits.is_empty() || digits.chars().any(|c| c.to_digit(base).is_none()) {
        return Err(Error::InvalidDigit {
            digits: digits.to_string(),
            base,
        });
    }

    BigInt::parse_bytes(digits.as_bytes(), base).ok_or_else(|| Error::InvalidDigit {
        digits: digits.to_string(),
        base,
    })
}
