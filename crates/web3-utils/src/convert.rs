//! Exact conversions between named units and wei.
//!
//! All arithmetic is on [`BigInt`]; nothing passes through floating point.

use alloy_primitives::U256;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use tracing::{debug, trace};

use crate::error::{Result, UtilsError};
use crate::number::{to_big_int, NumberInput, ParsedNumber};
use crate::units;

/// Converts an amount denominated in `unit` to wei.
///
/// Fractional amounts are scaled exactly; a fraction finer than one wei is
/// truncated. Fails with [`UtilsError::PrecisionOverflow`] when the input has
/// more fractional digits than the unit has decimals.
///
/// ```
/// use web3_utils::convert::to_wei;
///
/// assert_eq!(to_wei("1", "kwei").unwrap().to_string(), "1000");
/// assert_eq!(
///     to_wei("100.001", "ether").unwrap().to_string(),
///     "100001000000000000000"
/// );
/// ```
pub fn to_wei(number: impl Into<NumberInput>, unit: &str) -> Result<BigInt> {
    let parsed = to_big_int(number)?;
    let (def, multiplier) = units::lookup(unit).inspect_err(|_| {
        debug!(unit, "rejected conversion to wei: unknown unit");
    })?;

    let wei = match parsed {
        ParsedNumber::Integer(n) => n * multiplier,
        ParsedNumber::Fractional(f) => {
            let max = def.decimals();
            if f.fractional_digits > max {
                debug!(
                    unit,
                    digits = f.fractional_digits,
                    max,
                    "rejected conversion to wei: fractional precision too high"
                );
                return Err(UtilsError::PrecisionOverflow {
                    digits: f.fractional_digits,
                    max,
                });
            }

            // fractional_digits <= 30 here, the largest unit's decimals.
            let scale_base = BigInt::from(10u8).pow(f.fractional_digits as u32);
            let scaled_int = f.integer_part * multiplier;
            let scaled_frac = (f.fractional_part * multiplier) / scale_base;
            let total = scaled_int + scaled_frac;
            if f.negative {
                -total
            } else {
                total
            }
        }
    };

    trace!(unit, %wei, "converted to wei");
    Ok(wei)
}

/// Divides a wei amount by the multiplier of `unit`.
///
/// Returns `(quotient, remainder)`. Division is floored, so the remainder is
/// always in `0..multiplier` even for negative amounts. Fractional input is
/// rejected since wei is indivisible.
pub fn from_wei(number: impl Into<NumberInput>, unit: &str) -> Result<(BigInt, BigInt)> {
    let wei = to_big_int(number)?.into_integer()?;
    let multiplier = units::multiplier(unit).inspect_err(|_| {
        debug!(unit, "rejected conversion from wei: unknown unit");
    })?;
    Ok(wei.div_mod_floor(multiplier))
}

/// Converts an amount in `unit` to ether, as `(quotient, remainder)` where
/// the remainder is in wei.
pub fn to_ether(number: impl Into<NumberInput>, unit: &str) -> Result<(BigInt, BigInt)> {
    let wei = to_wei(number, unit)?;
    let ether = units::multiplier("ether")?;
    Ok(wei.div_mod_floor(ether))
}

/// Narrows a wei amount to a 256-bit unsigned integer.
pub fn to_u256(wei: &BigInt) -> Result<U256> {
    let (sign, bytes) = wei.to_bytes_be();
    if sign == Sign::Minus {
        return Err(UtilsError::InvalidFormat(format!(
            "negative amount {wei} does not fit in uint256"
        )));
    }
    U256::try_from_be_slice(&bytes).ok_or_else(|| {
        UtilsError::InvalidFormat(format!(
            "amount needs {} bytes, uint256 holds 32",
            bytes.len()
        ))
    })
}
