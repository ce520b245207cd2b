//! Arbitrary-precision number parsing.
//!
//! Strings are disambiguated by shape alone: a run of decimal digits (with
//! at most one `.`) is read in base 10, anything else that looks like hex
//! (optionally `0x`-prefixed) is read in base 16.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::{Result, UtilsError};

/// Accepted inputs for [`to_big_int`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberInput {
    /// An integer that is already arbitrary-precision (native integers are
    /// widened into this variant).
    Big(BigInt),
    /// A decimal or hex string.
    Text(String),
}

impl From<BigInt> for NumberInput {
    fn from(value: BigInt) -> Self {
        NumberInput::Big(value)
    }
}

impl From<&BigInt> for NumberInput {
    fn from(value: &BigInt) -> Self {
        NumberInput::Big(value.clone())
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        NumberInput::Text(value)
    }
}

impl From<&String> for NumberInput {
    fn from(value: &String) -> Self {
        NumberInput::Text(value.clone())
    }
}

macro_rules! impl_from_native {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for NumberInput {
            fn from(value: $t) -> Self {
                NumberInput::Big(BigInt::from(value))
            }
        }
    )*};
}

impl_from_native!(i32, i64, i128, u32, u64, u128, usize);

/// A decimal number with a fractional part, split into exact integers.
///
/// `1.05` becomes `integer_part = 1`, `fractional_part = 5`,
/// `fractional_digits = 2`. Both parts are stored as magnitudes; the sign
/// lives in `negative`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractionalDecimal {
    pub integer_part: BigInt,
    pub fractional_part: BigInt,
    pub fractional_digits: usize,
    pub negative: bool,
}

/// Result of [`to_big_int`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedNumber {
    Integer(BigInt),
    Fractional(FractionalDecimal),
}

impl ParsedNumber {
    pub fn is_fractional(&self) -> bool {
        matches!(self, ParsedNumber::Fractional(_))
    }

    /// Returns the integer value, failing if the input had a fractional part.
    pub fn into_integer(self) -> Result<BigInt> {
        match self {
            ParsedNumber::Integer(n) => Ok(n),
            ParsedNumber::Fractional(f) => Err(UtilsError::InvalidFormat(format!(
                "expected an integer, got {} fractional digits",
                f.fractional_digits
            ))),
        }
    }
}

/// Parses a number into an arbitrary-precision integer or a fractional
/// decomposition.
///
/// - `BigInt` and native integers are returned unchanged.
/// - Decimal strings (`"-12"`, `"100.001"`) are read in base 10. A non-empty
///   fractional part yields [`ParsedNumber::Fractional`].
/// - Hex strings (`"ff"`, `"0xFF"`, `"-0x1a"`) are read in base 16. The empty
///   string and a bare `0x` are zero.
pub fn to_big_int(value: impl Into<NumberInput>) -> Result<ParsedNumber> {
    match value.into() {
        NumberInput::Big(n) => Ok(ParsedNumber::Integer(n)),
        NumberInput::Text(s) => parse_str(&s),
    }
}

fn parse_str(input: &str) -> Result<ParsedNumber> {
    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let decimal_shaped = !body.is_empty()
        && body.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && body.bytes().any(|b| b.is_ascii_digit());

    if decimal_shaped {
        if body.bytes().filter(|&b| b == b'.').count() > 1 {
            return Err(UtilsError::InvalidFormat(
                "at most one decimal point".into(),
            ));
        }
        return parse_decimal(body, negative);
    }

    let lower = body.to_ascii_lowercase();
    let digits = lower.strip_prefix("0x").unwrap_or(&lower);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(UtilsError::InvalidFormat(format!(
            "not a decimal or hex number: {input:?}"
        )));
    }

    let magnitude = parse_radix(digits, 16)?;
    Ok(ParsedNumber::Integer(apply_sign(magnitude, negative)))
}

fn parse_decimal(body: &str, negative: bool) -> Result<ParsedNumber> {
    match body.split_once('.') {
        Some((whole, fraction)) if !fraction.is_empty() => {
            Ok(ParsedNumber::Fractional(FractionalDecimal {
                integer_part: parse_radix(whole, 10)?,
                fractional_part: parse_radix(fraction, 10)?,
                fractional_digits: fraction.len(),
                negative,
            }))
        }
        Some((whole, _)) => Ok(ParsedNumber::Integer(apply_sign(
            parse_radix(whole, 10)?,
            negative,
        ))),
        None => Ok(ParsedNumber::Integer(apply_sign(
            parse_radix(body, 10)?,
            negative,
        ))),
    }
}

/// Parses an unsigned digit run. The empty string is zero.
fn parse_radix(digits: &str, radix: u32) -> Result<BigInt> {
    if digits.is_empty() {
        return Ok(BigInt::zero());
    }
    BigInt::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| {
        UtilsError::InvalidFormat(format!("invalid base-{radix} digits: {digits:?}"))
    })
}

fn apply_sign(magnitude: BigInt, negative: bool) -> BigInt {
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
