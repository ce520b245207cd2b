//! Hex/binary codec and string predicates.

use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, ToPrimitive};

use crate::error::{Result, UtilsError};
use crate::number::to_big_int;

/// Input accepted by [`to_hex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexValue {
    /// Rendered as a big-endian number without leading zeros.
    Number(BigInt),
    /// Rendered byte by byte.
    Bytes(Vec<u8>),
}

impl HexValue {
    /// Converts a finite float to a number, truncating toward zero.
    pub fn from_f64(value: f64) -> Result<Self> {
        BigInt::from_f64(value.trunc())
            .map(HexValue::Number)
            .ok_or_else(|| UtilsError::InvalidFormat(format!("{value} is not a finite number")))
    }
}

impl From<BigInt> for HexValue {
    fn from(value: BigInt) -> Self {
        HexValue::Number(value)
    }
}

impl From<&BigInt> for HexValue {
    fn from(value: &BigInt) -> Self {
        HexValue::Number(value.clone())
    }
}

impl From<&str> for HexValue {
    fn from(value: &str) -> Self {
        HexValue::Bytes(value.as_bytes().to_vec())
    }
}

impl From<String> for HexValue {
    fn from(value: String) -> Self {
        HexValue::Bytes(value.into_bytes())
    }
}

impl From<&[u8]> for HexValue {
    fn from(value: &[u8]) -> Self {
        HexValue::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for HexValue {
    fn from(value: Vec<u8>) -> Self {
        HexValue::Bytes(value)
    }
}

macro_rules! impl_from_native {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for HexValue {
            fn from(value: $t) -> Self {
                HexValue::Number(BigInt::from(value))
            }
        }
    )*};
}

impl_from_native!(i32, i64, i128, u8, u32, u64, u128, usize);

/// Encodes a value as lowercase hex, optionally `0x`-prefixed.
///
/// Numbers lose their leading zeros but always keep at least one digit; a
/// negative number is written as `-` followed by the prefix and magnitude.
/// Text and bytes are encoded as-is, two digits per byte.
///
/// ```
/// use web3_utils::hex::to_hex;
///
/// assert_eq!(to_hex(255, false), "ff");
/// assert_eq!(to_hex(255, true), "0xff");
/// assert_eq!(to_hex("ab", false), "6162");
/// ```
pub fn to_hex(value: impl Into<HexValue>, with_prefix: bool) -> String {
    let prefix = if with_prefix { "0x" } else { "" };
    match value.into() {
        HexValue::Number(n) => {
            let sign = if n.sign() == Sign::Minus { "-" } else { "" };
            format!("{sign}{prefix}{}", n.magnitude().to_str_radix(16))
        }
        HexValue::Bytes(bytes) => format!("{prefix}{}", ::hex::encode(bytes)),
    }
}

/// Decodes a hex string into bytes.
///
/// The `0x` prefix is optional. An odd number of digits is left-padded with a
/// single `0`, so `"0xf"` decodes to `[0x0f]`.
pub fn hex_to_bin(value: &str) -> Result<Vec<u8>> {
    let digits = strip_zero(value);
    let decoded = if digits.len() % 2 == 1 {
        ::hex::decode(format!("0{digits}"))
    } else {
        ::hex::decode(digits)
    };
    decoded.map_err(|e| UtilsError::InvalidFormat(format!("invalid hex {value:?}: {e}")))
}

/// Parses a hex string (prefixed or not) into a `u64`.
///
/// Bare digits are always read as hex, so `"10"` is sixteen.
pub fn hex_to_number(value: &str) -> Result<u64> {
    let prefixed = if is_zero_prefixed(value) {
        value.to_string()
    } else {
        format!("0x{value}")
    };
    let n = to_big_int(prefixed)?.into_integer()?;
    n.to_u64().ok_or_else(|| {
        UtilsError::InvalidFormat(format!("{value} does not fit in an unsigned 64-bit integer"))
    })
}

/// Whether `value` is lowercase hex with an optional `0x` prefix. The empty
/// string qualifies.
pub fn is_hex(value: &str) -> bool {
    strip_zero(value)
        .bytes()
        .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

pub fn is_zero_prefixed(value: &str) -> bool {
    value.starts_with("0x")
}

/// Removes one leading `0x`, if present.
pub fn strip_zero(value: &str) -> &str {
    value.strip_prefix("0x").unwrap_or(value)
}

pub fn is_negative(value: &str) -> bool {
    value.starts_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_to_hex() {
        assert_eq!(to_hex(255, false), "ff");
        assert_eq!(to_hex(255, true), "0xff");
        assert_eq!(to_hex(0, false), "0");
        assert_eq!(to_hex(0, true), "0x0");
        assert_eq!(to_hex(4096u64, false), "1000");
    }

    #[test]
    fn big_number_to_hex() {
        let n: BigInt = "1000000000000000000".parse().unwrap();
        assert_eq!(to_hex(&n, true), "0xde0b6b3a7640000");
    }

    #[test]
    fn negative_number_to_hex() {
        assert_eq!(to_hex(-255, false), "-ff");
        assert_eq!(to_hex(-255, true), "-0xff");
    }

    #[test]
    fn float_truncates() {
        assert_eq!(to_hex(HexValue::from_f64(255.9).unwrap(), false), "ff");
        assert!(HexValue::from_f64(f64::NAN).is_err());
        assert!(HexValue::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn text_is_byte_encoded_without_stripping() {
        assert_eq!(to_hex("\0a", false), "0061");
        assert_eq!(to_hex(String::from("hi"), true), "0x6869");
        assert_eq!(to_hex("", false), "");
    }

    #[test]
    fn bytes_to_hex() {
        assert_eq!(to_hex(vec![0x00, 0x0f, 0xff], true), "0x000fff");
    }

    #[test]
    fn hex_to_bin_is_prefix_insensitive() {
        assert_eq!(hex_to_bin("0x0f").unwrap(), vec![0x0f]);
        assert_eq!(hex_to_bin("0f").unwrap(), vec![0x0f]);
    }

    #[test]
    fn hex_to_bin_pads_odd_length() {
        assert_eq!(hex_to_bin("0xf").unwrap(), vec![0x0f]);
        assert_eq!(hex_to_bin("abc").unwrap(), vec![0x0a, 0xbc]);
    }

    #[test]
    fn hex_to_bin_empty() {
        assert!(hex_to_bin("").unwrap().is_empty());
        assert!(hex_to_bin("0x").unwrap().is_empty());
    }

    #[test]
    fn hex_to_bin_accepts_uppercase_digits() {
        assert_eq!(hex_to_bin("0xDEAD").unwrap(), vec![0xde, 0xad]);
    }

    #[test]
    fn hex_to_bin_rejects_non_hex() {
        assert!(matches!(hex_to_bin("0xzz"), Err(UtilsError::InvalidFormat(_))));
        assert!(matches!(hex_to_bin("12g4"), Err(UtilsError::InvalidFormat(_))));
    }

    #[test]
    fn hex_to_number_reads_bare_digits_as_hex() {
        assert_eq!(hex_to_number("0xff").unwrap(), 255);
        assert_eq!(hex_to_number("10").unwrap(), 16);
        assert_eq!(hex_to_number("0x").unwrap(), 0);
    }

    #[test]
    fn hex_to_number_rejects_overflow() {
        assert_eq!(hex_to_number("0xffffffffffffffff").unwrap(), u64::MAX);
        assert!(hex_to_number("0x10000000000000000").is_err());
    }

    #[test]
    fn is_hex_predicate() {
        assert!(is_hex("0xdeadbeef"));
        assert!(is_hex("deadbeef"));
        assert!(is_hex(""));
        assert!(is_hex("0x"));
        assert!(!is_hex("0xDEADBEEF"));
        assert!(!is_hex("0xg"));
        assert!(!is_hex("0X12"));
    }

    #[test]
    fn prefix_helpers() {
        assert!(is_zero_prefixed("0x12"));
        assert!(!is_zero_prefixed("12"));
        assert!(!is_zero_prefixed("0X12"));
        assert_eq!(strip_zero("0x12"), "12");
        assert_eq!(strip_zero("0x0x12"), "0x12");
        assert_eq!(strip_zero("12"), "12");
    }

    #[test]
    fn negative_predicate() {
        assert!(is_negative("-1"));
        assert!(!is_negative("1"));
        assert!(!is_negative(""));
    }
}
