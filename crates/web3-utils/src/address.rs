use alloy_primitives::Address;

use crate::error::{Result, UtilsError};
use crate::hash::keccak256;

/// Returns the 40-character hex body of an address, without its `0x`/`0X`
/// prefix, or `None` if the input is not exactly 40 hex digits.
fn address_body(value: &str) -> Option<&str> {
    let body = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    if body.len() == 40 && body.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(body)
    } else {
        None
    }
}

/// Hex digest of the lowercase address body, one nibble per character.
fn checksum_hash(body: &str) -> String {
    ::hex::encode(keccak256(body.to_ascii_lowercase()))
}

fn nibble_is_upper(hash: &[u8], i: usize) -> bool {
    // Hex digits '8'..='f' encode nibble values >= 8.
    matches!(hash[i], b'8'..=b'9' | b'a'..=b'f')
}

/// Whether `value` looks like an Ethereum address.
///
/// Forty hex digits with an optional `0x`/`0X` prefix. All-lowercase and
/// all-uppercase addresses carry no checksum and are accepted as-is; mixed
/// case must pass [`is_address_checksum`].
pub fn is_address(value: &str) -> bool {
    let Some(body) = address_body(value) else {
        return false;
    };

    let is_all_lower = !body.bytes().any(|b| b.is_ascii_uppercase());
    let is_all_upper = !body.bytes().any(|b| b.is_ascii_lowercase());

    if is_all_lower || is_all_upper {
        return true;
    }

    is_address_checksum(value)
}

/// Verifies the EIP-55 mixed-case checksum of an address.
///
/// Every letter whose hash nibble is >= 8 must be uppercase and every other
/// letter lowercase. Inputs that are not 40 hex digits fail.
pub fn is_address_checksum(value: &str) -> bool {
    let Some(body) = address_body(value) else {
        return false;
    };

    let hash = checksum_hash(body);
    let hash = hash.as_bytes();

    body.bytes().enumerate().all(|(i, c)| {
        if nibble_is_upper(hash, i) {
            c.to_ascii_uppercase() == c
        } else {
            c.to_ascii_lowercase() == c
        }
    })
}

/// Applies EIP-55 mixed-case checksum encoding to an address.
///
/// Accepts any casing, with or without prefix. Returns the `0x`-prefixed
/// checksummed form.
///
/// ```
/// use web3_utils::address::to_checksum_address;
///
/// assert_eq!(
///     to_checksum_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap(),
///     "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
/// );
/// ```
pub fn to_checksum_address(value: &str) -> Result<String> {
    let body = address_body(value).ok_or_else(|| {
        UtilsError::InvalidFormat(format!("expected 40 hex characters, got {value:?}"))
    })?;

    let lower = body.to_ascii_lowercase();
    let hash = checksum_hash(&lower);
    let hash = hash.as_bytes();

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");

    for (i, c) in lower.chars().enumerate() {
        if nibble_is_upper(hash, i) {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }

    Ok(checksummed)
}

/// Parses an address string into its 20 bytes after validating it with
/// [`is_address`].
pub fn parse_address(value: &str) -> Result<Address> {
    if !is_address(value) {
        return Err(UtilsError::InvalidFormat(format!(
            "not a valid address: {value:?}"
        )));
    }
    let body = address_body(value)
        .ok_or_else(|| UtilsError::InvalidFormat(format!("not a valid address: {value:?}")))?;

    let mut bytes = [0u8; 20];
    ::hex::decode_to_slice(body, &mut bytes)
        .map_err(|e| UtilsError::InvalidFormat(format!("invalid hex in address: {e}")))?;
    Ok(Address::from(bytes))
}
