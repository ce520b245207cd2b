use sha3::{Digest, Keccak256};

use crate::error::Result;
use crate::hex::{hex_to_bin, is_zero_prefixed};

/// Keccak-256 of empty input, hex-encoded. [`sha3`] reports it as `None`.
pub const SHA3_NULL_HASH: &str =
    "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";

/// Keccak-256 digest (the pre-standard padding used by Ethereum, not
/// FIPS-202 SHA3-256).
pub fn keccak256(data: impl AsRef<[u8]>) -> [u8; 32] {
    Keccak256::digest(data.as_ref()).into()
}

/// Hashes a string with Keccak-256 and returns the `0x`-prefixed digest.
///
/// A `0x`-prefixed input is decoded from hex first; anything else is hashed
/// as UTF-8 text. Returns `Ok(None)` when the digest is [`SHA3_NULL_HASH`],
/// i.e. when the hashed bytes are empty.
pub fn sha3(value: &str) -> Result<Option<String>> {
    let digest = if is_zero_prefixed(value) {
        keccak256(hex_to_bin(value)?)
    } else {
        keccak256(value)
    };

    let hash = ::hex::encode(digest);
    if hash == SHA3_NULL_HASH {
        return Ok(None);
    }
    Ok(Some(format!("0x{hash}")))
}
