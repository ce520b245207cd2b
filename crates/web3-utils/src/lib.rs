//! Numeric and encoding utilities for Ethereum token APIs.
//!
//! This crate provides:
//! - Exact wei/ether unit conversion on arbitrary-precision integers
//! - Decimal/hex number parsing with fractional decomposition
//! - Hex/binary encoding helpers
//! - EIP-55 address checksums
//! - Keccak-256 hashing and ABI method selectors

pub mod address;
pub mod convert;
pub mod error;
pub mod hash;
pub mod hex;
pub mod method;
pub mod number;
pub mod units;

pub use address::{is_address, is_address_checksum, parse_address, to_checksum_address};
pub use convert::{from_wei, to_ether, to_u256, to_wei};
pub use error::{Result, UtilsError};
pub use hash::{keccak256, sha3};
pub use crate::hex::{hex_to_bin, hex_to_number, is_hex, is_negative, is_zero_prefixed, strip_zero, to_hex};
pub use method::{json_method_to_string, method_selector};
pub use number::{to_big_int, FractionalDecimal, NumberInput, ParsedNumber};

pub use num_bigint::BigInt;
