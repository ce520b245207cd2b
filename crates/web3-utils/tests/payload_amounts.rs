//! Integration tests exercising the crate the way an API client uses it:
//! human amounts in, decimal wei strings and checksummed addresses out.

use web3_utils::*;

// ─── Amount formatting for request payloads ─────────────────────────

#[test]
fn initial_supply_in_wei() {
    let supply = to_wei("1000000", "ether").unwrap();
    assert_eq!(supply.to_string(), "1000000000000000000000000");
}

#[test]
fn fractional_transfer_amount_in_wei() {
    let amount = to_wei("100.001", "ether").unwrap();
    assert_eq!(amount.to_string(), "100001000000000000000");
}

#[test]
fn wei_string_survives_json_body() {
    let amount = to_wei("100", "ether").unwrap();
    let body = serde_json::json!({
        "recipient": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "amount": amount.to_string(),
    });
    let parsed = body["amount"].as_str().unwrap();
    let (ether, rest) = from_wei(parsed, "ether").unwrap();
    assert_eq!(ether, BigInt::from(100));
    assert_eq!(rest, BigInt::from(0));
}

#[test]
fn gwei_amount_to_u256_hex() {
    let wei = to_wei("1", "gwei").unwrap();
    let word = to_u256(&wei).unwrap();
    assert_eq!(to_hex(&wei, true), "0x3b9aca00");
    assert_eq!(format!("{word:#x}"), "0x3b9aca00");
}

#[test]
fn units_are_consistent_with_each_other() {
    assert_eq!(to_wei("1", "ether").unwrap(), to_wei("1000", "finney").unwrap());
    assert_eq!(to_wei("1", "finney").unwrap(), to_wei("1000", "szabo").unwrap());
    assert_eq!(to_wei("1", "szabo").unwrap(), to_wei("1000", "gwei").unwrap());
    assert_eq!(to_wei("1", "gwei").unwrap(), to_wei("1000", "mwei").unwrap());
    assert_eq!(to_wei("1", "mwei").unwrap(), to_wei("1000", "kwei").unwrap());
    assert_eq!(to_wei("1", "tether").unwrap(), to_wei("1000", "gether").unwrap());
}

#[test]
fn to_ether_of_gwei_amount() {
    let (ether, rest) = to_ether("1500000000", "gwei").unwrap();
    assert_eq!(ether, BigInt::from(1));
    assert_eq!(rest.to_string(), "500000000000000000");
}

#[test]
fn errors_surface_to_caller() {
    assert!(matches!(
        to_wei("1", "bogus-unit"),
        Err(UtilsError::UnknownUnit(_))
    ));
    assert!(matches!(
        to_wei("1.1234567890123456789", "ether"),
        Err(UtilsError::PrecisionOverflow { digits: 19, max: 18 })
    ));
    assert!(matches!(to_wei("1..2", "ether"), Err(UtilsError::InvalidFormat(_))));
}

// ─── Addresses and hashing ──────────────────────────────────────────

#[test]
fn contract_address_is_checksummed_before_sending() {
    let configured = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359";
    assert!(is_address(configured));
    let checksummed = to_checksum_address(configured).unwrap();
    assert_eq!(checksummed, "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");
    assert!(is_address_checksum(&checksummed));
    assert_eq!(
        parse_address(&checksummed).unwrap(),
        parse_address(configured).unwrap()
    );
}

#[test]
fn sha3_of_transfer_signature_matches_selector() {
    let fragment = serde_json::json!({
        "name": "transfer",
        "inputs": [{ "type": "address" }, { "type": "uint256" }]
    });
    let signature = json_method_to_string(&fragment).unwrap();
    let hash = sha3(&signature).unwrap().unwrap();
    assert!(hash.starts_with("0xa9059cbb"));
    assert_eq!(hex_to_bin(&hash[..10]).unwrap(), method_selector(&signature));
}

#[test]
fn hex_round_trip_through_bytes() {
    let bytes = hex_to_bin("0x0f").unwrap();
    assert_eq!(bytes, hex_to_bin("0f").unwrap());
    assert_eq!(to_hex(bytes, true), "0x0f");
    assert_eq!(hex_to_number(&to_hex(255, true)).unwrap(), 255);
}
