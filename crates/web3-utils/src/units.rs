use std::collections::HashMap;
use std::sync::LazyLock;

use num_bigint::BigInt;
use serde::Serialize;

use crate::error::{Result, UtilsError};

/// A named denomination and its value in wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Unit {
    pub name: &'static str,
    /// Wei per one of this unit, as a decimal string.
    pub wei: &'static str,
}

impl Unit {
    /// Number of zero digits in the multiplier, i.e. `log10(wei)`.
    ///
    /// This is also the largest fractional precision an amount in this unit
    /// can carry without dropping below one wei.
    pub fn decimals(&self) -> usize {
        self.wei.len() - 1
    }
}

const fn unit(name: &'static str, wei: &'static str) -> Unit {
    Unit { name, wei }
}

/// Every recognised denomination. Names are case-sensitive.
const ALL_UNITS: &[Unit] = &[
    unit("wei", "1"),
    unit("kwei", "1000"),
    unit("Kwei", "1000"),
    unit("babbage", "1000"),
    unit("femtoether", "1000"),
    unit("mwei", "1000000"),
    unit("Mwei", "1000000"),
    unit("lovelace", "1000000"),
    unit("picoether", "1000000"),
    unit("gwei", "1000000000"),
    unit("Gwei", "1000000000"),
    unit("shannon", "1000000000"),
    unit("nanoether", "1000000000"),
    unit("nano", "1000000000"),
    unit("szabo", "1000000000000"),
    unit("microether", "1000000000000"),
    unit("micro", "1000000000000"),
    unit("finney", "1000000000000000"),
    unit("milliether", "1000000000000000"),
    unit("milli", "1000000000000000"),
    unit("ether", "1000000000000000000"),
    unit("kether", "1000000000000000000000"),
    unit("grand", "1000000000000000000000"),
    unit("mether", "1000000000000000000000000"),
    unit("gether", "1000000000000000000000000000"),
    unit("tether", "1000000000000000000000000000000"),
];

static MULTIPLIERS: LazyLock<HashMap<&'static str, BigInt>> = LazyLock::new(|| {
    ALL_UNITS
        .iter()
        .map(|u| (u.name, BigInt::from(10u8).pow(u.decimals() as u32)))
        .collect()
});

/// Returns the unit definition for `name`, or `None` if unrecognised.
pub fn find_unit(name: &str) -> Option<&'static Unit> {
    ALL_UNITS.iter().find(|u| u.name == name)
}

/// Returns all recognised unit definitions.
pub fn all_units() -> Vec<&'static Unit> {
    ALL_UNITS.iter().collect()
}

/// Looks up a unit and returns its definition alongside its multiplier.
pub(crate) fn lookup(name: &str) -> Result<(&'static Unit, &'static BigInt)> {
    let unit = find_unit(name).ok_or_else(|| UtilsError::UnknownUnit(name.to_string()))?;
    let multiplier = MULTIPLIERS
        .get(unit.name)
        .ok_or_else(|| UtilsError::UnknownUnit(name.to_string()))?;
    Ok((unit, multiplier))
}

/// Returns the wei multiplier for a unit name.
pub fn multiplier(name: &str) -> Result<&'static BigInt> {
    lookup(name).map(|(_, m)| m)
}
