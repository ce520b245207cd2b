//! Canonical method signatures and selectors from ABI function fragments.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, UtilsError};
use crate::hash::keccak256;

/// A single ABI input parameter. Only the type matters for the signature.
#[derive(Debug, Clone, Deserialize)]
pub struct AbiInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// An ABI function fragment such as
/// `{"name": "transfer", "inputs": [{"type": "address"}, {"type": "uint256"}]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AbiFunction {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiInput>,
}

impl AbiFunction {
    /// Returns `name(type1,type2,...)`. Inputs without a type are skipped,
    /// and a name that already carries a parameter list is returned as-is.
    pub fn signature(&self) -> String {
        if self.name.find('(').is_some_and(|i| i > 0) {
            return self.name.clone();
        }
        let types: Vec<&str> = self
            .inputs
            .iter()
            .filter_map(|input| input.kind.as_deref())
            .collect();
        format!("{}({})", self.name, types.join(","))
    }

    pub fn selector(&self) -> [u8; 4] {
        method_selector(&self.signature())
    }
}

/// Builds the canonical signature string of a JSON ABI function fragment.
pub fn json_method_to_string(json: &Value) -> Result<String> {
    let function = AbiFunction::deserialize(json)
        .map_err(|e| UtilsError::InvalidFormat(format!("invalid ABI function: {e}")))?;
    Ok(function.signature())
}

/// First four bytes of the Keccak-256 of a canonical signature.
pub fn method_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature);
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}
