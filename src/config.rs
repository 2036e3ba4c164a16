//! Network parameters used when preparing transactions

use crate::error::WasmEgldError;
use serde::{Deserialize, Serialize};

/// Network parameters, as returned by the network config endpoint
///
/// Every field is optional in JSON and falls back to mainnet values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkConfig {
    /// Gas consumed by a plain transfer without data
    pub min_gas_limit: u64,
    /// Extra gas charged per byte of transaction data
    pub gas_per_data_byte: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            min_gas_limit: 50_000,
            gas_per_data_byte: 1_500,
        }
    }
}

impl NetworkConfig {
    /// Parse a (possibly partial) JSON config object; other network
    /// parameters in the object are ignored
    pub fn from_json(json: &str) -> Result<Self, WasmEgldError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = NetworkConfig::from_json(r#"{ "chainId": "D", "minGasLimit": 70000 }"#)
            .unwrap();
        assert_eq!(config.min_gas_limit, 70_000);
        assert_eq!(config.gas_per_data_byte, 1_500);
    }

    #[test]
    fn test_ignores_unused_network_parameters() {
        let json = r#"{ "chainId": "T", "minGasPrice": 2000000000, "addressHrp": "xyz" }"#;
        assert_eq!(NetworkConfig::from_json(json).unwrap(), NetworkConfig::default());
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(NetworkConfig::from_json("{}").unwrap(), NetworkConfig::default());
    }

    #[test]
    fn test_rejects_malformed_config() {
        assert!(matches!(
            NetworkConfig::from_json(r#"{ "minGasLimit": "lots" }"#),
            Err(WasmEgldError::Decode(_))
        ));
    }
}
