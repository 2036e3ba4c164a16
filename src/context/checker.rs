//! Interaction well-formedness checks

use crate::config::NetworkConfig;
use crate::error::WasmEgldError;
use crate::types::{Balance, GasLimit};

/// Validates an interaction before it is turned into a transaction
pub trait InteractionChecker {
    /// Reject value transfers to endpoints that cannot receive them
    fn check_value(&self, payable: bool, value: Option<&Balance>) -> Result<(), WasmEgldError>;

    /// Reject gas limits the network would refuse outright
    fn check_gas_limit(&self, gas: GasLimit, config: &NetworkConfig)
        -> Result<(), WasmEgldError>;
}

/// Default checker: rejects anything the network is certain to refuse
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictChecker;

impl InteractionChecker for StrictChecker {
    fn check_value(&self, payable: bool, value: Option<&Balance>) -> Result<(), WasmEgldError> {
        match value {
            Some(value) if !payable && !value.is_zero() => Err(WasmEgldError::Interaction(
                format!("endpoint is not payable, but value {} was given", value),
            )),
            _ => Ok(()),
        }
    }

    fn check_gas_limit(
        &self,
        gas: GasLimit,
        config: &NetworkConfig,
    ) -> Result<(), WasmEgldError> {
        if gas.value() < config.min_gas_limit {
            return Err(WasmEgldError::Interaction(format!(
                "gas limit {} is below the minimum of {}",
                gas.value(),
                config.min_gas_limit
            )));
        }
        Ok(())
    }
}
