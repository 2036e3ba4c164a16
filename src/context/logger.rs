//! Observer hook for contract interactions

use crate::network::TransactionOnNetwork;
use crate::types::TransactionHash;

/// Receives contract-interaction events; never consulted for control flow
pub trait ContractLogger {
    fn transaction_created(&self) {}

    fn transaction_sent(&self, _hash: &TransactionHash) {}

    fn transaction_completed(&self, _transaction: &TransactionOnNetwork) {}

    fn query_created(&self, _endpoint: &str) {}
}

/// Forwards interaction events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogContractLogger;

impl ContractLogger for LogContractLogger {
    fn transaction_created(&self) {
        log::debug!("transaction created");
    }

    fn transaction_sent(&self, hash: &TransactionHash) {
        log::info!("transaction sent: {}", hash);
    }

    fn transaction_completed(&self, transaction: &TransactionOnNetwork) {
        log::info!(
            "transaction completed: status={} nonce={} results={}",
            transaction.status.as_str(),
            transaction.nonce.0,
            transaction.smart_contract_results.len()
        );
    }

    fn query_created(&self, endpoint: &str) {
        log::debug!("query created: {}", endpoint);
    }
}
