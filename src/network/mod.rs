//! Decoding of network responses into typed views
//!
//! Decoding is a pure transform composed top-down: a transaction decodes its
//! receipt and its smart-contract result chain. Decoded values are immutable
//! snapshots.

pub mod receipt;
pub mod response;
pub mod results;
pub mod transaction;

pub use receipt::Receipt;
pub use response::{ReceiptResponse, SmartContractResultResponse, TransactionResponse};
pub use results::{ImmediateResult, ResultClass, SmartContractResultItem, SmartContractResults};
pub use transaction::TransactionOnNetwork;

use crate::error::WasmEgldError;

/// Decode a transaction from a JSON response
///
/// # Arguments
/// * `json` - Bare transaction object or `{"data":{"transaction":{...}}}`
pub fn decode_transaction(json: &str) -> Result<TransactionOnNetwork, WasmEgldError> {
    TransactionOnNetwork::from_json(json)
}

/// Decode a transaction from an already parsed JSON value
pub fn decode_transaction_value(
    value: serde_json::Value,
) -> Result<TransactionOnNetwork, WasmEgldError> {
    TransactionOnNetwork::from_response(&TransactionResponse::from_value(value)?)
}
