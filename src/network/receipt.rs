//! Transaction receipts

use crate::address::Address;
use crate::error::WasmEgldError;
use crate::network::response::ReceiptResponse;
use crate::types::{Balance, TransactionHash};
use serde::Serialize;

/// Value/refund summary attached to a processed transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub value: Balance,
    pub sender: Address,
    pub message: String,
    pub hash: TransactionHash,
}

impl Receipt {
    /// Decode a receipt fragment; absent fields keep their empty defaults
    pub fn from_response(response: &ReceiptResponse) -> Result<Self, WasmEgldError> {
        let value = match response.value.as_deref() {
            Some(value) => Balance::from_string(value)?,
            None => Balance::zero(),
        };
        let sender = Address::from_str_lenient(response.sender.as_deref().unwrap_or_default())?;
        let hash = TransactionHash::from_hex(response.tx_hash.as_deref().unwrap_or_default())?;

        Ok(Receipt {
            value,
            sender,
            message: response.data.clone().unwrap_or_default(),
            hash,
        })
    }
}
