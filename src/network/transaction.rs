//! Transactions as queried from the network

use crate::address::Address;
use crate::error::WasmEgldError;
use crate::network::receipt::Receipt;
use crate::network::response::TransactionResponse;
use crate::network::results::SmartContractResults;
use crate::types::{
    Balance, GasLimit, GasPrice, Hash, Nonce, Signature, TransactionOnNetworkType,
    TransactionPayload, TransactionStatus,
};
use serde::Serialize;

/// A plain view of a transaction, as queried from the network
///
/// Built once from a response and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOnNetwork {
    #[serde(rename = "type")]
    pub tx_type: TransactionOnNetworkType,
    pub nonce: Nonce,
    pub round: u64,
    pub epoch: u64,
    pub value: Balance,
    pub receiver: Address,
    pub sender: Address,
    pub gas_price: GasPrice,
    pub gas_limit: GasLimit,
    pub data: TransactionPayload,
    pub signature: Signature,
    pub status: TransactionStatus,
    pub hyperblock_nonce: Nonce,
    pub hyperblock_hash: Hash,
    pub receipt: Receipt,
    pub smart_contract_results: SmartContractResults,
}

impl TransactionOnNetwork {
    /// Decode a transaction response, including its receipt and result chain
    ///
    /// Absent fields keep their zero defaults; present but malformed fields
    /// fail the whole decode.
    pub fn from_response(response: &TransactionResponse) -> Result<Self, WasmEgldError> {
        let value = match response.value.as_deref() {
            Some(value) => Balance::from_string(value)?,
            None => Balance::zero(),
        };
        let sender = decode_bech32_field(response.sender.as_deref())?;
        let receiver = decode_bech32_field(response.receiver.as_deref())?;
        let data = TransactionPayload::from_encoded(response.data.as_deref().unwrap_or_default())?;
        let signature = Signature::from_hex(response.signature.as_deref().unwrap_or_default())?;
        let hyperblock_hash =
            Hash::from_hex(response.hyperblock_hash.as_deref().unwrap_or_default())?;

        let receipt = match &response.receipt {
            Some(receipt) => Receipt::from_response(receipt)?,
            None => Receipt::default(),
        };
        let smart_contract_results =
            SmartContractResults::from_response(response.smart_contract_results.as_deref())?;

        log::debug!(
            "decoded transaction: nonce={} status={:?} results={}",
            response.nonce.unwrap_or(0),
            response.status,
            smart_contract_results.len()
        );

        Ok(TransactionOnNetwork {
            tx_type: TransactionOnNetworkType::new(response.tx_type.as_deref()),
            nonce: Nonce(response.nonce.unwrap_or(0)),
            round: response.round.unwrap_or(0),
            epoch: response.epoch.unwrap_or(0),
            value,
            receiver,
            sender,
            gas_price: GasPrice(response.gas_price.unwrap_or(0)),
            gas_limit: GasLimit(response.gas_limit.unwrap_or(0)),
            data,
            signature,
            status: TransactionStatus::new(response.status.as_deref().unwrap_or_default()),
            hyperblock_nonce: Nonce(response.hyperblock_nonce.unwrap_or(0)),
            hyperblock_hash,
            receipt,
            smart_contract_results,
        })
    }

    /// Decode a JSON response, bare or wrapped in the gateway envelope
    pub fn from_json(json: &str) -> Result<Self, WasmEgldError> {
        Self::from_response(&TransactionResponse::from_json(json)?)
    }

    /// Whether the network finished processing this transaction
    pub fn is_completed(&self) -> bool {
        self.status.is_executed() && self.hyperblock_nonce.0 > 0
    }
}

/// The transaction's own sender/receiver must be bech32 when present
fn decode_bech32_field(value: Option<&str>) -> Result<Address, WasmEgldError> {
    match value {
        Some(value) => Address::from_bech32(value),
        None => Ok(Address::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CallType;

    fn address(byte: u8) -> Address {
        Address::from_pubkey(&[byte; 32]).unwrap()
    }

    fn transfer_json() -> String {
        format!(
            r#"{{
                "nonce": 5,
                "value": "1000",
                "sender": "{}",
                "receiver": "{}",
                "gasPrice": 1000000000,
                "gasLimit": 50000,
                "data": "",
                "status": "success",
                "smartContractResults": []
            }}"#,
            address(1).to_bech32(),
            address(2).to_bech32()
        )
    }

    #[test]
    fn test_decode_transfer() {
        let tx = TransactionOnNetwork::from_json(&transfer_json()).unwrap();

        assert_eq!(tx.nonce, Nonce(5));
        assert_eq!(tx.value, Balance::new(1000));
        assert_eq!(tx.sender, address(1));
        assert_eq!(tx.receiver, address(2));
        assert_eq!(tx.gas_price, GasPrice(1_000_000_000));
        assert_eq!(tx.gas_limit, GasLimit(50_000));
        assert!(tx.data.is_empty());
        assert!(tx.status.is_successful());
        assert!(tx.smart_contract_results.is_empty());
        assert_eq!(tx.receipt, Receipt::default());
        assert_eq!(tx.tx_type.as_str(), "unknown");
        assert_eq!(tx.hyperblock_nonce, Nonce(0));
        assert!(tx.hyperblock_hash.is_empty());
    }

    #[test]
    fn test_decode_is_deterministic() {
        let json = transfer_json();
        assert_eq!(
            TransactionOnNetwork::from_json(&json).unwrap(),
            TransactionOnNetwork::from_json(&json).unwrap()
        );
    }

    #[test]
    fn test_absent_results_are_empty() {
        let tx = TransactionOnNetwork::from_json(r#"{ "nonce": 1 }"#).unwrap();
        assert!(tx.smart_contract_results.is_empty());
        assert_eq!(
            tx,
            TransactionOnNetwork {
                nonce: Nonce(1),
                ..TransactionOnNetwork::default()
            }
        );
    }

    #[test]
    fn test_malformed_sender_fails() {
        let json = r#"{ "sender": "erd1xyz", "value": "1" }"#;
        let err = TransactionOnNetwork::from_json(json).unwrap_err();
        assert!(matches!(err, WasmEgldError::InvalidAddress(_)));
    }

    #[test]
    fn test_hex_sender_rejected_for_transaction() {
        let json = format!(r#"{{ "sender": "{}" }}"#, "01".repeat(32));
        assert!(TransactionOnNetwork::from_json(&json).is_err());
    }

    #[test]
    fn test_malformed_value_fails() {
        let err = TransactionOnNetwork::from_json(r#"{ "value": "1e18" }"#).unwrap_err();
        assert!(matches!(err, WasmEgldError::InvalidAmount(_)));
    }

    #[test]
    fn test_oversized_numeric_value_is_invalid_amount() {
        for json in [
            r#"{ "value": 100000000000000000000 }"#,
            r#"{ "value": 1.5 }"#,
            r#"{ "value": -5 }"#,
        ] {
            let err = TransactionOnNetwork::from_json(json).unwrap_err();
            assert!(matches!(err, WasmEgldError::InvalidAmount(_)), "{}", json);
        }
    }

    #[test]
    fn test_decode_contract_call() {
        let tx_hash = "aa".repeat(32);
        let json = format!(
            r#"{{
                "data": {{
                    "transaction": {{
                        "type": "normal",
                        "nonce": 12,
                        "round": 100,
                        "epoch": 3,
                        "value": "0",
                        "sender": "{sender}",
                        "receiver": "{contract}",
                        "gasPrice": 1000000000,
                        "gasLimit": 6000000,
                        "data": "YWRkQDA1",
                        "status": "executed",
                        "hyperblockNonce": 77,
                        "hyperblockHash": "{block}",
                        "receipt": {{ "value": "120", "sender": "{contract}", "data": "refundedGas", "txHash": "{tx}" }},
                        "smartContractResults": [
                            {{
                                "hash": "{scr1}",
                                "nonce": 13,
                                "value": "0",
                                "receiver": "{sender}",
                                "sender": "{contract}",
                                "data": "@6f6b",
                                "prevTxHash": "{tx}",
                                "originalTxHash": "{tx}",
                                "gasLimit": 0,
                                "gasPrice": 1000000000,
                                "callType": 0
                            }}
                        ]
                    }}
                }},
                "code": "successful"
            }}"#,
            sender = address(1).to_bech32(),
            contract = address(7).to_bech32(),
            block = "bb".repeat(32),
            tx = tx_hash,
            scr1 = "cc".repeat(32),
        );

        let tx = TransactionOnNetwork::from_json(&json).unwrap();
        assert_eq!(tx.tx_type.as_str(), "normal");
        assert_eq!(tx.round, 100);
        assert_eq!(tx.epoch, 3);
        assert_eq!(tx.data.as_bytes(), b"add@05");
        assert_eq!(tx.hyperblock_nonce, Nonce(77));
        assert!(tx.is_completed());

        assert_eq!(tx.receipt.value, Balance::new(120));
        assert_eq!(tx.receipt.sender, address(7));
        assert_eq!(tx.receipt.hash.to_hex(), tx_hash);

        let results = &tx.smart_contract_results;
        assert_eq!(results.len(), 1);
        let immediate = results.immediate_result().unwrap().unwrap();
        assert_eq!(immediate.nonce, Nonce(13));
        assert_eq!(immediate.receiver, address(1));
        assert_eq!(immediate.call_type, Some(CallType::DirectCall));
        assert!(results.resulting_calls().unwrap().is_empty());
    }

    #[test]
    fn test_serialized_view() {
        let tx = TransactionOnNetwork::from_json(&transfer_json()).unwrap();
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["value"], "1000");
        assert_eq!(json["type"], "unknown");
        assert_eq!(json["sender"], address(1).to_bech32());
        assert_eq!(json["smartContractResults"], serde_json::json!([]));
        assert_eq!(json["receipt"]["message"], "");
    }
}
