//! WASM bindings for network response decoding
//!
//! DecoderNamespace provides static methods that turn transaction responses
//! into plain JS objects (amounts as decimal strings, addresses as bech32).

use crate::network::{decode_transaction, decode_transaction_value, TransactionOnNetwork};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Namespace for decoding operations
#[wasm_bindgen]
pub struct DecoderNamespace;

#[wasm_bindgen]
impl DecoderNamespace {
    /// Decode a transaction response object
    ///
    /// # Arguments
    /// * `response` - Transaction object, or the gateway `{ data: { transaction } }` envelope
    ///
    /// # Returns
    /// Decoded transaction with `receipt` and `smartContractResults`
    #[wasm_bindgen(js_name = decodeTransaction)]
    pub fn decode_transaction_wasm(response: JsValue) -> Result<JsValue, JsValue> {
        let tx = decode_js(response)?;
        to_js_value(&tx)
    }

    /// Decode a transaction response given as a JSON string
    #[wasm_bindgen(js_name = decodeTransactionJson)]
    pub fn decode_transaction_json(json: &str) -> Result<JsValue, JsValue> {
        let tx = decode_transaction(json)?;
        to_js_value(&tx)
    }

    /// Get the immediate smart-contract result of a transaction
    ///
    /// Returns `undefined` when there is none; throws when the result chain is ambiguous.
    #[wasm_bindgen(js_name = immediateResult)]
    pub fn immediate_result(response: JsValue) -> Result<JsValue, JsValue> {
        let tx = decode_js(response)?;
        match tx.smart_contract_results.immediate_result()? {
            Some(item) => to_js_value(item),
            None => Ok(JsValue::undefined()),
        }
    }

    /// Get the calls dispatched by a contract execution, in network order
    ///
    /// Throws when some result cannot be classified.
    #[wasm_bindgen(js_name = resultingCalls)]
    pub fn resulting_calls(response: JsValue) -> Result<JsValue, JsValue> {
        let tx = decode_js(response)?;
        let calls = tx.smart_contract_results.resulting_calls()?;
        to_js_value(&calls)
    }
}

fn decode_js(response: JsValue) -> Result<TransactionOnNetwork, JsValue> {
    let value: serde_json::Value = serde_wasm_bindgen::from_value(response)
        .map_err(|e| JsValue::from_str(&format!("Invalid response: {}", e)))?;
    Ok(decode_transaction_value(value)?)
}

/// Convert a decoded value to JsValue using serde_wasm_bindgen
fn to_js_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// WASM tests - only run in wasm32 target
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_decode_transaction_json() {
        let decoded = DecoderNamespace::decode_transaction_json(r#"{ "nonce": 5, "value": "1000" }"#)
            .unwrap();
        let value = js_sys::Reflect::get(&decoded, &"value".into()).unwrap();
        assert_eq!(value.as_string().as_deref(), Some("1000"));
    }

    #[wasm_bindgen_test]
    fn test_malformed_response_throws() {
        assert!(DecoderNamespace::decode_transaction_json(r#"{ "value": "ten" }"#).is_err());
    }
}
