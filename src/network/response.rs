//! Wire schema of the network's transaction responses
//!
//! Field names match the network API. Every field is optional so that a
//! partial response still deserializes; the typed decoders decide what an
//! absent field means.

use crate::error::WasmEgldError;
use serde::{de, Deserialize, Deserializer};

/// Deserialize an optional u64 from either a number or a string
fn deserialize_u64_lenient<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct U64Visitor;

    impl<'de> de::Visitor<'de> for U64Visitor {
        type Value = Option<u64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a u64 as number or string")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Option<u64>, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Option<u64>, E>
        where
            E: de::Error,
        {
            u64::try_from(value)
                .map(Some)
                .map_err(|_| E::custom("negative values not allowed"))
        }

        fn visit_str<E>(self, value: &str) -> Result<Option<u64>, E>
        where
            E: de::Error,
        {
            value.parse().map(Some).map_err(E::custom)
        }

        fn visit_unit<E>(self) -> Result<Option<u64>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(U64Visitor)
}

/// Deserialize an optional amount, keeping its raw decimal text
///
/// Amounts are decimal strings on the wire. Numbers are accepted as well;
/// anything that is not a non-negative integer is passed on as text that the
/// amount decoder rejects with `InvalidAmount`.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct AmountVisitor;

    impl<'de> de::Visitor<'de> for AmountVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("an amount as decimal string or number")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        // Integers beyond u64 arrive as floats; exponent form keeps them from
        // parsing as a rounded amount
        fn visit_f64<E>(self, value: f64) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(format!("{:e}", value)))
        }

        fn visit_str<E>(self, value: &str) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(AmountVisitor)
}

/// Transaction as returned by the transaction endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    #[serde(rename = "type", default)]
    pub tx_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_u64_lenient")]
    pub nonce: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_u64_lenient")]
    pub round: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_u64_lenient")]
    pub epoch: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub value: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default, deserialize_with = "deserialize_u64_lenient")]
    pub gas_price: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_u64_lenient")]
    pub gas_limit: Option<u64>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_u64_lenient")]
    pub hyperblock_nonce: Option<u64>,
    #[serde(default)]
    pub hyperblock_hash: Option<String>,
    #[serde(default)]
    pub receipt: Option<ReceiptResponse>,
    #[serde(default)]
    pub smart_contract_results: Option<Vec<SmartContractResultResponse>>,
}

/// Receipt fragment of a transaction response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub value: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
}

/// One element of the `smartContractResults` array
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartContractResultResponse {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default, deserialize_with = "deserialize_u64_lenient")]
    pub nonce: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub value: Option<String>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub prev_tx_hash: Option<String>,
    #[serde(default)]
    pub original_tx_hash: Option<String>,
    #[serde(default, deserialize_with = "deserialize_u64_lenient")]
    pub gas_limit: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_u64_lenient")]
    pub gas_price: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_u64_lenient")]
    pub call_type: Option<u64>,
}

/// `{"data": {"transaction": {...}}}` envelope used by the gateway
#[derive(Deserialize)]
struct Envelope {
    data: EnvelopeData,
}

#[derive(Deserialize)]
struct EnvelopeData {
    transaction: TransactionResponse,
}

impl TransactionResponse {
    /// Parse either a bare transaction object or the gateway envelope
    pub fn from_json(json: &str) -> Result<Self, WasmEgldError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, WasmEgldError> {
        let is_envelope = value
            .get("data")
            .and_then(|data| data.get("transaction"))
            .is_some();
        if is_envelope {
            let envelope: Envelope = serde_json::from_value(value)?;
            Ok(envelope.data.transaction)
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }
}
