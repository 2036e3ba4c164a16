//! Smart-contract results: the chain of transactions generated by a contract call
//!
//! Items reference each other through `previous_hash` (the item or transaction
//! that produced them) and `original_hash` (the root transaction). These are
//! lookup keys only; resolving an ancestor that is not part of this response
//! means querying the network again.

use crate::address::Address;
use crate::error::WasmEgldError;
use crate::network::response::SmartContractResultResponse;
use crate::types::{Balance, CallType, GasLimit, GasPrice, Hash, Nonce};
use serde::Serialize;

/// One result item in the chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartContractResultItem {
    pub hash: Hash,
    pub nonce: Nonce,
    pub value: Balance,
    pub receiver: Address,
    pub sender: Address,
    /// Arguments of the `data` field. Not split yet: always empty.
    pub data_parts: Vec<Vec<u8>>,
    pub previous_hash: Hash,
    pub original_hash: Hash,
    pub gas_limit: GasLimit,
    pub gas_price: GasPrice,
    /// `None` when the network did not report a call type
    pub call_type: Option<CallType>,
}

/// Role of an item within the result chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultClass {
    /// Output returned directly to the root transaction
    Immediate,
    /// Call dispatched further down the chain
    ResultingCall,
    /// Not enough information to tell
    Unclassified,
}

impl SmartContractResultItem {
    pub fn from_response(response: &SmartContractResultResponse) -> Result<Self, WasmEgldError> {
        let value = match response.value.as_deref() {
            Some(value) => Balance::from_string(value)?,
            None => Balance::zero(),
        };
        let call_type = response
            .call_type
            .map(|call_type| {
                u32::try_from(call_type).map(CallType::from).map_err(|_| {
                    WasmEgldError::Decode(format!("callType {} out of range", call_type))
                })
            })
            .transpose()?;

        Ok(SmartContractResultItem {
            hash: decode_hash(response.hash.as_deref())?,
            nonce: Nonce(response.nonce.unwrap_or(0)),
            value,
            receiver: decode_address(response.receiver.as_deref())?,
            sender: decode_address(response.sender.as_deref())?,
            data_parts: Vec::new(),
            previous_hash: decode_hash(response.prev_tx_hash.as_deref())?,
            original_hash: decode_hash(response.original_tx_hash.as_deref())?,
            gas_limit: GasLimit(response.gas_limit.unwrap_or(0)),
            gas_price: GasPrice(response.gas_price.unwrap_or(0)),
            call_type,
        })
    }

    /// Classify this item within its chain
    ///
    /// Provisional rule, pending confirmation against observed network output:
    /// every item produced directly by the root transaction (`previous_hash ==
    /// original_hash`) is an immediate-result candidate, whatever its call
    /// type; any other item is a resulting call. Absent or unknown call types
    /// and missing chain hashes are left unclassified.
    pub fn classify(&self) -> ResultClass {
        let known_call_type = self.call_type.is_some_and(|call_type| !call_type.is_unknown());
        if !known_call_type || self.previous_hash.is_empty() || self.original_hash.is_empty() {
            return ResultClass::Unclassified;
        }
        if self.previous_hash == self.original_hash {
            ResultClass::Immediate
        } else {
            ResultClass::ResultingCall
        }
    }

    fn call_type_label(&self) -> String {
        match self.call_type {
            Some(call_type) => call_type.value().to_string(),
            None => "absent".to_string(),
        }
    }
}

/// Outcome of looking up the immediate result of a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImmediateResult<'a> {
    None,
    Unique(&'a SmartContractResultItem),
    /// More than one candidate, or items that could not be classified
    Ambiguous(Vec<&'a SmartContractResultItem>),
}

/// Ordered result chain, in the order reported by the network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SmartContractResults {
    items: Vec<SmartContractResultItem>,
}

impl SmartContractResults {
    pub fn new(items: Vec<SmartContractResultItem>) -> Self {
        Self { items }
    }

    /// Decode the `smartContractResults` array; absent means empty
    pub fn from_response(
        response: Option<&[SmartContractResultResponse]>,
    ) -> Result<Self, WasmEgldError> {
        let items = response
            .unwrap_or_default()
            .iter()
            .map(SmartContractResultItem::from_response)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { items })
    }

    pub fn items(&self) -> &[SmartContractResultItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the immediate result without failing on ambiguity
    pub fn lookup_immediate_result(&self) -> ImmediateResult<'_> {
        let unclassified: Vec<_> = self
            .items
            .iter()
            .filter(|item| item.classify() == ResultClass::Unclassified)
            .collect();
        if !unclassified.is_empty() {
            return ImmediateResult::Ambiguous(unclassified);
        }

        let mut candidates: Vec<_> = self
            .items
            .iter()
            .filter(|item| item.classify() == ResultClass::Immediate)
            .collect();
        match candidates.len() {
            0 => ImmediateResult::None,
            1 => ImmediateResult::Unique(candidates.remove(0)),
            _ => ImmediateResult::Ambiguous(candidates),
        }
    }

    /// The single immediate result, if any; fails rather than pick among candidates
    pub fn immediate_result(&self) -> Result<Option<&SmartContractResultItem>, WasmEgldError> {
        match self.lookup_immediate_result() {
            ImmediateResult::None => Ok(None),
            ImmediateResult::Unique(item) => Ok(Some(item)),
            ImmediateResult::Ambiguous(items) => Err(WasmEgldError::Ambiguity(format!(
                "{} items qualify as the immediate result: {}",
                items.len(),
                join_hashes(&items)
            ))),
        }
    }

    /// Calls dispatched by the contract, in response order
    pub fn resulting_calls(&self) -> Result<Vec<&SmartContractResultItem>, WasmEgldError> {
        let mut calls = Vec::new();
        for item in &self.items {
            match item.classify() {
                ResultClass::ResultingCall => calls.push(item),
                ResultClass::Immediate => {}
                ResultClass::Unclassified => {
                    return Err(WasmEgldError::Ambiguity(format!(
                        "cannot classify result {} (callType {})",
                        item.hash,
                        item.call_type_label()
                    )))
                }
            }
        }
        Ok(calls)
    }
}

fn decode_hash(value: Option<&str>) -> Result<Hash, WasmEgldError> {
    Hash::from_hex(value.unwrap_or_default())
}

fn decode_address(value: Option<&str>) -> Result<Address, WasmEgldError> {
    Address::from_str_lenient(value.unwrap_or_default())
}

fn join_hashes(items: &[&SmartContractResultItem]) -> String {
    items
        .iter()
        .map(|item| item.hash.to_hex())
        .collect::<Vec<_>>()
        .join(", ")
}
