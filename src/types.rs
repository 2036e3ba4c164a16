//! Shared value types for EGLD transactions
//!
//! Every type has a zero/empty default so that a partially populated network
//! response still yields a well-formed object.

use crate::error::WasmEgldError;
use base64::prelude::*;
use serde::{Serialize, Serializer};
use std::fmt;

/// Amount in the smallest denomination (10^-18 EGLD)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Balance(u128);

impl Balance {
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Parse a decimal string, as the network reports amounts
    pub fn from_string(value: &str) -> Result<Self, WasmEgldError> {
        value
            .parse::<u128>()
            .map(Self)
            .map_err(|e| WasmEgldError::InvalidAmount(format!("'{}': {}", value, e)))
    }

    pub fn value(self) -> u128 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Minimal big-endian encoding, as used for call arguments (zero is empty)
    pub fn to_be_bytes_trimmed(self) -> Vec<u8> {
        let bytes = self.0.to_be_bytes();
        let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
        bytes[first..].to_vec()
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// String for BigInt compatibility
impl Serialize for Balance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Account or block nonce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Nonce(pub u64);

/// Price per gas unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GasPrice(pub u64);

/// Maximum gas units a transaction may consume
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GasLimit(pub u64);

impl GasLimit {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Hash length in bytes
pub const HASH_LENGTH: usize = 32;

/// 32-byte hash, hex encoded on the wire; empty when not reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hash(Option<[u8; HASH_LENGTH]>);

/// Transaction hashes share the representation of block hashes
pub type TransactionHash = Hash;

impl Hash {
    pub fn empty() -> Self {
        Self(None)
    }

    /// Parse a hex string; the empty string yields the empty hash
    pub fn from_hex(value: &str) -> Result<Self, WasmEgldError> {
        if value.is_empty() {
            return Ok(Self::empty());
        }
        let bytes = hex::decode(value)
            .map_err(|e| WasmEgldError::InvalidHash(format!("'{}': {}", value, e)))?;
        let bytes: [u8; HASH_LENGTH] = bytes.as_slice().try_into().map_err(|_| {
            WasmEgldError::InvalidHash(format!(
                "expected {} bytes, got {}",
                HASH_LENGTH,
                bytes.len()
            ))
        })?;
        Ok(Self(Some(bytes)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn to_hex(&self) -> String {
        self.0.map(hex::encode).unwrap_or_default()
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Signature length in bytes
pub const SIGNATURE_LENGTH: usize = 64;

/// Ed25519 signature, hex encoded on the wire; empty when not reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Signature(Option<[u8; SIGNATURE_LENGTH]>);

impl Signature {
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn from_hex(value: &str) -> Result<Self, WasmEgldError> {
        if value.is_empty() {
            return Ok(Self::empty());
        }
        let bytes = hex::decode(value)
            .map_err(|e| WasmEgldError::InvalidSignature(format!("'{}': {}", value, e)))?;
        let bytes: [u8; SIGNATURE_LENGTH] = bytes.as_slice().try_into().map_err(|_| {
            WasmEgldError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                SIGNATURE_LENGTH,
                bytes.len()
            ))
        })?;
        Ok(Self(Some(bytes)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn to_hex(&self) -> String {
        self.0.map(hex::encode).unwrap_or_default()
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Opaque transaction data field
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TransactionPayload(Vec<u8>);

impl TransactionPayload {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self(data.into())
    }

    /// Decode the base64 form used by the network API
    pub fn from_encoded(encoded: &str) -> Result<Self, WasmEgldError> {
        BASE64_STANDARD
            .decode(encoded)
            .map(Self)
            .map_err(|e| WasmEgldError::InvalidPayload(e.to_string()))
    }

    pub fn encoded(&self) -> String {
        BASE64_STANDARD.encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for TransactionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encoded())
    }
}

/// Processing status as reported by the network
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TransactionStatus(String);

impl Default for TransactionStatus {
    fn default() -> Self {
        Self::unknown()
    }
}

impl TransactionStatus {
    pub fn new(status: &str) -> Self {
        if status.is_empty() {
            Self::unknown()
        } else {
            Self(status.to_lowercase())
        }
    }

    pub fn unknown() -> Self {
        Self("unknown".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_pending(&self) -> bool {
        matches!(
            self.0.as_str(),
            "received" | "pending" | "partially-executed"
        )
    }

    pub fn is_executed(&self) -> bool {
        self.is_successful() || self.is_failed() || self.is_invalid()
    }

    pub fn is_successful(&self) -> bool {
        matches!(self.0.as_str(), "executed" | "success" | "successful")
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.0.as_str(), "fail" | "failed" | "unsuccessful") || self.is_invalid()
    }

    pub fn is_invalid(&self) -> bool {
        self.0 == "invalid"
    }
}

/// Transaction kind as reported by the network (not interpreted yet)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TransactionOnNetworkType(String);

impl Default for TransactionOnNetworkType {
    fn default() -> Self {
        Self("unknown".to_string())
    }
}

impl TransactionOnNetworkType {
    pub fn new(value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => Self(value.to_string()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// How a smart-contract result was dispatched by the VM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallType {
    DirectCall,
    AsynchronousCall,
    AsynchronousCallBack,
    ESDTTransferAndExecute,
    /// Discriminator outside the known range
    Unknown(u32),
}

impl From<u32> for CallType {
    fn from(value: u32) -> Self {
        match value {
            0 => CallType::DirectCall,
            1 => CallType::AsynchronousCall,
            2 => CallType::AsynchronousCallBack,
            3 => CallType::ESDTTransferAndExecute,
            other => CallType::Unknown(other),
        }
    }
}

impl CallType {
    pub fn value(self) -> u32 {
        match self {
            CallType::DirectCall => 0,
            CallType::AsynchronousCall => 1,
            CallType::AsynchronousCallBack => 2,
            CallType::ESDTTransferAndExecute => 3,
            CallType::Unknown(other) => other,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, CallType::Unknown(_))
    }
}

impl Serialize for CallType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.value())
    }
}
