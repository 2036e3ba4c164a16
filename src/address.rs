//! Bech32 account addresses
//!
//! An address is a 32-byte public key. On the wire it is bech32 encoded with
//! the `erd` human-readable part; some response fragments also carry the raw
//! public key as hex, or nothing at all.

use crate::error::WasmEgldError;
use bech32::{Bech32, Hrp};
use serde::{Serialize, Serializer};
use std::fmt;

/// Human-readable part used by mainnet, testnet and devnet
pub const DEFAULT_HRP: &str = "erd";

/// Public key length in bytes
pub const PUBKEY_LENGTH: usize = 32;

/// An account address; the empty address stands for "not present"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Address {
    pubkey: Option<[u8; PUBKEY_LENGTH]>,
}

impl Address {
    /// The empty address
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create an address from a 32-byte public key
    pub fn from_pubkey(pubkey: &[u8]) -> Result<Self, WasmEgldError> {
        let pubkey: [u8; PUBKEY_LENGTH] = pubkey.try_into().map_err(|_| {
            WasmEgldError::InvalidAddress(format!(
                "Public key must be {} bytes, got {}",
                PUBKEY_LENGTH,
                pubkey.len()
            ))
        })?;
        Ok(Self {
            pubkey: Some(pubkey),
        })
    }

    /// Strict bech32 decoding; the empty string is rejected
    pub fn from_bech32(value: &str) -> Result<Self, WasmEgldError> {
        let (hrp, pubkey) = decode_bech32(value)?;
        if hrp.as_str() != DEFAULT_HRP {
            return Err(WasmEgldError::InvalidAddress(format!(
                "Unexpected prefix '{}' in {}",
                hrp, value
            )));
        }
        Self::from_pubkey(&pubkey)
    }

    /// Create an address from a hex-encoded public key
    pub fn from_hex(value: &str) -> Result<Self, WasmEgldError> {
        let pubkey = hex::decode(value)
            .map_err(|e| WasmEgldError::InvalidAddress(format!("Invalid hex: {}", e)))?;
        Self::from_pubkey(&pubkey)
    }

    /// Accept an empty string, a hex public key, or a bech32 address
    pub fn from_str_lenient(value: &str) -> Result<Self, WasmEgldError> {
        if value.is_empty() {
            Ok(Self::empty())
        } else if value.len() == PUBKEY_LENGTH * 2 && value.bytes().all(|b| b.is_ascii_hexdigit())
        {
            Self::from_hex(value)
        } else {
            Self::from_bech32(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pubkey.is_none()
    }

    /// Raw public key, if any
    pub fn pubkey(&self) -> Option<&[u8; PUBKEY_LENGTH]> {
        self.pubkey.as_ref()
    }

    /// Hex-encoded public key (empty for the empty address)
    pub fn to_hex(&self) -> String {
        self.pubkey.map(hex::encode).unwrap_or_default()
    }

    /// Bech32 representation (empty for the empty address)
    pub fn to_bech32(&self) -> String {
        match &self.pubkey {
            Some(pubkey) => encode_bech32(pubkey),
            None => String::new(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bech32())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_bech32())
    }
}

/// Validate a bech32 address
pub fn validate_address(address: &str) -> bool {
    Address::from_bech32(address).is_ok()
}

fn decode_bech32(value: &str) -> Result<(Hrp, Vec<u8>), WasmEgldError> {
    bech32::decode(value)
        .map_err(|e| WasmEgldError::InvalidAddress(format!("Invalid bech32 '{}': {}", value, e)))
}

fn encode_bech32(pubkey: &[u8; PUBKEY_LENGTH]) -> String {
    let hrp = Hrp::parse_unchecked(DEFAULT_HRP);
    // A 32-byte payload with a three-letter prefix stays well under the length limit
    bech32::encode::<Bech32>(hrp, pubkey).unwrap_or_default()
}
