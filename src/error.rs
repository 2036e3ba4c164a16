//! Error types for wasm-egld

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Main error type for wasm-egld operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WasmEgldError {
    /// A mandatory send-context field was never set
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// Invalid bech32 or hex address
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    /// Invalid transaction hash
    #[error("Invalid hash: {0}")]
    InvalidHash(String),
    /// Invalid signature
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),
    /// Invalid balance amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    /// Invalid transaction payload
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
    /// Malformed network response
    #[error("Decode error: {0}")]
    Decode(String),
    /// Result chain cannot be classified unambiguously
    #[error("Ambiguous result chain: {0}")]
    Ambiguity(String),
    /// Interaction rejected by the checker
    #[error("Interaction rejected: {0}")]
    Interaction(String),
}

impl WasmEgldError {
    /// True for every error raised while parsing a network response field
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            WasmEgldError::InvalidAddress(_)
                | WasmEgldError::InvalidHash(_)
                | WasmEgldError::InvalidSignature(_)
                | WasmEgldError::InvalidAmount(_)
                | WasmEgldError::InvalidPayload(_)
                | WasmEgldError::Decode(_)
        )
    }
}

impl From<serde_json::Error> for WasmEgldError {
    fn from(err: serde_json::Error) -> Self {
        WasmEgldError::Decode(err.to_string())
    }
}

// REQUIRED: Converts to JS Error with stack trace
impl From<WasmEgldError> for JsValue {
    fn from(err: WasmEgldError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
