//! wasm-egld: WASM module for EGLD (MultiversX) client-side transaction operations
//!
//! This crate provides:
//! - A per-interaction send context (sender, gas, value, provider, logger)
//!   with gas derivation from the staged value
//! - Decoding of network transaction responses, including receipts and
//!   smart-contract result chains
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//! - **Core layer** (`src/*.rs`, `context/`, `network/`): Pure Rust logic, no WASM dependencies
//! - **WASM layer** (`src/wasm/*.rs`): Thin wrappers with `#[wasm_bindgen]`

pub mod address;
pub mod config;
pub mod context;
pub mod error;
pub mod network;
pub mod types;
pub mod wasm;

// Re-export main types for convenience
pub use address::{validate_address, Address};
pub use config::NetworkConfig;
pub use context::checker::{InteractionChecker, StrictChecker};
pub use context::logger::{ContractLogger, LogContractLogger};
pub use context::SendContext;
pub use error::WasmEgldError;
pub use network::{
    decode_transaction, ImmediateResult, Receipt, SmartContractResultItem, SmartContractResults,
    TransactionOnNetwork,
};
pub use types::{Balance, CallType, GasLimit, GasPrice, Hash, Nonce, TransactionHash};
