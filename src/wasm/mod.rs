//! WASM bindings for wasm-egld
//!
//! This module contains thin wrappers with #[wasm_bindgen] that delegate
//! to the core Rust implementations.

pub mod context;
pub mod decoder;

// Re-export WASM types
pub use context::WasmSendContext;
pub use decoder::DecoderNamespace;
