//! WASM bindings for SendContext
//!
//! Provider and sender are opaque JS handles; they are stored and handed back
//! but never inspected.
//!
//! Setters mutate the context in place and return nothing, so JS callers do
//! not chain them: `ctx.setSender(s); ctx.setGas(600000);`. Returning the
//! context by value would invalidate the caller's handle.

use crate::config::NetworkConfig;
use crate::context::logger::{ContractLogger, LogContractLogger};
use crate::context::SendContext;
use crate::types::Balance;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

/// WASM-exposed send context
#[wasm_bindgen]
pub struct WasmSendContext {
    inner: SendContext<JsValue, JsValue>,
}

#[wasm_bindgen]
impl WasmSendContext {
    /// Create a context
    ///
    /// # Arguments
    /// * `provider` - Network provider handle
    /// * `config` - Optional network config (`{ minGasLimit, gasPerDataByte }`)
    #[wasm_bindgen(constructor)]
    pub fn new(provider: JsValue, config: JsValue) -> Result<WasmSendContext, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            NetworkConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };
        Ok(WasmSendContext {
            inner: SendContext::with_config(provider, config),
        })
    }

    #[wasm_bindgen(js_name = setProvider)]
    pub fn set_provider(&mut self, provider: JsValue) {
        self.inner.set_provider(provider);
    }

    #[wasm_bindgen(js_name = setSender)]
    pub fn set_sender(&mut self, sender: JsValue) {
        self.inner.set_sender(sender);
    }

    #[wasm_bindgen(js_name = setGas)]
    pub fn set_gas(&mut self, gas: u64) {
        self.inner.set_gas(gas);
    }

    /// Derive the gas limit from `baseGas` and the currently staged value
    #[wasm_bindgen(js_name = setAutoGas)]
    pub fn set_auto_gas(&mut self, base_gas: u64) {
        self.inner.set_auto_gas(base_gas);
    }

    /// Stage a value (decimal string, smallest denomination)
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&mut self, value: &str) -> Result<(), JsValue> {
        self.inner.set_value(Balance::from_string(value)?);
        Ok(())
    }

    /// Log interaction events through the `log` facade, or stop doing so
    #[wasm_bindgen(js_name = setLogging)]
    pub fn set_logging(&mut self, enabled: bool) {
        let logger = enabled.then(|| Arc::new(LogContractLogger) as Arc<dyn ContractLogger>);
        self.inner.set_logger(logger);
    }

    /// Return the staged value and clear it
    #[wasm_bindgen(js_name = takeValue)]
    pub fn take_value(&mut self) -> Option<String> {
        self.inner.take_value().map(|value| value.to_string())
    }

    /// Get the sender; throws when none was set
    #[wasm_bindgen]
    pub fn sender(&self) -> Result<JsValue, JsValue> {
        Ok(self.inner.sender()?.clone())
    }

    #[wasm_bindgen(js_name = senderOptional)]
    pub fn sender_optional(&self) -> Option<JsValue> {
        self.inner.sender_opt().cloned()
    }

    #[wasm_bindgen(getter)]
    pub fn provider(&self) -> JsValue {
        self.inner.provider().clone()
    }

    /// Get the gas limit; throws when none was set
    #[wasm_bindgen(js_name = gasLimit)]
    pub fn gas_limit(&self) -> Result<u64, JsValue> {
        Ok(self.inner.gas_limit()?.value())
    }

    #[wasm_bindgen(getter, js_name = hasLogger)]
    pub fn has_logger(&self) -> bool {
        self.inner.logger().is_some()
    }
}
