//! Per-interaction send context
//!
//! Accumulates the parameters needed to prepare a transaction (sender, gas,
//! value, provider, logger). Setters chain; getters come in a "required" form
//! that fails when the field was never set and an optional form that does not.

pub mod checker;
pub mod gas;
pub mod logger;

use crate::config::NetworkConfig;
use crate::error::WasmEgldError;
use crate::types::{Balance, GasLimit};
use checker::{InteractionChecker, StrictChecker};
use logger::ContractLogger;
use std::sync::Arc;

/// Stores contextual information needed when preparing a transaction
///
/// `P` is the network-access handle and `S` the signing identity; neither is
/// inspected here. A context belongs to one preparation flow at a time: the
/// staged value is handed out once by [`SendContext::take_value`].
pub struct SendContext<P, S> {
    provider: P,
    sender: Option<S>,
    gas: Option<GasLimit>,
    logger: Option<Arc<dyn ContractLogger>>,
    value: Option<Balance>,
    config: NetworkConfig,
    checker: Box<dyn InteractionChecker>,
}

impl<P, S> SendContext<P, S> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, NetworkConfig::default())
    }

    pub fn with_config(provider: P, config: NetworkConfig) -> Self {
        Self::with_checker(provider, config, Box::new(StrictChecker))
    }

    /// Create a context with a custom checker; the checker cannot be replaced later
    pub fn with_checker(
        provider: P,
        config: NetworkConfig,
        checker: Box<dyn InteractionChecker>,
    ) -> Self {
        Self {
            provider,
            sender: None,
            gas: None,
            logger: None,
            value: None,
            config,
            checker,
        }
    }

    pub fn set_provider(&mut self, provider: P) -> &mut Self {
        self.provider = provider;
        self
    }

    pub fn set_sender(&mut self, sender: S) -> &mut Self {
        self.sender = Some(sender);
        self
    }

    pub fn set_gas(&mut self, gas: u64) -> &mut Self {
        self.gas = Some(GasLimit(gas));
        self
    }

    /// Derive the gas limit from `base_gas` and the value staged right now
    ///
    /// Call after [`SendContext::set_value`] for value-aware derivation; a value
    /// staged later does not change the limit computed here.
    pub fn set_auto_gas(&mut self, base_gas: u64) -> &mut Self {
        let gas = gas::gas_from_value(base_gas, self.value.as_ref(), &self.config);
        log::debug!("auto gas: base={} derived={}", base_gas, gas);
        self.set_gas(gas)
    }

    /// Attach or detach (`None`) the interaction logger
    pub fn set_logger(&mut self, logger: Option<Arc<dyn ContractLogger>>) -> &mut Self {
        self.logger = logger;
        self
    }

    pub fn set_value(&mut self, value: Balance) -> &mut Self {
        self.value = Some(value);
        self
    }

    /// Hand out the staged value and clear it
    pub fn take_value(&mut self) -> Option<Balance> {
        let value = self.value.take();
        if let Some(value) = &value {
            log::trace!("consumed staged value {}", value);
        }
        value
    }

    /// The sender; fails when none was set
    pub fn sender(&self) -> Result<&S, WasmEgldError> {
        self.sender
            .as_ref()
            .ok_or_else(|| WasmEgldError::Configuration("sender not set".to_string()))
    }

    pub fn sender_opt(&self) -> Option<&S> {
        self.sender.as_ref()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The gas limit; fails when none was set or derived
    pub fn gas_limit(&self) -> Result<GasLimit, WasmEgldError> {
        self.gas
            .ok_or_else(|| WasmEgldError::Configuration("gas limit not set".to_string()))
    }

    pub fn logger(&self) -> Option<&Arc<dyn ContractLogger>> {
        self.logger.as_ref()
    }

    pub fn checker(&self) -> &dyn InteractionChecker {
        self.checker.as_ref()
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionHash;
    use std::sync::Mutex;

    #[derive(Debug, PartialEq)]
    struct TestProvider(&'static str);

    #[derive(Debug, PartialEq)]
    struct TestWallet(&'static str);

    type Context = SendContext<TestProvider, TestWallet>;

    #[test]
    fn test_sender_required() {
        let mut ctx = Context::new(TestProvider("local"));
        assert_eq!(
            ctx.sender().unwrap_err(),
            WasmEgldError::Configuration("sender not set".to_string())
        );
        assert!(ctx.sender_opt().is_none());

        ctx.set_sender(TestWallet("alice"));
        assert_eq!(ctx.sender().unwrap(), &TestWallet("alice"));
        assert_eq!(ctx.sender_opt(), Some(&TestWallet("alice")));
    }

    #[test]
    fn test_gas_limit_required() {
        let mut ctx = Context::new(TestProvider("local"));
        assert_eq!(
            ctx.gas_limit().unwrap_err(),
            WasmEgldError::Configuration("gas limit not set".to_string())
        );

        ctx.set_gas(75_000);
        assert_eq!(ctx.gas_limit().unwrap(), GasLimit(75_000));
    }

    #[test]
    fn test_take_value_resets() {
        let mut ctx = Context::new(TestProvider("local"));
        assert_eq!(ctx.take_value(), None);

        ctx.set_value(Balance::new(42));
        assert_eq!(ctx.take_value(), Some(Balance::new(42)));
        assert_eq!(ctx.take_value(), None);
    }

    #[test]
    fn test_chained_setters() {
        let mut ctx = Context::new(TestProvider("local"));
        ctx.set_sender(TestWallet("alice"))
            .set_value(Balance::new(7))
            .set_gas(60_000)
            .set_provider(TestProvider("devnet"));

        assert_eq!(ctx.provider(), &TestProvider("devnet"));
        assert_eq!(ctx.gas_limit().unwrap(), GasLimit(60_000));
        assert_eq!(ctx.take_value(), Some(Balance::new(7)));
    }

    #[test]
    fn test_auto_gas_uses_staged_value() {
        let mut ctx = Context::new(TestProvider("local"));
        ctx.set_value(Balance::new(1000)).set_auto_gas(60_000);

        let expected = gas::gas_from_value(60_000, Some(&Balance::new(1000)), ctx.config());
        assert_eq!(ctx.gas_limit().unwrap(), GasLimit(expected));

        // Staging a different value afterwards must not touch the derived limit
        ctx.set_value(Balance::new(u128::MAX));
        assert_eq!(ctx.gas_limit().unwrap(), GasLimit(expected));
    }

    #[test]
    fn test_auto_gas_without_value() {
        let mut ctx = Context::new(TestProvider("local"));
        ctx.set_auto_gas(60_000);
        assert_eq!(ctx.gas_limit().unwrap(), GasLimit(60_000));
    }

    #[test]
    fn test_logger_opt_out() {
        #[derive(Default)]
        struct Recorder(Mutex<Vec<String>>);

        impl ContractLogger for Recorder {
            fn transaction_sent(&self, hash: &TransactionHash) {
                self.0.lock().unwrap().push(hash.to_hex());
            }
        }

        let recorder = Arc::new(Recorder::default());
        let mut ctx = Context::new(TestProvider("local"));
        assert!(ctx.logger().is_none());

        ctx.set_logger(Some(recorder.clone()));
        let hash = TransactionHash::from_hex(&"11".repeat(32)).unwrap();
        ctx.logger().unwrap().transaction_sent(&hash);
        assert_eq!(recorder.0.lock().unwrap().as_slice(), [hash.to_hex()]);

        ctx.set_logger(None);
        assert!(ctx.logger().is_none());
    }

    #[test]
    fn test_checker_is_strict_by_default() {
        let ctx = Context::new(TestProvider("local"));
        assert!(ctx
            .checker()
            .check_gas_limit(GasLimit(1), ctx.config())
            .is_err());
    }
}
