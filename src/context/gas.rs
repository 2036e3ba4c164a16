//! Gas derivation from the staged call value

use crate::config::NetworkConfig;
use crate::types::Balance;

/// Derive a gas limit from a base amount and the value staged for the call
///
/// A non-zero value travels in the call payload as an `@<hex>` argument, so it
/// costs `1 + 2 * n` data bytes where `n` is its minimal big-endian length.
/// An absent or zero value adds nothing.
pub fn gas_from_value(base_gas: u64, value: Option<&Balance>, config: &NetworkConfig) -> u64 {
    let value_bytes = match value {
        Some(value) if !value.is_zero() => value.to_be_bytes_trimmed().len() as u64,
        _ => return base_gas,
    };
    let data_bytes = 1 + 2 * value_bytes;
    base_gas.saturating_add(config.gas_per_data_byte.saturating_mul(data_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_or_zero_value() {
        let config = NetworkConfig::default();
        assert_eq!(gas_from_value(60_000, None, &config), 60_000);
        assert_eq!(gas_from_value(60_000, Some(&Balance::zero()), &config), 60_000);
    }

    #[test]
    fn test_value_adds_data_cost() {
        let config = NetworkConfig::default();
        // 1000 = 0x03e8, two bytes -> "@03e8" is five data bytes
        assert_eq!(
            gas_from_value(60_000, Some(&Balance::new(1000)), &config),
            60_000 + 5 * 1_500
        );
    }

    #[test]
    fn test_saturates() {
        let config = NetworkConfig {
            gas_per_data_byte: u64::MAX,
            ..NetworkConfig::default()
        };
        assert_eq!(
            gas_from_value(1, Some(&Balance::new(u128::MAX)), &config),
            u64::MAX
        );
    }
}
