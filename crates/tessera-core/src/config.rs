//! Group parameter search configuration.

use serde::{Deserialize, Serialize};

use crate::error::ExchangeError;

/// Default lower bound for the companion prime search
pub const DEFAULT_LOWER: u64 = 2000;

/// Default upper bound for the companion prime search
pub const DEFAULT_UPPER: u64 = 4000;

/// Largest companion prime accepted.
///
/// Keeps `p = 2q + 1` within 32 bits so `m = p * q` fits in a `u64`.
pub const MAX_COMPANION_PRIME: u64 = (1 << 31) - 1;

/// Largest prime the exhaustive generator search will walk.
///
/// The walk allocates one bitmap entry per residue.
pub const MAX_EXHAUSTIVE_PRIME: u64 = 1 << 24;

/// How the generator of the multiplicative group is found.
///
/// Both strategies return the largest generator, so switching between them
/// never changes the selected parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorStrategy {
    /// Enumerate every power of each candidate; quadratic in `p`
    #[default]
    Exhaustive,
    /// Test candidate orders against the prime factors of `p - 1`
    FactoredOrder,
}

/// Configuration for [`crate::ParameterGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Smallest companion prime `q` considered
    pub lower: u64,
    /// Largest companion prime `q` considered; the search starts here
    pub upper: u64,
    /// Generator search strategy
    pub strategy: GeneratorStrategy,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self { lower: DEFAULT_LOWER, upper: DEFAULT_UPPER, strategy: GeneratorStrategy::default() }
    }
}

impl GroupConfig {
    /// Check that the range is searchable.
    ///
    /// # Errors
    ///
    /// - `InvalidRange`: if `lower > upper`, `upper < 2`, `upper` exceeds
    ///   [`MAX_COMPANION_PRIME`], or the exhaustive strategy could select a
    ///   prime above [`MAX_EXHAUSTIVE_PRIME`]
    pub fn validate(&self) -> Result<(), ExchangeError> {
        let reject = |reason| ExchangeError::InvalidRange {
            lower: self.lower,
            upper: self.upper,
            reason,
        };

        if self.lower > self.upper {
            return Err(reject("lower bound exceeds upper bound"));
        }
        if self.upper < 2 {
            return Err(reject("range contains no primes"));
        }
        if self.upper > MAX_COMPANION_PRIME {
            return Err(reject("upper bound exceeds the largest supported companion prime"));
        }
        let exhaustive = self.strategy == GeneratorStrategy::Exhaustive;
        if exhaustive && 2 * self.upper + 1 > MAX_EXHAUSTIVE_PRIME {
            return Err(reject("range too large for exhaustive generator search"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_two_to_four_thousand() {
        let config = GroupConfig::default();
        assert_eq!(config.lower, 2000);
        assert_eq!(config.upper, 4000);
        assert_eq!(config.strategy, GeneratorStrategy::Exhaustive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_range() {
        let config = GroupConfig { lower: 10, upper: 5, ..GroupConfig::default() };
        assert!(matches!(config.validate(), Err(ExchangeError::InvalidRange { .. })));
    }

    #[test]
    fn rejects_range_without_primes() {
        let config = GroupConfig { lower: 0, upper: 1, ..GroupConfig::default() };
        assert!(matches!(config.validate(), Err(ExchangeError::InvalidRange { .. })));
    }

    #[test]
    fn rejects_oversized_range() {
        let config =
            GroupConfig { lower: 2, upper: MAX_COMPANION_PRIME + 1, ..GroupConfig::default() };
        assert!(matches!(config.validate(), Err(ExchangeError::InvalidRange { .. })));
    }

    #[test]
    fn exhaustive_strategy_is_capped() {
        let largest = (MAX_EXHAUSTIVE_PRIME - 1) / 2;
        let config = GroupConfig { lower: 2, upper: largest, ..GroupConfig::default() };
        assert!(config.validate().is_ok());

        let config = GroupConfig { lower: 2, upper: largest + 1, ..GroupConfig::default() };
        assert!(matches!(config.validate(), Err(ExchangeError::InvalidRange { .. })));

        let config = GroupConfig {
            lower: 2,
            upper: MAX_COMPANION_PRIME,
            strategy: GeneratorStrategy::FactoredOrder,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: GroupConfig = serde_json::from_str(r#"{"upper": 30}"#).unwrap();
        assert_eq!(config, GroupConfig { lower: 2000, upper: 30, ..GroupConfig::default() });
    }

    #[test]
    fn strategy_uses_snake_case() {
        let config: GroupConfig =
            serde_json::from_str(r#"{"lower": 10, "upper": 30, "strategy": "factored_order"}"#)
                .unwrap();
        assert_eq!(config.strategy, GeneratorStrategy::FactoredOrder);
        assert_eq!(serde_json::to_string(&config.strategy).unwrap(), r#""factored_order""#);
    }
}
