//! Pool configuration parameters.

use crate::error::ConfigError;

/// Configuration for a [`RangePool`](crate::RangePool).
///
/// Validated at construction by
/// [`RangePool::with_config`](crate::RangePool::with_config).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PoolConfig {
    /// Highest allocatable identifier. The pool manages `[1, upper_bound]`.
    ///
    /// Default: 254 (the host numbers of an IPv4 /24).
    /// Must be at least 1.
    pub upper_bound: u32,
}

impl PoolConfig {
    /// Default upper bound: every usable host of a /24.
    pub const DEFAULT_UPPER_BOUND: u32 = 254;

    /// Create a config managing `[1, upper_bound]`.
    pub fn new(upper_bound: u32) -> Self {
        Self { upper_bound }
    }

    /// Check that the configured range is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upper_bound == 0 {
            return Err(ConfigError::ZeroUpperBound);
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_UPPER_BOUND)
    }
}
