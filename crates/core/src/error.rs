//! Error types for fanout configuration loading and traversal verification.
//!
//! The traversal operations themselves cannot fail; everything here comes from
//! reading bench configuration or from a verification pass catching a strategy
//! that broke the delivery contract.

use std::path::PathBuf;

use thiserror::Error;

use crate::comparator::Strategy;

/// Core error type for fanout operations.
#[derive(Debug, Error)]
pub enum Error {
    // Configuration errors
    #[error("failed to read config file '{path}': {reason}")]
    ConfigReadFailed { path: PathBuf, reason: String },

    #[error("TOML parse error: {reason}")]
    ConfigParseFailed { reason: String },

    #[error("invalid bench config: {reason}")]
    InvalidConfig { reason: String },

    // Verification errors
    #[error("{strategy} delivered {deliveries} callbacks for {subscriber_count} subscribers")]
    DeliveryMismatch {
        strategy: Strategy,
        subscriber_count: usize,
        deliveries: usize,
    },

    #[error("{strategy} invoked the sender {invocations} time(s)")]
    SentinelInvoked { strategy: Strategy, invocations: u64 },

    #[error("{strategy} left subscriber {index} at {actual} invocations, expected {expected}")]
    CounterDrift {
        strategy: Strategy,
        index: usize,
        expected: u64,
        actual: u64,
    },
}

impl Error {
    /// Create a config read error.
    pub fn config_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse_failed(reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a delivery mismatch error.
    #[must_use]
    pub const fn delivery_mismatch(
        strategy: Strategy,
        subscriber_count: usize,
        deliveries: usize,
    ) -> Self {
        Self::DeliveryMismatch {
            strategy,
            subscriber_count,
            deliveries,
        }
    }
}
