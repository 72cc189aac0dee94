//! Autoadvance feed configuration.

use serde::{Deserialize, Serialize};

use crate::order::OrderStatus;

/// Configuration for the demo autoadvance feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoAdvanceConfig {
    /// How long to wait between status steps (milliseconds).
    #[serde(default = "default_advance_interval")]
    pub advance_interval_ms: u64,

    /// Status the feed starts from.
    #[serde(default = "default_start")]
    pub start: OrderStatus,
}

fn default_advance_interval() -> u64 {
    8000 // 8 seconds
}

fn default_start() -> OrderStatus {
    OrderStatus::Confirmed
}

impl Default for AutoAdvanceConfig {
    fn default() -> Self {
        Self {
            advance_interval_ms: default_advance_interval(),
            start: default_start(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AutoAdvanceConfig::default();
        assert_eq!(config.advance_interval_ms, 8000);
        assert_eq!(config.start, OrderStatus::Confirmed);
    }

    #[test]
    fn test_deserialize_minimal() {
        let toml = r#"
            advance_interval_ms = 250
        "#;
        let config: AutoAdvanceConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.advance_interval_ms, 250);
        assert_eq!(config.start, OrderStatus::Confirmed);
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
            advance_interval_ms = 1000
            start = "preparing"
        "#;
        let config: AutoAdvanceConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.advance_interval_ms, 1000);
        assert_eq!(config.start, OrderStatus::Preparing);
    }
}
