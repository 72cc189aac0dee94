use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Order id is not empty
/// - Autoadvance interval is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.order.id.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "order.id cannot be empty".to_string(),
        ));
    }

    if config.autoadvance.advance_interval_ms == 0 {
        return Err(ConfigError::ValidationError(
            "autoadvance.advance_interval_ms cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_order_id_fails() {
        let mut config = Config::default();
        config.order.id = "  ".to_string();

        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_zero_interval_fails() {
        let mut config = Config::default();
        config.autoadvance.advance_interval_ms = 0;

        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
