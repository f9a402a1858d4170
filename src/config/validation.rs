use crate::config::types::{BatchConfig, Config, FetcherConfig};
use crate::ConfigError;

/// Upper bound for `batch.max-concurrent-requests`
const MAX_CONCURRENT_REQUESTS_LIMIT: usize = 64;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_batch_config(&config.batch)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1 when set".to_string(),
        ));
    }

    if config.connect_timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "connect_timeout_secs must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates batch configuration
fn validate_batch_config(config: &BatchConfig) -> Result<(), ConfigError> {
    if config.max_concurrent_requests < 1
        || config.max_concurrent_requests > MAX_CONCURRENT_REQUESTS_LIMIT
    {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_requests must be between 1 and {}, got {}",
            MAX_CONCURRENT_REQUESTS_LIMIT, config.max_concurrent_requests
        )));
    }

    Ok(())
}
