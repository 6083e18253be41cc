//! Configuration validation.
//!
//! Serde handles the syntax; this module checks value ranges and returns every
//! problem found rather than stopping at the first one.

use thiserror::Error;
use url::Url;

use crate::config::schema::ConsoleConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("api.base_url '{0}' is not a valid http(s) URL")]
    InvalidBaseUrl(String),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("poll.max_delay_ms ({max}) is smaller than poll.initial_delay_ms ({initial})")]
    DelayCapBelowInitial { initial: u64, max: u64 },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ConsoleConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.api.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base() => {}
        _ => errors.push(ValidationError::InvalidBaseUrl(config.api.base_url.clone())),
    }

    if config.api.request_timeout_secs == 0 {
        errors.push(ValidationError::NotPositive("api.request_timeout_secs"));
    }
    if config.load.initial_delay_ms == 0 {
        errors.push(ValidationError::NotPositive("load.initial_delay_ms"));
    }
    if config.load.max_attempts == 0 {
        errors.push(ValidationError::NotPositive("load.max_attempts"));
    }
    if config.poll.initial_delay_ms == 0 {
        errors.push(ValidationError::NotPositive("poll.initial_delay_ms"));
    }
    if config.poll.max_checks == Some(0) {
        errors.push(ValidationError::NotPositive("poll.max_checks"));
    }
    if let Some(max) = config.poll.max_delay_ms {
        if max < config.poll.initial_delay_ms {
            errors.push(ValidationError::DelayCapBelowInitial {
                initial: config.poll.initial_delay_ms,
                max,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&ConsoleConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = ConsoleConfig::default();
        config.api.base_url = "ftp://example.com".into();
        config.load.max_attempts = 0;
        config.poll.max_checks = Some(0);
        config.poll.max_delay_ms = Some(100);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::InvalidBaseUrl("ftp://example.com".into())));
        assert!(errors.contains(&ValidationError::NotPositive("load.max_attempts")));
        assert!(errors.contains(&ValidationError::NotPositive("poll.max_checks")));
        assert!(errors.contains(&ValidationError::DelayCapBelowInitial { initial: 2000, max: 100 }));
    }

    #[test]
    fn test_rejects_non_url() {
        let mut config = ConsoleConfig::default();
        config.api.base_url = "localhost".into();
        assert!(validate_config(&config).is_err());
    }
}
