//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut fail = |field: &'static str, message: String| {
        errors.push(ValidationError { field, message });
    };

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        fail(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        );
    }

    if config.dataset.path.trim().is_empty() {
        fail("dataset.path", "must not be empty".to_string());
    }

    if config.static_files.public_dir.trim().is_empty() {
        fail("static_files.public_dir", "must not be empty".to_string());
    }

    if let Some(base) = &config.share.public_base_url {
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            fail(
                "share.public_base_url",
                format!("'{}' must start with http:// or https://", base),
            );
        }
    }

    if config.timeouts.request_secs == 0 {
        fail("timeouts.request_secs", "must be greater than 0".to_string());
    }

    if config.security.max_body_size == 0 {
        fail("security.max_body_size", "must be greater than 0".to_string());
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        fail(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        );
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        fail(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        );
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
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "localhost".to_string();
        config.share.public_base_url = Some("rotas.example.com".to_string());
        config.timeouts.request_secs = 0;
        config.observability.log_level = "verbose".to_string();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "listener.bind_address",
                "share.public_base_url",
                "timeouts.request_secs",
                "observability.log_level",
            ]
        );
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_address = "nowhere".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
