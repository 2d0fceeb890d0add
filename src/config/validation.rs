//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every target URL is an absolute http(s) URL
//! - Validate value ranges (timeouts > 0, thresholds > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SmokeConfig → Result<(), Vec<ValidationError>>
//! - Runs before any check issues a request

use thiserror::Error;
use url::Url;

use crate::config::schema::SmokeConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is not a valid URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{field} must use http or https, got {scheme}")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &SmokeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_url("target.base_url", &config.target.base_url, &mut errors);
    check_url("target.storage_url", &config.target.storage_url, &mut errors);
    if let Some(socket_url) = &config.target.socket_url {
        check_url("target.socket_url", socket_url, &mut errors);
    }

    if config.target.timeout_secs == 0 {
        errors.push(ValidationError::Zero { field: "target.timeout_secs" });
    }
    if config.thresholds.max_latency_ms == 0 {
        errors.push(ValidationError::Zero { field: "thresholds.max_latency_ms" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::UnsupportedScheme {
            field,
            scheme: url.scheme().to_string(),
        }),
        Err(_) => errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}
