//! Transport error classification.

use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while issuing a single probe request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// No complete response within the configured deadline.
    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// DNS, TCP or TLS level failure.
    #[error("Connection error: {0}")]
    Connect(String),

    /// The method is not one the caller is allowed to issue.
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// Anything else (malformed URL, body read failure, client setup).
    #[error("Error: {0}")]
    Other(String),
}

impl ProbeError {
    /// Map a reqwest error onto the closed set of probe failures.
    pub fn classify(error: reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            return ProbeError::Timeout { secs: timeout_secs };
        }

        let message = describe(&error);
        if error.is_connect() {
            ProbeError::Connect(message)
        } else {
            ProbeError::Other(message)
        }
    }
}

/// Render an error together with its source chain.
///
/// reqwest's top-level message ("error sending request for url ...") hides
/// the actual cause, e.g. "Connection refused".
fn describe(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
