//! Generic expected-status check.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::checks::{Check, CheckContext, Outcome};
use crate::probe::{excerpt, HttpMethod, ProbeError, ProbeRequest};

const EXCERPT_CHARS: usize = 200;

/// Why a status check failed.
#[derive(Debug, Error)]
pub enum FailureReason {
    /// Timeout, connection error, unsupported method or other transport error.
    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error("Expected {expected} but got {actual}")]
    UnexpectedStatus { expected: u16, actual: u16 },

    #[error("Error: response body is not valid JSON: {0}")]
    Body(#[from] serde_json::Error),
}

/// Issues one request under the base URL and compares its status.
#[derive(Debug, Clone)]
pub struct StatusCheck {
    method: String,
    path: String,
    expected: u16,
    description: String,
    body: Option<Value>,
    token: Option<String>,
}

impl StatusCheck {
    /// `method` is one of GET, POST or PUT; anything else fails without a request.
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        expected: u16,
        description: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            expected,
            description: description.into(),
            body: None,
            token: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn method(&self) -> Result<HttpMethod, ProbeError> {
        match self.method.parse::<HttpMethod>()? {
            method @ (HttpMethod::Get | HttpMethod::Post | HttpMethod::Put) => Ok(method),
            _ => Err(ProbeError::UnsupportedMethod(self.method.clone())),
        }
    }

    /// Perform the request. On success returns the parsed body, if any.
    pub async fn execute(&self, ctx: &CheckContext) -> Result<Option<Value>, FailureReason> {
        let method = self.method()?;
        let url = ctx.api_url(&self.path);

        let mut request = ProbeRequest::new(method, url.as_str());
        if let Some(token) = &self.token {
            request = request.with_bearer(token.as_str());
        }
        // GET carries no body.
        if let (Some(body), HttpMethod::Post | HttpMethod::Put) = (&self.body, method) {
            request = request.with_json(body.clone());
        }

        let response = ctx.probe.send(&request).await?;

        ctx.reporter.detail(format!("URL: {}", url));
        ctx.reporter.detail(format!(
            "Status: {} (expected: {})",
            response.status, self.expected
        ));

        if response.status != self.expected {
            ctx.reporter
                .detail(format!("Response: {}", excerpt(&response.body, EXCERPT_CHARS)));
            return Err(FailureReason::UnexpectedStatus {
                expected: self.expected,
                actual: response.status,
            });
        }

        let body = response.json()?;
        if let Some(value) = &body {
            let rendered = value.to_string();
            ctx.reporter
                .detail(format!("Response: {}...", excerpt(&rendered, EXCERPT_CHARS)));
        }
        Ok(body)
    }
}

#[async_trait]
impl Check for StatusCheck {
    fn description(&self) -> &str {
        &self.description
    }

    async fn run(&self, ctx: &CheckContext) -> Outcome {
        match self.execute(ctx).await {
            Ok(_) => Outcome::pass(self.description.as_str()),
            Err(reason) => Outcome::fail(format!("{} - {}", self.description, reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_get_post_put_are_allowed() {
        let check = |m: &str| StatusCheck::new(m, "/health", 200, "Health");
        assert_eq!(check("GET").method().unwrap(), HttpMethod::Get);
        assert_eq!(check("PUT").method().unwrap(), HttpMethod::Put);
        assert_eq!(
            check("HEAD").method().unwrap_err(),
            ProbeError::UnsupportedMethod("HEAD".into())
        );
        assert_eq!(
            check("DELETE").method().unwrap_err(),
            ProbeError::UnsupportedMethod("DELETE".into())
        );
    }

    #[test]
    fn failure_reasons_render_detail() {
        let reason = FailureReason::UnexpectedStatus {
            expected: 200,
            actual: 503,
        };
        assert_eq!(reason.to_string(), "Expected 200 but got 503");

        let reason = FailureReason::from(ProbeError::Timeout { secs: 10 });
        assert_eq!(reason.to_string(), "Request timed out after 10s");
    }
}
