//! Response header policies.

use async_trait::async_trait;

use crate::checks::{Check, CheckContext, Outcome};
use crate::probe::{ProbeRequest, ProbeResponse};
use crate::runner::Reporter;

/// Required transport-security headers.
pub const SECURITY_HEADERS: [&str; 2] = ["Strict-Transport-Security", "X-Content-Type-Options"];

/// Header name prefix of the IETF RateLimit fields.
pub const RATE_LIMIT_PREFIX: &str = "RateLimit";

/// Passes only when every security header is present.
#[derive(Debug, Clone)]
pub struct SecurityHeadersCheck {
    path: String,
}

impl SecurityHeadersCheck {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Missing headers are printed individually; the failure message stays generic.
pub fn judge_security_headers(response: &ProbeResponse, reporter: &Reporter) -> Outcome {
    let missing: Vec<&str> = SECURITY_HEADERS
        .iter()
        .copied()
        .filter(|name| !response.has_header(name))
        .collect();

    for name in &missing {
        reporter.detail(format!("Missing: {}", name));
    }

    if missing.is_empty() {
        Outcome::pass("Security headers present")
    } else {
        Outcome::fail("Some security headers missing")
    }
}

#[async_trait]
impl Check for SecurityHeadersCheck {
    fn description(&self) -> &str {
        "Security Headers Present"
    }

    async fn run(&self, ctx: &CheckContext) -> Outcome {
        match ctx.probe.send(&ProbeRequest::get(ctx.api_url(&self.path))).await {
            Ok(response) => judge_security_headers(&response, &ctx.reporter),
            Err(e) => Outcome::fail(format!("Security headers check failed: {}", e)),
        }
    }
}

/// Passes when at least one `RateLimit*` header is returned.
#[derive(Debug, Clone)]
pub struct RateLimitHeadersCheck {
    path: String,
}

impl RateLimitHeadersCheck {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

pub fn judge_rate_limit_headers(response: &ProbeResponse, reporter: &Reporter) -> Outcome {
    let found = response.headers_with_prefix(RATE_LIMIT_PREFIX);
    if found.is_empty() {
        return Outcome::fail("Rate limiting headers missing");
    }

    for (name, value) in &found {
        reporter.detail(format!("{}: {}", name, value));
    }
    Outcome::pass("Rate limiting configured")
}

#[async_trait]
impl Check for RateLimitHeadersCheck {
    fn description(&self) -> &str {
        "Rate Limiting Headers Present"
    }

    async fn run(&self, ctx: &CheckContext) -> Outcome {
        match ctx.probe.send(&ProbeRequest::get(ctx.api_url(&self.path))).await {
            Ok(response) => judge_rate_limit_headers(&response, &ctx.reporter),
            Err(e) => Outcome::fail(format!("Rate limiting check failed: {}", e)),
        }
    }
}
