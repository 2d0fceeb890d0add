//! Cross-origin header presence.

use async_trait::async_trait;

use crate::checks::{Check, CheckContext, Outcome};
use crate::probe::{ProbeError, ProbeRequest, ProbeResponse};

const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
const ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";

/// Preflights a path and looks for CORS headers, falling back to GET.
#[derive(Debug, Clone)]
pub struct CorsCheck {
    path: String,
}

impl CorsCheck {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    async fn probe(&self, ctx: &CheckContext) -> Result<Outcome, ProbeError> {
        let url = ctx.api_url(&self.path);

        let preflight = ctx.probe.send(&ProbeRequest::options(url.as_str())).await?;
        if let Some(origin) = preflight.header(ALLOW_ORIGIN) {
            ctx.reporter.detail(format!("Found: {}", origin));
            return Ok(Outcome::pass("CORS headers configured"));
        }

        ctx.reporter
            .detail(format!("OPTIONS response has no {}, retrying with GET", ALLOW_ORIGIN));
        let response = ctx.probe.send(&ProbeRequest::get(url.as_str())).await?;
        Ok(judge_get_fallback(&response))
    }
}

/// Qualified pass for the GET fallback.
///
/// Allow-Origin is the primary signal. A response carrying only
/// Allow-Credentials still passes, but the message names the weaker header.
fn judge_get_fallback(response: &ProbeResponse) -> Outcome {
    if response.has_header(ALLOW_ORIGIN) {
        Outcome::pass("CORS headers configured (via GET)")
    } else if response.has_header(ALLOW_CREDENTIALS) {
        Outcome::pass(format!(
            "CORS headers configured (via GET, {} only)",
            ALLOW_CREDENTIALS
        ))
    } else {
        Outcome::fail("CORS headers missing")
    }
}

#[async_trait]
impl Check for CorsCheck {
    fn description(&self) -> &str {
        "CORS Headers Present"
    }

    async fn run(&self, ctx: &CheckContext) -> Outcome {
        self.probe(ctx)
            .await
            .unwrap_or_else(|e| Outcome::fail(format!("CORS check failed: {}", e)))
    }
}
