//! Round-trip latency.

use async_trait::async_trait;

use crate::checks::{Check, CheckContext, Outcome};
use crate::probe::ProbeRequest;

/// Times a GET and compares it against `thresholds.max_latency_ms`.
#[derive(Debug, Clone)]
pub struct LatencyCheck {
    path: String,
}

impl LatencyCheck {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Pass iff `elapsed_ms` is strictly below `max_ms`.
pub fn judge_latency(elapsed_ms: u64, max_ms: u64) -> Outcome {
    if elapsed_ms < max_ms {
        Outcome::pass(format!(
            "Response time acceptable ({}ms < {}ms)",
            elapsed_ms, max_ms
        ))
    } else {
        Outcome::fail(format!(
            "Response time too slow ({}ms >= {}ms)",
            elapsed_ms, max_ms
        ))
    }
}

#[async_trait]
impl Check for LatencyCheck {
    fn description(&self) -> &str {
        "Backend Response Time"
    }

    async fn run(&self, ctx: &CheckContext) -> Outcome {
        let request = ProbeRequest::get(ctx.api_url(&self.path));
        match ctx.probe.send(&request).await {
            Ok(response) => {
                let elapsed_ms = response.elapsed_ms();
                ctx.reporter.detail(format!("Response time: {}ms", elapsed_ms));
                judge_latency(elapsed_ms, ctx.config.thresholds.max_latency_ms)
            }
            Err(e) => Outcome::fail(format!("Response time test failed: {}", e)),
        }
    }
}
