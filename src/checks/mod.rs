//! Smoke checks.
//!
//! # Data Flow
//! ```text
//! Check::run(ctx)
//!     → builds ProbeRequest(s) against ctx.config.target
//!     → ctx.probe sends them
//!     → inspects status / headers / timing / body
//!     → prints detail lines via ctx.reporter
//!     → returns Outcome::Pass(msg) | Outcome::Fail(msg)
//! ```
//!
//! # Design Decisions
//! - Every check is independent: no shared fixtures, no ordering assumptions
//! - Transport errors become failed outcomes, never panics or early exits
//! - `status.rs` is the generic expected-status check; the rest inspect
//!   headers, timing or body where a bare status comparison is not enough

pub mod cors;
pub mod endpoint;
pub mod headers;
pub mod latency;
pub mod metadata;
pub mod status;
pub mod suite;

use async_trait::async_trait;

use crate::config::SmokeConfig;
use crate::probe::{Probe, ProbeError};
use crate::runner::Reporter;

pub use cors::CorsCheck;
pub use endpoint::{EndpointCheck, StatusPolicy, Target};
pub use headers::{RateLimitHeadersCheck, SecurityHeadersCheck};
pub use latency::{judge_latency, LatencyCheck};
pub use metadata::MetadataCheck;
pub use status::{FailureReason, StatusCheck};
pub use suite::standard_suite;

/// Verdict of one check, with the message that explains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass(String),
    Fail(String),
}

impl Outcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Outcome::Pass(message.into())
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Outcome::Fail(message.into())
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Pass(message) | Outcome::Fail(message) => message,
        }
    }
}

/// A named unit of verification against the remote API.
#[async_trait]
pub trait Check: Send + Sync {
    /// Label announced before the check runs.
    fn description(&self) -> &str;

    async fn run(&self, ctx: &CheckContext) -> Outcome;
}

/// Everything a check needs: the target, a client and the console.
pub struct CheckContext {
    pub config: SmokeConfig,
    pub probe: Probe,
    pub reporter: Reporter,
}

impl CheckContext {
    pub fn new(config: SmokeConfig) -> Result<Self, ProbeError> {
        let probe = Probe::new(&config.target)?;
        let reporter = Reporter::new(config.output.color);
        Ok(Self {
            config,
            probe,
            reporter,
        })
    }

    pub fn api_url(&self, path: &str) -> String {
        self.config.target.api_url(path)
    }
}
