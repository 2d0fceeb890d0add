//! Check execution subsystem.
//!
//! # Data Flow
//! ```text
//! Runner walks its checks in order:
//!     → tally.rs numbers the check (total += 1)
//!     → report.rs announces it
//!     → Check::run produces an Outcome
//!     → tally.rs records pass/fail, report.rs prints the verdict
//! After the last check:
//!     → report.rs prints the summary and failure log
//!     → RunTally::exit_code() becomes the process status
//! ```
//!
//! # Design Decisions
//! - Strictly sequential; one check finishes before the next starts
//! - No short-circuiting: a failed check never skips later ones
//! - The runner never inspects how a check reached its verdict

pub mod report;
pub mod tally;

pub use report::Reporter;
pub use tally::RunTally;

use crate::checks::{self, Check, CheckContext};

/// Ordered sequence of checks.
pub struct Runner {
    checks: Vec<Box<dyn Check>>,
}

impl Runner {
    pub fn new(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    /// The thirteen-check API smoke suite.
    pub fn standard() -> Self {
        Self::new(checks::standard_suite())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn descriptions(&self) -> Vec<&str> {
        self.checks.iter().map(|check| check.description()).collect()
    }

    /// Run every check once, in order, and return the tally.
    pub async fn run(&self, ctx: &CheckContext) -> RunTally {
        let mut tally = RunTally::new();

        for check in &self.checks {
            let number = tally.begin();
            ctx.reporter.announce(number, check.description());

            let outcome = check.run(ctx).await;
            tracing::debug!(
                number,
                check = check.description(),
                passed = outcome.is_pass(),
                "Check finished"
            );

            ctx.reporter.verdict(&outcome);
            tally.record(&outcome);
        }

        tracing::info!(
            total = tally.total,
            passed = tally.passed,
            failed = tally.failed,
            "Run complete"
        );
        tally
    }
}
