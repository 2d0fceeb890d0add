//! Console reporting.
//!
//! Progress and summary go to stdout; diagnostics go through `tracing`.

use crate::checks::Outcome;
use crate::config::SmokeConfig;
use crate::runner::tally::RunTally;

const GREEN: &str = "\x1b[0;32m";
const RED: &str = "\x1b[0;31m";
const YELLOW: &str = "\x1b[1;33m";
const RESET: &str = "\x1b[0m";

const RULE_WIDTH: usize = 50;

/// Writes the human-readable run log.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// A reporter without ANSI escapes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, color: &'static str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn banner(&self, config: &SmokeConfig) {
        let rule = "=".repeat(RULE_WIDTH);
        println!("{}", rule);
        println!("API Connection Smoke Test Suite");
        println!("{}", rule);
        println!("API Base: {}", config.target.base_url);
        println!("Timeout: {}s", config.target.timeout_secs);
        println!("{}", rule);
    }

    pub fn announce(&self, number: usize, description: &str) {
        println!();
        println!("{}", self.paint(YELLOW, &format!("[TEST {}] {}", number, description)));
    }

    /// Indented detail line under the current check.
    pub fn detail(&self, text: impl AsRef<str>) {
        println!("  {}", text.as_ref());
    }

    pub fn verdict(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Pass(message) => println!("{}: {}", self.paint(GREEN, "✓ PASS"), message),
            Outcome::Fail(message) => println!("{}: {}", self.paint(RED, "✗ FAIL"), message),
        }
    }

    pub fn summary(&self, tally: &RunTally) {
        let rule = "=".repeat(RULE_WIDTH);
        println!();
        println!("{}", rule);
        println!("           TEST SUMMARY");
        println!("{}", rule);
        println!("Total Tests: {}", tally.total);
        println!("{}", self.paint(GREEN, &format!("Passed: {}", tally.passed)));
        println!("{}", self.paint(RED, &format!("Failed: {}", tally.failed)));
        println!();

        if tally.all_passed() {
            println!("{}", self.paint(GREEN, "✓ All tests passed!"));
        } else {
            println!("{}", self.paint(RED, "Failed Tests:"));
            for failure in &tally.failures {
                println!("  - {}", failure);
            }
            println!();
        }
    }
}
