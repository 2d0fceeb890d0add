//! Run counters and failure log.

use std::process::ExitCode;

use crate::checks::Outcome;

/// Aggregate results of a run.
///
/// Once a check has been recorded, `total == passed + failed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTally {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Failure messages in order of occurrence.
    pub failures: Vec<String>,
}

impl RunTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a check as started and return its 1-based number.
    pub fn begin(&mut self) -> usize {
        self.total += 1;
        self.total
    }

    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Pass(_) => self.passed += 1,
            Outcome::Fail(message) => {
                self.failed += 1;
                self.failures.push(message.clone());
            }
        }
    }

    pub fn is_balanced(&self) -> bool {
        self.total == self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// 0 when every check passed, 1 otherwise.
    pub fn status_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status_code())
    }
}
