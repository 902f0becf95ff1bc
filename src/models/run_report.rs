//! Aggregated report for a run

use super::{CheckStatus, TestResult};
use serde::Serialize;

/// Process exit code when every check passed or skipped
pub const EXIT_OK: i32 = 0;
/// Process exit code when at least one check failed
pub const EXIT_FAILED: i32 = 1;
/// Process exit code for usage and configuration errors
pub const EXIT_USAGE: i32 = 2;

/// All results from one invocation
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub results: Vec<TestResult>,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Timestamp of the run
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl RunReport {
    /// Build a report from finished results
    pub fn new(results: Vec<TestResult>) -> Self {
        let count = |status: CheckStatus| results.iter().filter(|r| r.status == status).count();
        let passed = count(CheckStatus::Pass);
        let failed = count(CheckStatus::Fail);
        let skipped = count(CheckStatus::Skip);

        Self {
            results,
            passed,
            failed,
            skipped,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Get the overall status
    ///
    /// Any failure fails the run. A run where nothing passed and something
    /// skipped reports skip; otherwise pass.
    pub fn overall_status(&self) -> CheckStatus {
        if self.failed > 0 {
            CheckStatus::Fail
        } else if self.passed == 0 && self.skipped > 0 {
            CheckStatus::Skip
        } else {
            CheckStatus::Pass
        }
    }

    /// Exit code for the process
    pub fn exit_code(&self) -> i32 {
        if self.results.iter().any(|r| r.status.counts_as_failure()) {
            EXIT_FAILED
        } else {
            EXIT_OK
        }
    }

    /// Look up a result by check name
    pub fn get(&self, name: &str) -> Option<&TestResult> {
        self.results.iter().find(|r| r.name == name)
    }
}
