//! Data models for ci-smoke
//!
//! This module contains the result structures shared by the runner and the
//! output formatters.

pub mod run_report;
pub mod test_result;

pub use run_report::{RunReport, EXIT_FAILED, EXIT_OK, EXIT_USAGE};
pub use test_result::{CheckKind, CheckStatus, DetailSection, TestResult};
