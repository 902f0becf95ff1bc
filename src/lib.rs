//! ci-smoke library
//!
//! Smoke checks for the hosts CI jobs run on:
//! - Environment sanity (basic arithmetic)
//! - Loopback reachability through the OS ping utility
//! - TCP connectivity to configured services (Jenkins and Nexus by default)
//!
//! Each check yields pass, fail or skip. A skip means the checked
//! infrastructure is absent and never counts as a failure.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ci_smoke::config::Settings;
//! use ci_smoke::runner;
//!
//! #[tokio::main]
//! async fn main() {
//!     let settings = Settings::default();
//!     let probes = runner::plan(&settings, &[]).unwrap();
//!     let report = runner::run_checks(probes, settings.skip_policy, &|_| {}).await;
//!     std::process::exit(report.exit_code());
//! }
//! ```

pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod output;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Settings;
pub use models::{CheckStatus, RunReport, TestResult};
pub use utils::{Result, SmokeError};
