//! Utility modules for ci-smoke
//!
//! This module contains error types and progress indicators.

pub mod error;
pub mod progress;

pub use error::{ConfigError, PingError, Result, SmokeError, TcpError};
