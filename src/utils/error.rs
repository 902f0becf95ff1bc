//! Custom error types for ci-smoke
//!
//! This module defines domain-specific error types using `thiserror` for
//! the failure modes a probe can hit before it produces a result code.
//! Connection refusals and non-zero ping exits are *not* errors: they are
//! outcomes that carry a code and end up as failed checks.

use std::io;
use thiserror::Error;

/// Top-level error type for the ci-smoke application
#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("Ping error: {0}")]
    Ping(#[from] PingError),

    #[error("TCP probe error: {0}")]
    Tcp(#[from] TcpError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown check: {name} (available: {available})")]
    UnknownCheck { name: String, available: String },

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while running the ping utility
#[derive(Error, Debug)]
pub enum PingError {
    #[error("ping utility '{program}' not found")]
    NotFound { program: String },

    #[error("permission denied running '{program}'")]
    PermissionDenied { program: String },

    #[error("'{program}' did not finish within {secs}s")]
    Timeout { program: String, secs: u64 },

    #[error("'{program}' was terminated by a signal")]
    Terminated { program: String },

    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed waiting for '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl PingError {
    /// Map a spawn failure onto the matching variant
    pub fn from_spawn(program: &str, err: io::Error) -> Self {
        let program = program.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => PingError::NotFound { program },
            io::ErrorKind::PermissionDenied => PingError::PermissionDenied { program },
            _ => PingError::Spawn {
                program,
                source: err,
            },
        }
    }
}

/// Errors raised before a TCP connect attempt could be made
#[derive(Error, Debug)]
pub enum TcpError {
    #[error("failed to resolve {host}: {message}")]
    Resolve { host: String, message: String },

    #[error("{host}:{port} resolved to no addresses")]
    NoAddresses { host: String, port: u16 },

    #[error("invalid target {host}:{port}: {reason}")]
    InvalidTarget {
        host: String,
        port: u16,
        reason: String,
    },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias using SmokeError
pub type Result<T> = std::result::Result<T, SmokeError>;
