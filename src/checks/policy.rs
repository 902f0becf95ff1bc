//! Error-to-skip conversion
//!
//! A probe error either means the infrastructure being probed is absent
//! (no ping binary, a host name that does not resolve, a subprocess that
//! hangs) or it means the probe itself was wrong. The first kind is
//! inconclusive and becomes a skip; the second is a failure.

use crate::models::CheckStatus;
use crate::utils::{PingError, TcpError};
use serde::{Deserialize, Serialize};

/// Classifies probe errors as environmental or not
pub trait Environmental {
    /// True when the error means "the checked infrastructure is not here"
    fn is_environmental(&self) -> bool;
}

impl Environmental for PingError {
    fn is_environmental(&self) -> bool {
        match self {
            PingError::NotFound { .. }
            | PingError::PermissionDenied { .. }
            | PingError::Timeout { .. }
            | PingError::Terminated { .. } => true,
            PingError::Spawn { .. } | PingError::Wait { .. } => false,
        }
    }
}

impl Environmental for TcpError {
    fn is_environmental(&self) -> bool {
        match self {
            TcpError::Resolve { .. } | TcpError::NoAddresses { .. } => true,
            TcpError::InvalidTarget { .. } => false,
        }
    }
}

/// Rule deciding which probe errors turn into skips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipPolicy {
    /// Only environmental errors skip; everything else fails
    #[default]
    Strict,
    /// Every probe error skips
    Lenient,
}

impl SkipPolicy {
    /// Status a probe error maps to under this policy
    pub fn classify<E: Environmental>(&self, err: &E) -> CheckStatus {
        match self {
            SkipPolicy::Lenient => CheckStatus::Skip,
            SkipPolicy::Strict if err.is_environmental() => CheckStatus::Skip,
            SkipPolicy::Strict => CheckStatus::Fail,
        }
    }
}
