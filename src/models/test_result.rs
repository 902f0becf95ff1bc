//! Result types produced by a single check

use serde::Serialize;

/// Outcome of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    /// The check could not be evaluated in this environment
    Skip,
}

impl CheckStatus {
    /// Get the icon for this status
    pub fn icon(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "✓",
            CheckStatus::Fail => "✗",
            CheckStatus::Skip => "○",
        }
    }

    /// Upper-case label used by plain output
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Skip => "SKIP",
        }
    }

    /// Skips never count against the run
    pub fn counts_as_failure(&self) -> bool {
        matches!(self, CheckStatus::Fail)
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which probe produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Sanity,
    Ping,
    Tcp,
}

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Sanity => "sanity",
            CheckKind::Ping => "ping",
            CheckKind::Tcp => "tcp",
        }
    }
}

/// A section of detailed information
#[derive(Debug, Clone, Serialize)]
pub enum DetailSection {
    /// Key-value pairs
    KeyValue {
        title: Option<String>,
        pairs: Vec<(String, String)>,
    },
    /// Free-form text
    Text {
        title: Option<String>,
        content: String,
    },
}

impl DetailSection {
    /// Create a key-value section
    pub fn key_value(title: Option<String>, pairs: Vec<(String, String)>) -> Self {
        Self::KeyValue { title, pairs }
    }

    /// Create a text section
    pub fn text(title: Option<String>, content: String) -> Self {
        Self::Text { title, content }
    }
}

/// Complete result of one check
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Check name, unique within a run
    pub name: String,
    pub kind: CheckKind,
    /// Human readable title
    pub title: String,
    pub status: CheckStatus,
    /// One-line summary
    pub summary: String,
    /// Detailed sections
    pub details: Vec<DetailSection>,
    /// Output captured from the probe, kept for diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_output: Option<String>,
    /// Wall time spent in the probe
    pub duration_ms: f64,
}

impl TestResult {
    /// Create a new test result
    pub fn new(
        name: impl Into<String>,
        kind: CheckKind,
        title: impl Into<String>,
        status: CheckStatus,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            title: title.into(),
            status,
            summary: summary.into(),
            details: vec![],
            captured_output: None,
            duration_ms: 0.0,
        }
    }

    /// Add a detail section
    pub fn with_detail(mut self, section: DetailSection) -> Self {
        self.details.push(section);
        self
    }

    /// Attach captured probe output; blank output is dropped
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        let output = output.into();
        if !output.trim().is_empty() {
            self.captured_output = Some(output);
        }
        self
    }

    /// Record how long the probe took
    pub fn with_duration(mut self, duration: std::time::Duration) -> Self {
        self.duration_ms = duration.as_secs_f64() * 1000.0;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_only_fail_counts_as_failure() {
        assert!(CheckStatus::Fail.counts_as_failure());
        assert!(!CheckStatus::Pass.counts_as_failure());
        assert!(!CheckStatus::Skip.counts_as_failure());
    }

    #[test]
    fn test_blank_output_is_dropped() {
        let result = TestResult::new("ping", CheckKind::Ping, "Ping", CheckStatus::Pass, "ok")
            .with_output("  \n");
        assert!(result.captured_output.is_none());
    }

    #[test]
    fn test_builder_collects_details_and_duration() {
        let result = TestResult::new("nexus", CheckKind::Tcp, "Nexus", CheckStatus::Fail, "refused")
            .with_detail(DetailSection::text(None, "connection refused".to_string()))
            .with_duration(Duration::from_millis(12));
        assert_eq!(result.details.len(), 1);
        assert!((result.duration_ms - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&CheckStatus::Skip).unwrap();
        assert_eq!(json, "\"skip\"");
    }
}
