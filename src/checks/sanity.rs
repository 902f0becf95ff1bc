//! Environment sanity checker
//!
//! Confirms the process can evaluate a basic comparison.

use std::hint::black_box;

/// Outcome of the arithmetic check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityOutcome {
    pub expression: &'static str,
    pub expected: i64,
    pub actual: i64,
}

impl SanityOutcome {
    pub fn holds(&self) -> bool {
        self.expected == self.actual
    }
}

/// Arithmetic sanity checker
#[derive(Debug, Default)]
pub struct SanityChecker;

impl SanityChecker {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate `1 + 1` at runtime and compare it with 2
    pub fn check(&self) -> SanityOutcome {
        let actual = black_box(1i64) + black_box(1i64);
        SanityOutcome {
            expression: "1 + 1",
            expected: 2,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_plus_one() {
        let outcome = SanityChecker::new().check();
        assert!(outcome.holds());
        assert_eq!(outcome.actual, 2);
    }

    #[test]
    fn test_mismatch_does_not_hold() {
        let outcome = SanityOutcome {
            expression: "1 + 1",
            expected: 2,
            actual: 3,
        };
        assert!(!outcome.holds());
    }
}
