//! Result aggregation and reporting.
//!
//! Collects check results and decides the aggregate verdict.

use crate::{Check, CheckResult};

/// Result summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSummary {
    pub passed: u32,
    pub failed: u32,
    pub total: u32,
}

/// Validation report containing all check results
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub checks: Vec<Check>,
    /// Byte sum of the evaluated card
    pub ascii_sum: u64,
}

impl ValidationReport {
    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary::default();

        for check in &self.checks {
            summary.total += 1;

            match &check.result {
                Some(CheckResult::Pass { .. }) => summary.passed += 1,
                Some(CheckResult::Fail { .. }) | None => summary.failed += 1,
            }
        }

        summary
    }

    /// True when at least one check ran and every check passed
    pub fn is_valid(&self) -> bool {
        !self.checks.is_empty()
            && self
                .checks
                .iter()
                .all(|c| c.result.as_ref().is_some_and(CheckResult::is_pass))
    }

    /// Get only failed checks
    pub fn failures(&self) -> Vec<&Check> {
        self.checks
            .iter()
            .filter(|c| !c.result.as_ref().is_some_and(CheckResult::is_pass))
            .collect()
    }
}

/// Result aggregator for collecting check results
#[derive(Debug, Default)]
pub struct ResultAggregator {
    checks: Vec<Check>,
    ascii_sum: u64,
}

impl ResultAggregator {
    /// Create a new result aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a completed check result
    pub fn add_result(&mut self, check: Check) {
        self.checks.push(check);
    }

    /// Record the byte sum of the evaluated card
    pub fn set_ascii_sum(&mut self, ascii_sum: u64) {
        self.ascii_sum = ascii_sum;
    }

    /// Create final validation report
    pub fn to_report(self) -> ValidationReport {
        ValidationReport {
            checks: self.checks,
            ascii_sum: self.ascii_sum,
        }
    }
}
