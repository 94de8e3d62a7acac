//! Check execution orchestrator.
//!
//! Manages check registration and execution.
//!
//! # Graceful Degradation
//!
//! This module handles errors gracefully:
//! - Check panics: Caught via std::panic::catch_unwind, converted to Fail result
//! - Failed checks: Never stop the run; every registered check is evaluated
//! - Empty check list: Returns a report with no checks (which is not valid)
//!
//! No function in this module will panic.

use crate::checks::{checksum, content};
use crate::data::rules::CardRules;
use crate::engine::result::{ResultAggregator, ValidationReport};
use crate::{CardDocument, Check, CheckResult};
use tracing::debug;

/// Signature shared by every card check
pub type CheckFn = Box<dyn Fn(&CardDocument, &CardRules) -> CheckResult + Send + Sync>;

/// A registered check with its execution function
pub struct RegisteredCheck {
    pub number: u8,
    pub name: String,
    pub description: String,
    pub check_fn: CheckFn,
}

/// Check orchestrator
pub struct CheckOrchestrator {
    rules: CardRules,
    checks: Vec<RegisteredCheck>,
}

impl CheckOrchestrator {
    /// Create a new orchestrator evaluating against the given rules
    pub fn new(rules: CardRules) -> Self {
        CheckOrchestrator {
            rules,
            checks: Vec::new(),
        }
    }

    /// Create an orchestrator with the six card checks registered
    pub fn with_card_checks(rules: CardRules) -> Self {
        let mut orchestrator = Self::new(rules);
        orchestrator.register_checks(create_all_checks());
        orchestrator
    }

    /// Register checks for execution
    pub fn register_checks(&mut self, checks: Vec<RegisteredCheck>) {
        self.checks.extend(checks);
    }

    /// Register a single check
    pub fn register_check(&mut self, check: RegisteredCheck) {
        self.checks.push(check);
    }

    /// Rules the checks are evaluated against
    pub fn rules(&self) -> &CardRules {
        &self.rules
    }

    /// Run every registered check, in registration order
    pub fn run_all(&self, doc: &CardDocument) -> ValidationReport {
        let mut aggregator = ResultAggregator::new();

        for check in &self.checks {
            let result = self.execute_check(check, doc);
            debug!(check = check.number, name = %check.name, result = %result, "check evaluated");

            aggregator.add_result(Check {
                number: check.number,
                name: check.name.clone(),
                description: check.description.clone(),
                result: Some(result),
            });
        }

        aggregator.set_ascii_sum(checksum::ascii_sum(doc.as_bytes()));
        aggregator.to_report()
    }

    /// Execute a single check, converting a panic into a failure
    fn execute_check(&self, check: &RegisteredCheck, doc: &CardDocument) -> CheckResult {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            (check.check_fn)(doc, &self.rules)
        }));

        match result {
            Ok(check_result) => check_result,
            Err(_) => CheckResult::fail("Check panicked during execution"),
        }
    }
}

/// Create the six card checks in their fixed evaluation order
pub fn create_all_checks() -> Vec<RegisteredCheck> {
    vec![
        RegisteredCheck {
            number: 1,
            name: "Magic Token".to_string(),
            description: "Card contains the magic token".to_string(),
            check_fn: Box::new(content::check_magic_token),
        },
        RegisteredCheck {
            number: 2,
            name: "Secondary Token".to_string(),
            description: "Card contains the secondary token".to_string(),
            check_fn: Box::new(content::check_secondary_token),
        },
        RegisteredCheck {
            number: 3,
            name: "Minimum Length".to_string(),
            description: "Card is at least the minimum length".to_string(),
            check_fn: Box::new(content::check_min_length),
        },
        RegisteredCheck {
            number: 4,
            name: "ATM Token".to_string(),
            description: "Card contains the ATM validity token".to_string(),
            check_fn: Box::new(content::check_atm_token),
        },
        RegisteredCheck {
            number: 5,
            name: "Numeral Sequence".to_string(),
            description: "Card contains the numeral sequence".to_string(),
            check_fn: Box::new(content::check_numeral_sequence),
        },
        RegisteredCheck {
            number: 6,
            name: "Checksum".to_string(),
            description: "Byte values of the card sum to the target".to_string(),
            check_fn: Box::new(checksum::check_checksum),
        },
    ]
}
