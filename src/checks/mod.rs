//! Card check modules.
//!
//! This module contains the six card checks:
//! - Content: magic token, secondary token, minimum length, ATM token,
//!   numeral sequence (checks 1 through 5)
//! - Checksum: exact byte-sum target (check 6)
//!
//! Checks never panic and never short-circuit each other. Every check
//! returns a CheckResult on its own, and the orchestrator runs all of them
//! regardless of earlier outcomes.

pub mod checksum;
pub mod content;

/// Number of checks evaluated on every run
pub const CHECK_COUNT: usize = 6;
