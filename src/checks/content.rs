//! Card content checks (checks 1 through 5).
//!
//! Token presence and minimum length. Tokens are matched as raw byte
//! substrings anywhere in the card.

use crate::data::rules::CardRules;
use crate::{CardDocument, CheckResult};

/// Run check 1: Magic token
pub fn check_magic_token(doc: &CardDocument, rules: &CardRules) -> CheckResult {
    if contains_token(doc, &rules.magic_token) {
        CheckResult::pass()
    } else {
        CheckResult::fail("Missing magic string")
    }
}

/// Run check 2: Secondary token
pub fn check_secondary_token(doc: &CardDocument, rules: &CardRules) -> CheckResult {
    if contains_token(doc, &rules.secondary_token) {
        CheckResult::pass()
    } else {
        CheckResult::fail(format!("Missing token '{}'", rules.secondary_token))
    }
}

/// Run check 3: Minimum length
pub fn check_min_length(doc: &CardDocument, rules: &CardRules) -> CheckResult {
    if doc.as_bytes().len() >= rules.min_length {
        CheckResult::pass()
    } else {
        CheckResult::fail("Card content too short")
    }
}

/// Run check 4: ATM token
pub fn check_atm_token(doc: &CardDocument, rules: &CardRules) -> CheckResult {
    if contains_token(doc, &rules.atm_token) {
        CheckResult::pass()
    } else {
        CheckResult::fail(format!("Missing token '{}'", rules.atm_token))
    }
}

/// Run check 5: Numeral sequence
pub fn check_numeral_sequence(doc: &CardDocument, rules: &CardRules) -> CheckResult {
    if contains_token(doc, &rules.numeral_sequence) {
        CheckResult::pass()
    } else {
        CheckResult::fail(format!(
            "Missing numerical sequence '{}'",
            rules.numeral_sequence
        ))
    }
}

/// Byte-level substring search. An empty token is always present.
pub fn contains_token(doc: &CardDocument, token: &str) -> bool {
    let needle = token.as_bytes();
    if needle.is_empty() {
        return true;
    }
    doc.as_bytes()
        .windows(needle.len())
        .any(|window| window == needle)
}
