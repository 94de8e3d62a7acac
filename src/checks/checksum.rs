//! Checksum check (check 6).
//!
//! The sum of every byte in the card, each read as an unsigned 8-bit value,
//! must equal the target exactly.

use crate::data::rules::CardRules;
use crate::{CardDocument, CheckResult};

/// Sum of all byte values
pub fn ascii_sum(bytes: &[u8]) -> u64 {
    bytes.iter().map(|&b| u64::from(b)).sum()
}

/// Run check 6: Byte-sum checksum
pub fn check_checksum(doc: &CardDocument, rules: &CardRules) -> CheckResult {
    let sum = ascii_sum(doc.as_bytes());
    if sum == rules.target_checksum {
        CheckResult::Pass {
            note: Some("Checksum valid".to_string()),
        }
    } else {
        CheckResult::fail(format!("Checksum error (ASCII sum = {})", sum))
    }
}
