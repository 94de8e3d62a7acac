//! Valid card synthesis.
//!
//! Builds a card that passes every check by explicit construction: the four
//! tokens, one per line, then fixed padding, then a single corrective byte
//! that brings the byte sum to the target.

use crate::checks::checksum::ascii_sum;
use crate::data::rules::{CardRules, PADDING_BYTE, PADDING_COUNT};
use crate::CardCheckError;
use std::fmt;
use tracing::debug;

/// A card constructed to satisfy all six checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedDocument {
    text: String,
}

impl SynthesizedDocument {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for SynthesizedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Synthesize a valid card for the given rules.
///
/// # Errors
///
/// Returns `CardCheckError::Synthesis` when the corrective byte needed to
/// reach the target sum falls outside printable ASCII. That cannot happen
/// with the default rules, where it is `@`. Returns
/// `CardCheckError::SynthesisTooShort` when the finished card is shorter
/// than `rules.min_length`.
pub fn synthesize(rules: &CardRules) -> Result<SynthesizedDocument, CardCheckError> {
    let mut text = String::new();
    for token in rules.synthesis_tokens() {
        text.push_str(token);
        text.push('\n');
    }

    let base_sum = ascii_sum(text.as_bytes());
    let padding_sum = PADDING_COUNT as u64 * u64::from(PADDING_BYTE);
    let remainder = rules.target_checksum as i64 - base_sum as i64 - padding_sum as i64;

    let corrective = match u8::try_from(remainder) {
        Ok(byte) if (0x20..=0x7e).contains(&byte) => byte,
        _ => return Err(CardCheckError::Synthesis { remainder }),
    };
    debug!(base_sum, padding_sum, corrective, "balanced synthesized card");

    text.extend(std::iter::repeat(char::from(PADDING_BYTE)).take(PADDING_COUNT));
    text.push(char::from(corrective));

    if text.len() < rules.min_length {
        return Err(CardCheckError::SynthesisTooShort {
            length: text.len(),
            min_length: rules.min_length,
        });
    }

    Ok(SynthesizedDocument { text })
}
