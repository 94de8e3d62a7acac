//! Card validity rules
//!
//! The fixed tokens, thresholds, and file names a card is judged against.

/// Magic token every card must contain (check 1)
pub const MAGIC_TOKEN: &str = "993MiroHodetAssemlyCCPP";

/// Secondary token (check 2)
pub const SECONDARY_TOKEN: &str = "C0D3FUN";

/// Minimum card length in bytes (check 3)
pub const MIN_LENGTH: usize = 50;

/// ATM token (check 4)
pub const ATM_TOKEN: &str = "VALID-ATM";

/// Numeral sequence (check 5)
pub const NUMERAL_SEQUENCE: &str = "7777777";

/// Required sum of all byte values (check 6)
pub const TARGET_CHECKSUM: u64 = 10_000;

/// Padding byte appended during synthesis
pub const PADDING_BYTE: u8 = b'A';

/// Number of padding bytes appended during synthesis
pub const PADDING_COUNT: usize = 97;

/// Card file read from the working directory
pub const CARD_FILE: &str = "card.txt";

/// File written when a card validates
pub const CARD_VALUE_FILE: &str = "card_value.txt";

/// Value recorded for a valid card
pub const CARD_VALUE: &str = "100";

/// Number of fraud warnings printed for an invalid card
pub const FRAUD_WARNING_COUNT: usize = 101;

/// Progress percentage increment
pub const PROGRESS_STEP: u32 = 10;

/// Pause before each progress line, in milliseconds
pub const PROGRESS_DELAY_MS: u64 = 100;

/// The predicate set a card document is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRules {
    pub magic_token: String,
    pub secondary_token: String,
    pub min_length: usize,
    pub atm_token: String,
    pub numeral_sequence: String,
    pub target_checksum: u64,
}

impl Default for CardRules {
    fn default() -> Self {
        CardRules {
            magic_token: MAGIC_TOKEN.to_string(),
            secondary_token: SECONDARY_TOKEN.to_string(),
            min_length: MIN_LENGTH,
            atm_token: ATM_TOKEN.to_string(),
            numeral_sequence: NUMERAL_SEQUENCE.to_string(),
            target_checksum: TARGET_CHECKSUM,
        }
    }
}

impl CardRules {
    /// Tokens in the order they appear in a synthesized card
    pub fn synthesis_tokens(&self) -> [&str; 4] {
        [
            &self.magic_token,
            &self.secondary_token,
            &self.atm_token,
            &self.numeral_sequence,
        ]
    }
}
