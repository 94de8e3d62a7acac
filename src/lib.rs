//! card-check library
//!
//! Validates the contents of a card file against six fixed predicates and,
//! when a card is rejected, synthesizes a replacement that passes them all.
//!
//! This library provides:
//! - The six card checks (tokens, minimum length, byte-sum checksum)
//! - A check orchestrator that always evaluates every check
//! - Deterministic synthesis of a valid card
//! - Injectable filesystem and sleep capabilities for testing
//!
//! # Example
//!
//! ```no_run
//! use card_check::platform::clock::ThreadSleeper;
//! use card_check::platform::fs::LocalFileSystem;
//! use card_check::{run_card_check, CardCheckConfig};
//!
//! let config = CardCheckConfig::default();
//! let stdout = std::io::stdout();
//! let outcome = run_card_check(config, &LocalFileSystem, &ThreadSleeper, stdout.lock())
//!     .expect("console unavailable");
//! println!("valid: {}", outcome.is_valid());
//! ```

pub mod checks;
pub mod cli;
pub mod data;
pub mod engine;
pub mod platform;
pub mod version;

use cli::output::Console;
use data::rules::{self, CardRules};
use engine::result::ValidationReport;
use engine::synth::SynthesizedDocument;
use engine::validator::Validator;
use platform::clock::Sleeper;
use platform::fs::FileSystem;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Outcome of a single card check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// Check passed, optionally with a note for the report line
    Pass { note: Option<String> },
    /// Check failed
    Fail { reason: String },
}

impl CheckResult {
    pub fn pass() -> Self {
        CheckResult::Pass { note: None }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        CheckResult::Fail {
            reason: reason.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CheckResult::Pass { .. })
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Pass { note: None } => write!(f, "PASS"),
            CheckResult::Pass { note: Some(note) } => write!(f, "PASS: {}", note),
            CheckResult::Fail { reason } => write!(f, "FAIL: {}", reason),
        }
    }
}

/// A card check with its result.
#[derive(Debug, Clone, Default)]
pub struct Check {
    /// Position in the fixed evaluation order, starting at 1
    pub number: u8,
    /// Human-readable name
    pub name: String,
    /// Description of what this check validates
    pub description: String,
    /// Result of the check (None if not yet executed)
    pub result: Option<CheckResult>,
}

/// Card contents loaded from disk.
///
/// Held as raw bytes: every check works on bytes, so files that are not
/// valid UTF-8 are still evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDocument {
    bytes: Vec<u8>,
}

impl CardDocument {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        CardDocument {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<&str> for CardDocument {
    fn from(text: &str) -> Self {
        CardDocument::new(text.as_bytes())
    }
}

/// Error types for card-check operations.
#[derive(Debug, Error)]
pub enum CardCheckError {
    /// The card file could not be opened
    #[error("Card file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    /// A filesystem operation failed
    #[error("I/O error in {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Writing to the console failed
    #[error("Failed to write console output: {0}")]
    Output(#[from] io::Error),

    /// The rules cannot be balanced to the target checksum
    #[error("Cannot balance synthesized card: corrective byte value {remainder} is not printable ASCII")]
    Synthesis { remainder: i64 },

    /// The synthesized card falls short of the minimum length
    #[error("Synthesized card is {length} bytes, below the minimum of {min_length}")]
    SynthesisTooShort { length: usize, min_length: usize },
}

/// Configuration for a card check run.
#[derive(Debug, Clone)]
pub struct CardCheckConfig {
    /// Card file to validate
    pub card_path: PathBuf,
    /// File receiving the card value on success
    pub value_path: PathBuf,
    /// Predicates the card is evaluated against
    pub rules: CardRules,
    /// Percentage increment between progress lines
    pub progress_step: u32,
    /// Pause before each progress line
    pub progress_delay: Duration,
    /// Fraud warnings printed for an invalid card
    pub fraud_warning_count: usize,
}

impl Default for CardCheckConfig {
    fn default() -> Self {
        CardCheckConfig {
            card_path: PathBuf::from(rules::CARD_FILE),
            value_path: PathBuf::from(rules::CARD_VALUE_FILE),
            rules: CardRules::default(),
            progress_step: rules::PROGRESS_STEP,
            progress_delay: Duration::from_millis(rules::PROGRESS_DELAY_MS),
            fraud_warning_count: rules::FRAUD_WARNING_COUNT,
        }
    }
}

/// How a card check run ended.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The card file could not be opened; no checks ran
    CardNotFound,
    /// All six checks passed and the card value was recorded
    Valid(ValidationReport),
    /// At least one check failed; the card was removed and a replacement printed
    Invalid {
        report: ValidationReport,
        synthesized: SynthesizedDocument,
    },
}

impl RunOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, RunOutcome::Valid(_))
    }

    /// Check report, if the card was loaded
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            RunOutcome::CardNotFound => None,
            RunOutcome::Valid(report) => Some(report),
            RunOutcome::Invalid { report, .. } => Some(report),
        }
    }
}

/// Run a full card check.
///
/// This is the main entry point: it loads the card, evaluates all six checks,
/// and takes the success or failure branch, writing the console protocol to
/// `out`.
///
/// # Errors
///
/// Returns `CardCheckError::Output` if writing to `out` fails, or
/// `CardCheckError::Synthesis` or `CardCheckError::SynthesisTooShort` if
/// custom rules cannot be satisfied. A missing
/// card file is not an error; it yields `RunOutcome::CardNotFound`.
pub fn run_card_check<W: Write>(
    config: CardCheckConfig,
    fs: &dyn FileSystem,
    sleeper: &dyn Sleeper,
    out: W,
) -> Result<RunOutcome, CardCheckError> {
    let validator = Validator::new(config, fs, sleeper);
    let mut console = Console::new(out);
    validator.run(&mut console)
}
