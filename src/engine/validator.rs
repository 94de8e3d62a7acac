//! Card validator.
//!
//! Runs one card check from start to finish:
//! load → progress → evaluate all six checks → success or failure branch.
//!
//! # Graceful Degradation
//!
//! - Card cannot be read: prints "Card file not found" and ends the run
//! - Card value cannot be written: logged at warn, run still reports valid
//! - Rejected card cannot be removed: logged at warn, synthesis still printed
//!
//! Only console write failures and unbalanceable rules end a run with an error.

use crate::checks::CHECK_COUNT;
use crate::cli::output::{progress_steps, Console};
use crate::data::rules::CARD_VALUE;
use crate::engine::orchestrator::CheckOrchestrator;
use crate::engine::result::ValidationReport;
use crate::engine::synth::{synthesize, SynthesizedDocument};
use crate::platform::clock::Sleeper;
use crate::platform::fs::FileSystem;
use crate::{CardCheckConfig, CardCheckError, CardDocument, RunOutcome};
use std::io::Write;
use tracing::{debug, info, warn};

/// Validates a single card file
pub struct Validator<'a> {
    config: CardCheckConfig,
    fs: &'a dyn FileSystem,
    sleeper: &'a dyn Sleeper,
    orchestrator: CheckOrchestrator,
}

impl<'a> Validator<'a> {
    pub fn new(config: CardCheckConfig, fs: &'a dyn FileSystem, sleeper: &'a dyn Sleeper) -> Self {
        let orchestrator = CheckOrchestrator::with_card_checks(config.rules.clone());
        Validator {
            config,
            fs,
            sleeper,
            orchestrator,
        }
    }

    /// Run the whole procedure, writing the console protocol as it goes
    pub fn run<W: Write>(&self, console: &mut Console<W>) -> Result<RunOutcome, CardCheckError> {
        info!(card = %self.config.card_path.display(), "starting card check");
        console.prompt()?;

        let doc = match self.load() {
            Ok(doc) => doc,
            Err(err) => {
                info!(%err, "card check aborted");
                console.card_not_found()?;
                return Ok(RunOutcome::CardNotFound);
            }
        };

        self.show_progress(console)?;
        console.final_checking()?;

        let report = self.evaluate(&doc);
        console.check_lines(&report)?;

        if report.is_valid() {
            info!("card is valid");
            console.card_valid()?;
            self.on_success();
            Ok(RunOutcome::Valid(report))
        } else {
            info!(failed = report.summary().failed, "card is invalid");
            console.card_invalid()?;
            let synthesized = self.on_failure(console)?;
            Ok(RunOutcome::Invalid {
                report,
                synthesized,
            })
        }
    }

    /// Read the card file in full
    pub fn load(&self) -> Result<CardDocument, CardCheckError> {
        let path = &self.config.card_path;
        match self.fs.read(path) {
            Ok(bytes) => {
                debug!(card = %path.display(), len = bytes.len(), "card loaded");
                Ok(CardDocument::new(bytes))
            }
            Err(e) => {
                debug!(card = %path.display(), error = %e, "card unreadable");
                Err(CardCheckError::MissingInput { path: path.clone() })
            }
        }
    }

    /// Evaluate every check against the card
    pub fn evaluate(&self, doc: &CardDocument) -> ValidationReport {
        let report = self.orchestrator.run_all(doc);
        debug_assert_eq!(report.checks.len(), CHECK_COUNT);
        debug!(ascii_sum = report.ascii_sum, "card evaluated");
        report
    }

    /// Record the card value, replacing any earlier value
    pub fn on_success(&self) {
        let path = &self.config.value_path;
        let contents = format!("{}\n", CARD_VALUE);
        if let Err(e) = self.fs.write(path, contents.as_bytes()) {
            warn!(path = %path.display(), error = %e, "failed to write card value");
        }
    }

    /// Warn, remove the rejected card, and print a valid replacement
    pub fn on_failure<W: Write>(
        &self,
        console: &mut Console<W>,
    ) -> Result<SynthesizedDocument, CardCheckError> {
        console.fraud_warnings(self.config.fraud_warning_count)?;

        let path = &self.config.card_path;
        match self.fs.remove(path) {
            Ok(()) => info!(card = %path.display(), "rejected card removed"),
            Err(e) => warn!(card = %path.display(), error = %e, "failed to remove rejected card"),
        }

        let synthesized = self.synthesize()?;
        console.synthesized(&synthesized)?;
        Ok(synthesized)
    }

    /// Build a card that passes every check under the configured rules
    pub fn synthesize(&self) -> Result<SynthesizedDocument, CardCheckError> {
        synthesize(self.orchestrator.rules())
    }

    fn show_progress<W: Write>(&self, console: &mut Console<W>) -> Result<(), CardCheckError> {
        for percent in progress_steps(self.config.progress_step) {
            self.sleeper.sleep(self.config.progress_delay);
            console.progress(percent)?;
        }
        Ok(())
    }
}
