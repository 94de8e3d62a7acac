//! Console output for card-check.
//!
//! Renders the line-oriented stdout protocol: prompt, progress, one line per
//! check, verdict, and on failure the fraud warnings and the synthesized card.
//!
//! Line formatting is kept in free functions so it can be tested without a
//! writer; `Console` only sequences and writes lines.

use crate::engine::result::ValidationReport;
use crate::engine::synth::SynthesizedDocument;
use crate::{Check, CheckResult};
use std::io::{self, Write};

pub const PROMPT: &str = "Enter your card";
pub const CARD_NOT_FOUND: &str = "Card file not found";
pub const FINAL_CHECKING: &str = "FINAL CHECKING";
pub const CARD_VALID: &str = "Card is valid!";
pub const CARD_INVALID: &str = "Card is invalid.";
pub const FRAUD_WARNING: &str = "YOU SUSPECT FRAUD, RECREATE THE CARD!";
pub const SYNTHESIZED_HEADER: &str = "Here is the generated valid card text:";

/// Format one progress line
pub fn format_progress_line(percent: u32) -> String {
    format!("Card checking... {}%", percent)
}

/// Format the report line for one check
pub fn format_check_line(check: &Check) -> String {
    match &check.result {
        Some(CheckResult::Pass { note: None }) => format!("Check {} passed.", check.number),
        Some(CheckResult::Pass { note: Some(note) }) => {
            format!("Check {} passed: {}.", check.number, note)
        }
        Some(CheckResult::Fail { reason }) => format!("Check {} failed: {}.", check.number, reason),
        None => format!("Check {} failed: Not executed.", check.number),
    }
}

/// Percentages shown by the progress display, 0 through 100 inclusive
pub fn progress_steps(step: u32) -> Vec<u32> {
    let step = step.max(1);
    (0..=100).step_by(step as usize).collect()
}

/// Line writer for the stdout protocol
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Console { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        self.line(PROMPT)
    }

    pub fn card_not_found(&mut self) -> io::Result<()> {
        self.line(CARD_NOT_FOUND)
    }

    pub fn progress(&mut self, percent: u32) -> io::Result<()> {
        self.line(&format_progress_line(percent))
    }

    pub fn final_checking(&mut self) -> io::Result<()> {
        self.line(FINAL_CHECKING)
    }

    /// One line per check, in report order
    pub fn check_lines(&mut self, report: &ValidationReport) -> io::Result<()> {
        for check in &report.checks {
            self.line(&format_check_line(check))?;
        }
        Ok(())
    }

    pub fn card_valid(&mut self) -> io::Result<()> {
        self.line(CARD_VALID)
    }

    pub fn card_invalid(&mut self) -> io::Result<()> {
        self.line(CARD_INVALID)
    }

    pub fn fraud_warnings(&mut self, count: usize) -> io::Result<()> {
        for _ in 0..count {
            self.line(FRAUD_WARNING)?;
        }
        Ok(())
    }

    /// Blank line, header, the card text, and a trailing newline
    pub fn synthesized(&mut self, doc: &SynthesizedDocument) -> io::Result<()> {
        writeln!(self.out, "\n{}\n{}", SYNTHESIZED_HEADER, doc)?;
        self.out.flush()
    }
}
