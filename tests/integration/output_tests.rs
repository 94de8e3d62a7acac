//! Console protocol tests.
//!
//! Tests that the stdout lines appear in the documented order and number.

use crate::mocks::{MockFileSystem, RecordingSleeper};
use card_check::cli::output::{
    format_progress_line, CARD_INVALID, CARD_VALID, FINAL_CHECKING, FRAUD_WARNING, PROMPT,
    SYNTHESIZED_HEADER,
};
use card_check::data::rules::{CardRules, CARD_FILE};
use card_check::engine::synth::synthesize;
use card_check::{run_card_check, CardCheckConfig};

fn output_for(contents: &str) -> Vec<String> {
    let fs = MockFileSystem::with_file(CARD_FILE, contents);
    let sleeper = RecordingSleeper::new();
    let mut out = Vec::new();
    run_card_check(CardCheckConfig::default(), &fs, &sleeper, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn expected_preamble() -> Vec<String> {
    let mut lines = vec![PROMPT.to_string()];
    lines.extend((0..=100).step_by(10).map(format_progress_line));
    lines.push(FINAL_CHECKING.to_string());
    lines
}

#[test]
fn test_valid_card_output_sequence() {
    let card = synthesize(&CardRules::default()).unwrap();
    let lines = output_for(card.as_str());

    let mut expected = expected_preamble();
    expected.extend(
        [
            "Check 1 passed.",
            "Check 2 passed.",
            "Check 3 passed.",
            "Check 4 passed.",
            "Check 5 passed.",
            "Check 6 passed: Checksum valid.",
            CARD_VALID,
        ]
        .iter()
        .map(|s| s.to_string()),
    );

    assert_eq!(lines, expected);
}

#[test]
fn test_invalid_card_output_sequence() {
    let card = synthesize(&CardRules::default()).unwrap();
    let lines = output_for("");

    let preamble = expected_preamble();
    assert_eq!(&lines[..preamble.len()], preamble.as_slice());

    let rest = &lines[preamble.len()..];
    assert_eq!(
        &rest[..7],
        &[
            "Check 1 failed: Missing magic string.",
            "Check 2 failed: Missing token 'C0D3FUN'.",
            "Check 3 failed: Card content too short.",
            "Check 4 failed: Missing token 'VALID-ATM'.",
            "Check 5 failed: Missing numerical sequence '7777777'.",
            "Check 6 failed: Checksum error (ASCII sum = 0).",
            CARD_INVALID,
        ]
    );

    let warnings = &rest[7..7 + 101];
    assert!(warnings.iter().all(|l| l == FRAUD_WARNING));
    assert_ne!(rest[7 + 101], FRAUD_WARNING);

    let tail = &rest[7 + 101..];
    let mut expected_tail = vec![String::new(), SYNTHESIZED_HEADER.to_string()];
    expected_tail.extend(card.as_str().lines().map(str::to_string));
    assert_eq!(tail, expected_tail.as_slice());
}

#[test]
fn test_exactly_six_check_lines() {
    for contents in ["", "C0D3FUN", "993MiroHodetAssemlyCCPP VALID-ATM 7777777"] {
        let lines = output_for(contents);
        let check_lines = lines.iter().filter(|l| l.starts_with("Check ")).count();
        assert_eq!(check_lines, 6, "contents: {:?}", contents);
    }
}

#[test]
fn test_progress_lines_before_final_checking() {
    let lines = output_for("anything");
    let final_idx = lines.iter().position(|l| l == FINAL_CHECKING).unwrap();

    assert_eq!(final_idx, 12);
    assert_eq!(lines[1], "Card checking... 0%");
    assert_eq!(lines[11], "Card checking... 100%");
}
