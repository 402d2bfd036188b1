//! Coloured report lines.
//!
//! Green for a passing case or run, red otherwise. Colour is switched off for logs and
//! non-terminal output via `HarnessConfig::colour`.

use ansi_term::Colour;

use crate::verify::runner::{CaseOutcome, RunSummary};

/// Paints `text` green or red, or returns it unchanged when `colour` is off.
pub fn paint(success: bool, colour: bool, text: &str) -> String {
    if !colour {
        return text.to_string();
    }
    let c = if success { Colour::Green } else { Colour::Red };
    c.paint(text).to_string()
}

/// `Test <id> (<name>) passed|failed : <held> / <total> assertions held`, followed by one
/// line per failed assertion.
pub fn case_lines(outcome: &CaseOutcome, colour: bool) -> Vec<String> {
    let ok = outcome.is_passing();
    let head = format!(
        "Test {} ({}) {} : {} / {} assertions held",
        outcome.id,
        outcome.name,
        if ok { "passed" } else { "failed" },
        outcome.passed,
        outcome.total
    );
    let mut lines = vec![paint(ok, colour, &head)];
    lines.extend(
        outcome
            .failures
            .iter()
            .map(|failure| paint(false, colour, &format!("    {failure}"))),
    );
    lines
}

/// `<passed> tests passed out of <run>`.
pub fn summary_line(summary: &RunSummary, colour: bool) -> String {
    let text = format!(
        "{} tests passed out of {}",
        summary.passed_cases(),
        summary.cases.len()
    );
    paint(summary.all_passed(), colour, &text)
}
