//! Human-facing output of an evaluation run.

use super::judge::Verdict;

const GREEN: &str = "\x1b[92m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

/// Receives what an evaluation observed. Reporting never changes outcomes.
pub trait Reporter: Send + Sync {
    /// The rendered judging prompt.
    fn prompt(&self, prompt: &str);

    /// A decided verdict with the normalized judge reply.
    fn verdict(&self, verdict: Verdict, response: &str);

    /// A scenario completed with a match.
    fn scenario_passed(&self, name: &str);
}

/// Writes to stdout, coloring verdicts green or red.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a verdict line with ANSI color markers.
    pub fn format_verdict(verdict: Verdict, response: &str) -> String {
        match verdict {
            Verdict::Match => format!("{GREEN}Response: {response}{RESET}"),
            Verdict::NoMatch => format!("{RED}Response: {response}{RESET}"),
            Verdict::Indeterminate => format!("Response: {response}"),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn prompt(&self, prompt: &str) {
        println!("{}", prompt);
    }

    fn verdict(&self, verdict: Verdict, response: &str) {
        println!("{}", Self::format_verdict(verdict, response));
    }

    fn scenario_passed(&self, name: &str) {
        println!("{} passed!", name);
    }
}
