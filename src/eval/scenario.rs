//! Fixed question/answer scenarios and the runner that checks them.

use super::evaluator::Evaluator;
use crate::error::{Result, ValidatorError};
use tracing::{info, warn};

/// A question with its known answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub question: &'static str,
    pub expected_answer: &'static str,
}

/// Built-in scenarios, in run order.
pub const SCENARIOS: [Scenario; 2] = [
    Scenario {
        name: "eldest_pandava",
        question: "Who was the eldest Pandava? (Answer with the name only)",
        expected_answer: "Yudhishthira",
    },
    Scenario {
        name: "kurukshetra_war_duration",
        question: "How many days did the Kurukshetra war last? (Answer with the number only)",
        expected_answer: "50",
    },
];

/// Look up a built-in scenario by name.
pub fn find_scenario(name: &str) -> Result<&'static Scenario> {
    SCENARIOS
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| ValidatorError::UnknownScenario(name.to_string()))
}

impl Scenario {
    /// Evaluate the scenario; a non-matching answer is
    /// [`ValidatorError::AssertionFailed`].
    pub async fn run(&self, evaluator: &Evaluator) -> Result<()> {
        info!(scenario = self.name, "running scenario");

        if evaluator.evaluate(self.question, self.expected_answer).await? {
            evaluator.reporter().scenario_passed(self.name);
            Ok(())
        } else {
            warn!(scenario = self.name, "answer did not match");
            Err(ValidatorError::AssertionFailed {
                scenario: self.name.to_string(),
            })
        }
    }
}

/// Names of the scenarios that passed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: Vec<&'static str>,
}

/// Run scenarios in order, stopping at the first failure.
pub async fn run_scenarios(evaluator: &Evaluator, scenarios: &[Scenario]) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for scenario in scenarios {
        scenario.run(evaluator).await?;
        summary.passed.push(scenario.name);
    }

    Ok(summary)
}
