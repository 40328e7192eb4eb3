//! Answer evaluation.
//!
//! This module provides:
//! - LLM-as-judge verdict parsing
//! - The evaluator that ties retrieval and judging together
//! - Console reporting
//! - The built-in scenarios and their runner

pub mod evaluator;
pub mod judge;
pub mod report;
pub mod scenario;

#[cfg(test)]
pub(crate) mod testing;

pub use evaluator::Evaluator;
pub use judge::{JudgeModel, Verdict};
pub use report::{ConsoleReporter, Reporter};
pub use scenario::{RunSummary, SCENARIOS, Scenario, find_scenario, run_scenarios};
