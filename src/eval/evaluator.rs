//! One retrieve-then-judge cycle.

use super::judge::{JudgeModel, Verdict};
use super::report::Reporter;
use crate::error::{Result, ValidatorError};
use crate::llm::Prompts;
use crate::retrieval::Retriever;
use tracing::{debug, info, instrument};

/// Asks the RAG pipeline a question and has the judge model compare its
/// answer with the expected one.
pub struct Evaluator {
    retriever: Box<dyn Retriever>,
    judge: Box<dyn JudgeModel>,
    reporter: Box<dyn Reporter>,
}

impl Evaluator {
    pub fn new(
        retriever: impl Retriever + 'static,
        judge: impl JudgeModel + 'static,
        reporter: impl Reporter + 'static,
    ) -> Self {
        Self {
            retriever: Box::new(retriever),
            judge: Box::new(judge),
            reporter: Box::new(reporter),
        }
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    /// Returns whether the pipeline's answer matches `expected_answer`.
    ///
    /// Collaborator errors propagate unchanged. A judge reply that
    /// contains neither "true" nor "false" is
    /// [`ValidatorError::IndeterminateJudgement`].
    #[instrument(skip(self, expected_answer))]
    pub async fn evaluate(&self, question: &str, expected_answer: &str) -> Result<bool> {
        let actual_answer = self.retriever.answer(question).await?;
        debug!(actual = %actual_answer, "retrieved answer");

        let prompt = Prompts::evaluation(expected_answer, &actual_answer);
        let reply = self.judge.judge(&prompt).await?;
        let cleaned = Verdict::normalize(&reply);

        self.reporter.prompt(&prompt);

        let verdict = Verdict::classify(&reply);
        info!(%verdict, response = %cleaned, "judge replied");

        match verdict.as_bool() {
            Some(matched) => {
                self.reporter.verdict(verdict, &cleaned);
                Ok(matched)
            }
            None => Err(ValidatorError::IndeterminateJudgement { response: cleaned }),
        }
    }
}
