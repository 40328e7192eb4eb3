//! Prompt templates sent to the judge model.

/// Collection of prompts used for answer judging.
pub struct Prompts;

impl Prompts {
    /// Render the answer-comparison prompt. Both answers are inserted
    /// verbatim; the judge is told to reply with `true` or `false`.
    pub fn evaluation(expected_response: &str, actual_response: &str) -> String {
        format!(
            "\nExpected Response: {expected_response}\n\
             Actual Response: {actual_response}\n\
             ---\n\
             (Answer with 'true' or 'false') Does the actual response match the expected response? \n"
        )
    }

    /// Prompt for checking that the judge endpoint is reachable.
    pub fn connection_check() -> &'static str {
        "Say 'hello' and nothing else."
    }
}
