//! LLM-as-judge: the judge model seam and verdict parsing.

use crate::error::Result;
use crate::llm::LlmClient;
use async_trait::async_trait;
use std::fmt;

/// A model that answers a judging prompt with free text.
#[async_trait]
pub trait JudgeModel: Send + Sync {
    async fn judge(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl JudgeModel for LlmClient {
    async fn judge(&self, prompt: &str) -> Result<String> {
        self.complete(prompt).await
    }
}

/// Classification of a judge reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    NoMatch,
    Indeterminate,
}

impl Verdict {
    /// Trim and lower-case a raw judge reply.
    pub fn normalize(response: &str) -> String {
        response.trim().to_lowercase()
    }

    /// Classify a judge reply by substring containment.
    ///
    /// "true" is checked before "false", so a reply containing both
    /// (e.g. "not true, actually false") is a [`Verdict::Match`].
    pub fn classify(response: &str) -> Self {
        let cleaned = Self::normalize(response);

        if cleaned.contains("true") {
            Verdict::Match
        } else if cleaned.contains("false") {
            Verdict::NoMatch
        } else {
            Verdict::Indeterminate
        }
    }

    /// `Some(matched)` for a decided verdict, `None` when indeterminate.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Verdict::Match => Some(true),
            Verdict::NoMatch => Some(false),
            Verdict::Indeterminate => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Match => "match",
            Verdict::NoMatch => "no match",
            Verdict::Indeterminate => "indeterminate",
        };
        f.write_str(s)
    }
}
