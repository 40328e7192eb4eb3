//! In-process collaborators for tests.

use super::judge::{JudgeModel, Verdict};
use super::report::Reporter;
use crate::error::{Result, ValidatorError};
use crate::retrieval::Retriever;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Returns canned answers, per question or as a default.
pub struct FakeRetriever {
    answers: HashMap<String, String>,
    default: std::result::Result<String, String>,
}

impl FakeRetriever {
    pub fn answering(answer: &str) -> Self {
        Self {
            answers: HashMap::new(),
            default: Ok(answer.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answers: HashMap::new(),
            default: Err(message.to_string()),
        }
    }

    pub fn with_answer(mut self, question: &str, answer: &str) -> Self {
        self.answers.insert(question.to_string(), answer.to_string());
        self
    }
}

#[async_trait]
impl Retriever for FakeRetriever {
    async fn answer(&self, question: &str) -> Result<String> {
        if let Some(answer) = self.answers.get(question) {
            return Ok(answer.clone());
        }
        self.default.clone().map_err(ValidatorError::Retrieval)
    }
}

/// Replies from a closure over the prompt and records every prompt.
#[derive(Clone)]
pub struct FakeJudge {
    handler: Arc<dyn Fn(&str) -> std::result::Result<String, String> + Send + Sync>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl FakeJudge {
    pub fn new(handler: impl Fn(&str) -> std::result::Result<String, String> + Send + Sync + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
            prompts: Arc::default(),
        }
    }

    pub fn replying(reply: &str) -> Self {
        let reply = reply.to_string();
        Self::new(move |_| Ok(reply.clone()))
    }

    pub fn failing(message: &str) -> Self {
        let message = message.to_string();
        Self::new(move |_| Err(message.clone()))
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl JudgeModel for FakeJudge {
    async fn judge(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.handler)(prompt).map_err(ValidatorError::LlmApi)
    }
}

/// Captures everything reported.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    prompts: Arc<Mutex<Vec<String>>>,
    verdicts: Arc<Mutex<Vec<(Verdict, String)>>>,
    passed: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn verdicts(&self) -> Vec<(Verdict, String)> {
        self.verdicts.lock().unwrap().clone()
    }

    pub fn passed(&self) -> Vec<String> {
        self.passed.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn prompt(&self, prompt: &str) {
        self.prompts.lock().unwrap().push(prompt.to_string());
    }

    fn verdict(&self, verdict: Verdict, response: &str) {
        self.verdicts
            .lock()
            .unwrap()
            .push((verdict, response.to_string()));
    }

    fn scenario_passed(&self, name: &str) {
        self.passed.lock().unwrap().push(name.to_string());
    }
}
