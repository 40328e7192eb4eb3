//! Access to the RAG pipeline under test.
//!
//! The pipeline is a black box: a question goes in, an answer string comes
//! out. [`HttpRetriever`] reaches one served over HTTP.

use crate::config::RetrievalConfig;
use crate::error::{Result, ValidatorError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Answers questions using the RAG pipeline being validated.
#[async_trait]
pub trait Retriever: Send + Sync {
    async fn answer(&self, question: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QueryResponse {
    Object {
        #[serde(alias = "response")]
        answer: String,
    },
    Text(String),
}

/// Retriever that POSTs `{"question": ...}` to a query endpoint.
///
/// A JSON reply with an `answer` (or `response`) field yields that field,
/// a bare JSON string yields its contents, and any other successful body
/// is taken as the answer text itself. The answer is always trimmed.
#[derive(Clone)]
pub struct HttpRetriever {
    client: Client,
    endpoint: String,
}

impl HttpRetriever {
    pub fn new(config: RetrievalConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint,
        }
    }

    fn extract_answer(body: &str) -> String {
        let answer = match serde_json::from_str::<QueryResponse>(body) {
            Ok(QueryResponse::Object { answer }) | Ok(QueryResponse::Text(answer)) => answer,
            Err(_) => body.to_string(),
        };
        answer.trim().to_string()
    }
}

#[async_trait]
impl Retriever for HttpRetriever {
    async fn answer(&self, question: &str) -> Result<String> {
        debug!(endpoint = %self.endpoint, question, "querying RAG pipeline");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&QueryRequest { question })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ValidatorError::Retrieval(format!(
                "Request failed ({}): {}",
                status, body
            )));
        }

        let answer = Self::extract_answer(&body);
        debug!(answer = %answer, "RAG pipeline answered");
        Ok(answer)
    }
}
