//! RAG Validator - LLM-judged checks of a retrieval-augmented QA pipeline.
//!
//! Fixed questions are sent to the pipeline under test; a judge model then
//! decides whether each answer matches the known one.
//!
//! # Quick Start
//!
//! ```no_run
//! use rag_validator::{
//!     config::Config,
//!     eval::{ConsoleReporter, Evaluator, SCENARIOS, run_scenarios},
//!     llm::LlmClient,
//!     retrieval::HttpRetriever,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     config.validate()?;
//!
//!     let evaluator = Evaluator::new(
//!         HttpRetriever::new(config.retrieval.clone()),
//!         LlmClient::new(config.llm.clone()),
//!         ConsoleReporter,
//!     );
//!
//!     let matched = evaluator
//!         .evaluate("Who was the eldest Pandava? (Answer with the name only)", "Yudhishthira")
//!         .await?;
//!     println!("matched: {matched}");
//!
//!     run_scenarios(&evaluator, &SCENARIOS).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **Retriever**: the RAG pipeline under test (`HttpRetriever` over HTTP)
//! - **JudgeModel**: compares two answers (`LlmClient`, OpenAI-compatible)
//! - **Evaluator**: one retrieve-then-judge cycle reduced to a boolean
//! - **Reporter**: where prompts and verdicts are shown

pub mod config;
pub mod error;
pub mod eval;
pub mod llm;
pub mod logging;
pub mod retrieval;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, ValidatorError};
pub use eval::{Evaluator, Scenario, Verdict};
pub use llm::LlmClient;
pub use retrieval::{HttpRetriever, Retriever};
