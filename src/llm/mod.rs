//! LLM integration module.
//!
//! Provides an OpenAI-compatible client used as the judge model and
//! the prompt used to compare answers.

mod client;
mod prompts;

pub use client::LlmClient;
pub use prompts::Prompts;
