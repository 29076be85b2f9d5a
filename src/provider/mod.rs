//! LLM provider contract and the post-generation question pipeline
//!
//! Concrete HTTP providers live outside this crate. Anything that can
//! produce passages, questions and feedback implements [`LlmProvider`];
//! [`QuestionPipeline`] applies classification and quality scoring to
//! whatever it generates.

pub mod pipeline;

pub use pipeline::{PreparedBatch, QuestionPipeline};

use crate::models::{Answer, Question, Topic};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to an LLM provider
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("No text generated from {0}")]
    EmptyResponse(String),

    #[error("No valid JSON found in response: {0}")]
    InvalidJson(String),

    #[error("Provider not available: {0}")]
    Unavailable(String),
}

/// Source of generated passages, questions and feedback
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Display name, e.g. "Google AI Studio"
    fn name(&self) -> &str;

    /// Write an argumentative passage on `topic`, optionally in the style
    /// of the given samples
    async fn generate_passage(&self, topic: Topic, samples: &[String]) -> Result<String, ProviderError>;

    /// Write a batch of multiple-choice questions for `passage`
    async fn generate_questions(&self, passage: &str) -> Result<Vec<Question>, ProviderError>;

    /// Comment on the candidate's answers
    async fn generate_feedback(
        &self,
        questions: &[Question],
        answers: &[Answer],
    ) -> Result<String, ProviderError>;

    /// Running cost of all calls made so far, in dollars
    fn cost(&self) -> f64;
}
