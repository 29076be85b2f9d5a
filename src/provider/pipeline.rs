use super::{LlmProvider, ProviderError};
use crate::models::{QualityConfig, Question, ValidationResult};
use crate::validator::{enforce_question_type_distribution, validate_question_quality};
use tracing::{debug, warn};

/// A question batch together with its quality verdict
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedBatch {
    pub questions: Vec<Question>,
    pub validation: ValidationResult,
    /// Invalid and below the pipeline's warning threshold
    pub flagged: bool,
}

impl PreparedBatch {
    /// Invalid and below the given threshold
    pub fn needs_attention(&self, warn_below: u32) -> bool {
        !self.validation.is_valid && self.validation.score < warn_below
    }
}

/// Classify-then-score pass applied to every generated batch
#[derive(Debug, Clone, Default)]
pub struct QuestionPipeline {
    quality: QualityConfig,
}

impl QuestionPipeline {
    pub fn new(quality: QualityConfig) -> Self {
        Self { quality }
    }

    /// Label question types, then score the labelled batch.
    ///
    /// Low-quality batches are logged and still returned; regenerating is
    /// the caller's decision.
    pub fn prepare(&self, questions: &[Question], passage: &str) -> PreparedBatch {
        let questions = enforce_question_type_distribution(questions);
        self.score(questions, passage)
    }

    /// Score a batch as labelled, without reclassifying it
    pub fn score(&self, questions: Vec<Question>, passage: &str) -> PreparedBatch {
        let validation = validate_question_quality(&questions, passage);

        debug!(
            count = questions.len(),
            score = validation.score,
            valid = validation.is_valid,
            "validated question batch"
        );

        let mut batch = PreparedBatch {
            questions,
            validation,
            flagged: false,
        };
        batch.flagged = batch.needs_attention(self.quality.warn_below);

        if batch.flagged {
            warn!(
                score = batch.validation.score,
                issues = ?batch.validation.issues,
                "Generated questions failed quality validation"
            );
        }

        batch
    }

    /// Ask `provider` for questions on `passage` and prepare them
    pub async fn generate(
        &self,
        provider: &dyn LlmProvider,
        passage: &str,
    ) -> Result<PreparedBatch, ProviderError> {
        let questions = provider.generate_questions(passage).await?;
        debug!(provider = provider.name(), count = questions.len(), "generated questions");
        Ok(self.prepare(&questions, passage))
    }
}
