use serde::{Deserialize, Serialize};
use std::fmt;

/// Cognitive skill a question is meant to exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// "The author's attitude toward X can best be characterized as..."
    ImplicitViewpoint,
    /// "The argument assumes which of the following?"
    UnderlyingAssumption,
    /// "The author's primary method of argument is to..."
    ArgumentStructure,
    /// "The passage suggests that X is most likely..."
    InferenceAnalysis,
    /// Tone or style of the passage
    ToneAnalysis,
}

impl QuestionType {
    /// Types a batch is expected to cover, in fallback assignment order.
    ///
    /// `ToneAnalysis` is deliberately absent: it is only ever assigned by
    /// an explicit keyword match.
    pub const REQUIRED: [QuestionType; 4] = [
        QuestionType::ImplicitViewpoint,
        QuestionType::UnderlyingAssumption,
        QuestionType::ArgumentStructure,
        QuestionType::InferenceAnalysis,
    ];

    /// Wire label, e.g. `implicit_viewpoint`
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::ImplicitViewpoint => "implicit_viewpoint",
            QuestionType::UnderlyingAssumption => "underlying_assumption",
            QuestionType::ArgumentStructure => "argument_structure",
            QuestionType::InferenceAnalysis => "inference_analysis",
            QuestionType::ToneAnalysis => "tone_analysis",
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            QuestionType::ImplicitViewpoint => "Implicit Viewpoint",
            QuestionType::UnderlyingAssumption => "Underlying Assumption",
            QuestionType::ArgumentStructure => "Argument Structure",
            QuestionType::InferenceAnalysis => "Inference Analysis",
            QuestionType::ToneAnalysis => "Tone Analysis",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,

    /// Question stem
    pub text: String,

    /// Answer options in display order (normally five)
    pub options: Vec<String>,

    /// Index into `options`
    pub correct_answer: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    /// Set by the type classifier when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
}

impl Question {
    /// Create a question without explanation or type
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: usize,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            options,
            correct_answer,
            explanation: None,
            question_type: None,
        }
    }

    pub fn with_type(mut self, question_type: QuestionType) -> Self {
        self.question_type = Some(question_type);
        self
    }

    /// Non-empty text, at least one option and an in-range answer key.
    ///
    /// The validators never require this; it is offered to callers that
    /// want to reject malformed generator output up front.
    pub fn is_well_formed(&self) -> bool {
        !self.text.trim().is_empty()
            && !self.options.is_empty()
            && self.correct_answer < self.options.len()
    }

    /// The option text at the answer key, if in range
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

/// A candidate's response to one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub selected_answer: usize,
    pub is_correct: bool,

    /// Milliseconds spent on the question
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<u64>,
}

/// A reading passage together with its questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub id: String,
    pub topic: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Question batch as produced by a generator: either a bare array or
/// wrapped in `{ "questions": [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuestionBatch {
    Bare(Vec<Question>),
    Wrapped { questions: Vec<Question> },
}

/// Parse a JSON question batch in either accepted shape
pub fn parse_question_batch(json: &str) -> serde_json::Result<Vec<Question>> {
    let batch: QuestionBatch = serde_json::from_str(json)?;
    Ok(match batch {
        QuestionBatch::Bare(questions) | QuestionBatch::Wrapped { questions } => questions,
    })
}
