//! Batch quality scoring for generated questions

use super::analyzer::analyze_question;
use crate::models::{Question, QuestionType, ValidationResult};
use std::collections::HashSet;

pub const EXTREME_LANGUAGE_PENALTY: i32 = 30;
pub const DIRECT_QUOTE_PENALTY: i32 = 25;
pub const OBVIOUS_WRONG_ANSWER_PENALTY: i32 = 35;
pub const NO_INFERENCE_PENALTY: i32 = 40;

/// Applied once per batch, after averaging
pub const TYPE_VARIETY_PENALTY: f64 = 20.0;

/// Distinct question types a batch of four or more must cover
pub const REQUIRED_TYPE_COUNT: usize = 4;

/// Minimum score for a batch to be valid
pub const PASS_SCORE: u32 = 70;

/// Score a batch of questions and collect every quality issue.
///
/// A batch is valid only when no issue at all was recorded *and* the score
/// reaches [`PASS_SCORE`]. An empty batch scores 0 and is therefore invalid
/// even though it has no issues.
pub fn validate_question_quality(questions: &[Question], passage: &str) -> ValidationResult {
    let mut issues = Vec::new();
    let mut total_score: i32 = 0;

    for (index, question) in questions.iter().enumerate() {
        let number = index + 1;
        let metrics = analyze_question(question, passage);
        let mut question_score: i32 = 100;

        if metrics.has_extreme_language {
            issues.push(format!(
                "Question {}: Contains extreme language that makes wrong answers too obvious",
                number
            ));
            question_score -= EXTREME_LANGUAGE_PENALTY;
        }

        if metrics.has_direct_quotes {
            issues.push(format!(
                "Question {}: Uses direct quotes instead of requiring inference",
                number
            ));
            question_score -= DIRECT_QUOTE_PENALTY;
        }

        if metrics.has_obvious_wrong_answers {
            issues.push(format!(
                "Question {}: Has obviously wrong answers with extreme language",
                number
            ));
            question_score -= OBVIOUS_WRONG_ANSWER_PENALTY;
        }

        if !metrics.requires_inference {
            issues.push(format!(
                "Question {}: Too easy - requires only basic reading comprehension",
                number
            ));
            question_score -= NO_INFERENCE_PENALTY;
        }

        total_score += question_score.max(0);
    }

    let mut average = if questions.is_empty() {
        0.0
    } else {
        f64::from(total_score) / questions.len() as f64
    };

    let unique_types: HashSet<QuestionType> =
        questions.iter().filter_map(|q| q.question_type).collect();
    let required = REQUIRED_TYPE_COUNT.min(questions.len());

    if unique_types.len() < required {
        issues.push(format!(
            "Insufficient question type variety: {}/{} types",
            unique_types.len(),
            required
        ));
        average -= TYPE_VARIETY_PENALTY;
    }

    let score = average.max(0.0).round() as u32;

    ValidationResult {
        is_valid: issues.is_empty() && score >= PASS_SCORE,
        issues,
        score,
    }
}
