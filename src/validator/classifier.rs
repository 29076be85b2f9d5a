//! Keyword-based question type classification

use crate::models::{Question, QuestionType};

/// Checked in order against the lowercased question text; first match wins
const TYPE_RULES: &[(&[&str], QuestionType)] = &[
    (&["attitude", "characterized", "view"], QuestionType::ImplicitViewpoint),
    (&["assumes", "assumption", "presupposes"], QuestionType::UnderlyingAssumption),
    (&["method", "approach", "strategy"], QuestionType::ArgumentStructure),
    (&["suggests", "implies", "likely"], QuestionType::InferenceAnalysis),
    (&["tone", "style"], QuestionType::ToneAnalysis),
];

/// Classify a single question's text, falling back to its batch position
pub fn classify_question(text: &str, index: usize) -> QuestionType {
    let text = text.to_lowercase();

    TYPE_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, question_type)| *question_type)
        .unwrap_or(QuestionType::REQUIRED[index % QuestionType::REQUIRED.len()])
}

/// Label every question in the batch with a type.
///
/// Returns new questions; the input is left untouched. Questions that
/// match no keyword are spread over [`QuestionType::REQUIRED`] by index so
/// a batch of unremarkable stems still covers the required types.
pub fn enforce_question_type_distribution(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| Question {
            question_type: Some(classify_question(&question.text, index)),
            ..question.clone()
        })
        .collect()
}
