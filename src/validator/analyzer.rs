use super::patterns;
use crate::models::{Question, QuestionQualityMetrics};

/// Compute the quality signals for one question.
///
/// `_passage` is accepted so callers can pass the source text along; the
/// current checks only look at the question itself.
pub fn analyze_question(question: &Question, _passage: &str) -> QuestionQualityMetrics {
    let question_text = question.text.to_lowercase();
    let all_options = question.options.join(" ").to_lowercase();

    let has_extreme_language = patterns::has_extreme_language(&all_options);
    let has_direct_quotes = patterns::has_direct_quote(&question_text);

    // Strong wording on the answer key is tolerated; only distractors count
    let has_obvious_wrong_answers = question
        .options
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != question.correct_answer)
        .any(|(_, option)| patterns::has_extreme_language(option));

    let requires_inference = patterns::has_inference_indicator(&question_text)
        || question_text.contains("attitude")
        || question_text.contains("assumes");

    QuestionQualityMetrics {
        has_extreme_language,
        has_direct_quotes,
        has_obvious_wrong_answers,
        requires_inference,
        question_type_variety: 1,
    }
}
