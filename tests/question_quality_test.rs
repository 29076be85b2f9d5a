//! Integration tests for question validation and classification
//!
//! Exercises the public pipeline the way a generator would use it:
//! - Per-question quality signals
//! - Batch scoring, issue messages and validity
//! - Type classification priority and fallback
//! - Answer option auditing

use lnat_check::models::{Question, QuestionType};
use lnat_check::provider::QuestionPipeline;
use lnat_check::{
    analyze_question, enforce_question_type_distribution, validate_answer_options,
    validate_question_quality,
};

const PASSAGE: &str = "Reformers argue that the franchise should be widened gradually. \
Critics reply that gradualism merely postpones a reckoning.";

fn options(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

fn balanced_options() -> Vec<String> {
    options(&[
        "Gradual reform is preferable",
        "Reform should be deferred",
        "The critics misread history",
        "Reform is a moral question",
        "The franchise is a side issue",
    ])
}

fn neutral_options() -> Vec<String> {
    options(&[
        "A cautious endorsement",
        "Measured scepticism",
        "Reluctant acceptance",
        "Qualified admiration",
        "Detached curiosity",
    ])
}

fn question(id: &str, text: &str) -> Question {
    Question::new(id, text, neutral_options(), 0)
}

#[test]
fn test_no_extreme_words_means_no_extreme_language() {
    let q = question("q1", "The passage suggests that the critics");
    let metrics = analyze_question(&q, PASSAGE);
    assert!(!metrics.has_extreme_language);
    assert!(!metrics.has_obvious_wrong_answers);
}

#[test]
fn test_according_to_the_passage_any_case() {
    for text in [
        "According to the passage, reformers want what?",
        "according to the passage, why?",
        "Which is true ACCORDING TO THE PASSAGE?",
    ] {
        assert!(analyze_question(&question("q", text), PASSAGE).has_direct_quotes);
    }
}

#[test]
fn test_extreme_wording_only_penalised_on_distractors() {
    let mut texts = [
        "A cautious endorsement",
        "Measured scepticism",
        "Reluctant acceptance",
        "Qualified admiration",
        "Detached curiosity",
    ];
    texts[3] = "Reform must come now";

    let on_answer = Question::new("q", "The author most likely", options(&texts), 3);
    assert!(!analyze_question(&on_answer, PASSAGE).has_obvious_wrong_answers);

    for correct in [0, 1, 2, 4] {
        let on_distractor = Question::new("q", "The author most likely", options(&texts), correct);
        assert!(analyze_question(&on_distractor, PASSAGE).has_obvious_wrong_answers);
    }
}

#[test]
fn test_certainty_on_answer_key_still_costs_extreme_language_points() {
    // Generators are told to put certainty wording on correct answers to
    // avoid the distractor check; the option-level check still sees it.
    let mut opts = neutral_options();
    opts[0] = "Reform will certainly follow".to_string();
    let q = Question::new("q", "The passage suggests", opts, 0)
        .with_type(QuestionType::InferenceAnalysis);

    let result = validate_question_quality(&[q], PASSAGE);
    assert_eq!(result.score, 70);
    assert_eq!(
        result.issues,
        vec!["Question 1: Contains extreme language that makes wrong answers too obvious"]
    );
    assert!(!result.is_valid);
}

#[test]
fn test_empty_batch() {
    let result = validate_question_quality(&[], PASSAGE);
    assert!(!result.is_valid);
    assert!(result.issues.is_empty());
    assert_eq!(result.score, 0);
}

#[test]
fn test_four_distinct_types_no_variety_issue() {
    let questions: Vec<Question> = QuestionType::REQUIRED
        .iter()
        .enumerate()
        .map(|(i, t)| question(&format!("q{}", i), "The passage suggests").with_type(*t))
        .collect();

    let result = validate_question_quality(&questions, PASSAGE);
    assert!(result.issues.is_empty());
    assert_eq!(result.score, 100);
    assert!(result.is_valid);
}

#[test]
fn test_four_shared_types_one_variety_issue() {
    let questions: Vec<Question> = (0..4)
        .map(|i| {
            question(&format!("q{}", i), "The passage suggests")
                .with_type(QuestionType::ArgumentStructure)
        })
        .collect();

    let result = validate_question_quality(&questions, PASSAGE);
    let variety: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.starts_with("Insufficient question type variety"))
        .collect();

    assert_eq!(variety, vec!["Insufficient question type variety: 1/4 types"]);
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.score, 100 - 20);
    assert!(!result.is_valid);
}

#[test]
fn test_issue_messages_name_question_numbers() {
    let questions = vec![
        question("q1", "The passage suggests").with_type(QuestionType::ImplicitViewpoint),
        question("q2", "The passage states that reform is what?")
            .with_type(QuestionType::UnderlyingAssumption),
    ];

    let result = validate_question_quality(&questions, PASSAGE);
    assert!(result
        .issues
        .contains(&"Question 2: Uses direct quotes instead of requiring inference".to_string()));
    assert!(result
        .issues
        .contains(&"Question 2: Too easy - requires only basic reading comprehension".to_string()));
    assert!(result.issues_for_question(1).is_empty());
    // (100 + 35) / 2 = 67.5
    assert_eq!(result.score, 68);
}

#[test]
fn test_assumes_question_is_underlying_assumption() {
    let out = enforce_question_type_distribution(&[question(
        "q1",
        "The argument assumes which of the following?",
    )]);
    assert_eq!(out[0].question_type, Some(QuestionType::UnderlyingAssumption));
}

#[test]
fn test_unmatched_questions_follow_fallback_cycle() {
    let batch: Vec<Question> = (0..4)
        .map(|i| question(&format!("q{}", i), "Which of these is correct?"))
        .collect();
    let out = enforce_question_type_distribution(&batch);

    let labels: Vec<&str> = out
        .iter()
        .map(|q| q.question_type.map(|t| t.as_str()).unwrap_or(""))
        .collect();
    assert_eq!(
        labels,
        vec![
            "implicit_viewpoint",
            "underlying_assumption",
            "argument_structure",
            "inference_analysis"
        ]
    );
}

#[test]
fn test_option_length_examples() {
    let even = options(&["aaaaaaaaaa", "bbbbbbbbbb", "ccccccccccc", "ddddddddd", "eeeeeeeeee"]);
    assert!(validate_answer_options(&even).is_empty());

    let long = "f".repeat(40);
    let uneven = options(&["aaaaa", "bbbbb", "ccccc", "ddddd", &long]);
    assert_eq!(
        validate_answer_options(&uneven),
        vec!["Answer options vary significantly in length - may indicate obvious wrong answers"]
    );
}

#[test]
fn test_balanced_options_have_no_issues() {
    assert!(validate_answer_options(&balanced_options()).is_empty());
}

#[test]
fn test_classify_then_score_is_idempotent() {
    let batch = vec![
        question("q1", "The author's attitude toward reform can best be characterized as"),
        question("q2", "According to the passage, critics believe what?"),
        Question::new("q3", "Which claim is made?", balanced_options(), 1),
        question("q4", "The tone of the final sentence is"),
    ];

    let first = enforce_question_type_distribution(&batch);
    let first_result = validate_question_quality(&first, PASSAGE);
    let second = enforce_question_type_distribution(&batch);
    let second_result = validate_question_quality(&second, PASSAGE);

    assert_eq!(first, second);
    assert_eq!(first_result, second_result);

    let pipeline = QuestionPipeline::default();
    assert_eq!(pipeline.prepare(&batch, PASSAGE), pipeline.prepare(&batch, PASSAGE));
}
