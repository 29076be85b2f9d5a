use super::{load_passage, load_questions};
use crate::models::{LnatConfig, QualityConfig, Question};
use crate::provider::{PreparedBatch, QuestionPipeline};
use crate::validator::quality::PASS_SCORE;
use crate::Result;
use colored::Colorize;
use std::env;
use std::path::Path;
use tracing::info;

/// Options for the validate command
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Assign question types before scoring
    pub classify: bool,
    /// Print the result as JSON
    pub json: bool,
}

/// Validate a question batch. Returns whether the batch is valid.
pub fn run(
    questions_path: &Path,
    passage_path: Option<&Path>,
    options: &ValidateOptions,
) -> Result<bool> {
    let project_root = env::current_dir()?;
    let config = LnatConfig::load(&project_root)?;

    let questions = load_questions(questions_path)?;
    let passage = load_passage(passage_path)?;

    let batch = validate_batch(questions, &passage, &config.quality, options.classify);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&batch.validation)?);
    } else {
        print_result(&batch);
    }

    Ok(batch.validation.is_valid)
}

/// Run the batch through the quality pipeline, classifying first if asked
pub fn validate_batch(
    questions: Vec<Question>,
    passage: &str,
    quality: &QualityConfig,
    classify: bool,
) -> PreparedBatch {
    let malformed = questions.iter().filter(|q| !q.is_well_formed()).count();
    if malformed > 0 {
        info!(malformed, "batch contains malformed questions");
    }

    let pipeline = QuestionPipeline::new(quality.clone());
    if classify {
        pipeline.prepare(&questions, passage)
    } else {
        pipeline.score(questions, passage)
    }
}

fn print_result(batch: &PreparedBatch) {
    let result = &batch.validation;
    println!(
        "{}",
        format!("Validated {} question(s)", batch.questions.len()).cyan().bold()
    );
    println!();

    let score = format!("{}/100", result.score);
    let score = if result.score >= PASS_SCORE {
        score.green()
    } else {
        score.red()
    };
    println!("   Score:  {}", score);

    if result.has_issues() {
        println!("   Issues:");
        println!("{}", result.format_issues());
    } else {
        println!("   Issues: {}", "none".bright_black());
    }

    println!();
    if result.is_valid {
        println!("{}", "✅ Question quality validation passed!".green().bold());
    } else {
        println!("{}", "❌ Question quality validation failed!".red().bold());
        if batch.flagged {
            println!("{}", "⚠ Score is below the configured warning threshold".yellow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str) -> Question {
        let options = ["Approval", "Doubt", "Indifference", "Hostility", "Amusement"];
        Question::new("q", text, options.iter().map(|s| s.to_string()).collect(), 0)
    }

    #[test]
    fn test_batch_below_threshold_is_flagged() {
        let quality = QualityConfig { warn_below: 100 };
        let batch = validate_batch(vec![question("Which year?")], "", &quality, true);

        assert_eq!(batch.validation.score, 60);
        assert!(batch.flagged);
    }

    #[test]
    fn test_default_threshold_does_not_flag_sixty() {
        let batch =
            validate_batch(vec![question("Which year?")], "", &QualityConfig::default(), true);
        assert!(!batch.flagged);
    }

    #[test]
    fn test_without_classify_labels_are_left_alone() {
        let batch = validate_batch(
            vec![question("The passage suggests")],
            "",
            &QualityConfig::default(),
            false,
        );

        assert_eq!(batch.questions[0].question_type, None);
        // One untyped question: 0/1 types
        assert_eq!(batch.validation.score, 80);
    }
}
