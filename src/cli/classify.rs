use super::load_questions;
use crate::validator::enforce_question_type_distribution;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Classify a question batch and print the labelled questions
pub fn run(questions_path: &Path, json: bool) -> Result<()> {
    let questions = load_questions(questions_path)?;
    let classified = enforce_question_type_distribution(&questions);

    if json {
        println!("{}", serde_json::to_string_pretty(&classified)?);
        return Ok(());
    }

    for (index, question) in classified.iter().enumerate() {
        let label = question
            .question_type
            .map(|t| t.name())
            .unwrap_or("Unclassified");
        println!(
            "{:>3}. {} {}",
            index + 1,
            format!("[{}]", label).cyan(),
            question.text
        );
        match question.correct_option() {
            Some(option) => println!("     {} {}", "Answer:".bright_black(), option),
            None => println!("     {}", "Answer key out of range".yellow()),
        }
    }

    Ok(())
}
