pub mod audit_options;
pub mod classify;
pub mod passages;
pub mod session;
pub mod validate;

use crate::models::{parse_question_batch, Question};
use crate::{Context, Result};
use std::path::Path;

/// Read a question batch from a JSON file
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read questions file {}", path.display()))?;
    let questions = parse_question_batch(&content)
        .with_context(|| format!("Failed to parse questions in {}", path.display()))?;
    Ok(questions)
}

/// Read the passage text, or an empty passage when none was given
pub fn load_passage(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read passage file {}", path.display())),
        None => Ok(String::new()),
    }
}
