// lnat-check - question quality checks for LNAT practice
// Scores generated reading-comprehension questions for authenticity and
// balances them across a fixed set of cognitive question types

pub mod cli;
pub mod models;
pub mod provider;
pub mod session;
pub mod validator;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{Question, QuestionQualityMetrics, QuestionType, ValidationResult};
pub use validator::{
    analyze_question, enforce_question_type_distribution, validate_answer_options,
    validate_question_quality,
};
