pub mod analyzer;
pub mod classifier;
pub mod options;
pub mod patterns;
pub mod quality;

pub use analyzer::analyze_question;
pub use classifier::{classify_question, enforce_question_type_distribution};
pub use options::validate_answer_options;
pub use quality::validate_question_quality;
