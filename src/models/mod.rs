pub mod config;
pub mod passage_bank;
pub mod question;
pub mod session;
pub mod validation;

pub use config::{LnatConfig, QualityConfig};
pub use passage_bank::PassageBank;
pub use question::{parse_question_batch, Answer, Passage, Question, QuestionType};
pub use session::{MockTestConfig, SessionData, SessionResults, SessionUpdate, TestMode, Topic};
pub use validation::{QuestionQualityMetrics, ValidationResult};
