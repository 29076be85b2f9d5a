//! Practice and mock-test session records
//!
//! A session is the single persisted record of one run through the app:
//! which topics were chosen, the passages generated so far, the answers
//! given and the running LLM cost.

use super::question::{Answer, Passage, Question};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How the questions are administered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TestMode {
    /// Untimed, one passage at a time with immediate feedback
    Practice,
    /// Timed full-length paper
    Mock,
}

impl fmt::Display for TestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestMode::Practice => f.write_str("practice"),
            TestMode::Mock => f.write_str("mock"),
        }
    }
}

/// Passage topic offered on the topic selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Topic {
    #[serde(rename = "Politics & Governance")]
    Politics,
    #[serde(rename = "Philosophy & Ethics")]
    Philosophy,
    #[serde(rename = "Science & Technology")]
    Science,
    #[serde(rename = "History & Society")]
    History,
    #[serde(rename = "Literature & Arts")]
    Literature,
    #[serde(rename = "Current Affairs")]
    CurrentAffairs,
    #[serde(rename = "Economics")]
    Economics,
    #[serde(rename = "Environment")]
    Environment,
    #[serde(rename = "All Topics")]
    All,
}

impl Topic {
    pub const ALL: [Topic; 9] = [
        Topic::Politics,
        Topic::Philosophy,
        Topic::Science,
        Topic::History,
        Topic::Literature,
        Topic::CurrentAffairs,
        Topic::Economics,
        Topic::Environment,
        Topic::All,
    ];

    /// Display name as shown to candidates
    pub fn name(&self) -> &'static str {
        match self {
            Topic::Politics => "Politics & Governance",
            Topic::Philosophy => "Philosophy & Ethics",
            Topic::Science => "Science & Technology",
            Topic::History => "History & Society",
            Topic::Literature => "Literature & Arts",
            Topic::CurrentAffairs => "Current Affairs",
            Topic::Economics => "Economics",
            Topic::Environment => "Environment",
            Topic::All => "All Topics",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of a full mock paper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockTestConfig {
    pub total_questions: usize,
    pub total_passages: usize,
    pub time_limit_minutes: u64,
    pub min_questions_per_passage: usize,
    pub max_questions_per_passage: usize,
}

impl Default for MockTestConfig {
    fn default() -> Self {
        Self {
            total_questions: 42,
            total_passages: 12,
            time_limit_minutes: 95,
            min_questions_per_passage: 3,
            max_questions_per_passage: 4,
        }
    }
}

impl MockTestConfig {
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_minutes.saturating_mul(60))
    }
}

/// The persisted session record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub mode: TestMode,
    pub current_question: usize,
    pub answers: Vec<Answer>,
    /// Milliseconds left on the mock timer, 0 in practice mode
    pub time_remaining: u64,
    pub selected_topics: Vec<Topic>,
    /// Running LLM cost in dollars
    pub cost: f64,
    pub passages: Vec<Passage>,
    /// Unix epoch milliseconds
    pub start_time: i64,
    pub flagged_questions: Vec<String>,
}

impl SessionData {
    /// Start a fresh session; mock mode gets the full paper time limit
    pub fn new(mode: TestMode, selected_topics: Vec<Topic>, mock: &MockTestConfig) -> Self {
        let time_remaining = match mode {
            TestMode::Mock => mock.time_limit().as_millis() as u64,
            TestMode::Practice => 0,
        };

        Self {
            mode,
            current_question: 0,
            answers: Vec::new(),
            time_remaining,
            selected_topics,
            cost: 0.0,
            passages: Vec::new(),
            start_time: Utc::now().timestamp_millis(),
            flagged_questions: Vec::new(),
        }
    }

    /// Record the candidate's choice for a question and return the answer
    pub fn record_answer(&mut self, question: &Question, selected_answer: usize) -> &Answer {
        self.answers.push(Answer {
            question_id: question.id.clone(),
            selected_answer,
            is_correct: selected_answer == question.correct_answer,
            time_spent: None,
        });
        &self.answers[self.answers.len() - 1]
    }

    /// Flag a question for review, or unflag it if already flagged.
    /// Returns whether the question is flagged afterwards.
    pub fn toggle_flag(&mut self, question_id: &str) -> bool {
        if let Some(pos) = self.flagged_questions.iter().position(|id| id == question_id) {
            self.flagged_questions.remove(pos);
            false
        } else {
            self.flagged_questions.push(question_id.to_string());
            true
        }
    }

    pub fn add_cost(&mut self, amount: f64) {
        self.cost += amount;
    }

    /// All questions across the session's passages, in order
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.passages.iter().flat_map(|p| p.questions.iter())
    }

    /// Final tally as shown on the results screen
    pub fn results(&self) -> SessionResults {
        SessionResults::from_answers(&self.answers)
    }
}

/// Partial update merged over a stored session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionUpdate {
    pub current_question: Option<usize>,
    pub answers: Option<Vec<Answer>>,
    pub time_remaining: Option<u64>,
    pub cost: Option<f64>,
    pub passages: Option<Vec<Passage>>,
    pub flagged_questions: Option<Vec<String>>,
}

impl SessionUpdate {
    /// Apply every field that is set
    pub fn apply(self, session: &mut SessionData) {
        if let Some(v) = self.current_question {
            session.current_question = v;
        }
        if let Some(v) = self.answers {
            session.answers = v;
        }
        if let Some(v) = self.time_remaining {
            session.time_remaining = v;
        }
        if let Some(v) = self.cost {
            session.cost = v;
        }
        if let Some(v) = self.passages {
            session.passages = v;
        }
        if let Some(v) = self.flagged_questions {
            session.flagged_questions = v;
        }
    }
}

/// Correct answers out of answered questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionResults {
    pub correct: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent, 0 when nothing was answered
    pub percentage: u32,
}

impl SessionResults {
    pub fn from_answers(answers: &[Answer]) -> Self {
        let correct = answers.iter().filter(|a| a.is_correct).count();
        let total = answers.len();
        let percentage = if total == 0 {
            0
        } else {
            (correct as f64 / total as f64 * 100.0).round() as u32
        };

        Self {
            correct,
            total,
            percentage,
        }
    }
}
