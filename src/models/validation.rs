use serde::{Deserialize, Serialize};

/// Quality signals computed for a single question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionQualityMetrics {
    /// Some option uses absolute or high-certainty wording
    pub has_extreme_language: bool,
    /// The stem cites the passage explicitly
    pub has_direct_quotes: bool,
    /// An option other than the answer key uses extreme wording
    pub has_obvious_wrong_answers: bool,
    /// The stem signals that reasoning beyond recall is needed
    pub requires_inference: bool,
    /// Always 1 per question; variety is assessed over the whole batch
    pub question_type_variety: u32,
}

/// Result of validating a batch of questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// No issues were recorded and the score reached the pass mark
    pub is_valid: bool,
    /// Human-readable issues in detection order
    pub issues: Vec<String>,
    /// Quality score, 0-100
    pub score: u32,
}

impl ValidationResult {
    /// Check if there are any issues at all
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Issues mentioning the given 1-based question number
    pub fn issues_for_question(&self, number: usize) -> Vec<&str> {
        let prefix = format!("Question {}:", number);
        self.issues
            .iter()
            .filter(|issue| issue.starts_with(&prefix))
            .map(String::as_str)
            .collect()
    }

    /// Format all issues for display
    pub fn format_issues(&self) -> String {
        self.issues
            .iter()
            .map(|issue| format!("- {}", issue))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
