//! Bank of sample passages used as style references and fallbacks

use super::question::Passage;
use super::session::Topic;
use anyhow::Context;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sample passages as stored on disk: `{ "passages": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassageBank {
    pub passages: Vec<Passage>,
}

impl PassageBank {
    pub fn new(passages: Vec<Passage>) -> Self {
        Self { passages }
    }

    /// Load a passage bank from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read passage bank {}", path.display()))?;
        let bank: PassageBank = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse passage bank {}", path.display()))?;
        Ok(bank)
    }

    /// First passage with exactly this topic
    pub fn by_topic(&self, topic: &str) -> Option<&Passage> {
        self.passages.iter().find(|p| p.topic == topic)
    }

    /// Distinct topics in first-seen order
    pub fn topics(&self) -> Vec<&str> {
        let mut topics: Vec<&str> = Vec::new();
        for passage in &self.passages {
            if !topics.contains(&passage.topic.as_str()) {
                topics.push(&passage.topic);
            }
        }
        topics
    }

    /// Passages on any of `topics`.
    ///
    /// An empty list or one containing "All Topics" selects every passage.
    pub fn filter<S: AsRef<str>>(&self, topics: &[S]) -> Vec<&Passage> {
        let wildcard = topics.is_empty() || topics.iter().any(|t| t.as_ref() == Topic::All.name());

        self.passages
            .iter()
            .filter(|p| wildcard || topics.iter().any(|t| t.as_ref() == p.topic))
            .collect()
    }

    /// A random passage on any of `topics`, or `None` if nothing matches
    pub fn random<S, R>(&self, topics: &[S], rng: &mut R) -> Option<&Passage>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        self.filter(topics).choose(rng).copied()
    }
}
