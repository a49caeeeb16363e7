use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct UsageRequest<'a> {
    pub word: &'a str,
    pub sentence: &'a str,
}

/// Evaluator's judgment of how a word was used in a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageVerdict {
    pub correct: bool,
    #[serde(default)]
    pub explanation: String,
}

/// A generated reading article (markdown).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub article: String,
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryRequest<'a> {
    pub article: &'a str,
    pub summary: &'a str,
}

/// One scored category of a summary evaluation, nominally 0..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "score")]
    pub value: i64,
    #[serde(default)]
    pub feedback: String,
}

impl Score {
    pub fn new(value: i64, feedback: impl Into<String>) -> Self {
        Self {
            value,
            feedback: feedback.into(),
        }
    }
}

/// Evaluator's judgment of an article summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEvaluation {
    #[serde(rename = "grammar_spelling")]
    pub grammar: Score,
    pub understanding: Score,
    pub coherence: Score,
}

impl SummaryEvaluation {
    /// Categories in display order with their labels.
    pub fn categories(&self) -> [(&'static str, &Score); 3] {
        [
            ("Grammar & Spelling", &self.grammar),
            ("Understanding", &self.understanding),
            ("Coherence", &self.coherence),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct TenseRequest<'a> {
    pub verb_tense: &'a str,
    pub sentence: &'a str,
}

/// Error payload returned by the service on 4xx/5xx.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
