use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

pub const DEFAULT_WORD_USAGE_URL: &str =
    "https://t82wqf0so0.execute-api.us-east-1.amazonaws.com/Prod/evaluator";
pub const DEFAULT_ARTICLE_GENERATOR_URL: &str =
    "https://qrzq57k6qc.execute-api.us-east-1.amazonaws.com/Prod/api/v1/reading-generator";
pub const DEFAULT_WRITING_EVALUATOR_URL: &str =
    "https://qrzq57k6qc.execute-api.us-east-1.amazonaws.com/Prod/api/v1/writing-evaluator";
pub const DEFAULT_READING_TIME: &str = "5m";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub endpoints: Endpoints,

    /// How long the article stays up before writing starts (humantime, e.g. "5m", "90s")
    #[serde(default = "default_reading_time")]
    pub reading_time: String,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    #[serde(default)]
    pub theme: ThemePreference,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            reading_time: default_reading_time(),
            scoring: None,
            theme: ThemePreference::default(),
        }
    }
}

fn default_reading_time() -> String {
    DEFAULT_READING_TIME.to_string()
}

/// Evaluation service URLs. Any omitted entry keeps its default.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Endpoints {
    pub word_usage: String,
    pub article_generator: String,
    pub writing_evaluator: String,
    /// No public default; the `tense` command needs this set
    pub tense_evaluator: Option<String>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            word_usage: DEFAULT_WORD_USAGE_URL.to_string(),
            article_generator: DEFAULT_ARTICLE_GENERATOR_URL.to_string(),
            writing_evaluator: DEFAULT_WRITING_EVALUATOR_URL.to_string(),
            tense_evaluator: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Dark,
    Light,
}
