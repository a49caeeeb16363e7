pub mod config;
pub mod engine;
pub mod punctuation;
pub mod validation;
pub mod writing;

pub use config::ScoringConfig;
pub use engine::{
    calculate_usage_score, score_usage_round, FactorContribution, ScoreBreakdown, UsageScore,
};
pub use punctuation::{check_punctuation, PunctuationAssessment, PunctuationIssue};
pub use validation::validate_scoring;
pub use writing::{average_score, score_summary, SummaryScore};
