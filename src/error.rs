use thiserror::Error;

/// Errors surfaced to the player during a practice round.
///
/// None of these are fatal: the caller shows the message, leaves the session
/// untouched, and hands control back to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PracticeError {
    /// The evaluation service could not be reached, answered with a
    /// non-success status, or returned something that is not the expected JSON.
    #[error("network error: {0}")]
    Network(String),

    /// The player submitted empty input.
    #[error("{0}")]
    Validation(String),

    /// A word was requested from an empty pool.
    #[error("word pool is empty")]
    EmptyPool,
}

impl PracticeError {
    pub fn is_network(&self) -> bool {
        matches!(self, PracticeError::Network(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, PracticeError::Validation(_))
    }
}

impl From<reqwest::Error> for PracticeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            PracticeError::Network(format!("invalid response body: {}", e))
        } else {
            PracticeError::Network(e.to_string())
        }
    }
}
