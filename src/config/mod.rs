mod schema;

pub use schema::{
    Config, Endpoints, ThemePreference, DEFAULT_ARTICLE_GENERATOR_URL, DEFAULT_READING_TIME,
    DEFAULT_WORD_USAGE_URL, DEFAULT_WRITING_EVALUATOR_URL,
};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::scoring::ScoringConfig;

/// Get the config directory path (~/.config/lexidrill/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("lexidrill"))
}

/// Get the default config file path (~/.config/lexidrill/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/lexidrill/config.yaml), and a missing default file just means
///   built-in defaults.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)
        }
        None => match get_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))
}

impl Config {
    /// Reading countdown length.
    pub fn reading_duration(&self) -> Result<Duration> {
        parse_reading_time(&self.reading_time)
    }

    /// Scoring weights, falling back to the built-in ones.
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}

/// Parse a humantime duration such as "5m" or "90s". Zero is rejected.
pub fn parse_reading_time(s: &str) -> Result<Duration> {
    let duration = humantime::parse_duration(s.trim())
        .with_context(|| format!("Invalid reading time '{}'", s))?;
    if duration.is_zero() {
        anyhow::bail!("Reading time must be greater than zero");
    }
    Ok(duration)
}
