use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let non_negative = [
        ("correct_points", config.correct_points),
        ("difficult_bonus", config.difficult_bonus),
        ("easy_miss_penalty", config.easy_miss_penalty),
    ];
    for (name, value) in non_negative {
        if let Some(v) = value {
            if v < 0 {
                errors.push(format!("scoring.{}: must be non-negative (got {})", name, v));
            }
        }
    }

    if let Some(threshold) = config.pass_threshold {
        if !(0..=100).contains(&threshold) {
            errors.push(format!(
                "scoring.pass_threshold: must be between 0 and 100 (got {})",
                threshold
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
