use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How hard a vocabulary word is to use correctly. Affects scoring weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Difficult,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Difficult => "difficult",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "difficult" | "hard" => Ok(Difficulty::Difficult),
            other => Err(format!(
                "unknown difficulty '{}' (expected easy, medium or difficult)",
                other
            )),
        }
    }
}

/// A word from the practice pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub text: &'static str,
    pub difficulty: Difficulty,
}

impl WordEntry {
    pub const fn new(text: &'static str, difficulty: Difficulty) -> Self {
        Self { text, difficulty }
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" difficult ".parse::<Difficulty>(), Ok(Difficulty::Difficult));
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Difficult));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_word_entry_display() {
        let word = WordEntry::new("ephemeral", Difficulty::Difficult);
        assert_eq!(word.to_string(), "ephemeral (difficult)");
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
