use serde::Serialize;

/// A punctuation rule the sentence failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PunctuationIssue {
    MissingCapital,
    MissingTerminal,
}

impl PunctuationIssue {
    /// Short message, as stored in the assessment.
    pub fn message(&self) -> &'static str {
        match self {
            PunctuationIssue::MissingCapital => "needs capital start",
            PunctuationIssue::MissingTerminal => "needs terminal punctuation",
        }
    }

    /// Full sentence shown to the player.
    pub fn hint(&self) -> &'static str {
        match self {
            PunctuationIssue::MissingCapital => "Sentence should start with a capital letter.",
            PunctuationIssue::MissingTerminal => {
                "Sentence should end with a punctuation mark (. ! ?)."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PunctuationAssessment {
    /// Number of checks passed, 0..=2
    pub score: u8,
    /// Failed checks, capitalization first
    pub issues: Vec<PunctuationIssue>,
}

impl PunctuationAssessment {
    pub fn messages(&self) -> Vec<&'static str> {
        self.issues.iter().map(|i| i.message()).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// All failed-check hints joined into one line, empty when clean.
    pub fn explanation(&self) -> String {
        self.issues
            .iter()
            .map(|i| i.hint())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const TERMINAL_MARKS: [char; 3] = ['.', '!', '?'];

/// Check a sentence for a capitalized start and terminal punctuation.
///
/// Surrounding whitespace is ignored. The two rules are independent. A first
/// character that has no case (a digit, a quote) equals its own upper-case
/// form and therefore passes the capitalization rule. An empty sentence fails
/// both.
pub fn check_punctuation(sentence: &str) -> PunctuationAssessment {
    let sentence = sentence.trim();
    let mut score = 0;
    let mut issues = Vec::new();

    let capitalized = sentence
        .chars()
        .next()
        .is_some_and(|c| c.to_uppercase().eq(std::iter::once(c)));
    if capitalized {
        score += 1;
    } else {
        issues.push(PunctuationIssue::MissingCapital);
    }

    if sentence.ends_with(TERMINAL_MARKS) {
        score += 1;
    } else {
        issues.push(PunctuationIssue::MissingTerminal);
    }

    PunctuationAssessment { score, issues }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_without_terminal() {
        let result = check_punctuation("hello");
        assert_eq!(result.score, 0);
        assert_eq!(
            result.messages(),
            vec!["needs capital start", "needs terminal punctuation"]
        );
    }

    #[test]
    fn test_clean_sentence() {
        let result = check_punctuation("Hello.");
        assert_eq!(result.score, 2);
        assert!(result.messages().is_empty());
        assert!(result.is_clean());
        assert_eq!(result.explanation(), "");
    }

    #[test]
    fn test_missing_terminal_only() {
        let result = check_punctuation("Hello");
        assert_eq!(result.score, 1);
        assert_eq!(result.messages(), vec!["needs terminal punctuation"]);
    }

    #[test]
    fn test_missing_capital_only() {
        let result = check_punctuation("what a day!");
        assert_eq!(result.score, 1);
        assert_eq!(result.issues, vec![PunctuationIssue::MissingCapital]);
    }

    #[test]
    fn test_question_mark_and_trailing_whitespace() {
        let result = check_punctuation("Is it raining?   ");
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_empty_sentence_fails_both() {
        let result = check_punctuation("");
        assert_eq!(result.score, 0);
        assert_eq!(result.issues.len(), 2);
    }

    #[test]
    fn test_caseless_first_character_counts_as_capital() {
        assert_eq!(check_punctuation("42 is the answer.").score, 2);
        assert_eq!(check_punctuation("\"quoted\" words.").score, 2);
    }

    #[test]
    fn test_non_ascii_capital() {
        assert_eq!(check_punctuation("Émile left.").score, 2);
        assert_eq!(check_punctuation("émile left.").score, 1);
    }

    #[test]
    fn test_explanation_joins_hints() {
        let result = check_punctuation("hello");
        assert_eq!(
            result.explanation(),
            "Sentence should start with a capital letter. Sentence should end with a punctuation mark (. ! ?)."
        );
    }

    #[test]
    fn test_leading_whitespace_does_not_hide_lowercase() {
        let result = check_punctuation("  hello.");
        assert_eq!(result.score, 1);
        assert_eq!(result.issues, vec![PunctuationIssue::MissingCapital]);
        assert_eq!(check_punctuation("  Hello.  ").score, 2);
    }
}
