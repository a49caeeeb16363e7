use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::api::{SummaryEvaluation, UsageVerdict};
use crate::scoring::{PunctuationAssessment, ScoreBreakdown};
use crate::session::{History, RoundResult, Verdict};

/// Characters of a summary shown in history lines
pub const SUMMARY_EXCERPT_CHARS: usize = 100;

const BAR_WIDTH: usize = 20;
const MAX_WRAP_WIDTH: usize = 100;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Split a bar of `width` cells into (filled, empty) for `value` out of `max`.
/// Values outside `0..=max` are pinned to the ends.
pub fn bar_cells(value: i64, max: i64, width: usize) -> (usize, usize) {
    let ratio = if max > 0 {
        (value as f64 / max as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    (filled, width.saturating_sub(filled))
}

/// Text score bar, e.g. `████████░░ 80/100`
pub fn score_bar(value: i64, width: usize) -> String {
    let (filled, empty) = bar_cells(value, 100, width);
    format!("{}{} {}/100", "█".repeat(filled), "░".repeat(empty), value)
}

/// Signed point delta: "+17", "-7", "0"
pub fn format_points(points: i64) -> String {
    if points == 0 {
        "0".to_string()
    } else {
        format!("{:+}", points)
    }
}

fn mark(passed: bool) -> &'static str {
    if passed {
        "✓"
    } else {
        "✗"
    }
}

/// Greedy word wrap at `width` columns. Long words get a line of their own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}

/// Wrap for the current terminal, indenting every line by `indent` spaces.
fn wrap_for_terminal(text: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    match get_terminal_width() {
        Some(width) => {
            let width = width.min(MAX_WRAP_WIDTH).saturating_sub(indent).max(20);
            wrap_text(text, width)
                .into_iter()
                .map(|line| format!("{}{}", pad, line))
                .collect::<Vec<_>>()
                .join("\n")
        }
        None => text
            .lines()
            .map(|line| format!("{}{}", pad, line))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Punctuation result for the `check` command
pub fn format_punctuation(assessment: &PunctuationAssessment, use_colors: bool) -> String {
    let header = format!("Punctuation: {}/2", assessment.score);
    let mut lines = vec![if use_colors {
        if assessment.is_clean() {
            header.green().to_string()
        } else {
            header.yellow().to_string()
        }
    } else {
        header
    }];
    for issue in &assessment.issues {
        lines.push(format!("  - {}", issue.hint()));
    }
    lines.join("\n")
}

fn format_breakdown(breakdown: &ScoreBreakdown, use_colors: bool) -> Vec<String> {
    breakdown
        .factors
        .iter()
        .map(|factor| {
            let label = format!("{:<12}", factor.label);
            if use_colors {
                format!("  {} {}", label.dimmed(), factor.description)
            } else {
                format!("  {} {}", label, factor.description)
            }
        })
        .collect()
}

/// Header and explanation for a yes/no verdict (usage or tense check)
pub fn format_verdict(verdict: &UsageVerdict, use_colors: bool) -> String {
    let header = if verdict.correct {
        "✓ Correct Usage!"
    } else {
        "✗ Incorrect Usage"
    };
    let header = match (use_colors, verdict.correct) {
        (true, true) => header.green().bold().to_string(),
        (true, false) => header.red().bold().to_string(),
        (false, _) => header.to_string(),
    };
    if verdict.explanation.trim().is_empty() {
        header
    } else {
        format!("{}\n{}", header, wrap_for_terminal(&verdict.explanation, 2))
    }
}

fn format_usage_round(
    round: &RoundResult,
    verdict: &UsageVerdict,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();
    if let Some(word) = &round.word {
        let word_line = format!("Word: {}", word);
        lines.push(if use_colors {
            word_line.bold().to_string()
        } else {
            word_line
        });
    }
    lines.push(format_verdict(verdict, use_colors));
    if let Some(punctuation) = round.punctuation.as_ref().filter(|p| !p.is_clean()) {
        lines.push(format!("  {}", punctuation.explanation()));
    }
    lines.extend(format_breakdown(&round.breakdown, use_colors));
    let points = format!(
        "Points earned this round: {}",
        format_points(round.points_delta)
    );
    lines.push(if use_colors {
        points.bold().to_string()
    } else {
        points
    });
    lines.join("\n")
}

/// The three category bars with feedback, then the average
pub fn format_evaluation(evaluation: &SummaryEvaluation, use_colors: bool) -> String {
    let mut lines = Vec::new();
    for (label, score) in evaluation.categories() {
        let bar = score_bar(score.value, BAR_WIDTH);
        let bar = if use_colors {
            color_by_score(&bar, score.value)
        } else {
            bar
        };
        lines.push(format!("{:<20}{}", label, bar));
        if !score.feedback.trim().is_empty() {
            lines.push(wrap_for_terminal(&score.feedback, 2));
        }
    }
    lines.join("\n")
}

fn color_by_score(text: &str, value: i64) -> String {
    if value >= 70 {
        text.green().to_string()
    } else if value >= 40 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

fn format_summary_round(
    round: &RoundResult,
    evaluation: &SummaryEvaluation,
    use_colors: bool,
) -> String {
    let average = format!(
        "{} Average: {}",
        mark(round.passed),
        round.points_delta
    );
    let average = match (use_colors, round.passed) {
        (true, true) => average.green().bold().to_string(),
        (true, false) => average.red().bold().to_string(),
        (false, _) => average,
    };
    format!("{}\n{}", format_evaluation(evaluation, use_colors), average)
}

/// Full result of one round, as shown right after scoring
pub fn format_round(round: &RoundResult, use_colors: bool) -> String {
    match &round.verdict {
        Verdict::Usage(verdict) => format_usage_round(round, verdict, use_colors),
        Verdict::Summary(evaluation) => format_summary_round(round, evaluation, use_colors),
    }
}

/// One history line
pub fn format_history_line(round: &RoundResult, use_colors: bool) -> String {
    let line = match &round.verdict {
        Verdict::Usage(_) => {
            let word = round
                .word
                .map(|w| w.to_string())
                .unwrap_or_default();
            format!(
                "{} {} | {} | {}",
                mark(round.passed),
                word,
                round.submission,
                format_points(round.points_delta)
            )
        }
        Verdict::Summary(_) => format!(
            "{} Article Summary {:>3} | {}",
            mark(round.passed),
            round.points_delta,
            round.excerpt(SUMMARY_EXCERPT_CHARS)
        ),
    };
    match (use_colors, round.passed) {
        (true, true) => line.green().to_string(),
        (true, false) => line.red().to_string(),
        (false, _) => line,
    }
}

/// History, newest first
pub fn format_history(history: &History, use_colors: bool) -> String {
    if history.is_empty() {
        return "No rounds played yet.".to_string();
    }
    history
        .iter()
        .map(|round| format_history_line(round, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}
