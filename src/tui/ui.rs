use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::api::SummaryEvaluation;
use crate::flow::{format_clock, word_count, Phase};
use crate::output::{bar_cells, format_points, SUMMARY_EXCERPT_CHARS};
use crate::session::{RoundResult, Verdict};
use crate::tui::app::{App, FlashKind, Game, InputMode, ARTICLE_LOAD_ERROR};
use crate::tui::theme::ThemeColors;

const SPINNER_CHARS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 10 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app);

    // History beside the game when there is room, below it otherwise
    let body = if chunks[1].width >= 90 {
        Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)]).split(chunks[1])
    } else {
        Layout::vertical([Constraint::Fill(3), Constraint::Fill(2)]).split(chunks[1])
    };

    match app.game {
        Game::Words => render_word_game(frame, body[0], app),
        Game::Writing => render_writing_game(frame, body[0], app),
    }
    render_history(frame, body[1], app);
    render_status_bar(frame, chunks[2], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, app);
    }

    // Render loading overlay if loading (appears on top of everything)
    if app.is_loading {
        render_loading_overlay(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let (name, total_label) = match app.game {
        Game::Words => ("lexidrill · Word Usage", "Points"),
        Game::Writing => ("lexidrill · Reading & Writing", "Total Score"),
    };
    let total = format!("{}: {}", total_label, app.session.total());
    let padding_len = (area.width as usize)
        .saturating_sub(name.chars().count() + total.chars().count());

    let title = Line::from(vec![
        Span::styled(name, Style::default().fg(colors.title_color).bold()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(total, Style::default().bold()),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

/// Colored bar of `width` cells for `value` out of `max`
fn bar(value: i64, max: i64, width: usize, fill: Color, colors: &ThemeColors) -> Vec<Span<'static>> {
    let (filled, empty) = bar_cells(value, max, width);
    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled("█".repeat(filled), Style::default().fg(fill)));
    }
    if empty > 0 {
        spans.push(Span::styled("░".repeat(empty), Style::default().fg(colors.bar_empty)));
    }
    spans
}

fn input_box<'a>(app: &'a App, title: &'a str) -> Paragraph<'a> {
    let editing = app.input_mode == InputMode::Editing;
    let border = if editing {
        app.colors.input_active
    } else {
        app.colors.input_inactive
    };
    let text = if editing {
        format!("{}|", app.input)
    } else {
        app.input.clone()
    };
    Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::bordered()
                .title(title)
                .border_style(Style::default().fg(border)),
        )
}

fn render_word_game(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Fill(1),
    ])
    .split(area);

    let word_line = match app.current_word {
        Some(word) => Line::from(vec![
            Span::raw("Use this word in a sentence: "),
            Span::styled(word.text, Style::default().fg(colors.word_color).bold()),
            Span::styled(format!(" ({})", word.difficulty), Style::default().fg(colors.muted)),
        ]),
        None => Line::from(Span::styled("No word available", Style::default().fg(colors.muted))),
    };
    frame.render_widget(Paragraph::new(word_line), chunks[0]);
    frame.render_widget(input_box(app, " Sentence "), chunks[1]);

    if let Some(round) = &app.last_round {
        let result = Paragraph::new(round_lines(round, colors))
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(" Result "));
        frame.render_widget(result, chunks[2]);
    }
}

/// Detail lines for the most recent round
fn round_lines(round: &RoundResult, colors: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match &round.verdict {
        Verdict::Usage(verdict) => {
            let header = if verdict.correct {
                "✓ Correct Usage!"
            } else {
                "✗ Incorrect Usage"
            };
            lines.push(Line::from(Span::styled(
                header,
                Style::default().fg(colors.pass_color(verdict.correct)).bold(),
            )));
            if !verdict.explanation.is_empty() {
                lines.push(Line::from(verdict.explanation.clone()));
            }
            if let Some(punctuation) = round.punctuation.as_ref().filter(|p| !p.is_clean()) {
                lines.push(Line::from(punctuation.explanation()));
            }
            lines.push(Line::from(""));
            for factor in &round.breakdown.factors {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<12}", factor.label), Style::default().fg(colors.muted)),
                    Span::raw(factor.description.clone()),
                ]));
            }
            lines.push(Line::from(Span::styled(
                format!("Points earned this round: {}", format_points(round.points_delta)),
                Style::default().bold(),
            )));
        }
        Verdict::Summary(evaluation) => {
            lines.extend(evaluation_lines(evaluation, colors));
            lines.push(Line::from(Span::styled(
                format!("Average: {}", round.points_delta),
                Style::default().fg(colors.pass_color(round.passed)).bold(),
            )));
        }
    }
    lines
}

fn evaluation_lines(evaluation: &SummaryEvaluation, colors: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (label, score) in evaluation.categories() {
        let mut spans = vec![Span::styled(format!("{:<20}", label), Style::default().bold())];
        spans.extend(bar(score.value, 100, 20, colors.score_color(score.value, 100), colors));
        spans.push(Span::raw(format!(" {}/100", score.value)));
        lines.push(Line::from(spans));
        if !score.feedback.is_empty() {
            lines.push(Line::from(Span::styled(
                score.feedback.clone(),
                Style::default().fg(colors.muted),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn render_writing_game(frame: &mut Frame, area: Rect, app: &App) {
    match app.exercise.phase() {
        Phase::Loading => render_loading_article(frame, area, app),
        Phase::Reading => render_reading(frame, area, app),
        Phase::Writing => render_writing(frame, area, app),
        Phase::Scored => render_scored(frame, area, app),
    }
}

fn render_loading_article(frame: &mut Frame, area: Rect, app: &App) {
    let text = match &app.article_error {
        Some(_) => Line::from(vec![
            Span::styled(ARTICLE_LOAD_ERROR, Style::default().fg(app.colors.flash_error)),
            Span::raw(" Press r to retry."),
        ]),
        None => Line::from(Span::styled("Loading article...", Style::default().fg(app.colors.muted))),
    };
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(Block::bordered()),
        area,
    );
}

/// Markdown-ish article text: headings styled, markers stripped
fn article_lines(article: &str, colors: &ThemeColors) -> Vec<Line<'static>> {
    article
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            if trimmed.starts_with('#') {
                Line::from(Span::styled(
                    trimmed.trim_start_matches('#').trim().to_string(),
                    colors.heading_style,
                ))
            } else {
                Line::from(line.replace("**", ""))
            }
        })
        .collect()
}

fn render_reading(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let now = Instant::now();
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).split(area);

    let remaining = app.exercise.remaining_secs(now).unwrap_or(0);
    let fraction = app.exercise.fraction_remaining(now).unwrap_or(0.0);
    let width = (chunks[0].width as usize).saturating_sub(8);
    let mut timer = vec![Span::styled(
        format!("{}  ", format_clock(remaining)),
        Style::default().bold(),
    )];
    timer.extend(bar(
        (fraction * 1000.0).round() as i64,
        1000,
        width,
        colors.timer_fill,
        colors,
    ));
    frame.render_widget(Paragraph::new(Line::from(timer)), chunks[0]);

    let title = match app.exercise.topic() {
        Some(topic) => format!(" {} ", topic),
        None => " Article ".to_string(),
    };
    let article = Paragraph::new(article_lines(app.exercise.article().unwrap_or_default(), colors))
        .wrap(Wrap { trim: false })
        .scroll((app.article_scroll, 0))
        .block(
            Block::bordered()
                .title(title)
                .title_style(colors.popup_title),
        );
    frame.render_widget(article, chunks[1]);
}

fn render_writing(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);
    frame.render_widget(input_box(app, " Summary "), chunks[0]);
    let count = format!("Words: {}", word_count(&app.input));
    frame.render_widget(
        Paragraph::new(Span::styled(count, Style::default().fg(app.colors.muted))),
        chunks[1],
    );
}

fn render_scored(frame: &mut Frame, area: Rect, app: &App) {
    let lines = match &app.last_round {
        Some(round) => round_lines(round, &app.colors),
        None => Vec::new(),
    };
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(" Evaluation ")),
        area,
    );
}

fn history_lines(app: &App) -> Vec<Line<'static>> {
    let colors = &app.colors;
    let mut lines = Vec::new();
    for round in app.session.history() {
        let mark = if round.passed { "✓" } else { "✗" };
        let style = Style::default().fg(colors.pass_color(round.passed));
        match &round.verdict {
            Verdict::Usage(_) => {
                let word = round.word.map(|w| w.to_string()).unwrap_or_default();
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", mark), style),
                    Span::styled(format!("Word: {}", word), Style::default().bold()),
                ]));
                lines.push(Line::from(round.submission.clone()));
                lines.push(Line::from(Span::styled(
                    format!("Points: {}", format_points(round.points_delta)),
                    Style::default().fg(colors.muted),
                )));
            }
            Verdict::Summary(_) => {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", mark), style),
                    Span::styled("Article Summary ", Style::default().bold()),
                    Span::styled(round.points_delta.to_string(), style.bold()),
                ]));
                lines.push(Line::from(Span::styled(
                    round.excerpt(SUMMARY_EXCERPT_CHARS),
                    Style::default().fg(colors.muted),
                )));
            }
        }
        lines.push(Line::from(""));
    }
    lines
}

fn render_history(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered().title(format!(" History ({}) ", app.session.rounds_played()));
    if app.session.history().is_empty() {
        let empty = Paragraph::new("No rounds played yet.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.colors.muted))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }
    let history = Paragraph::new(history_lines(app))
        .wrap(Wrap { trim: true })
        .scroll((app.history_scroll, 0))
        .block(block);
    frame.render_widget(history, area);
}

fn key_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match (app.game, &app.input_mode) {
        (_, InputMode::Editing) => vec![("Enter", ":submit "), ("Esc", ":stop typing ")],
        (Game::Words, _) => vec![
            ("i", ":type "),
            ("n", ":new word "),
            ("j/k", ":scroll "),
            ("?", ":help "),
            ("q", ":quit"),
        ],
        (Game::Writing, _) => match app.exercise.phase() {
            Phase::Reading => vec![
                ("Enter", ":start writing "),
                ("j/k", ":scroll "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Phase::Writing => vec![("i", ":type "), ("?", ":help "), ("q", ":quit")],
            Phase::Loading | Phase::Scored => vec![
                ("r", ":new article "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        },
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let text = if let Some((ref msg, kind, _)) = app.flash_message {
        let msg_color = match kind {
            FlashKind::Success => colors.flash_success,
            FlashKind::Error => colors.flash_error,
            FlashKind::Info => colors.title_color,
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let mut spans = Vec::new();
        for (i, (key, label)) in key_hints(app).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(key, Style::default().fg(colors.status_key_color)));
            spans.push(Span::raw(label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(colors.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &App) {
    let colors = &app.colors;
    let popup_area = centered_rect_fixed(52, 14, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .title_style(colors.popup_title)
        .border_style(Style::default().fg(colors.popup_border));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(colors.status_key_color).bold();
    let entries: &[(&str, &str)] = match app.game {
        Game::Words => &[
            ("Enter         ", "Evaluate the sentence"),
            ("Esc           ", "Stop typing"),
            ("i             ", "Start typing"),
            ("n             ", "Skip to a new word"),
        ],
        Game::Writing => &[
            ("Enter / w     ", "Start writing now"),
            ("Enter         ", "Submit summary (while typing)"),
            ("Esc           ", "Stop typing"),
            ("r / n         ", "Load a new article"),
        ],
    };

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)]))
        .collect();
    help_lines.push(Line::from(vec![
        Span::styled("j / k         ", key_style),
        Span::raw("Scroll"),
    ]));
    help_lines.push(Line::from(vec![
        Span::styled("?             ", key_style),
        Span::raw("Show this help"),
    ]));
    help_lines.push(Line::from(vec![
        Span::styled("q / Ctrl-c    ", key_style),
        Span::raw("Quit"),
    ]));
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(colors.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}

/// Render the loading spinner overlay
fn render_loading_overlay(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(30, 3, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered().border_style(Style::default().fg(app.colors.popup_border));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let spinner = SPINNER_CHARS[app.spinner_frame % SPINNER_CHARS.len()];
    let text = if app.game == Game::Writing && app.exercise.phase() == Phase::Loading {
        format!("{} Loading article...", spinner)
    } else {
        format!("{} Evaluating...", spinner)
    };

    let loading_text = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.colors.title_color));
    frame.render_widget(loading_text, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Score;
    use crate::scoring::{score_summary, ScoringConfig};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_rect_fixed(30, 10, area), Rect::new(35, 20, 30, 10));
        assert_eq!(centered_rect_fixed(200, 10, area).width, 100);
    }

    #[test]
    fn test_article_lines_strip_markers() {
        let lines = article_lines("## Sleep\nSleep is **vital**.", &ThemeColors::dark());
        assert_eq!(lines[0].to_string(), "Sleep");
        assert_eq!(lines[1].to_string(), "Sleep is vital.");
    }

    #[test]
    fn test_summary_round_lines() {
        let evaluation = SummaryEvaluation {
            grammar: Score::new(90, "Clean."),
            understanding: Score::new(80, ""),
            coherence: Score::new(70, ""),
        };
        let score = score_summary(&evaluation, &ScoringConfig::default());
        let round = RoundResult::summary("s".to_string(), evaluation, score);
        let text: Vec<String> = round_lines(&round, &ThemeColors::dark())
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert!(text[0].starts_with("Grammar & Spelling"));
        assert!(text[0].ends_with(" 90/100"));
        assert_eq!(text[1], "Clean.");
        assert_eq!(text.last().unwrap(), "Average: 80");
    }

    #[test]
    fn test_draw_word_game() {
        let mut app = App::new_words(
            vec![crate::words::WordEntry::new(
                "brave",
                crate::words::Difficulty::Medium,
            )],
            ScoringConfig::default(),
            ThemeColors::dark(),
        )
        .unwrap();
        app.input = "She is brave".to_string();

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Points: 0"));
        assert!(text.contains("brave"));
        assert!(text.contains("She is brave|"));
        assert!(text.contains("No rounds played yet."));
    }

    #[test]
    fn test_draw_reading_phase() {
        let mut app = App::new_writing(
            Duration::from_secs(300),
            ScoringConfig::default(),
            ThemeColors::dark(),
        );
        let _ = app.new_exercise();
        app.apply_outcome(
            crate::tui::Outcome::Article(Ok(crate::api::Article {
                article: "Sleep is essential".to_string(),
                topic: Some("Sleep".to_string()),
            })),
            Instant::now(),
        );

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Total Score: 0"));
        assert!(text.contains("Sleep is essential..."));
        assert!(text.contains("05:00") || text.contains("04:59"));
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let mut app = App::new_writing(
            Duration::from_secs(300),
            ScoringConfig::default(),
            ThemeColors::dark(),
        );
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        assert!(buffer_text(&terminal).contains("Terminal too"));
    }
}
