use std::io;
use std::time::{Duration, Instant};

use tracing::debug;

use super::task::{Outcome, Request};
use super::theme::ThemeColors;
use crate::error::PracticeError;
use crate::flow::{Phase, WritingExercise};
use crate::render::ResultRenderer;
use crate::rounds::{
    apply_summary_evaluation, apply_usage_verdict, validate_submission, EMPTY_SENTENCE,
    EMPTY_SUMMARY,
};
use crate::scoring::ScoringConfig;
use crate::session::{RoundResult, Session, Verdict};
use crate::words::{select_word, WordEntry};

const FLASH_DURATION: Duration = Duration::from_secs(3);

pub const ARTICLE_LOAD_ERROR: &str = "Error loading article. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    Words,
    Writing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Info,
    Success,
    Error,
}

pub struct App {
    pub game: Game,
    pub session: Session,
    pub scoring: ScoringConfig,
    pub colors: ThemeColors,
    pub input_mode: InputMode,
    pub input: String,
    pub pool: Vec<WordEntry>,
    pub current_word: Option<WordEntry>,
    pub exercise: WritingExercise,
    pub last_round: Option<RoundResult>,
    pub article_error: Option<String>,
    pub flash_message: Option<(String, FlashKind, Instant)>,
    pub is_loading: bool,
    pub spinner_frame: usize,
    pub article_scroll: u16,
    pub history_scroll: u16,
    pub should_quit: bool,
}

impl App {
    fn new(game: Game, scoring: ScoringConfig, colors: ThemeColors, reading_time: Duration) -> Self {
        Self {
            game,
            session: Session::new(),
            scoring,
            colors,
            input_mode: InputMode::Normal,
            input: String::new(),
            pool: Vec::new(),
            current_word: None,
            exercise: WritingExercise::new(reading_time),
            last_round: None,
            article_error: None,
            flash_message: None,
            is_loading: false,
            spinner_frame: 0,
            article_scroll: 0,
            history_scroll: 0,
            should_quit: false,
        }
    }

    /// Word-usage game over `pool`, with the first word already drawn.
    pub fn new_words(
        pool: Vec<WordEntry>,
        scoring: ScoringConfig,
        colors: ThemeColors,
    ) -> Result<Self, PracticeError> {
        let mut app = Self::new(Game::Words, scoring, colors, Duration::ZERO);
        app.current_word = Some(select_word(&pool)?);
        app.pool = pool;
        app.input_mode = InputMode::Editing;
        Ok(app)
    }

    /// Writing game. Call [`App::new_exercise`] to fetch the first article.
    pub fn new_writing(reading_time: Duration, scoring: ScoringConfig, colors: ThemeColors) -> Self {
        Self::new(Game::Writing, scoring, colors, reading_time)
    }

    pub fn show_flash(&mut self, msg: String, kind: FlashKind) {
        self.flash_message = Some((msg, kind, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, _, timestamp)) = self.flash_message {
            if timestamp.elapsed() >= FLASH_DURATION {
                self.flash_message = None;
            }
        }
    }

    /// Advance the loading spinner animation frame
    pub fn advance_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    /// Close help, back to typing where there is something to type into.
    pub fn dismiss_help(&mut self) {
        self.input_mode = if self.accepts_text() {
            InputMode::Editing
        } else {
            InputMode::Normal
        };
    }

    /// Whether the current screen has a text box.
    pub fn accepts_text(&self) -> bool {
        match self.game {
            Game::Words => true,
            Game::Writing => self.exercise.phase() == Phase::Writing,
        }
    }

    pub fn start_editing(&mut self) {
        if self.accepts_text() {
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Draw the next word. An empty pool is reported, not fatal.
    pub fn next_word(&mut self) {
        match select_word(&self.pool) {
            Ok(word) => {
                debug!(word = word.text, "new word");
                self.current_word = Some(word);
            }
            Err(e) => {
                let _ = self.render_error(&e);
            }
        }
    }

    /// Per-tick housekeeping: flash expiry, spinner, reading countdown.
    pub fn tick(&mut self, now: Instant) {
        self.update_flash();
        if self.is_loading {
            self.advance_spinner();
        }
        if self.game == Game::Writing && self.exercise.tick(now) {
            self.enter_writing();
            self.show_flash("Time's up! Start writing.".to_string(), FlashKind::Info);
        }
    }

    /// Player is done reading.
    pub fn start_writing(&mut self) {
        if self.exercise.start_writing() {
            self.enter_writing();
        }
    }

    fn enter_writing(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Editing;
    }

    /// Throw away the current exercise and ask for a new article.
    pub fn new_exercise(&mut self) -> Option<Request> {
        if self.game != Game::Writing || self.is_loading {
            return None;
        }
        self.exercise.reset();
        self.input.clear();
        self.input_mode = InputMode::Normal;
        self.last_round = None;
        self.article_error = None;
        self.article_scroll = 0;
        self.is_loading = true;
        Some(Request::Article)
    }

    /// Validate the text box and build the evaluation request.
    /// Nothing is sent while another request is in flight.
    pub fn submit(&mut self) -> Option<Request> {
        if self.is_loading {
            self.show_flash("Still evaluating...".to_string(), FlashKind::Info);
            return None;
        }
        let request = match self.game {
            Game::Words => {
                let word = self.current_word?;
                match validate_submission(&self.input, EMPTY_SENTENCE) {
                    Ok(sentence) => Request::Usage {
                        word,
                        sentence: sentence.to_string(),
                    },
                    Err(e) => {
                        let _ = self.render_error(&e);
                        return None;
                    }
                }
            }
            Game::Writing => {
                if self.exercise.phase() != Phase::Writing {
                    return None;
                }
                let article = self.exercise.article().unwrap_or_default().to_string();
                match validate_submission(&self.input, EMPTY_SUMMARY) {
                    Ok(summary) => Request::Summary {
                        article,
                        summary: summary.to_string(),
                    },
                    Err(e) => {
                        let _ = self.render_error(&e);
                        return None;
                    }
                }
            }
        };
        self.is_loading = true;
        Some(request)
    }

    /// Fold a finished request back into the game.
    pub fn apply_outcome(&mut self, outcome: Outcome, now: Instant) {
        self.is_loading = false;
        match outcome {
            Outcome::Usage {
                word,
                sentence,
                result,
            } => {
                match result {
                    Ok(verdict) => {
                        let round = apply_usage_verdict(
                            &mut self.session,
                            word,
                            &sentence,
                            verdict,
                            &self.scoring,
                        );
                        self.show_round(&round);
                    }
                    Err(e) => {
                        let _ = self.render_error(&e);
                    }
                }
                // A fresh word either way
                self.input.clear();
                self.next_word();
            }
            Outcome::Article(Ok(article)) => {
                self.article_error = None;
                self.exercise.article_loaded(article, now);
            }
            Outcome::Article(Err(e)) => {
                self.article_error = Some(ARTICLE_LOAD_ERROR.to_string());
                let _ = self.render_error(&e);
            }
            Outcome::Summary { summary, result } => match result {
                Ok(evaluation) => {
                    let round =
                        apply_summary_evaluation(&mut self.session, &summary, evaluation, &self.scoring);
                    self.exercise.mark_scored();
                    self.input.clear();
                    self.input_mode = InputMode::Normal;
                    self.show_round(&round);
                }
                // Summary stays in the box for another try
                Err(e) => {
                    let _ = self.render_error(&e);
                }
            },
        }
    }

    fn show_round(&mut self, round: &RoundResult) {
        let total = self.session.total();
        let _ = self.render_round(round, total);
    }

    pub fn scroll_article(&mut self, down: bool) {
        self.article_scroll = if down {
            self.article_scroll.saturating_add(1)
        } else {
            self.article_scroll.saturating_sub(1)
        };
    }

    pub fn scroll_history(&mut self, down: bool) {
        let scroll = if down {
            self.history_scroll.saturating_add(1)
        } else {
            self.history_scroll.saturating_sub(1)
        };
        self.history_scroll = scroll.min(last_history_row(&self.session));
    }
}

impl ResultRenderer for App {
    fn render_round(&mut self, round: &RoundResult, total: i64) -> io::Result<()> {
        let msg = match &round.verdict {
            Verdict::Usage(_) => format!(
                "Points earned this round: {} (total {})",
                crate::output::format_points(round.points_delta),
                total
            ),
            Verdict::Summary(_) => format!("Average score {} (total {})", round.points_delta, total),
        };
        let kind = if round.passed {
            FlashKind::Success
        } else {
            FlashKind::Error
        };
        self.last_round = Some(round.clone());
        // Newest entry is at the top; jump there
        self.history_scroll = 0;
        self.show_flash(msg, kind);
        Ok(())
    }

    fn render_error(&mut self, error: &PracticeError) -> io::Result<()> {
        self.show_flash(error.to_string(), FlashKind::Error);
        Ok(())
    }

    fn render_session(&mut self, session: &Session) -> io::Result<()> {
        self.history_scroll = self.history_scroll.min(last_history_row(session));
        Ok(())
    }
}

/// Furthest the history panel can scroll: one row per round.
fn last_history_row(session: &Session) -> u16 {
    u16::try_from(session.history().len().saturating_sub(1)).unwrap_or(u16::MAX)
}
