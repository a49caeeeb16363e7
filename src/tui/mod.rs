pub mod app;
pub mod event;
pub mod task;
pub mod theme;
pub mod ui;

pub use app::{App, Game, InputMode};
pub use task::{Outcome, Request};
pub use theme::{resolve_theme, Theme, ThemeColors};

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};
use tokio::task::JoinHandle;
use tracing::warn;

use crate::api::Evaluator;
use crate::session::Session;

const TICK_RATE_MS: u64 = 250;

/// Run the interactive game until the player quits; returns the rounds played.
pub async fn run_tui(mut app: App, evaluator: Arc<dyn Evaluator>) -> anyhow::Result<Session> {
    // Buffer log output while TUI is active to prevent it corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(TICK_RATE_MS);

    // At most one request in flight; input that would start another is refused
    let mut pending: Option<JoinHandle<Outcome>> = app
        .new_exercise()
        .map(|request| spawn_request(&evaluator, request));

    let result: anyhow::Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(e.into());
        }

        match events.next().await {
            Event::Key(key) => {
                if let Some(request) = handle_key_event(&mut app, key) {
                    if pending.is_none() {
                        pending = Some(spawn_request(&evaluator, request));
                    }
                }
            }
            Event::Tick => app.tick(Instant::now()),
        }

        // Check if the background request has completed
        if pending.as_ref().is_some_and(|handle| handle.is_finished()) {
            if let Some(handle) = pending.take() {
                match handle.await {
                    Ok(outcome) => app.apply_outcome(outcome, Instant::now()),
                    Err(e) => {
                        warn!(error = %e, "evaluation task failed");
                        app.is_loading = false;
                        app.show_flash(format!("Request failed: {}", e), app::FlashKind::Error);
                    }
                }
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    if let Some(handle) = pending {
        handle.abort();
    }

    // Restore terminal
    ratatui::restore();

    // Flush buffered log lines now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result.map(|()| app.session)
}

fn spawn_request(evaluator: &Arc<dyn Evaluator>, request: Request) -> JoinHandle<Outcome> {
    let evaluator = Arc::clone(evaluator);
    tokio::spawn(async move { request.run(evaluator.as_ref()).await })
}

/// Apply a key press; returns a request when the key submits something.
fn handle_key_event(app: &mut App, key: KeyEvent) -> Option<Request> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    match app.input_mode {
        InputMode::Editing => match key.code {
            KeyCode::Enter => return app.submit(),
            KeyCode::Esc => app.stop_editing(),
            KeyCode::Backspace => {
                app.input.pop();
            }
            KeyCode::Char(c) => app.input.push(c),
            _ => {}
        },
        InputMode::Normal => match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

            // Help
            KeyCode::Char('?') => app.show_help(),

            // Back to the text box
            KeyCode::Char('i') => app.start_editing(),

            // Word game: skip to another word
            KeyCode::Char('n') if app.game == Game::Words => {
                app.input.clear();
                app.next_word();
                app.start_editing();
            }

            // Writing game: done reading, or a new exercise
            KeyCode::Enter | KeyCode::Char('w') if app.game == Game::Writing => {
                match app.exercise.phase() {
                    crate::flow::Phase::Reading => app.start_writing(),
                    crate::flow::Phase::Writing => app.start_editing(),
                    _ => {}
                }
            }
            KeyCode::Char('n') | KeyCode::Char('r') if app.game == Game::Writing => {
                return app.new_exercise();
            }

            // Scrolling: article while reading, history otherwise
            KeyCode::Char('j') | KeyCode::Down => scroll(app, true),
            KeyCode::Char('k') | KeyCode::Up => scroll(app, false),

            _ => {}
        },
        InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
    None
}

fn scroll(app: &mut App, down: bool) {
    if app.game == Game::Writing && app.exercise.phase() == crate::flow::Phase::Reading {
        app.scroll_article(down);
    } else {
        app.scroll_history(down);
    }
}
