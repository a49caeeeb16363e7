use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;

use lexidrill::api::{create_client, Evaluator, HttpEvaluator};
use lexidrill::config::{parse_reading_time, Config};
use lexidrill::output::{format_punctuation, format_verdict, should_use_colors, TextRenderer};
use lexidrill::render::ResultRenderer;
use lexidrill::rounds::play_usage_round;
use lexidrill::scoring::{check_punctuation, validate_scoring};
use lexidrill::session::Session;
use lexidrill::tui::{resolve_theme, run_tui, App};
use lexidrill::words::{builtin_pool, find_word, select_word, Difficulty};
use lexidrill::PracticeError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_VALIDATION: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive word-usage game (default if no subcommand)
    Words {
        /// Only draw words of this difficulty (easy, medium, difficult)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },
    /// Interactive reading and summary-writing game
    Write {
        /// Reading time before writing starts (e.g. "5m", "90s")
        #[arg(long)]
        reading_time: Option<String>,
    },
    /// Check a sentence's capitalization and end punctuation (no network)
    Check { sentence: String },
    /// Evaluate one sentence using a word from the pool and print the scored round
    Usage { word: String, sentence: String },
    /// Ask the tense evaluator whether a sentence uses a verb tense
    Tense { tense: String, sentence: String },
    /// Print a random word from the pool
    Pick {
        /// Only pick words of this difficulty
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "lexidrill")]
#[command(about = "Vocabulary and writing practice in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/lexidrill/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn exit_code(error: &PracticeError) -> i32 {
    match error {
        PracticeError::Network(_) => EXIT_NETWORK,
        PracticeError::Validation(_) | PracticeError::EmptyPool => EXIT_VALIDATION,
    }
}

fn build_evaluator(config: &Config) -> Arc<dyn Evaluator> {
    match create_client() {
        Ok(client) => Arc::new(HttpEvaluator::new(client, config.endpoints.clone())),
        Err(e) => {
            eprintln!("Failed to create HTTP client: {:#}", e);
            std::process::exit(EXIT_NETWORK);
        }
    }
}

#[tokio::main]
async fn main() {
    // Errors only when a provider is already installed
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();
    lexidrill::logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Words { difficulty: None });
    let use_colors = !cli.no_color && should_use_colors();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match lexidrill::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    debug!(endpoints = ?config.endpoints, "config loaded");

    // Validate scoring config at startup
    let scoring = config.effective_scoring();
    if let Err(errors) = validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let code = match command {
        Commands::Check { sentence } => {
            println!("{}", format_punctuation(&check_punctuation(&sentence), use_colors));
            EXIT_SUCCESS
        }

        Commands::Pick { difficulty } => match select_word(&builtin_pool(difficulty)) {
            Ok(word) => {
                println!("{}", word);
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                exit_code(&e)
            }
        },

        Commands::Usage { word, sentence } => {
            let Some(entry) = find_word(&word) else {
                eprintln!("'{}' is not in the word pool", word.trim());
                std::process::exit(EXIT_VALIDATION);
            };
            let evaluator = build_evaluator(&config);
            let mut session = Session::new();
            let mut renderer = TextRenderer::new(io::stdout(), use_colors);
            match play_usage_round(evaluator.as_ref(), &mut session, entry, &sentence, &scoring).await {
                Ok(round) => match renderer.render_round(&round, session.total()) {
                    Ok(()) => EXIT_SUCCESS,
                    Err(e) => {
                        eprintln!("Failed to write output: {}", e);
                        EXIT_FAILURE
                    }
                },
                Err(e) => {
                    let mut stderr = TextRenderer::new(io::stderr(), use_colors);
                    let _ = stderr.render_error(&e);
                    exit_code(&e)
                }
            }
        }

        Commands::Tense { tense, sentence } => {
            let evaluator = build_evaluator(&config);
            match evaluator.evaluate_tense(tense.trim(), sentence.trim()).await {
                Ok(verdict) => {
                    println!("{}", format_verdict(&verdict, use_colors));
                    EXIT_SUCCESS
                }
                Err(e) => {
                    eprintln!("{}", e);
                    exit_code(&e)
                }
            }
        }

        Commands::Words { difficulty } => {
            let colors = resolve_theme(config.theme).colors();
            let app = match App::new_words(builtin_pool(difficulty), scoring, colors) {
                Ok(app) => app,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(exit_code(&e));
                }
            };
            run_interactive(app, build_evaluator(&config), use_colors).await
        }

        Commands::Write { reading_time } => {
            let duration = match reading_time {
                Some(s) => parse_reading_time(&s),
                None => config.reading_duration(),
            };
            let duration = match duration {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            let colors = resolve_theme(config.theme).colors();
            let app = App::new_writing(duration, scoring, colors);
            run_interactive(app, build_evaluator(&config), use_colors).await
        }
    };

    std::process::exit(code);
}

async fn run_interactive(app: App, evaluator: Arc<dyn Evaluator>, use_colors: bool) -> i32 {
    match run_tui(app, evaluator).await {
        // Leave a transcript of the rounds on the restored terminal
        Ok(session) if session.rounds_played() > 0 => {
            let mut renderer = TextRenderer::new(io::stdout(), use_colors);
            match renderer.render_session(&session) {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    eprintln!("Failed to write output: {}", e);
                    EXIT_FAILURE
                }
            }
        }
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Terminal error: {:#}", e);
            EXIT_FAILURE
        }
    }
}
