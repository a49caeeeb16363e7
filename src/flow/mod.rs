//! Writing-exercise phases and the reading countdown.

pub mod countdown;
pub mod state;

pub use countdown::{format_clock, Countdown, DEFAULT_READING_SECS};
pub use state::{word_count, Phase, WritingExercise};
