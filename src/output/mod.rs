pub mod formatter;
pub mod text;

pub use formatter::{
    bar_cells, format_evaluation, format_history, format_history_line, format_points,
    format_punctuation, format_round, format_verdict, score_bar, should_use_colors, wrap_text,
    SUMMARY_EXCERPT_CHARS,
};
pub use text::TextRenderer;
