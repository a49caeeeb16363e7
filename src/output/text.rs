use std::io::{self, Write};

use owo_colors::OwoColorize;

use super::formatter::{format_history, format_round};
use crate::error::PracticeError;
use crate::render::ResultRenderer;
use crate::session::{RoundResult, Session};

/// Writes results as plain lines, colored when asked to.
pub struct TextRenderer<W: Write> {
    out: W,
    use_colors: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, use_colors: bool) -> Self {
        Self { out, use_colors }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultRenderer for TextRenderer<W> {
    fn render_round(&mut self, round: &RoundResult, total: i64) -> io::Result<()> {
        writeln!(self.out, "{}", format_round(round, self.use_colors))?;
        writeln!(self.out, "Total: {}", total)
    }

    fn render_error(&mut self, error: &PracticeError) -> io::Result<()> {
        let message = format!("⚠ {}", error);
        if self.use_colors {
            writeln!(self.out, "{}", message.red())
        } else {
            writeln!(self.out, "{}", message)
        }
    }

    fn render_session(&mut self, session: &Session) -> io::Result<()> {
        writeln!(self.out, "Total: {}", session.total())?;
        writeln!(
            self.out,
            "{}",
            format_history(session.history(), self.use_colors)
        )
    }
}
