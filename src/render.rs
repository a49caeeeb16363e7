use std::io;

use crate::error::PracticeError;
use crate::session::{RoundResult, Session};

/// Somewhere round outcomes get shown.
///
/// The round drivers and the session never print; front-ends implement this
/// to present results, errors, and the running history.
pub trait ResultRenderer {
    /// Show a freshly scored round along with the new total.
    fn render_round(&mut self, round: &RoundResult, total: i64) -> io::Result<()>;

    /// Show a failed submission. Nothing about the session changed.
    fn render_error(&mut self, error: &PracticeError) -> io::Result<()>;

    /// Show the total and every recorded round, newest first.
    fn render_session(&mut self, session: &Session) -> io::Result<()>;
}
