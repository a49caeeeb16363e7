//! Centralized theme module for TUI colors and styles

use ratatui::prelude::*;
use tracing::debug;

use crate::config::ThemePreference;

/// Terminal backgrounds brighter than this count as light
const LIGHT_LUMA_THRESHOLD: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors::dark(),
            Theme::Light => ThemeColors::light(),
        }
    }
}

/// Pick the theme for a preference; `auto` asks the terminal for its background.
pub fn resolve_theme(preference: ThemePreference) -> Theme {
    match preference {
        ThemePreference::Dark => Theme::Dark,
        ThemePreference::Light => Theme::Light,
        ThemePreference::Auto => match terminal_light::luma() {
            Ok(luma) if luma > LIGHT_LUMA_THRESHOLD => Theme::Light,
            Ok(_) => Theme::Dark,
            Err(e) => {
                debug!(error = %e, "could not detect terminal background, using dark theme");
                Theme::Dark
            }
        },
    }
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Score-based colors (traffic light pattern, high is good)
    pub score_high: Color,
    pub score_mid: Color,
    pub score_low: Color,
    pub bar_empty: Color,

    // General colors
    pub muted: Color,
    pub title_color: Color,
    pub word_color: Color,
    pub heading_style: Style,

    // Input box
    pub input_active: Color,
    pub input_inactive: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Timer gauge
    pub timer_fill: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            score_high: Color::Green,
            score_mid: Color::Yellow,
            score_low: Color::Red,
            bar_empty: Color::DarkGray,
            muted: Color::Gray,
            title_color: Color::Cyan,
            word_color: Color::Yellow,
            heading_style: Style::new().fg(Color::Cyan).bold(),
            input_active: Color::Cyan,
            input_inactive: Color::DarkGray,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            timer_fill: Color::Blue,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
        }
    }

    pub fn light() -> Self {
        Self {
            score_high: Color::Rgb(0, 128, 0),
            score_mid: Color::Rgb(170, 110, 0),
            score_low: Color::Rgb(180, 0, 0),
            bar_empty: Color::Indexed(250),
            muted: Color::Indexed(242),
            title_color: Color::Blue,
            word_color: Color::Magenta,
            heading_style: Style::new().fg(Color::Blue).bold(),
            input_active: Color::Blue,
            input_inactive: Color::Indexed(248),
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(0, 128, 0),
            flash_error: Color::Rgb(180, 0, 0),
            timer_fill: Color::Blue,
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
        }
    }

    /// Returns the color for a score based on its percentage of max score
    pub fn score_color(&self, score: i64, max_score: i64) -> Color {
        let percentage = if max_score > 0 {
            (score as f64 / max_score as f64) * 100.0
        } else {
            0.0
        };

        if percentage >= 70.0 {
            self.score_high
        } else if percentage >= 40.0 {
            self.score_mid
        } else {
            self.score_low
        }
    }

    pub fn pass_color(&self, passed: bool) -> Color {
        if passed {
            self.score_high
        } else {
            self.score_low
        }
    }
}
