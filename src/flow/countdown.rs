use std::time::{Duration, Instant};

/// Default reading time before writing is forced.
pub const DEFAULT_READING_SECS: u64 = 300;

/// A one-shot countdown driven by the caller's clock.
///
/// `poll` reports expiry exactly once; after that, or after `cancel`, it
/// stays quiet.
#[derive(Debug, Clone)]
pub struct Countdown {
    total: Duration,
    deadline: Instant,
    armed: bool,
}

impl Countdown {
    pub fn start(total: Duration, now: Instant) -> Self {
        Self {
            total,
            deadline: now + total,
            armed: true,
        }
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Whole seconds left, rounded up so the clock shows 00:00 only at expiry.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        let remaining = self.remaining(now);
        let secs = remaining.as_secs();
        if remaining.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }

    /// Share of the countdown still left, 0.0..=1.0.
    pub fn fraction_remaining(&self, now: Instant) -> f64 {
        if self.total.is_zero() {
            return 0.0;
        }
        (self.remaining(now).as_secs_f64() / self.total.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// True the first time this is called at or past the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.armed && now >= self.deadline {
            self.armed = false;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }
}

/// Format seconds as `MM:SS`.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
