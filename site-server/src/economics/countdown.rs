//! Deal countdown decomposition

use serde::{Deserialize, Serialize};

/// Countdown to a deal's end instant
///
/// The signed millisecond difference decomposes into floor-truncated
/// units; once the difference reaches zero the countdown is terminally
/// `Ended` and never shows negative units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Countdown {
    Remaining {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Ended,
}

impl Countdown {
    /// Decompose `ends_at − now`
    pub fn until(ends_at: i64, now: i64) -> Self {
        let diff_ms = ends_at - now;
        if diff_ms <= 0 {
            return Countdown::Ended;
        }
        let total_secs = diff_ms / 1000;
        Countdown::Remaining {
            days: total_secs / 86_400,
            hours: total_secs % 86_400 / 3_600,
            minutes: total_secs % 3_600 / 60,
            seconds: total_secs % 60,
        }
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Countdown::Ended)
    }
}
