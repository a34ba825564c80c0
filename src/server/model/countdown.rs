//! Launch countdown domain model.

use chrono::{DateTime, Utc};
use std::fmt;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Time remaining until launch, broken down into display units.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Countdown {
    pub days: i64,
    /// 0-23
    pub hours: i64,
    /// 0-59
    pub minutes: i64,
    /// 0-59
    pub seconds: i64,
}

impl Countdown {
    /// Computes the countdown from `now` to `launch`.
    ///
    /// Sub-second remainders are truncated, matching how the embed is rendered.
    ///
    /// # Returns
    /// - `Some(Countdown)` - Launch is still in the future
    /// - `None` - Launch time has been reached or passed
    pub fn until(launch: DateTime<Utc>, now: DateTime<Utc>) -> Option<Self> {
        let remaining = launch - now;
        if remaining <= chrono::Duration::zero() {
            return None;
        }

        let total = remaining.num_seconds();

        Some(Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        })
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
