//! Weekly Schedule
//!
//! The scheduling collaborator: owns the current gathering instance and
//! replaces it with the next occurrence once it closes. Per-user match
//! preferences live in the engine and survive rollover untouched.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc, Weekday};
use tracing::info;

use crate::gathering::{GatheringSession, Phase};

/// Next occurrence of a weekly slot at `weekday` `hour`:00 UTC, strictly
/// after `now`.
pub fn next_weekly_start(weekday: Weekday, hour: u32, now: DateTime<Utc>) -> DateTime<Utc> {
    let days_ahead =
        (weekday.num_days_from_monday() + 7 - now.weekday().num_days_from_monday()) % 7;
    let slot = NaiveTime::from_hms_opt(hour, 0, 0).expect("hour within 0..24");
    let mut start = (now.date_naive() + Duration::days(days_ahead as i64))
        .and_time(slot)
        .and_utc();
    if start <= now {
        start += Duration::weeks(1);
    }
    start
}

#[derive(Debug, Clone)]
pub struct GatheringSchedule {
    current: GatheringSession,
    cadence: Duration,
}

impl GatheringSchedule {
    /// Wrap a session instance with a one-week cadence.
    pub fn weekly(session: GatheringSession) -> Self {
        Self {
            current: session,
            cadence: Duration::weeks(1),
        }
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    pub fn current(&self) -> &GatheringSession {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut GatheringSession {
        &mut self.current
    }

    /// Replace the current instance with the next occurrence while it is
    /// closed. Returns the number of instances rolled past (several when the
    /// caller was away for more than a week).
    pub fn roll_forward(&mut self, now: DateTime<Utc>) -> u32 {
        let mut rolled = 0u32;
        while self.current.phase(now) == Phase::Closed {
            self.current = self.current.next_occurrence(self.cadence);
            rolled += 1;
        }
        if rolled > 0 {
            info!(rolled, start = %self.current.start(), "gathering rolled to next occurrence");
        }
        rolled
    }
}
