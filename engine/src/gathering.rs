//! Gathering Session
//!
//! Enrollment and the time-gated venue reveal for one scheduled communal
//! meal. Phase is recomputed from the wall clock on every call and never
//! stored; two calls close to a boundary may observe different phases and
//! callers must tolerate that.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::model::{ListingId, PersonId};

/// Seats at one table.
pub const DEFAULT_CAPACITY: usize = 6;

/// Hours before start at which the venue is revealed to participants.
pub const REVEAL_LEAD_HOURS: i64 = 2;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GatheringError {
    #[error("already joined this gathering")]
    AlreadyJoined,
    #[error("not a participant of this gathering")]
    NotJoined,
    #[error("the table is full")]
    SessionFull,
    #[error("the gathering is closed")]
    SessionClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Enrolling,
    Revealed,
    Closed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Enrolling => "enrolling",
            Phase::Revealed => "revealed",
            Phase::Closed => "closed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a venue read returns. Non-participants always get `Withheld`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueAccess {
    Withheld,
    Revealed(ListingId),
}

/// Wall-clock breakdown of the time remaining, for the countdown display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    fn from_duration(remaining: Duration) -> Self {
        let secs = remaining.num_seconds().max(0);
        Self {
            days: secs / 86_400,
            hours: secs / 3_600 % 24,
            minutes: secs / 60 % 60,
            seconds: secs % 60,
        }
    }
}

/// One instance of the recurring weekly meal.
#[derive(Debug, Clone)]
pub struct GatheringSession {
    start: DateTime<Utc>,
    lead: Duration,
    venue: ListingId,
    capacity: usize,
    /// Join order, each id at most once.
    participants: Vec<PersonId>,
}

impl GatheringSession {
    pub fn new(start: DateTime<Utc>, lead: Duration, venue: ListingId, capacity: usize) -> Self {
        Self {
            start,
            lead,
            venue,
            capacity,
            participants: Vec::new(),
        }
    }

    /// A table of six with the venue revealed two hours prior.
    pub fn with_defaults(start: DateTime<Utc>, venue: ListingId) -> Self {
        Self::new(
            start,
            Duration::hours(REVEAL_LEAD_HOURS),
            venue,
            DEFAULT_CAPACITY,
        )
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn lead(&self) -> Duration {
        self.lead
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn participants(&self) -> &[PersonId] {
        &self.participants
    }

    pub fn is_joined(&self, user: PersonId) -> bool {
        self.participants.contains(&user)
    }

    // The venue never leaks through a public accessor; reads go through
    // `venue_for` so the reveal gate cannot be bypassed.
    pub(crate) fn venue(&self) -> ListingId {
        self.venue
    }

    /// Derive the phase from the wall clock.
    pub fn phase(&self, now: DateTime<Utc>) -> Phase {
        if now >= self.start {
            Phase::Closed
        } else if now >= self.start - self.lead {
            Phase::Revealed
        } else {
            Phase::Enrolling
        }
    }

    pub fn join(&mut self, user: PersonId, now: DateTime<Utc>) -> Result<(), GatheringError> {
        if self.phase(now) == Phase::Closed {
            return Err(GatheringError::SessionClosed);
        }
        if self.is_joined(user) {
            return Err(GatheringError::AlreadyJoined);
        }
        if self.participants.len() >= self.capacity {
            return Err(GatheringError::SessionFull);
        }
        self.participants.push(user);
        Ok(())
    }

    pub fn leave(&mut self, user: PersonId, now: DateTime<Utc>) -> Result<(), GatheringError> {
        if self.phase(now) == Phase::Closed {
            return Err(GatheringError::SessionClosed);
        }
        let pos = self
            .participants
            .iter()
            .position(|p| *p == user)
            .ok_or(GatheringError::NotJoined)?;
        self.participants.remove(pos);
        Ok(())
    }

    /// The venue, for enrolled participants once the reveal gate has opened.
    pub fn venue_for(&self, user: PersonId, now: DateTime<Utc>) -> VenueAccess {
        match self.phase(now) {
            Phase::Revealed | Phase::Closed if self.is_joined(user) => {
                VenueAccess::Revealed(self.venue)
            }
            _ => VenueAccess::Withheld,
        }
    }

    /// Time remaining before start, or `None` once the start has passed.
    /// Display only; phase transitions never derive from this.
    pub fn time_until_start(&self, now: DateTime<Utc>) -> Option<Duration> {
        if now >= self.start {
            None
        } else {
            Some(self.start - now)
        }
    }

    pub fn countdown(&self, now: DateTime<Utc>) -> Option<Countdown> {
        self.time_until_start(now).map(Countdown::from_duration)
    }

    /// The next instance of the ritual: start advanced by `gap`, same venue
    /// and capacity, fresh empty roster.
    pub fn next_occurrence(&self, gap: Duration) -> GatheringSession {
        Self::new(self.start + gap, self.lead, self.venue, self.capacity)
    }

    pub(crate) fn restore(
        start: DateTime<Utc>,
        lead: Duration,
        venue: ListingId,
        capacity: usize,
        participants: Vec<PersonId>,
    ) -> Self {
        Self {
            start,
            lead,
            venue,
            capacity,
            participants,
        }
    }
}
