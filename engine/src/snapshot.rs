//! Snapshot module for export/import of engine state
//!
//! Serializes queue, session, and preference state to JSON for an external
//! storage collaborator and restores it. The engine performs no I/O here.
//! Profiles are provider-owned and travel by id only; import requires every
//! referenced id to be registered already.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration};
use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::gathering::GatheringSession;
use crate::model::{ListingId, MatchTypePreference, PersonId, SwipeDecision, Verdict};
use crate::queue::MatchQueue;
use crate::schedule::GatheringSchedule;

// ============================================================================
// Export Data Structures
// ============================================================================

/// Complete engine state for the storage collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportData {
    pub version: u8, // Schema version for forward compatibility
    pub queue: QueueData,
    pub session: SessionData,
    pub prefs: Vec<PreferenceData>,
    pub radius_miles: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueData {
    /// Presentation order, by profile id
    pub order: Vec<u64>,
    pub cursor: usize,
    pub decisions: Vec<DecisionData>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DecisionData {
    pub person_id: u64,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub start_unix: i64,
    pub lead_minutes: i64,
    pub venue_id: u64,
    pub capacity: usize,
    pub participants: Vec<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PreferenceData {
    pub person_id: u64,
    pub pref: MatchTypePreference,
}

/// Result of import operation
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub queue_len: u32,
    pub decisions: u32,
    pub participants: u32,
}

// ============================================================================
// Export / Import Implementation
// ============================================================================

impl Engine {
    /// Export engine state to a JSON string
    pub fn export_state(&self) -> String {
        let session = self.schedule.current();

        let export_data = ExportData {
            version: 1,
            queue: QueueData {
                order: self.queue.profile_ids().iter().map(|id| id.0).collect(),
                cursor: self.queue.cursor(),
                decisions: self
                    .queue
                    .decisions()
                    .iter()
                    .map(|d| DecisionData {
                        person_id: d.person.0,
                        verdict: d.verdict,
                    })
                    .collect(),
            },
            session: SessionData {
                start_unix: session.start().timestamp(),
                lead_minutes: session.lead().num_minutes(),
                venue_id: session.venue().0,
                capacity: session.capacity(),
                participants: session.participants().iter().map(|p| p.0).collect(),
            },
            prefs: self
                .prefs
                .iter()
                .map(|(person, pref)| PreferenceData {
                    person_id: person.0,
                    pref: *pref,
                })
                .collect(),
            radius_miles: self.directory.radius_miles(),
        };

        serde_json::to_string(&export_data).unwrap_or_else(|_| "{}".to_string())
    }

    /// Import engine state from a JSON string, replacing current state.
    /// Every profile id in the snapshot must already be registered.
    pub fn import_state(&mut self, json: &str) -> Result<ImportResult, String> {
        let data: ExportData =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;

        if data.version != 1 {
            return Err(format!("Unsupported snapshot version: {}", data.version));
        }

        // Rebind the queue order to registered profiles
        let mut order = Vec::with_capacity(data.queue.order.len());
        for raw in &data.queue.order {
            let id = PersonId(*raw);
            let profile = self
                .profiles
                .get(&id)
                .ok_or_else(|| format!("unknown profile id {id}"))?;
            order.push(Arc::clone(profile));
        }

        let decisions: Vec<SwipeDecision> = data
            .queue
            .decisions
            .iter()
            .map(|d| SwipeDecision {
                person: PersonId(d.person_id),
                verdict: d.verdict,
            })
            .collect();
        let queue = MatchQueue::restore(order, data.queue.cursor, decisions)?;

        let start = DateTime::from_timestamp(data.session.start_unix, 0)
            .ok_or_else(|| "invalid session start timestamp".to_string())?;
        let session = GatheringSession::restore(
            start,
            Duration::minutes(data.session.lead_minutes),
            ListingId(data.session.venue_id),
            data.session.capacity,
            data.session
                .participants
                .iter()
                .map(|p| PersonId(*p))
                .collect(),
        );

        let prefs: HashMap<PersonId, MatchTypePreference> = data
            .prefs
            .iter()
            .map(|p| (PersonId(p.person_id), p.pref))
            .collect();

        let result = ImportResult {
            queue_len: queue.len() as u32,
            decisions: queue.decisions().len() as u32,
            participants: session.participants().len() as u32,
        };

        self.queue = queue;
        self.schedule = GatheringSchedule::weekly(session);
        self.prefs = prefs;
        self.directory.set_radius(data.radius_miles);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use chrono::{TimeZone, Utc};

    fn start() -> DateTime<chrono::Utc> {
        Utc.with_ymd_and_hms(2026, 3, 5, 19, 0, 0).unwrap()
    }

    fn populated_engine() -> Engine {
        let mut engine = Engine::new(GatheringSession::with_defaults(start(), ListingId(1)));
        engine.register_profile(sample::local_user());
        engine.load_deck(sample::deck());
        engine
    }

    #[test]
    fn export_then_import_restores_state() {
        let mut engine = populated_engine();
        let user = sample::local_user().id;
        let first = engine.queue.current().unwrap().id;

        engine.queue.decide(first, Verdict::Liked).unwrap();
        engine.join(user, start() - Duration::hours(4)).unwrap();
        engine
            .set_match_type(PersonId(99), MatchTypePreference::GlobalExpedition)
            .unwrap();
        engine.directory.set_radius(10.0);

        let json = engine.export_state();

        let mut restored = populated_engine();
        let result = restored.import_state(&json).unwrap();
        assert_eq!(result.queue_len, 2);
        assert_eq!(result.decisions, 1);
        assert_eq!(result.participants, 1);

        assert_eq!(restored.queue.cursor(), engine.queue.cursor());
        assert_eq!(restored.queue.liked_profiles(), vec![first]);
        assert!(restored.schedule.current().is_joined(user));
        assert_eq!(
            restored.match_type(PersonId(99)),
            MatchTypePreference::GlobalExpedition
        );
        assert_eq!(restored.directory.radius_miles(), 10.0);
    }

    #[test]
    fn import_rejects_unregistered_profiles() {
        let engine = populated_engine();
        let json = engine.export_state();

        // A fresh engine with no registered profiles cannot rebind the deck
        let mut empty = Engine::new(GatheringSession::with_defaults(start(), ListingId(1)));
        let err = empty.import_state(&json).unwrap_err();
        assert!(err.contains("unknown profile id"));
    }

    #[test]
    fn import_rejects_foreign_versions() {
        let mut engine = populated_engine();
        let json = engine.export_state().replace("\"version\":1", "\"version\":9");
        let err = engine.import_state(&json).unwrap_err();
        assert!(err.contains("Unsupported snapshot version"));
    }
}
