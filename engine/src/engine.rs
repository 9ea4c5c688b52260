//! Engine - top-level state holder
//!
//! One engine per signed-in user: the profile registry, the match queue,
//! the gathering schedule, the directory, and per-user match preferences.
//! Every operation takes the acting user id explicitly; there is no ambient
//! "current user".

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::directory::{Directory, DirectoryListing};
use crate::gathering::{GatheringError, GatheringSession};
use crate::identity::{self, TraitPairing};
use crate::model::{MatchTypePreference, PersonId, ProfileRef};
use crate::queue::MatchQueue;
use crate::schedule::GatheringSchedule;

pub struct Engine {
    pub queue: MatchQueue,
    pub schedule: GatheringSchedule,
    pub directory: Directory,
    pub(crate) profiles: HashMap<PersonId, ProfileRef>,
    pub(crate) prefs: HashMap<PersonId, MatchTypePreference>,
}

impl Engine {
    pub fn new(session: GatheringSession) -> Self {
        Self {
            queue: MatchQueue::default(),
            schedule: GatheringSchedule::weekly(session),
            directory: Directory::default(),
            profiles: HashMap::new(),
            prefs: HashMap::new(),
        }
    }

    /// Register a provider-owned profile without queuing it (the local user).
    pub fn register_profile(&mut self, profile: ProfileRef) {
        self.profiles.insert(profile.id, profile);
    }

    /// Register candidates and append them to the swipe queue in order.
    pub fn load_deck(&mut self, deck: Vec<ProfileRef>) {
        for profile in deck {
            self.profiles.insert(profile.id, profile.clone());
            self.queue.push(profile);
        }
    }

    pub fn load_listings(&mut self, listings: Vec<DirectoryListing>) {
        self.directory.load(listings);
    }

    pub fn profile(&self, id: PersonId) -> Option<&ProfileRef> {
        self.profiles.get(&id)
    }

    pub fn join(&mut self, user: PersonId, now: DateTime<Utc>) -> Result<(), GatheringError> {
        self.schedule.current_mut().join(user, now)?;
        debug!(%user, "joined the table");
        Ok(())
    }

    pub fn leave(&mut self, user: PersonId, now: DateTime<Utc>) -> Result<(), GatheringError> {
        self.schedule.current_mut().leave(user, now)?;
        debug!(%user, "left the table");
        Ok(())
    }

    /// Rollover entry point for the scheduling driver; `join`/`leave` never
    /// roll implicitly, so a closed instance stays read-only until this runs.
    pub fn roll_forward(&mut self, now: DateTime<Utc>) -> u32 {
        self.schedule.roll_forward(now)
    }

    /// Preference is locked while the user sits on the current roster;
    /// rollover empties the roster and unlocks it.
    pub fn set_match_type(
        &mut self,
        user: PersonId,
        pref: MatchTypePreference,
    ) -> Result<(), GatheringError> {
        if self.schedule.current().is_joined(user) {
            return Err(GatheringError::AlreadyJoined);
        }
        self.prefs.insert(user, pref);
        Ok(())
    }

    pub fn match_type(&self, user: PersonId) -> MatchTypePreference {
        self.prefs.get(&user).copied().unwrap_or_default()
    }

    /// Identity comparison rows for two registered profiles.
    pub fn compare(&self, a: PersonId, b: PersonId) -> Option<Vec<TraitPairing>> {
        let mine = self.profiles.get(&a)?;
        let theirs = self.profiles.get(&b)?;
        Some(identity::compare(mine, theirs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListingId;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 5, 19, 0, 0).unwrap()
    }

    fn engine() -> Engine {
        Engine::new(GatheringSession::with_defaults(start(), ListingId(1)))
    }

    #[test]
    fn preference_defaults_to_roots_and_is_locked_while_joined() {
        let mut engine = engine();
        let user = PersonId(1);
        assert_eq!(engine.match_type(user), MatchTypePreference::RootsMatch);

        engine
            .set_match_type(user, MatchTypePreference::GlobalExpedition)
            .unwrap();
        assert_eq!(engine.match_type(user), MatchTypePreference::GlobalExpedition);

        engine.join(user, start() - Duration::hours(4)).unwrap();
        assert_eq!(
            engine.set_match_type(user, MatchTypePreference::RootsMatch),
            Err(GatheringError::AlreadyJoined)
        );
        assert_eq!(engine.match_type(user), MatchTypePreference::GlobalExpedition);
    }

    #[test]
    fn preference_survives_rollover_and_unlocks() {
        let mut engine = engine();
        let user = PersonId(1);
        engine
            .set_match_type(user, MatchTypePreference::GlobalExpedition)
            .unwrap();
        engine.join(user, start() - Duration::hours(4)).unwrap();

        let rolled = engine.roll_forward(start() + Duration::minutes(1));
        assert_eq!(rolled, 1);
        assert_eq!(engine.match_type(user), MatchTypePreference::GlobalExpedition);
        engine
            .set_match_type(user, MatchTypePreference::RootsMatch)
            .unwrap();
    }

    #[test]
    fn closed_session_rejects_mutations_until_rolled() {
        let mut engine = engine();
        let after = start() + Duration::minutes(1);

        assert_eq!(
            engine.join(PersonId(1), after),
            Err(GatheringError::SessionClosed)
        );
        engine.roll_forward(after);
        engine.join(PersonId(1), after).unwrap();
    }

    #[test]
    fn compare_requires_both_profiles_registered() {
        let mut engine = engine();
        engine.load_deck(crate::sample::deck());
        engine.register_profile(crate::sample::local_user());

        let user = crate::sample::local_user().id;
        let candidate = engine.queue.current().unwrap().id;
        assert!(engine.compare(user, candidate).is_some());
        assert!(engine.compare(user, PersonId(9_999)).is_none());
    }
}
