use std::sync::{Arc, Mutex};

use serde::Serialize;

use mar_engine::countdown_runner::CountdownRunner;
use mar_engine::{DirectoryListing, Engine, PersonId, Profile};

/// Shared application state behind the command layer
pub struct AppState {
    pub engine: Arc<Mutex<Engine>>,
    pub runner: Mutex<Option<CountdownRunner>>,
    /// The signed-in profile; commands still take the acting id explicitly.
    pub user_id: PersonId,
}

impl AppState {
    pub fn new(engine: Engine, user_id: PersonId) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            runner: Mutex::new(None),
            user_id,
        }
    }
}

// -- Serializable types returned by commands --

#[derive(Serialize, Clone)]
pub struct TraitChip {
    pub kind: String,
    pub value: String,
    pub accent: String,
}

#[derive(Serialize, Clone)]
pub struct ProfileCard {
    pub id: u64,
    pub name: String,
    pub origin: String,
    pub bio: String,
    pub stack: Vec<TraitChip>,
}

impl ProfileCard {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            id: profile.id.0,
            name: profile.name.clone(),
            origin: profile.origin.clone(),
            bio: profile.bio.clone(),
            stack: profile
                .stack
                .iter()
                .map(|t| TraitChip {
                    kind: t.kind.as_str().to_string(),
                    value: t.value.clone(),
                    accent: t.accent.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize, Clone, Copy)]
pub struct CountdownView {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Serialize, Clone)]
pub struct SessionView {
    pub phase: String,
    pub countdown: Option<CountdownView>,
    pub joined: bool,
    pub participants: u32,
    pub capacity: u32,
    /// Resolved venue name, present only once the reveal gate has opened
    /// for the acting user.
    pub venue: Option<String>,
}

#[derive(Serialize, Clone)]
pub struct ListingCard {
    pub id: u64,
    pub name: String,
    pub kind: String,
    pub scope: String,
    pub distance_miles: f64,
    pub rating: Option<f32>,
    pub host: Option<String>,
    pub is_business: bool,
}

impl ListingCard {
    pub fn from_listing(listing: &DirectoryListing) -> Self {
        Self {
            id: listing.id.0,
            name: listing.name.clone(),
            kind: listing.kind.as_str().to_string(),
            scope: listing.scope.as_str().to_string(),
            distance_miles: listing.distance_miles,
            rating: listing.rating,
            host: listing.host.clone(),
            is_business: listing.is_business,
        }
    }
}

#[derive(Serialize, Clone)]
pub struct PairingView {
    pub kind: String,
    pub mine: Option<TraitChip>,
    pub theirs: Option<TraitChip>,
}

#[derive(Serialize, Clone)]
pub struct TickView {
    pub phase: String,
    pub seconds_to_start: Option<i64>,
    pub participants: u32,
    pub rolled_over: u32,
}

#[derive(Serialize, Clone)]
pub struct AppConfig {
    pub reveal_lead_minutes: i64,
    pub capacity: u32,
    pub cadence_days: i64,
    pub poll_interval_ms: u64,
    pub radius_miles: f64,
}
