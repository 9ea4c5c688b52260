//! MAR headless facade
//!
//! Wires the engine to the command layer and walks the full presentation
//! interface as a scripted session: swiping, the identity overlay, the
//! directory tabs, and the Thursday table with its live countdown.

mod commands;
mod state;

use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::{Utc, Weekday};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mar_engine::sample;
use mar_engine::schedule::next_weekly_start;
use mar_engine::{Engine, GatheringSession, ListingId};

use commands::config::DEFAULT_POLL_INTERVAL_MS;
use state::AppState;

/// The Thursday Ritual: 19:00, a mystery table for six.
const TABLE_WEEKDAY: Weekday = Weekday::Thu;
const TABLE_HOUR: u32 = 19;
const TABLE_VENUE: ListingId = ListingId(1);

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("MAR core starting...");

    let user = sample::local_user();
    let user_id = user.id;

    let start = next_weekly_start(TABLE_WEEKDAY, TABLE_HOUR, Utc::now());
    let mut engine = Engine::new(GatheringSession::with_defaults(start, TABLE_VENUE));
    engine.register_profile(user);
    engine.load_deck(sample::deck());
    engine.load_listings(sample::listings());

    let state = AppState::new(engine, user_id);

    let config = commands::config::get_config(&state);
    info!(
        lead_minutes = config.reveal_lead_minutes,
        capacity = config.capacity,
        radius_miles = config.radius_miles,
        "configured"
    );

    // -- Matching queue --
    let card = commands::queue::get_current_card(&state).expect("sample deck is not empty");
    info!(name = %card.name, origin = %card.origin, "first candidate");

    let next = commands::queue::swipe(&state, card.id, true)
        .map_err(anyhow::Error::msg)?
        .expect("cyclic queue always has a next candidate");
    info!(name = %next.name, "liked, next candidate up");

    commands::queue::swipe(&state, next.id, false).map_err(anyhow::Error::msg)?;

    // Take the pass back, then confirm it
    let resurfaced = commands::queue::undo_swipe(&state)
        .map_err(anyhow::Error::msg)?
        .expect("undo re-surfaces the previous candidate");
    info!(name = %resurfaced.name, "undid the last swipe");
    commands::queue::swipe(&state, resurfaced.id, false).map_err(anyhow::Error::msg)?;

    info!(liked = ?commands::queue::get_liked(&state), "liked so far");

    // -- Identity overlay --
    let me = commands::identity::get_identity(&state, user_id.0).expect("local user is registered");
    info!(name = %me.name, cards = me.stack.len(), "your identity stack");

    let pairings =
        commands::identity::compare_identity(&state, user_id.0, card.id).map_err(anyhow::Error::msg)?;
    for pairing in &pairings {
        info!(
            kind = %pairing.kind,
            mine = pairing.mine.as_ref().map(|t| t.value.as_str()),
            theirs = pairing.theirs.as_ref().map(|t| t.value.as_str()),
            "identity pairing"
        );
    }

    // -- Directory tabs --
    let roots = commands::directory::get_listings(&state, "roots").map_err(anyhow::Error::msg)?;
    info!(count = roots.len(), "roots listings within radius");
    commands::directory::set_radius(&state, 1.0).map_err(anyhow::Error::msg)?;
    let roots = commands::directory::get_listings(&state, "roots").map_err(anyhow::Error::msg)?;
    info!(count = roots.len(), "roots listings after tightening the radius");

    // -- The Thursday table --
    commands::gathering::set_match_type(&state, user_id.0, "roots").map_err(anyhow::Error::msg)?;
    let session = commands::gathering::get_session(&state, user_id.0);
    info!(phase = %session.phase, participants = session.participants, "next gathering");

    // The join button is a toggle: join, think better of it, join again
    commands::gathering::join_table(&state, user_id.0).map_err(anyhow::Error::msg)?;
    commands::gathering::leave_table(&state, user_id.0).map_err(anyhow::Error::msg)?;
    let session = commands::gathering::join_table(&state, user_id.0).map_err(anyhow::Error::msg)?;
    info!(session = %serde_json::to_string(&session)?, "joined the table");

    commands::gathering::start_countdown(&state, DEFAULT_POLL_INTERVAL_MS, |tick| {
        info!(
            phase = %tick.phase,
            seconds_to_start = tick.seconds_to_start,
            participants = tick.participants,
            "countdown tick"
        );
    });
    thread::sleep(Duration::from_millis(2_500));
    commands::gathering::stop_countdown(&state);

    let snapshot = state.engine.lock().unwrap().export_state();
    info!(bytes = snapshot.len(), "state exported for the storage collaborator");

    Ok(())
}
