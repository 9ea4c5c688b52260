use crate::state::{AppConfig, AppState};

/// Display countdown cadence; phase is still recomputed on every poll.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

pub fn get_config(state: &AppState) -> AppConfig {
    let engine = state.engine.lock().unwrap();
    let session = engine.schedule.current();

    AppConfig {
        reveal_lead_minutes: session.lead().num_minutes(),
        capacity: session.capacity() as u32,
        cadence_days: engine.schedule.cadence().num_days(),
        poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        radius_miles: engine.directory.radius_miles(),
    }
}
