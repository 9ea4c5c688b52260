use std::sync::Arc;

use chrono::Utc;

use mar_engine::countdown_runner::CountdownRunner;
use mar_engine::{Engine, MatchTypePreference, PersonId, VenueAccess};

use crate::state::{AppState, CountdownView, SessionView, TickView};

fn session_view(engine: &Engine, user: PersonId) -> SessionView {
    let now = Utc::now();
    let session = engine.schedule.current();

    let venue = match session.venue_for(user, now) {
        VenueAccess::Revealed(id) => Some(
            engine
                .directory
                .listing(id)
                .map(|l| l.name.clone())
                .unwrap_or_else(|| format!("venue #{id}")),
        ),
        VenueAccess::Withheld => None,
    };

    SessionView {
        phase: session.phase(now).to_string(),
        countdown: session.countdown(now).map(|c| CountdownView {
            days: c.days,
            hours: c.hours,
            minutes: c.minutes,
            seconds: c.seconds,
        }),
        joined: session.is_joined(user),
        participants: session.participants().len() as u32,
        capacity: session.capacity() as u32,
        venue,
    }
}

pub fn get_session(state: &AppState, user_id: u64) -> SessionView {
    let engine = state.engine.lock().unwrap();
    session_view(&engine, PersonId(user_id))
}

pub fn join_table(state: &AppState, user_id: u64) -> Result<SessionView, String> {
    let user = PersonId(user_id);
    let mut engine = state.engine.lock().unwrap();
    engine.join(user, Utc::now()).map_err(|e| e.to_string())?;
    Ok(session_view(&engine, user))
}

pub fn leave_table(state: &AppState, user_id: u64) -> Result<SessionView, String> {
    let user = PersonId(user_id);
    let mut engine = state.engine.lock().unwrap();
    engine.leave(user, Utc::now()).map_err(|e| e.to_string())?;
    Ok(session_view(&engine, user))
}

pub fn set_match_type(state: &AppState, user_id: u64, choice: &str) -> Result<(), String> {
    let pref = match choice {
        "roots" => MatchTypePreference::RootsMatch,
        "random" | "expedition" => MatchTypePreference::GlobalExpedition,
        other => return Err(format!("unknown match type: {other}")),
    };

    let mut engine = state.engine.lock().unwrap();
    engine
        .set_match_type(PersonId(user_id), pref)
        .map_err(|e| e.to_string())
}

pub fn start_countdown<F>(state: &AppState, interval_ms: u64, on_tick: F)
where
    F: Fn(TickView) + Send + 'static,
{
    let engine = Arc::clone(&state.engine);

    let mut runner = CountdownRunner::new();
    runner.start(engine, interval_ms, move |tick| {
        on_tick(TickView {
            phase: tick.phase.to_string(),
            seconds_to_start: tick.seconds_to_start,
            participants: tick.participants,
            rolled_over: tick.rolled_over,
        });
    });

    let mut global_runner = state.runner.lock().unwrap();
    *global_runner = Some(runner);
}

pub fn stop_countdown(state: &AppState) {
    let mut global_runner = state.runner.lock().unwrap();
    if let Some(mut runner) = global_runner.take() {
        runner.stop();
    }
}
