use mar_engine::{PersonId, Verdict};

use crate::state::{AppState, ProfileCard};

pub fn get_current_card(state: &AppState) -> Option<ProfileCard> {
    let engine = state.engine.lock().unwrap();
    engine.queue.current().map(|p| ProfileCard::from_profile(p))
}

/// Record a verdict on the displayed card and return the next one.
pub fn swipe(state: &AppState, person_id: u64, liked: bool) -> Result<Option<ProfileCard>, String> {
    let verdict = if liked { Verdict::Liked } else { Verdict::Passed };

    let mut engine = state.engine.lock().unwrap();
    engine
        .queue
        .decide(PersonId(person_id), verdict)
        .map_err(|e| e.to_string())?;
    Ok(engine.queue.current().map(|p| ProfileCard::from_profile(p)))
}

/// Take back the last swipe and return the card it re-surfaces.
pub fn undo_swipe(state: &AppState) -> Result<Option<ProfileCard>, String> {
    let mut engine = state.engine.lock().unwrap();
    engine.queue.undo_last().map_err(|e| e.to_string())?;
    Ok(engine.queue.current().map(|p| ProfileCard::from_profile(p)))
}

pub fn get_liked(state: &AppState) -> Vec<u64> {
    let engine = state.engine.lock().unwrap();
    engine.queue.liked_profiles().iter().map(|id| id.0).collect()
}
