use mar_engine::PersonId;

use crate::state::{AppState, PairingView, ProfileCard, TraitChip};

pub fn get_identity(state: &AppState, person_id: u64) -> Option<ProfileCard> {
    let engine = state.engine.lock().unwrap();
    engine
        .profile(PersonId(person_id))
        .map(|p| ProfileCard::from_profile(p))
}

/// Side-by-side identity comparison rows for the overlay.
pub fn compare_identity(state: &AppState, a: u64, b: u64) -> Result<Vec<PairingView>, String> {
    let engine = state.engine.lock().unwrap();
    let pairings = engine
        .compare(PersonId(a), PersonId(b))
        .ok_or_else(|| "unknown profile id".to_string())?;

    Ok(pairings
        .into_iter()
        .map(|p| PairingView {
            kind: p.kind.as_str().to_string(),
            mine: p.mine.map(|t| TraitChip {
                kind: t.kind.as_str().to_string(),
                value: t.value,
                accent: t.accent,
            }),
            theirs: p.theirs.map(|t| TraitChip {
                kind: t.kind.as_str().to_string(),
                value: t.value,
                accent: t.accent,
            }),
        })
        .collect())
}
