use mar_engine::Scope;

use crate::state::{AppState, ListingCard};

fn parse_scope(scope: &str) -> Result<Scope, String> {
    match scope {
        "roots" => Ok(Scope::Roots),
        "expedition" => Ok(Scope::Expedition),
        other => Err(format!("unknown scope: {other}")),
    }
}

/// Listings for one discovery tab, within the current radius.
pub fn get_listings(state: &AppState, scope: &str) -> Result<Vec<ListingCard>, String> {
    let scope = parse_scope(scope)?;
    let engine = state.engine.lock().unwrap();
    Ok(engine
        .directory
        .listings_in(scope)
        .iter()
        .map(|l| ListingCard::from_listing(l))
        .collect())
}

pub fn set_radius(state: &AppState, miles: f64) -> Result<f64, String> {
    if !miles.is_finite() || miles <= 0.0 {
        return Err(format!("invalid radius: {miles}"));
    }
    let mut engine = state.engine.lock().unwrap();
    engine.directory.set_radius(miles);
    Ok(engine.directory.radius_miles())
}
