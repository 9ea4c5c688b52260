//! Directory of culturally-tagged places and events
//!
//! Listings come pre-validated from the external provider, distance
//! included; the engine only scopes and radius-filters them for display.

use serde::{Deserialize, Serialize};

use crate::model::ListingId;

/// Default search radius in miles; 5/10/25 presets are presentation.
pub const DEFAULT_RADIUS_MILES: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Restaurant,
    Event,
    Activity,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Restaurant => "restaurant",
            ListingKind::Event => "event",
            ListingKind::Activity => "activity",
        }
    }
}

/// The two discovery tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Roots,
    Expedition,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Roots => "roots",
            Scope::Expedition => "expedition",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryListing {
    pub id: ListingId,
    pub name: String,
    pub kind: ListingKind,
    pub scope: Scope,
    pub distance_miles: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub is_business: bool,
}

#[derive(Debug, Clone)]
pub struct Directory {
    listings: Vec<DirectoryListing>,
    radius_miles: f64,
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            listings: Vec::new(),
            radius_miles: DEFAULT_RADIUS_MILES,
        }
    }
}

impl Directory {
    pub fn new(listings: Vec<DirectoryListing>) -> Self {
        Self {
            listings,
            radius_miles: DEFAULT_RADIUS_MILES,
        }
    }

    /// Replace the listings, keeping the user's radius.
    pub fn load(&mut self, listings: Vec<DirectoryListing>) {
        self.listings = listings;
    }

    pub fn listings(&self) -> &[DirectoryListing] {
        &self.listings
    }

    pub fn listing(&self, id: ListingId) -> Option<&DirectoryListing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn radius_miles(&self) -> f64 {
        self.radius_miles
    }

    pub fn set_radius(&mut self, miles: f64) {
        self.radius_miles = miles;
    }

    /// Listings in `scope` within the current radius, in provider order.
    pub fn listings_in(&self, scope: Scope) -> Vec<&DirectoryListing> {
        self.listings
            .iter()
            .filter(|l| l.scope == scope && l.distance_miles <= self.radius_miles)
            .collect()
    }
}
