//! Core data types for MAR entities
//!
//! Profiles and their traits are provider-owned: the engine references
//! them, it never fabricates or mutates them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Identity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub u64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub u64);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Profiles
// ============================================================================

/// Cultural facet kinds. More kinds may ship later.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitKind {
    Rhythm,
    Spice,
    Legacy,
}

impl TraitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraitKind::Rhythm => "rhythm",
            TraitKind::Spice => "spice",
            TraitKind::Legacy => "legacy",
        }
    }
}

/// One card in a profile's identity stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityTrait {
    pub kind: TraitKind,
    pub value: String,
    /// Hex color the presentation layer paints the card with.
    pub accent: String,
}

/// Identity of a candidate or the local user. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: PersonId,
    pub name: String,
    pub origin: String,
    pub bio: String,
    /// Stack order is rendering order.
    pub stack: Vec<IdentityTrait>,
}

pub type ProfileRef = Arc<Profile>;

// ============================================================================
// Swiping
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Liked,
    Passed,
}

/// One swipe, recorded once per profile per pass. Never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeDecision {
    pub person: PersonId,
    pub verdict: Verdict,
}

// ============================================================================
// Preferences
// ============================================================================

/// Which participant pool a join request draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTypePreference {
    /// Dine with others sharing your heritage.
    #[default]
    RootsMatch,
    /// A randomized mix of cultures.
    GlobalExpedition,
}
