//! Sample Data Provider
//!
//! Stands in for the external directory feed: a fixed deck, a local user,
//! fixed listings, and random profile generation from predefined tables.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rand::Rng;

use crate::directory::{DirectoryListing, ListingKind, Scope};
use crate::model::{IdentityTrait, ListingId, PersonId, Profile, ProfileRef, TraitKind};

const ORIGINS: &[&str] = &[
    "Ethiopian", "Ghanaian", "Mexican", "Lebanese", "Vietnamese", "Nigerian",
    "Peruvian", "Korean", "Moroccan", "Jamaican", "Turkish", "Filipino",
];

const FIRST_NAMES: &[&str] = &[
    "Abeba", "Kwame", "Sofia", "Leila", "Minh", "Chidi", "Rosa", "Jisoo",
    "Yasmin", "Andre", "Emre", "Maya", "Tariq", "Ines", "Kofi", "Lucia",
];

/// (value, accent) pairs per trait kind.
const RHYTHMS: &[(&str, &str)] = &[
    ("Ethio-Jazz", "#4A3728"),
    ("Highlife", "#2A3B4A"),
    ("Cumbia", "#1A3A3A"),
    ("Dabke", "#3A2A4A"),
    ("Afrobeat", "#2A4A3A"),
    ("Bolero", "#4A2A3A"),
];

const SPICES: &[(&str, &str)] = &[
    ("Berbere & Cardamom", "#8B1E1E"),
    ("Scotch Bonnet", "#4A2A2A"),
    ("Smoked Chipotle", "#6A2A1A"),
    ("Sumac & Za'atar", "#5A3A1A"),
    ("Lemongrass", "#3A4A2A"),
    ("Harissa", "#6A1A2A"),
];

const LEGACIES: &[(&str, &str)] = &[
    ("Bete Amhara", "#D4AF37"),
    ("Ashanti", "#5A4A2A"),
    ("Oaxacan", "#3A4A1A"),
    ("Phoenician", "#4A4A2A"),
    ("Mekong Delta", "#2A5A3A"),
    ("Yoruba", "#5A2A4A"),
];

const BIOS: &[&str] = &[
    "Looking for the best Jollof in Dalston.",
    "Architect by day, salsa dancer by night.",
    "Collects grandmother's recipes, one call at a time.",
    "Will trade playlists for street-food tips.",
    "New in town, fluent in three kitchens.",
];

fn stack(rhythm: usize, spice: usize, legacy: usize) -> Vec<IdentityTrait> {
    let pick = |kind: TraitKind, (value, accent): (&str, &str)| IdentityTrait {
        kind,
        value: value.to_string(),
        accent: accent.to_string(),
    };
    vec![
        pick(TraitKind::Rhythm, RHYTHMS[rhythm]),
        pick(TraitKind::Spice, SPICES[spice]),
        pick(TraitKind::Legacy, LEGACIES[legacy]),
    ]
}

static LOCAL_USER: Lazy<ProfileRef> = Lazy::new(|| {
    Arc::new(Profile {
        id: PersonId(1),
        name: "Abeba".to_string(),
        origin: "Ethiopian".to_string(),
        bio: "Coffee ceremony on Sundays, Ethio-Jazz the rest of the week.".to_string(),
        stack: stack(0, 0, 0),
    })
});

static DECK: Lazy<Vec<ProfileRef>> = Lazy::new(|| {
    vec![
        Arc::new(Profile {
            id: PersonId(2),
            name: "Kwame".to_string(),
            origin: "Ghanaian".to_string(),
            bio: "Looking for the best Jollof in Dalston.".to_string(),
            stack: stack(1, 1, 1),
        }),
        Arc::new(Profile {
            id: PersonId(3),
            name: "Sofia".to_string(),
            origin: "Mexican".to_string(),
            bio: "Architect by day, salsa dancer by night.".to_string(),
            stack: stack(2, 2, 2),
        }),
    ]
});

static LISTINGS: Lazy<Vec<DirectoryListing>> = Lazy::new(|| {
    vec![
        DirectoryListing {
            id: ListingId(1),
            name: "Lalibela Ethiopian".to_string(),
            kind: ListingKind::Restaurant,
            scope: Scope::Roots,
            distance_miles: 0.8,
            rating: Some(4.9),
            host: None,
            is_business: true,
        },
        DirectoryListing {
            id: ListingId(2),
            name: "Meskel Celebration".to_string(),
            kind: ListingKind::Event,
            scope: Scope::Roots,
            distance_miles: 1.2,
            rating: None,
            host: Some("Addis Community".to_string()),
            is_business: false,
        },
        DirectoryListing {
            id: ListingId(3),
            name: "Oaxacan Pottery Workshop".to_string(),
            kind: ListingKind::Activity,
            scope: Scope::Expedition,
            distance_miles: 2.5,
            rating: None,
            host: Some("Maria G.".to_string()),
            is_business: false,
        },
        DirectoryListing {
            id: ListingId(4),
            name: "Tacos El Pastor".to_string(),
            kind: ListingKind::Restaurant,
            scope: Scope::Expedition,
            distance_miles: 3.1,
            rating: None,
            host: None,
            is_business: true,
        },
    ]
});

/// The signed-in sample user.
pub fn local_user() -> ProfileRef {
    Arc::clone(&LOCAL_USER)
}

/// The fixed sample swipe deck, in presentation order.
pub fn deck() -> Vec<ProfileRef> {
    DECK.iter().map(Arc::clone).collect()
}

/// The fixed sample directory listings.
pub fn listings() -> Vec<DirectoryListing> {
    LISTINGS.clone()
}

/// Generate a random candidate for larger decks.
pub fn random_profile(id: PersonId) -> ProfileRef {
    let mut rng = rand::thread_rng();
    Arc::new(Profile {
        id,
        name: FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())].to_string(),
        origin: ORIGINS[rng.gen_range(0..ORIGINS.len())].to_string(),
        bio: BIOS[rng.gen_range(0..BIOS.len())].to_string(),
        stack: stack(
            rng.gen_range(0..RHYTHMS.len()),
            rng.gen_range(0..SPICES.len()),
            rng.gen_range(0..LEGACIES.len()),
        ),
    })
}
