//! MAR Core Engine
//!
//! State machines behind the MAR app: the cyclic matching queue and the
//! weekly gathering session with its time-gated venue reveal. The
//! presentation layer reads state from here and dispatches intents back in;
//! sourcing of profiles and directory listings stays with the data provider.

pub mod countdown_runner;
pub mod directory;
pub mod engine;
pub mod gathering;
pub mod identity;
pub mod model;
pub mod queue;
pub mod sample;
pub mod schedule;
pub mod snapshot;

pub use directory::{Directory, DirectoryListing, ListingKind, Scope};
pub use engine::Engine;
pub use gathering::{Countdown, GatheringError, GatheringSession, Phase, VenueAccess};
pub use model::*;
pub use queue::{MatchQueue, QueueError};
pub use schedule::GatheringSchedule;
pub use snapshot::{ExportData, ImportResult};
