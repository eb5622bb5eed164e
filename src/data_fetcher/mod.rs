pub mod api;
pub mod cache;
pub mod markup;
pub mod models;
pub mod processors;
pub mod roster_service;

pub use api::{DocumentFetcher, HttpFetcher};
pub use cache::RosterCache;
pub use models::{Handedness, Player, PlayerId, Roster};
pub use roster_service::{RosterService, parse_roster_document};
