pub mod roster_cache;

pub use roster_cache::RosterCache;
