pub mod players;
pub mod roster;

pub use players::{Handedness, Player, PlayerId};
pub use roster::Roster;
