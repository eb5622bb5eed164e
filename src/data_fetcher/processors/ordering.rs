use std::collections::HashSet;

use crate::data_fetcher::models::{Player, PlayerId};

/// Sorts players by jersey number.
///
/// Sentinel numbers go after every assigned number, pending before absent.
/// The sort is stable: players sharing a number (typically two sentinel
/// numbers) keep their extraction order.
pub fn sort_by_number(mut players: Vec<Player>) -> Vec<Player> {
    players.sort_by_key(|player| (player.has_sentinel_number(), player.number));
    players
}

/// Splits pitchers into `(starters, bullpen)`.
///
/// A pitcher is in the bullpen exactly when its identifier is in
/// `bullpen_ids`; pitchers without an identifier are starters. Both halves
/// keep the input order.
pub fn separate_starters_and_bullpen(
    pitchers: &[Player],
    bullpen_ids: &HashSet<PlayerId>,
) -> (Vec<Player>, Vec<Player>) {
    pitchers.iter().cloned().partition(|pitcher| {
        !pitcher
            .identifier
            .as_ref()
            .is_some_and(|id| bullpen_ids.contains(id))
    })
}
