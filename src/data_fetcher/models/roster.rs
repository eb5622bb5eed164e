use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::players::{Player, PlayerId};
use crate::data_fetcher::processors::separate_starters_and_bullpen;

/// Classified roster of one team for one fetch.
///
/// `pitchers` and `position_players` are sorted by jersey number. `starters`
/// and `bullpen` partition `pitchers` and stay empty until bullpen data has
/// been applied with [`Roster::classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    team: String,
    pitchers: Vec<Player>,
    position_players: Vec<Player>,
    starters: Vec<Player>,
    bullpen: Vec<Player>,
    #[serde(default)]
    classified: bool,
}

impl Roster {
    /// Creates an unclassified roster. Both lists are expected to be sorted already.
    pub fn new(team: impl Into<String>, pitchers: Vec<Player>, position_players: Vec<Player>) -> Self {
        Self {
            team: team.into(),
            pitchers,
            position_players,
            starters: Vec::new(),
            bullpen: Vec::new(),
            classified: false,
        }
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn pitchers(&self) -> &[Player] {
        &self.pitchers
    }

    pub fn position_players(&self) -> &[Player] {
        &self.position_players
    }

    pub fn starters(&self) -> &[Player] {
        &self.starters
    }

    pub fn bullpen(&self) -> &[Player] {
        &self.bullpen
    }

    /// True once bullpen data split the pitchers into starters and relievers
    pub fn is_classified(&self) -> bool {
        self.classified
    }

    /// Splits `pitchers` into starters and bullpen.
    ///
    /// An empty id set means no bullpen data was available; the roster is left
    /// unclassified and consumers fall back to `pitchers`.
    pub fn classify(&mut self, bullpen_ids: &HashSet<PlayerId>) {
        if bullpen_ids.is_empty() {
            self.starters.clear();
            self.bullpen.clear();
            self.classified = false;
            return;
        }
        let (starters, bullpen) = separate_starters_and_bullpen(&self.pitchers, bullpen_ids);
        self.starters = starters;
        self.bullpen = bullpen;
        self.classified = true;
    }
}
