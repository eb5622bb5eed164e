//! Text renderings of a [`Roster`] for print layouts.
//!
//! Each player renders as `number name code`, where the code is the throwing
//! hand for pitchers and the batting hand for position players.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::data_fetcher::models::{Handedness, Player, Roster};
use crate::error::AppError;

/// Which handedness a line shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandednessAxis {
    Bats,
    Throws,
}

impl HandednessAxis {
    fn pick(self, player: &Player) -> Option<Handedness> {
        match self {
            HandednessAxis::Bats => player.bats,
            HandednessAxis::Throws => player.throws,
        }
    }
}

/// Separators used when joining player lines into a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLayout {
    /// Written before each list
    pub preamble: &'static str,
    /// Written between two player lines
    pub line_separator: &'static str,
    /// Written between the starters list and the bullpen list
    pub group_separator: &'static str,
}

impl TextLayout {
    pub const PLAIN: TextLayout = TextLayout {
        preamble: "",
        line_separator: "\n",
        group_separator: "\n\n",
    };

    pub const LATEX: TextLayout = TextLayout {
        preamble: r"\noindent",
        line_separator: r"\\",
        group_separator: r"\\ \\",
    };
}

impl Default for TextLayout {
    fn default() -> Self {
        TextLayout::PLAIN
    }
}

/// Named layouts selectable from configuration and the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Plain,
    Latex,
}

impl LayoutKind {
    pub fn layout(self) -> TextLayout {
        match self {
            LayoutKind::Plain => TextLayout::PLAIN,
            LayoutKind::Latex => TextLayout::LATEX,
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutKind::Plain => write!(f, "plain"),
            LayoutKind::Latex => write!(f, "latex"),
        }
    }
}

impl FromStr for LayoutKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(LayoutKind::Plain),
            "latex" => Ok(LayoutKind::Latex),
            other => Err(AppError::config_error(format!(
                "Unknown layout '{other}', expected 'plain' or 'latex'"
            ))),
        }
    }
}

/// Renders one player as `number name code`.
///
/// The code is left off when the handedness could not be read.
///
/// # Examples
///
/// ```
/// use mlb_rosters::data_fetcher::models::{Handedness, Player};
/// use mlb_rosters::format::{HandednessAxis, player_line};
///
/// let player = Player::new(12, "Jane Doe", Some(Handedness::Left), Some(Handedness::Right), None);
/// assert_eq!(player_line(&player, HandednessAxis::Throws), "12 Jane Doe R");
/// assert_eq!(player_line(&player, HandednessAxis::Bats), "12 Jane Doe L");
/// ```
pub fn player_line(player: &Player, axis: HandednessAxis) -> String {
    match axis.pick(player) {
        Some(hand) => format!("{} {} {}", player.number, player.name, hand.code()),
        None => format!("{} {}", player.number, player.name),
    }
}

/// Joins the lines of `players` with the layout's line separator.
pub fn roster_list(players: &[Player], axis: HandednessAxis, layout: &TextLayout) -> String {
    let lines: Vec<String> = players.iter().map(|p| player_line(p, axis)).collect();
    format!("{}{}", layout.preamble, lines.join(layout.line_separator))
}

/// Pitchers block: starters and bullpen as two groups once classified,
/// otherwise every pitcher as one list.
pub fn pitchers_block(roster: &Roster, layout: &TextLayout) -> String {
    if roster.is_classified() {
        format!(
            "{}{}{}",
            roster_list(roster.starters(), HandednessAxis::Throws, layout),
            layout.group_separator,
            roster_list(roster.bullpen(), HandednessAxis::Throws, layout)
        )
    } else {
        roster_list(roster.pitchers(), HandednessAxis::Throws, layout)
    }
}

pub fn position_players_block(roster: &Roster, layout: &TextLayout) -> String {
    roster_list(roster.position_players(), HandednessAxis::Bats, layout)
}
