use serde::{Deserialize, Serialize};
use std::fmt;

/// Which hand a player bats or throws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    /// Switch hitter
    #[serde(rename = "S")]
    Switch,
}

impl Handedness {
    /// Decodes a handedness code such as `"L"`, `"r"` or `"S"`.
    ///
    /// Only the first non-whitespace character is inspected, so `"Right"`
    /// decodes the same as `"R"`.
    ///
    /// # Example
    /// ```
    /// use mlb_rosters::data_fetcher::models::Handedness;
    ///
    /// assert_eq!(Handedness::from_code(" l "), Some(Handedness::Left));
    /// assert_eq!(Handedness::from_code("S"), Some(Handedness::Switch));
    /// assert_eq!(Handedness::from_code("?"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().chars().next()?.to_ascii_uppercase() {
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            'S' | 'B' => Some(Self::Switch),
            _ => None,
        }
    }

    /// Single letter code used in the printed roster lines
    pub fn code(self) -> &'static str {
        match self {
            Self::Left => "L",
            Self::Right => "R",
            Self::Switch => "S",
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Opaque key identifying a player across the roster page and the usage report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Jersey number, or one of the sentinels in [`crate::constants::jersey`]
    pub number: u16,
    pub name: String,
    pub bats: Option<Handedness>,
    pub throws: Option<Handedness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<PlayerId>,
}

impl Player {
    pub fn new(
        number: u16,
        name: impl Into<String>,
        bats: Option<Handedness>,
        throws: Option<Handedness>,
        identifier: Option<PlayerId>,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            bats,
            throws,
            identifier,
        }
    }

    /// Whether the number is a placeholder rather than an assigned jersey
    pub fn has_sentinel_number(&self) -> bool {
        use crate::constants::jersey;
        self.number == jersey::PENDING || self.number == jersey::ABSENT
    }
}
