//! Converts roster table rows into [`Player`] records.
//!
//! Rows that lack a required cell are skipped; a bad jersey number is
//! replaced with a sentinel so the player still shows up.

use tracing::{debug, warn};

use crate::constants::jersey;
use crate::data_fetcher::markup::{RowFragment, TableFragment, element_text};
use crate::data_fetcher::models::{Handedness, Player, PlayerId};

/// Extracts every player of a roster table, in row order.
pub fn extract(table: &TableFragment<'_>) -> Vec<Player> {
    let mut players = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in table.rows().enumerate() {
        match extract_row(&row) {
            Some(player) => players.push(player),
            None => {
                skipped += 1;
                debug!("Skipped roster row {index}: {}", row.text());
            }
        }
    }

    debug!(
        "Extracted {} player(s), skipped {} row(s)",
        players.len(),
        skipped
    );
    players
}

/// Extracts one player. `None` means the row is not a player row.
pub fn extract_row(row: &RowFragment<'_>) -> Option<Player> {
    let schema = row.schema();

    if let Some(marker) = schema.skip_marker
        && row.text().contains(marker)
    {
        return None;
    }

    let number_cell = row.find(&schema.number_cell)?;
    let name_link = row.find(&schema.name_link)?;
    let bat_throw_cell = row.find(&schema.bat_throw_cell)?;

    let name = element_text(&name_link);
    if name.is_empty() {
        return None;
    }

    let number_text = match &schema.number {
        Some(selector) => number_cell
            .select(selector)
            .next()
            .map(|element| element_text(&element))
            .unwrap_or_default(),
        None => element_text(&number_cell),
    };
    let number = parse_number(&number_text);

    let bat_throw = element_text(&bat_throw_cell);
    let (bats, throws) = parse_handedness(&bat_throw, schema.handedness_delimiter);
    if bats.is_none() || throws.is_none() {
        warn!("Could not read handedness for '{name}' from '{bat_throw}'");
    }

    let identifier = name_link.value().attr("href").and_then(identifier_from_href);
    if identifier.is_none() {
        debug!("Player '{name}' has no usable link target");
    }

    Some(Player {
        number,
        name,
        bats,
        throws,
        identifier,
    })
}

/// Resolves jersey number text to a number.
///
/// * empty text resolves to [`jersey::ABSENT`]
/// * a placeholder glyph resolves to [`jersey::PENDING`]
/// * any other non-numeric text is logged and resolves to [`jersey::PENDING`]
///
/// # Example
/// ```
/// use mlb_rosters::data_fetcher::processors::parse_number;
///
/// assert_eq!(parse_number("34"), 34);
/// assert_eq!(parse_number("#7"), 7);
/// assert_eq!(parse_number(""), 100);
/// assert_eq!(parse_number("\u{2014}"), 66);
/// ```
pub fn parse_number(text: &str) -> u16 {
    let text = text.trim().trim_start_matches('#').trim();
    if text.is_empty() {
        return jersey::ABSENT;
    }
    if jersey::PLACEHOLDER_GLYPHS.contains(&text) {
        return jersey::PENDING;
    }
    match text.parse::<u16>() {
        Ok(number) => number,
        Err(e) => {
            warn!(
                "Unparseable jersey number '{text}' ({e}), using {}",
                jersey::PENDING
            );
            jersey::PENDING
        }
    }
}

/// Splits a combined `"<bats><delimiter><throws>"` field.
pub fn parse_handedness(text: &str, delimiter: char) -> (Option<Handedness>, Option<Handedness>) {
    match text.split_once(delimiter) {
        Some((bats, throws)) => (Handedness::from_code(bats), Handedness::from_code(throws)),
        None => (None, None),
    }
}

/// Player identifier from a player link target.
///
/// The identifier is the trailing path segment. Older pages link through a
/// `player_id` query parameter instead, which takes precedence when present.
///
/// # Example
/// ```
/// use mlb_rosters::data_fetcher::processors::identifier_from_href;
///
/// assert_eq!(identifier_from_href("/players/55").unwrap().as_str(), "55");
/// assert_eq!(identifier_from_href("/player.jsp?player_id=42").unwrap().as_str(), "42");
/// assert!(identifier_from_href("/").is_none());
/// ```
pub fn identifier_from_href(href: &str) -> Option<PlayerId> {
    let href = href.split('#').next().unwrap_or_default();
    let (path, query) = match href.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (href, None),
    };

    if let Some(id) = query.and_then(|query| {
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, value)| *key == "player_id" && !value.is_empty())
            .map(|(_, value)| value)
    }) {
        return Some(PlayerId::new(id));
    }

    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(PlayerId::new)
}
