//! URL building utilities for roster and usage report pages

/// Placeholder replaced with the team code in URL templates
pub const TEAM_PLACEHOLDER: &str = "{team}";

/// Builds the roster page URL for a team.
///
/// # Arguments
/// * `template` - URL template containing `{team}`
/// * `team` - Team code such as `cin` or `was`
///
/// # Example
/// ```
/// use mlb_rosters::data_fetcher::api::build_roster_url;
///
/// let url = build_roster_url("https://www.mlb.com/{team}/roster", "CIN");
/// assert_eq!(url, "https://www.mlb.com/cin/roster");
/// ```
pub fn build_roster_url(template: &str, team: &str) -> String {
    template.replace(TEAM_PLACEHOLDER, &normalize_team_code(team))
}

/// Builds the bullpen usage report URL. The template may omit `{team}` when
/// one report covers the whole league.
///
/// # Example
/// ```
/// use mlb_rosters::data_fetcher::api::build_bullpen_url;
///
/// let url = build_bullpen_url("https://example.com/bullpen/{team}.html", "was");
/// assert_eq!(url, "https://example.com/bullpen/was.html");
///
/// let url = build_bullpen_url("https://example.com/bullpen/all.html", "was");
/// assert_eq!(url, "https://example.com/bullpen/all.html");
/// ```
pub fn build_bullpen_url(template: &str, team: &str) -> String {
    build_roster_url(template, team)
}

/// Team codes are case-insensitive; the pages use lowercase.
pub fn normalize_team_code(team: &str) -> String {
    team.trim().to_lowercase()
}
