//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers of the roster pipeline so the
//! sentinel policy and transport defaults live in one place.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default number of team rosters held by the roster cache
pub const DEFAULT_ROSTER_CACHE_CAPACITY: usize = 8;

/// Default roster page. `{team}` is replaced with the team code.
pub const DEFAULT_ROSTER_URL: &str = "https://www.mlb.com/{team}/roster";

/// Jersey number sentinels.
///
/// Sentinels only exist to keep the sort order deterministic; players carrying
/// one land near the end of their list.
pub mod jersey {
    /// Number cell holds a placeholder glyph or text that is not a number
    pub const PENDING: u16 = 66;

    /// Number cell is empty
    pub const ABSENT: u16 = 100;

    /// Glyphs the roster pages use for "number not assigned yet"
    pub const PLACEHOLDER_GLYPHS: &[&str] = &["\u{2014}", "\u{2013}", "-", "--"];
}

/// Retry configuration
pub mod retry {
    /// Maximum number of retry attempts for transient fetch failures
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;

    /// Upper bound for a server-provided Retry-After value (seconds)
    pub const MAX_RETRY_AFTER_SECONDS: u64 = 30;
}

/// Environment variable names
pub mod env_vars {
    /// Overrides the roster page URL template
    pub const ROSTER_URL: &str = "MLB_ROSTERS_ROSTER_URL";

    /// Overrides the bullpen usage report URL template
    pub const BULLPEN_URL: &str = "MLB_ROSTERS_BULLPEN_URL";

    /// Overrides the log file path
    pub const LOG_FILE: &str = "MLB_ROSTERS_LOG_FILE";

    /// Overrides the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "MLB_ROSTERS_HTTP_TIMEOUT";
}
