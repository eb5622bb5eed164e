//! MLB roster extraction library
//!
//! This library fetches team roster pages, extracts typed player records,
//! sorts them by jersey number and optionally splits pitchers into starters
//! and bullpen using a bullpen usage report.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mlb_rosters::config::Config;
//! use mlb_rosters::data_fetcher::{HttpFetcher, RosterService};
//! use mlb_rosters::error::AppError;
//! use mlb_rosters::format::{TextLayout, pitchers_block};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let fetcher = HttpFetcher::with_timeout(config.http_timeout_seconds)?;
//!     let service = RosterService::from_config(&config, fetcher)?;
//!
//!     let roster = service.get_roster("cin").await?;
//!     println!("{}", pitchers_block(&roster, &TextLayout::PLAIN));
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod format;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{Handedness, Player, PlayerId, Roster};
pub use data_fetcher::{DocumentFetcher, HttpFetcher, RosterCache, RosterService};
pub use error::AppError;
pub use format::{LayoutKind, TextLayout};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
