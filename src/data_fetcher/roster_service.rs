//! Roster orchestration: fetch, extract, sort and classify.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::data_fetcher::api::{DocumentFetcher, build_bullpen_url, build_roster_url, normalize_team_code};
use crate::data_fetcher::cache::RosterCache;
use crate::data_fetcher::markup::{MarkupDocument, RosterSchema, UsageReportSchema};
use crate::data_fetcher::models::{Player, Roster};
use crate::data_fetcher::processors::{extract, resolve_bullpen_ids, sort_by_number};
use crate::error::AppError;

/// Parses a roster page into `(pitchers, position_players)`, each sorted by number.
///
/// The first roster table holds the pitchers; every later table holds
/// position players.
///
/// # Errors
/// * `AppError::SchemaNotFound` - The page has no roster table
pub fn parse_roster_document(
    text: &str,
    schema: &RosterSchema,
) -> Result<(Vec<Player>, Vec<Player>), AppError> {
    let document = MarkupDocument::parse(text);
    let tables = document.locate_tables(schema)?;

    let (pitcher_table, position_tables) = tables
        .split_first()
        .ok_or_else(|| AppError::schema_not_found(schema.table_marker()))?;

    let pitchers = sort_by_number(extract(pitcher_table));
    let position_players = sort_by_number(position_tables.iter().flat_map(extract).collect());

    if pitchers.is_empty() {
        warn!("Roster page has a pitchers table without player rows");
    }

    Ok((pitchers, position_players))
}

/// Builds [`Roster`]s for team codes.
pub struct RosterService<F: DocumentFetcher> {
    fetcher: F,
    schema: RosterSchema,
    roster_url: String,
    bullpen: Option<BullpenReport>,
    cache: Option<Arc<RosterCache>>,
}

struct BullpenReport {
    url: String,
    schema: UsageReportSchema,
}

impl<F: DocumentFetcher> RosterService<F> {
    /// # Arguments
    /// * `fetcher` - Source of raw documents
    /// * `schema` - Layout of the roster pages
    /// * `roster_url` - URL template containing `{team}`
    pub fn new(fetcher: F, schema: RosterSchema, roster_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            schema,
            roster_url: roster_url.into(),
            bullpen: None,
            cache: None,
        }
    }

    /// Builds a service from configuration. The bullpen report is enabled when
    /// the configuration names one.
    pub fn from_config(config: &Config, fetcher: F) -> Result<Self, AppError> {
        let schema = RosterSchema::for_version(config.schema_version)?;
        let mut service = Self::new(fetcher, schema, config.roster_url.clone());
        if let Some(url) = &config.bullpen_url {
            service = service.with_bullpen_report(url.clone(), UsageReportSchema::default_report()?);
        }
        Ok(service)
    }

    /// Enables starter/bullpen classification from a usage report
    pub fn with_bullpen_report(mut self, url: impl Into<String>, schema: UsageReportSchema) -> Self {
        self.bullpen = Some(BullpenReport {
            url: url.into(),
            schema,
        });
        self
    }

    /// Shares rosters through `cache` for the lifetime of the process
    pub fn with_cache(mut self, cache: Arc<RosterCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Returns the roster of `team`, from the cache when one is configured.
    ///
    /// # Errors
    /// * Fetch errors - The roster page could not be retrieved
    /// * `AppError::SchemaNotFound` - The roster page has no roster table
    pub async fn get_roster(&self, team: &str) -> Result<Arc<Roster>, AppError> {
        match &self.cache {
            Some(cache) => {
                cache
                    .get_or_try_insert_with(team, || self.build_roster(team))
                    .await
            }
            None => self.build_roster(team).await.map(Arc::new),
        }
    }

    /// Fetches and builds a fresh roster, bypassing the cache.
    #[instrument(skip(self))]
    pub async fn build_roster(&self, team: &str) -> Result<Roster, AppError> {
        let team = normalize_team_code(team);
        let url = build_roster_url(&self.roster_url, &team);
        let text = self.fetcher.fetch(&url).await?;

        let (pitchers, position_players) = parse_roster_document(&text, &self.schema)?;
        info!(
            "Extracted roster: team={team}, pitchers={}, position_players={}",
            pitchers.len(),
            position_players.len()
        );

        let mut roster = Roster::new(team.clone(), pitchers, position_players);

        if let Some(report) = &self.bullpen {
            let url = build_bullpen_url(&report.url, &team);
            let ids = resolve_bullpen_ids(&self.fetcher, &url, &report.schema).await;
            roster.classify(&ids);
            info!(
                "Classified pitchers: team={team}, starters={}, bullpen={}",
                roster.starters().len(),
                roster.bullpen().len()
            );
        }

        Ok(roster)
    }
}
