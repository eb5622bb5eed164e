//! Bullpen usage report parsing.
//!
//! The usage report is maintained independently of the roster pages. Its
//! player links end in `-<digits>.html`; the digits are the identifiers used
//! to classify pitchers. Anything that does not fit that shape is ignored.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, info, instrument, warn};

use crate::data_fetcher::api::DocumentFetcher;
use crate::data_fetcher::markup::{MarkupDocument, UsageReportSchema};
use crate::data_fetcher::models::PlayerId;

static USAGE_LINK_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(\d+)\.html$").expect("usage link pattern is valid"));

/// Fetches the usage report and collects the bullpen identifiers.
///
/// Never fails: a fetch error is logged and yields an empty set, which
/// callers treat as "no bullpen data".
#[instrument(skip(fetcher, schema))]
pub async fn resolve_bullpen_ids<F: DocumentFetcher>(
    fetcher: &F,
    url: &str,
    schema: &UsageReportSchema,
) -> HashSet<PlayerId> {
    match fetcher.fetch(url).await {
        Ok(text) => {
            let ids = parse_bullpen_ids(&text, schema);
            info!("Resolved {} bullpen identifier(s) from {url}", ids.len());
            ids
        }
        Err(e) => {
            warn!("Bullpen report unavailable, continuing without it: {e}");
            HashSet::new()
        }
    }
}

/// Collects identifiers from every usage link in a report document.
pub fn parse_bullpen_ids(text: &str, schema: &UsageReportSchema) -> HashSet<PlayerId> {
    let document = MarkupDocument::parse(text);
    let mut ids = HashSet::new();

    for link in document.select(&schema.link) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        match usage_link_id(href) {
            Some(id) => {
                ids.insert(id);
            }
            None => debug!("Ignoring usage link without an identifier: {href}"),
        }
    }

    ids
}

/// Identifier encoded in a usage link target, e.g. `.../usage-321.html`
pub fn usage_link_id(href: &str) -> Option<PlayerId> {
    let path = href.split(['?', '#']).next().unwrap_or_default();
    USAGE_LINK_ID
        .captures(path)
        .and_then(|captures| captures.get(1))
        .map(|digits| PlayerId::new(digits.as_str()))
}
