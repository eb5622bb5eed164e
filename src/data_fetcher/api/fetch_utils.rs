//! Document fetching with retry logic and error mapping

use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::retry;
use crate::error::AppError;

/// Source of raw markup documents.
///
/// The roster pipeline only needs the body text of a URL; tests substitute
/// in-memory fetchers.
pub trait DocumentFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// [`DocumentFetcher`] over HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    max_retries: u32,
    base_backoff: Duration,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            max_retries: retry::MAX_ATTEMPTS,
            base_backoff: Duration::from_millis(retry::BASE_DELAY_MS),
        }
    }

    /// Builds a fetcher with its own client using the given timeout
    pub fn with_timeout(timeout_seconds: u64) -> Result<Self, AppError> {
        let client = super::create_http_client_with_timeout(timeout_seconds)?;
        Ok(Self::new(client))
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }
}

impl DocumentFetcher for HttpFetcher {
    /// Fetches a document body.
    ///
    /// This function:
    /// - Retries timeouts, connection failures, 429 and 5xx responses with
    ///   exponential backoff
    /// - Respects Retry-After headers for rate limiting
    /// - Maps the final failure to a fetch error variant of [`AppError`]
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        info!("Fetching document from URL: {url}");

        let mut attempt = 0u32;
        let mut backoff = self.base_backoff;
        let response = loop {
            match self.client.get(url).send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if (status.as_u16() == 429 || status.is_server_error())
                        && attempt < self.max_retries
                    {
                        let retry_after = resp
                            .headers()
                            .get(reqwest::header::RETRY_AFTER)
                            .and_then(|h| h.to_str().ok())
                            .and_then(|s| s.parse::<u64>().ok())
                            .map(|secs| Duration::from_secs(secs.min(retry::MAX_RETRY_AFTER_SECONDS)));
                        let wait = retry_after.unwrap_or(backoff);
                        warn!(
                            "Transient {} from {}. Retrying in {:?} (attempt {}/{})",
                            status,
                            url,
                            wait,
                            attempt + 1,
                            self.max_retries
                        );
                        tokio::time::sleep(wait).await;
                        attempt += 1;
                        backoff = backoff.saturating_mul(2);
                        continue;
                    }
                    break resp;
                }
                Err(e) => {
                    if (e.is_timeout() || e.is_connect()) && attempt < self.max_retries {
                        warn!(
                            "Request error {} for {}. Retrying in {:?} (attempt {}/{})",
                            e,
                            url,
                            backoff,
                            attempt + 1,
                            self.max_retries
                        );
                        tokio::time::sleep(backoff).await;
                        attempt += 1;
                        backoff = backoff.saturating_mul(2);
                        continue;
                    }
                    error!("Request failed for URL {}: {}", url, e);
                    return Err(if e.is_timeout() {
                        AppError::network_timeout(url)
                    } else if e.is_connect() {
                        AppError::network_connection(url, e.to_string())
                    } else {
                        AppError::Fetch(e)
                    });
                }
            }
        };

        let status = response.status();
        debug!("Response status: {status}");

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown error");
            error!("HTTP {} - {} (URL: {})", status.as_u16(), reason, url);
            return Err(AppError::http_status(status.as_u16(), reason, url));
        }

        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to read response text from URL {}: {}", url, e);
                return Err(AppError::Fetch(e));
            }
        };

        debug!("Response length: {} bytes", body.len());
        Ok(body)
    }
}
