pub mod fetch_utils;
pub mod http_client;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::*;
// Re-export fetching
pub use fetch_utils::{DocumentFetcher, HttpFetcher};
