use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch document: {0}")]
    Fetch(#[from] reqwest::Error),

    // Transport errors
    #[error("Network timeout while fetching document from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("HTTP {status}: {message} (URL: {url})")]
    HttpStatus {
        status: u16,
        message: String,
        url: String,
    },

    // Markup errors
    #[error("Roster table not found: no element matches '{marker}'")]
    SchemaNotFound { marker: String },

    #[error("Invalid markup selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an error for a non-success HTTP status
    pub fn http_status(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a schema error for a document that lacks the roster table marker
    pub fn schema_not_found(marker: impl Into<String>) -> Self {
        Self::SchemaNotFound {
            marker: marker.into(),
        }
    }

    /// Create an error for a selector that does not parse
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Check if the error came from fetching a document
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            AppError::Fetch(_)
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::HttpStatus { .. }
        )
    }

    /// Check if error is retryable (timeouts, connection failures, rate limits, server errors)
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::NetworkTimeout { .. } | AppError::NetworkConnection { .. } => true,
            AppError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Check if the error means the upstream markup format changed
    pub fn is_schema_error(&self) -> bool {
        matches!(self, AppError::SchemaNotFound { .. })
    }
}
