//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | MARKET_BASE_URI | http://localhost:8080 | Backend base URL |
//! | MARKET_TOKEN | (none) | Bearer token for authenticated calls |
//! | MARKET_REQUEST_TIMEOUT_SECS | 30 | Request timeout in seconds |
//! | MARKET_LOG_LEVEL | info | Default log level when `RUST_LOG` is unset |
//!
//! A `.env` file in the working directory is loaded first when present.

const DEFAULT_BASE_URI: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the marketplace backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Default log level
    pub log_level: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            log_level: "info".to_string(),
        }
    }

    /// Load configuration from the environment (and `.env` when present)
    pub fn from_env() -> Self {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("MARKET_BASE_URI").unwrap_or_else(|| DEFAULT_BASE_URI.into()),
            token: lookup("MARKET_TOKEN").filter(|t| !t.is_empty()),
            timeout: lookup("MARKET_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            log_level: lookup("MARKET_LOG_LEVEL").unwrap_or_else(|| "info".into()),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URI)
    }
}
