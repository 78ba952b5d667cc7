//! HTTP client for the Alma API
//!
//! The transport layer is deliberately thin: it builds the request URL,
//! attaches the API key and pagination window, and classifies failed
//! responses. Retry, backoff, and rate limiting are out of scope here.

use crate::error::{classify_error_response, Error, Result};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default Alma API host
pub const DEFAULT_HOST: &str = "https://api-ca.hosted.exlibrisgroup.com";

/// Default prefix before the API version
pub const DEFAULT_URL_PREFIX: &str = "almaws";

/// Default API version
pub const DEFAULT_VERSION: &str = "v1";

/// Response format requested from the API
///
/// Alma also speaks XML, but this client only consumes JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// JSON format
    #[default]
    Json,
}

impl ResponseFormat {
    fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
        }
    }
}

/// Configuration for the Alma API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// The Alma API key
    pub api_key: String,
    /// Hostname of the Alma API instance
    pub host: String,
    /// Prefix before the API version
    pub url_prefix: String,
    /// API version
    pub version: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a config with the default host, prefix, and version
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            version: DEFAULT_VERSION.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("almanaut/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a config builder
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(api_key),
        }
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the URL prefix
    pub fn url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.url_prefix = prefix.into();
        self
    }

    /// Set the API version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// HTTP transport for the Alma API
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a transport from a config
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// The config this transport was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch one page from an endpoint
    ///
    /// Issues a single GET at the given offset/limit window. Returns the raw
    /// response body on success; a response with status >= 400 is classified
    /// into [`Error::Api`].
    pub async fn fetch_page(
        &self,
        endpoint: &str,
        limit: u32,
        offset: u64,
        extra_params: &HashMap<String, String>,
    ) -> Result<String> {
        let url = self.endpoint_url(endpoint)?;

        let response = self
            .client
            .get(url)
            .query(&[
                ("apikey", self.config.api_key.as_str()),
                ("format", ResponseFormat::Json.as_str()),
            ])
            .query(&[("limit", limit.to_string()), ("offset", offset.to_string())])
            .query(&extra_params.iter().collect::<Vec<_>>())
            .send()
            .await?;

        let status = response.status();
        debug!(endpoint, limit, offset, status = status.as_u16(), "API hit");

        let body = response.text().await?;
        if status.as_u16() >= 400 {
            warn!(endpoint, status = status.as_u16(), "API request failed");
            return Err(classify_error_response(status.as_u16(), &body));
        }
        Ok(body)
    }

    /// Build the absolute URL for an endpoint
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        if endpoint.is_empty() {
            return Err(Error::invalid_request("endpoint must not be empty"));
        }
        let base = Url::parse(&self.config.host)?;
        let path = format!(
            "{}/{}/{}",
            self.config.url_prefix.trim_matches('/'),
            self.config.version.trim_matches('/'),
            endpoint.trim_start_matches('/')
        );
        Ok(base.join(&path)?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("host", &self.config.host)
            .field("url_prefix", &self.config.url_prefix)
            .field("version", &self.config.version)
            .finish_non_exhaustive()
    }
}
