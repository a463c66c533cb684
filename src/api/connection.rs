//! HTTP transport for OCS calls
//!
//! One [`Connection`] holds the credentials and the reqwest client and is
//! shared by every resource client. It issues exactly one request per call:
//! no retries, no caching.

use super::constants::headers;
use super::error::{ApiError, Result};
use super::params::Params;
use super::request::{Method, RequestDescriptor};
use super::response::{Envelope, RawResponse};
use crate::auth::Credentials;
use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;
use std::time::{Duration, Instant};

/// Explicit transport settings, so behaviour never depends on reqwest defaults
#[derive(Debug, Clone, PartialEq)]
pub struct TransportConfig {
    /// Total request timeout, `None` to wait forever
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub user_agent: String,
    /// Skip TLS certificate verification (self-signed test instances)
    pub accept_invalid_certs: bool,
    /// Turn non-2xx HTTP statuses into [`ApiError::Transport`] instead of
    /// parsing the envelope
    pub http_errors: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            user_agent: super::constants::user_agent(),
            accept_invalid_certs: false,
            http_errors: false,
        }
    }
}

impl TransportConfig {
    /// Create a new builder for TransportConfig
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::new()
    }
}

/// Builder for TransportConfig
#[derive(Debug)]
pub struct TransportConfigBuilder {
    config: TransportConfig,
}

impl TransportConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: TransportConfig::default(),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn no_timeout(mut self) -> Self {
        self.config.timeout = None;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    pub fn http_errors(mut self, enabled: bool) -> Self {
        self.config.http_errors = enabled;
        self
    }

    pub fn build(self) -> TransportConfig {
        self.config
    }
}

impl Default for TransportConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared transport: base URI, credentials and HTTP client
#[derive(Debug)]
pub struct Connection {
    base_url: Url,
    credentials: Credentials,
    http_client: reqwest::Client,
    config: TransportConfig,
}

impl Connection {
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, TransportConfig::default())
    }

    pub fn with_config(credentials: Credentials, config: TransportConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http_client = builder.build()?;

        Self::with_custom_client(credentials, http_client, config)
    }

    /// Create a connection around an already configured reqwest client.
    ///
    /// Only `http_errors` of `config` applies; the other knobs are whatever
    /// `http_client` was built with.
    pub fn with_custom_client(
        credentials: Credentials,
        http_client: reqwest::Client,
        config: TransportConfig,
    ) -> Result<Self> {
        let base_url = parse_base_uri(&credentials.base_uri)?;
        debug!("OCS connection for {} as {}", base_url, credentials.username);

        Ok(Self {
            base_url,
            credentials,
            http_client,
            config,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Absolute URL for a descriptor, including its query string
    pub fn url_for(&self, request: &RequestDescriptor) -> Result<Url> {
        let mut url = self.base_url.join(&request.path).map_err(|e| {
            ApiError::invalid_options(format!("Invalid request path '{}': {}", request.path, e))
        })?;

        let query = request.query.to_query_string();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(url)
    }

    /// Issue one HTTP request and return the raw status and body
    pub async fn send(&self, request: &RequestDescriptor) -> Result<RawResponse> {
        let url = self.url_for(request)?;
        let header_map = self.headers_for(request)?;

        debug!("{} {}", request.method, url);
        let started = Instant::now();

        let mut builder = self
            .http_client
            .request(request.method.into(), url.clone());
        if request.auth {
            builder = builder.basic_auth(&self.credentials.username, Some(&self.credentials.password));
        }
        if let Some(form) = &request.form {
            builder = builder.form(&form.to_pairs());
        }
        builder = builder.headers(header_map);

        let mut response = builder.send().await?;
        debug!(
            "{} {} -> HTTP {} in {:?}",
            request.method,
            url,
            response.status().as_u16(),
            started.elapsed()
        );

        if self.config.http_errors {
            response = response.error_for_status()?;
        }

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse::new(status, body))
    }

    /// Send a descriptor and parse the response envelope
    pub async fn execute(&self, request: RequestDescriptor) -> Result<Envelope> {
        let raw = self.send(&request).await?;
        Envelope::parse(raw)
    }

    /// Plain call with the default headers and credentials
    pub async fn request(&self, method: Method, path: impl Into<String>) -> Result<Envelope> {
        self.execute(RequestDescriptor::new(method, path)).await
    }

    /// Call declaring a form content type, with or without a body
    pub async fn push_data_request(
        &self,
        method: Method,
        path: impl Into<String>,
        form: Option<Params>,
    ) -> Result<Envelope> {
        let mut request = RequestDescriptor::new(method, path)
            .header(reqwest::header::CONTENT_TYPE.as_str(), headers::CONTENT_TYPE_FORM);
        request.form = form;
        self.execute(request).await
    }

    /// Call submitting `form` as an urlencoded body
    pub async fn submit_request(
        &self,
        method: Method,
        path: impl Into<String>,
        form: Params,
    ) -> Result<Envelope> {
        self.execute(RequestDescriptor::new(method, path).form(form))
            .await
    }

    fn headers_for(&self, request: &RequestDescriptor) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static(headers::OCS_API_REQUEST),
            HeaderValue::from_static(headers::OCS_API_REQUEST_VALUE),
        );

        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::invalid_options(format!("Invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::invalid_options(format!("Invalid value for header '{}': {}", name, e)))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

/// Parse the base URI, making sure relative paths resolve below it
fn parse_base_uri(base_uri: &str) -> Result<Url> {
    let invalid = |reason: String| ApiError::InvalidBaseUri {
        uri: base_uri.to_string(),
        reason,
    };

    let trimmed = base_uri.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("expected an http(s) URL".to_string()));
    }
    Ok(url)
}
