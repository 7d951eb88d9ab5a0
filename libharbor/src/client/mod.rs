//! HTTP transport and dispatcher for the Harbor management API.
//!
//! This module provides a thin blocking HTTP client built on reqwest. It owns
//! the base URL and credentials, builds verb-bound requests with the standard
//! headers attached, sends them, and decodes the responses into typed values
//! while collecting every error encountered.

mod request;
mod response;

pub use request::{Method, Query, ResolvedRequest, ToQuery};
pub use response::{CallResult, Outcome, ResponseMeta};

use crate::auth::Credentials;
use crate::error::{Errors, HarborError, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client as ReqwestClient;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use url::Url;


/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("libharbor/", env!("CARGO_PKG_VERSION"));

const JSON: &str = "application/json";

/// Connection settings for a [`Client`].
///
/// Built once, then moved into the client; the client never changes it.
///
/// # Examples
///
/// ```
/// use libharbor::auth::Credentials;
/// use libharbor::client::ClientConfig;
///
/// let config = ClientConfig::new("https://harbor.example.com")
///     .unwrap()
///     .with_api_root("api")
///     .with_credentials(Credentials::basic("admin", "Harbor12345"))
///     .with_timeout(60);
/// assert_eq!(config.base_url().as_str(), "https://harbor.example.com/");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    api_root: String,
    credentials: Credentials,
    user_agent: Option<String>,
    /// Request timeout in seconds, 0 for none (default: 30)
    pub timeout_seconds: u64,
    /// Maximum idle connections per host (default: 10)
    pub max_idle_per_host: usize,
}

impl ClientConfig {
    /// Creates a configuration for `base_url` with default values.
    ///
    /// Default values:
    /// - api root: `api`
    /// - anonymous credentials
    /// - user agent: [`DEFAULT_USER_AGENT`]
    /// - timeout: 30 seconds
    /// - max_idle_per_host: 10 connections
    ///
    /// # Errors
    ///
    /// Returns [`HarborError::InvalidUrl`] if `base_url` cannot be parsed.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            api_root: "api".to_string(),
            credentials: Credentials::Anonymous,
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            timeout_seconds: 30,
            max_idle_per_host: 10,
        })
    }

    /// Replaces the base URL, normalized to end in exactly one `/`.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(())
    }

    /// Sets the API root inserted between the base URL and every route path.
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into().trim_matches('/').to_string();
        self
    }

    /// Sets the credentials attached to every request.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Sets the user agent. An empty string disables the header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        self.user_agent = (!user_agent.is_empty()).then_some(user_agent);
        self
    }

    /// Sets the request timeout in seconds. Zero means no client-wide timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Sets the maximum idle connections per host.
    pub fn with_max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    /// The normalized base URL, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The API root without surrounding slashes.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// The configured credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The configured user agent, if any.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

/// Normalizes a registry base URL.
///
/// Adds `http://` when no scheme is given and guarantees exactly one trailing
/// `/`. Repeated calls with the same input give the same result.
///
/// # Examples
///
/// ```
/// use libharbor::client::normalize_base_url;
///
/// let url = normalize_base_url("harbor.local:8080///").unwrap();
/// assert_eq!(url.as_str(), "http://harbor.local:8080/");
/// ```
pub fn normalize_base_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(HarborError::invalid_url(input, "URL cannot be empty"));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(HarborError::invalid_url(
            input,
            "URL contains control characters",
        ));
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };
    let candidate = format!("{}/", with_scheme.trim_end_matches('/'));

    let url = Url::parse(&candidate).map_err(|e| HarborError::invalid_url(input, e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(HarborError::invalid_url(
            input,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(HarborError::invalid_url(input, "URL has no host"));
    }
    Ok(url)
}

/// Blocking HTTP client for the Harbor management API.
///
/// Cloning is cheap and clones share the connection pool. The client holds no
/// per-call state, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: ReqwestClient,
    config: Arc<ClientConfig>,
    user_agent: Option<HeaderValue>,
    authorization: Option<HeaderValue>,
}

impl Client {
    /// Creates a client for `base_url` with default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use libharbor::client::Client;
    ///
    /// let client = Client::new("http://localhost:8080", None).unwrap();
    /// assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    /// ```
    pub fn new(base_url: &str, credentials: Option<Credentials>) -> Result<Self> {
        let config =
            ClientConfig::new(base_url)?.with_credentials(credentials.unwrap_or_default());
        Self::with_config(config)
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the user agent or credentials cannot be
    /// encoded as header values, or a transport error if the underlying HTTP
    /// client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        // Zero disables the client-wide deadline.
        let timeout =
            (config.timeout_seconds > 0).then(|| Duration::from_secs(config.timeout_seconds));
        let http_client = ReqwestClient::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()
            .map_err(|e| HarborError::transport_with_source("Failed to create HTTP client", e))?;

        let user_agent = config
            .user_agent()
            .map(HeaderValue::from_str)
            .transpose()
            .map_err(|e| HarborError::config_with_source("Invalid user agent", None, e))?;

        let authorization = config
            .credentials()
            .to_header_value()
            .map(|value| HeaderValue::from_str(&value))
            .transpose()
            .map_err(|e| HarborError::config_with_source("Invalid credentials", None, e))?
            .map(|mut value| {
                value.set_sensitive(true);
                value
            });

        tracing::info!(
            base_url = %config.base_url(),
            user = config.credentials().username().unwrap_or("<anonymous>"),
            "Harbor client configured"
        );

        Ok(Self {
            http_client,
            config: Arc::new(config),
            user_agent,
            authorization,
        })
    }

    /// The client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &Url {
        self.config.base_url()
    }

    /// Builds a request for `url` with the standard headers attached.
    ///
    /// `Accept: application/json` is always set. `User-Agent` is set when
    /// configured, `Content-Type: application/json` for PUT, POST and PATCH,
    /// and `Authorization` when credentials are configured.
    pub fn build_request(&self, method: Method, url: Url) -> ResolvedRequest {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        if let Some(user_agent) = &self.user_agent {
            headers.insert(USER_AGENT, user_agent.clone());
        }
        if method.carries_body() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        }
        if let Some(authorization) = &self.authorization {
            headers.insert(AUTHORIZATION, authorization.clone());
        }
        ResolvedRequest::new(method, url, headers)
    }

    /// Creates a request for `sub_path` below the API root.
    ///
    /// The full URL is `base_url + api_root + "/" + sub_path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libharbor::client::{Client, Method};
    ///
    /// let client = Client::new("https://harbor.example.com", None).unwrap();
    /// let request = client.new_request(Method::Get, "projects/3").unwrap();
    /// assert_eq!(request.url().as_str(), "https://harbor.example.com/api/projects/3");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`HarborError::InvalidUrl`] if the composed URL cannot be parsed.
    pub fn new_request(&self, method: Method, sub_path: &str) -> Result<ResolvedRequest> {
        let sub_path = sub_path.trim_start_matches('/');
        let api_root = self.config.api_root();
        let full = if api_root.is_empty() {
            format!("{}{}", self.config.base_url(), sub_path)
        } else {
            format!("{}{}/{}", self.config.base_url(), api_root, sub_path)
        };

        let url = Url::parse(&full).map_err(|e| HarborError::invalid_url(&full, e.to_string()))?;
        tracing::debug!(%method, %url, "Building request");
        Ok(self.build_request(method, url))
    }

    /// Sends `request` and decodes the JSON body into `T`.
    ///
    /// An empty success body is decoded as JSON `null`, so `Option<T>` result
    /// shapes accept it.
    pub fn execute<T: DeserializeOwned>(&self, request: ResolvedRequest) -> CallResult<T> {
        let (response, mut errors) = self.send(request);
        let Some(meta) = response else {
            return finish(None, errors, None);
        };

        let decoded = if meta.status.is_success() {
            match decode::<T>(&meta.body) {
                Ok(value) => Some(value),
                Err(e) => {
                    errors.push(e);
                    None
                }
            }
        } else {
            // Report an undecodable error body alongside the status error.
            if !meta.body.is_empty()
                && let Err(e) = decode::<T>(&meta.body)
            {
                errors.push(e);
            }
            None
        };

        finish(Some(meta), errors, decoded)
    }

    /// Sends `request`, ignoring the response body.
    pub fn execute_unit(&self, request: ResolvedRequest) -> CallResult<()> {
        let (response, errors) = self.send(request);
        finish(response, errors, Some(()))
    }

    /// Performs the round trip, collecting transport and status errors.
    fn send(&self, request: ResolvedRequest) -> (Option<ResponseMeta>, Vec<HarborError>) {
        let url = request.full_url();
        let ResolvedRequest {
            method,
            headers,
            body,
            timeout,
            errors,
            ..
        } = request;

        if !errors.is_empty() {
            return (None, errors);
        }

        tracing::debug!(%method, %url, "Dispatching request");

        let mut builder = self
            .http_client
            .request(method.into(), url.clone())
            .headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let response = match builder.send() {
            Ok(response) => response,
            Err(e) => return (None, vec![translate_reqwest_error(e, &url)]),
        };

        let status = response.status();
        let response_headers = response.headers().clone();
        let response_url = response.url().clone();
        let body = match response.bytes() {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => return (None, vec![translate_reqwest_error(e, &url)]),
        };

        tracing::debug!(status = status.as_u16(), %url, "Received response");

        let mut errors = Vec::new();
        if !status.is_success() {
            errors.push(HarborError::status(
                status.as_u16(),
                url.as_str(),
                status_message(status, &body),
            ));
        }

        let meta = ResponseMeta {
            status,
            headers: response_headers,
            url: response_url,
            body,
        };
        (Some(meta), errors)
    }
}

/// Longest error body, in characters, copied into a status error.
const MAX_STATUS_MESSAGE_CHARS: usize = 512;

/// Builds the message of a status error from the response body.
///
/// The full body stays in [`ResponseMeta::body`].
fn status_message(status: StatusCode, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string();
    }
    match text.char_indices().nth(MAX_STATUS_MESSAGE_CHARS) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        body
    };
    serde_json::from_slice(body)
        .map_err(|e| HarborError::decode_with_source("Failed to decode response body", e))
}

fn finish<T>(
    response: Option<ResponseMeta>,
    errors: Vec<HarborError>,
    value: Option<T>,
) -> CallResult<T> {
    for error in &errors {
        tracing::warn!(error = %error, "Request failed");
    }
    let outcome = match (Errors::from_vec(errors), value) {
        (None, Some(value)) => Outcome::Success(value),
        (Some(errors), _) => Outcome::Failure(errors),
        // Every path without a value records an error first.
        (None, None) => Outcome::Failure(Errors::new(HarborError::validation(
            "Call produced neither a value nor an error",
        ))),
    };
    CallResult::new(response, outcome)
}

/// Translates a reqwest error into a HarborError.
fn translate_reqwest_error(error: reqwest::Error, url: &Url) -> HarborError {
    if error.is_timeout() {
        HarborError::timeout(url.as_str())
    } else if error.is_connect() {
        HarborError::transport_with_source(format!("Failed to connect to {}", url), error)
    } else if error.is_request() {
        HarborError::transport_with_source(format!("Failed to send request to {}", url), error)
    } else {
        HarborError::transport_with_source(
            format!("Network error communicating with {}", url),
            error,
        )
    }
}
