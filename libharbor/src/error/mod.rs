//! Error types for libharbor
//!
//! Construction-time failures (bad configuration, unparsable base URL, missing
//! routes) are returned as [`Result`]. Failures that happen while a call is in
//! flight are collected into an [`Errors`] aggregate so that the caller sees
//! every signal from the attempt, not only the first one.

use std::fmt;
use thiserror::Error;


/// Boxed source error carried by several variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for libharbor operations
#[derive(Error, Debug)]
pub enum HarborError {
    /// Configuration errors (invalid config file, missing routes, bad templates)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<BoxError>,
    },

    /// The registry base URL could not be parsed
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// A route key is absent from the route table
    #[error("Route not found: {key}")]
    RouteNotFound { key: String },

    /// Route parameters do not match the placeholders of the template
    #[error("Route '{key}' parameter mismatch (missing: {missing:?}, unused: {unused:?})")]
    ArityMismatch {
        key: String,
        missing: Vec<String>,
        unused: Vec<String>,
    },

    /// Network-level failures (connection, DNS, TLS)
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The request did not complete before its deadline
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// The registry answered with a non-success status
    #[error("HTTP {status_code} from {url}: {message}")]
    Status {
        status_code: u16,
        url: String,
        message: String,
    },

    /// The response body could not be decoded into the requested shape
    #[error("Decode error: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The request body could not be serialized
    #[error("Encode error: {message}")]
    Encode {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Invalid input supplied by the caller
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Result type alias for libharbor operations
pub type Result<T> = std::result::Result<T, HarborError>;

impl HarborError {
    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libharbor::error::HarborError;
    ///
    /// let err = HarborError::config("missing route", Some("/etc/harbor/config.yaml"));
    /// assert!(matches!(err, HarborError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new invalid URL error.
    pub fn invalid_url<U: Into<String>, M: Into<String>>(url: U, message: M) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new route not found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libharbor::error::HarborError;
    ///
    /// let err = HarborError::route_not_found("projects.base");
    /// assert_eq!(err.to_string(), "Route not found: projects.base");
    /// ```
    pub fn route_not_found<S: Into<String>>(key: S) -> Self {
        Self::RouteNotFound { key: key.into() }
    }

    /// Creates a new transport error.
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new transport error with a source error.
    pub fn transport_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new timeout error.
    pub fn timeout<S: Into<String>>(url: S) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates a new status error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libharbor::error::HarborError;
    ///
    /// let err = HarborError::status(404, "https://harbor/api/projects/9", "not found");
    /// assert_eq!(err.status_code(), Some(404));
    /// ```
    pub fn status<U: Into<String>, M: Into<String>>(status_code: u16, url: U, message: M) -> Self {
        Self::Status {
            status_code,
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new decode error with a source error.
    pub fn decode_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new encode error with a source error.
    pub fn encode_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Encode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for [`HarborError::Status`] errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Returns true for failures that happened before or instead of an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}

/// A non-empty, ordered collection of errors produced by one call.
#[derive(Debug)]
pub struct Errors {
    first: HarborError,
    rest: Vec<HarborError>,
}

impl Errors {
    /// Creates a collection holding a single error.
    pub fn new(first: HarborError) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Builds a collection from a vector, returning `None` when it is empty.
    pub fn from_vec(mut errors: Vec<HarborError>) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        let first = errors.remove(0);
        Some(Self {
            first,
            rest: errors,
        })
    }

    /// Appends another error.
    pub fn push(&mut self, error: HarborError) {
        self.rest.push(error);
    }

    /// The first error recorded.
    pub fn first(&self) -> &HarborError {
        &self.first
    }

    /// Number of errors; always at least one.
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always false. Present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the errors in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &HarborError> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// Consumes the collection into a vector.
    pub fn into_vec(self) -> Vec<HarborError> {
        let mut all = Vec::with_capacity(self.len());
        all.push(self.first);
        all.extend(self.rest);
        all
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        if !self.rest.is_empty() {
            write!(f, " (and {} more)", self.rest.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.first)
    }
}

impl From<HarborError> for Errors {
    fn from(error: HarborError) -> Self {
        Self::new(error)
    }
}

impl IntoIterator for Errors {
    type Item = HarborError;
    type IntoIter = std::vec::IntoIter<HarborError>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a HarborError;
    type IntoIter =
        std::iter::Chain<std::iter::Once<&'a HarborError>, std::slice::Iter<'a, HarborError>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.first).chain(self.rest.iter())
    }
}
