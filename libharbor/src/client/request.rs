//! Verbs and the per-call request value.

use crate::error::{HarborError, Result};
use reqwest::header::HeaderMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// HTTP verbs understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    /// Every supported verb.
    pub const ALL: [Method; 7] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
        Method::Head,
        Method::Options,
    ];

    /// The canonical upper-case verb name.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }

    /// True for verbs that send a JSON body (PUT, POST, PATCH).
    pub fn carries_body(self) -> bool {
        matches!(self, Method::Put | Method::Post | Method::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = HarborError;

    /// Parses a verb name, ignoring ASCII case. Unknown verbs are rejected.
    fn from_str(s: &str) -> Result<Self> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HarborError::validation(format!("Unsupported HTTP method: {}", s)))
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
            Method::Head => reqwest::Method::HEAD,
            Method::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// Ordered query-string pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair. Repeated names are kept, in order.
    pub fn push(&mut self, name: &str, value: impl fmt::Display) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    /// Appends a pair when `value` is present.
    pub fn push_opt<V: fmt::Display>(&mut self, name: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// The pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns true when no pairs are present.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Types that can be written as query-string parameters.
pub trait ToQuery {
    /// Appends this value's parameters to `query`.
    fn append_query(&self, query: &mut Query);
}

impl ToQuery for Query {
    fn append_query(&self, query: &mut Query) {
        query.pairs.extend(self.pairs.iter().cloned());
    }
}

/// A verb-bound request with headers attached, ready for a query, a body and
/// execution.
///
/// Each call builds its own value; nothing in it is shared with other calls.
#[derive(Debug)]
pub struct ResolvedRequest {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) headers: HeaderMap,
    pub(crate) query: Query,
    pub(crate) body: Option<Vec<u8>>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) errors: Vec<HarborError>,
}

impl ResolvedRequest {
    pub(crate) fn new(method: Method, url: Url, headers: HeaderMap) -> Self {
        Self {
            method,
            url,
            headers,
            query: Query::new(),
            body: None,
            timeout: None,
            errors: Vec::new(),
        }
    }

    /// Appends query parameters.
    pub fn query(mut self, params: &impl ToQuery) -> Self {
        params.append_query(&mut self.query);
        self
    }

    /// Appends a single query parameter.
    pub fn query_pair(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.query.push(name, value);
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// A serialization failure is recorded and reported by `execute` without
    /// sending the request.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_vec(body) {
            Ok(bytes) => self.body = Some(bytes),
            Err(e) => self
                .errors
                .push(HarborError::encode_with_source("Failed to encode request body", e)),
        }
        self
    }

    /// Sets a deadline for this call, overriding the client-wide timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The request verb.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The URL without query parameters.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The URL with query parameters applied.
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                self.query
                    .pairs()
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str())),
            );
        }
        url
    }

    /// Headers attached to the request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The serialized body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Query parameters attached so far.
    pub fn query_params(&self) -> &Query {
        &self.query
    }

    /// The per-call deadline, if set.
    pub fn deadline(&self) -> Option<Duration> {
        self.timeout
    }

    /// Errors recorded while shaping the request.
    pub fn pending_errors(&self) -> &[HarborError] {
        &self.errors
    }
}
