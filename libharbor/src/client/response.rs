//! Call results: response metadata plus a tagged outcome.

use crate::error::{Errors, HarborError};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use url::Url;

/// Metadata of the HTTP response received for a call.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// The HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Final URL of the response.
    pub url: Url,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl ResponseMeta {
    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Either the decoded value or every error produced by the call.
#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    Failure(Errors),
}

impl<T> Outcome<T> {
    /// Returns true for [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Converts into `Result`.
    pub fn into_result(self) -> Result<T, Errors> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(errors) => Err(errors),
        }
    }
}

/// The result of one dispatched call.
///
/// The decoded value is only reachable when the call produced no errors. The
/// response metadata is kept in both cases whenever a response arrived.
#[derive(Debug)]
pub struct CallResult<T> {
    response: Option<ResponseMeta>,
    outcome: Outcome<T>,
}

impl<T> CallResult<T> {
    /// Builds a result from its parts.
    pub fn new(response: Option<ResponseMeta>, outcome: Outcome<T>) -> Self {
        Self { response, outcome }
    }

    /// A failed call that never produced a response.
    pub fn failed(error: HarborError) -> Self {
        Self {
            response: None,
            outcome: Outcome::Failure(Errors::new(error)),
        }
    }

    /// Returns true when the call produced a value and no errors.
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// The decoded value, if the call succeeded.
    pub fn value(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The errors, if the call failed.
    pub fn errors(&self) -> Option<&Errors> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(errors) => Some(errors),
        }
    }

    /// The outcome of the call.
    pub fn outcome(&self) -> &Outcome<T> {
        &self.outcome
    }

    /// Response metadata, when a response was received.
    pub fn response(&self) -> Option<&ResponseMeta> {
        self.response.as_ref()
    }

    /// The response status, when a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        self.response.as_ref().map(|r| r.status)
    }

    /// Splits into metadata and outcome.
    pub fn into_parts(self) -> (Option<ResponseMeta>, Outcome<T>) {
        (self.response, self.outcome)
    }

    /// Drops the metadata and converts into `Result`.
    pub fn into_result(self) -> Result<T, Errors> {
        self.outcome.into_result()
    }

    /// Maps the decoded value, keeping metadata and errors.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CallResult<U> {
        let outcome = match self.outcome {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(errors) => Outcome::Failure(errors),
        };
        CallResult {
            response: self.response,
            outcome,
        }
    }
}
