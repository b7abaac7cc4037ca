//! Stateless request builder and response classifier for the rename endpoint.
//!
//! # Design
//! `RenameClient` holds only the endpoint URL and carries no mutable state
//! between calls. Building a request and classifying a response are split so
//! both sides stay deterministic and free of I/O; the batch runner owns the
//! ureq round-trip in between.

use crate::http::{HttpRequest, HttpResponse};
use crate::outcome::{Outcome, ResponseBody};
use crate::types::RenamePair;

/// Synchronous, stateless client for the exercise rename endpoint.
#[derive(Debug, Clone)]
pub struct RenameClient {
    endpoint_url: String,
}

impl RenameClient {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Build the POST request for one rename pair.
    ///
    /// The body is the pair serialized to JSON with the wire field names.
    pub fn build_rename(&self, pair: &RenamePair) -> Result<HttpRequest, serde_json::Error> {
        let body = serde_json::to_string(pair)?;
        Ok(HttpRequest {
            url: self.endpoint_url.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        })
    }

    /// Classify a response into an [`Outcome`].
    ///
    /// 2xx is a success; the body is parsed as JSON when possible and
    /// reported as raw text otherwise. Everything else is an `HttpError`
    /// with the status and body verbatim. Infallible by construction:
    /// there is no response this cannot classify.
    pub fn classify_rename(&self, response: HttpResponse) -> Outcome {
        if response.is_success() {
            Outcome::Success(ResponseBody::from_raw(response.body))
        } else {
            Outcome::HttpError {
                status: response.status,
                body: response.body,
            }
        }
    }
}
