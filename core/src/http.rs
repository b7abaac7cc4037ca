//! Plain-data HTTP request and response types.
//!
//! # Design
//! The rename endpoint speaks exactly one verb, so `HttpRequest` carries no
//! method field: every request the client builds is a POST. Keeping requests
//! and responses as plain owned data splits the deterministic parts (building
//! and classifying) from the ureq round-trip in `batch`, which is what lets
//! the client be unit-tested without a network.

/// A POST request described as plain data.
///
/// Built by [`RenameClient::build_rename`](crate::client::RenameClient::build_rename);
/// executed by the batch runner.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// An HTTP response described as plain data.
///
/// Constructed from the ureq response after the round-trip, then handed to
/// [`RenameClient::classify_rename`](crate::client::RenameClient::classify_rename).
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
