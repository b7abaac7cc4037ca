//! Per-item results of attempting one rename.
//!
//! # Design
//! Each rename attempt ends in exactly one of four states, and none of them
//! stops the batch. Callers get the whole taxonomy back as data and decide
//! how to aggregate; the runner only logs. `NetworkError` means no response
//! exists to inspect; `HttpError` always carries the raw status and body
//! verbatim for debugging against a real endpoint.

use std::fmt;

use serde_json::Value;

/// The body of a successful (2xx) rename response.
///
/// The endpoint usually answers with JSON, but not always; a body that fails
/// to parse as JSON is reported as raw text, not as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Parse `body` as JSON, falling back to raw text.
    pub fn from_raw(body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(body),
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Json(value) => write!(f, "{value}"),
            ResponseBody::Text(text) => write!(f, "{text}"),
        }
    }
}

/// The classified result of one rename attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The server answered with a 2xx status.
    Success(ResponseBody),

    /// The server answered with a non-2xx status; body is verbatim.
    HttpError { status: u16, body: String },

    /// Transport failure (connection refused, DNS, timeout); no response
    /// was received.
    NetworkError { message: String },

    /// Any other failure, e.g. the payload could not be serialized.
    Unexpected { message: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(body) => write!(f, "success: {body}"),
            Outcome::HttpError { status, body } => write!(f, "HTTP {status}: {body}"),
            Outcome::NetworkError { message } => write!(f, "network error: {message}"),
            Outcome::Unexpected { message } => write!(f, "unexpected error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_body_is_parsed() {
        let body = ResponseBody::from_raw(r#"{"status":"ok"}"#.to_string());
        assert_eq!(body, ResponseBody::Json(serde_json::json!({"status": "ok"})));
    }

    #[test]
    fn non_json_body_falls_back_to_text() {
        let body = ResponseBody::from_raw("renamed".to_string());
        assert_eq!(body, ResponseBody::Text("renamed".to_string()));
    }

    #[test]
    fn empty_body_is_text() {
        let body = ResponseBody::from_raw(String::new());
        assert_eq!(body, ResponseBody::Text(String::new()));
    }

    #[test]
    fn outcome_display_includes_status_and_body() {
        let outcome = Outcome::HttpError {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(outcome.to_string(), "HTTP 404: not found");
    }

    #[test]
    fn success_display_shows_json_body() {
        let outcome = Outcome::Success(ResponseBody::from_raw(r#"{"status":"ok"}"#.to_string()));
        assert_eq!(outcome.to_string(), r#"success: {"status":"ok"}"#);
        assert!(outcome.is_success());
    }
}
