//! The batch runner: one blocking POST per rename pair, in input order.
//!
//! # Design
//! Fully sequential: each round-trip completes before the next begins, and
//! a failed pair never stops the ones after it. The run itself cannot fail;
//! per-item failures are visible only in the returned [`Outcome`]s and the
//! log. The single fatal path is the pre-flight length check in
//! [`run_name_lists`], which sends nothing on mismatch.
//!
//! No retries, no backoff, no explicit timeout: ureq's defaults apply.
//! 4xx/5xx are returned as data (`http_status_as_error(false)`) so the
//! client classifies status codes instead of the transport.

use log::{info, warn};

use crate::client::RenameClient;
use crate::error::BatchError;
use crate::http::{HttpRequest, HttpResponse};
use crate::outcome::Outcome;
use crate::types::{BatchConfig, RenamePair};

/// Run the whole batch, returning one [`Outcome`] per pair in input order.
pub fn run(config: &BatchConfig) -> Vec<Outcome> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();
    let client = RenameClient::new(config.endpoint_url.as_str());

    config
        .renames
        .iter()
        .map(|pair| {
            info!(
                "attempting to rename '{}' to '{}' via {}",
                pair.old_exercise_name, pair.new_exercise_name, config.endpoint_url
            );
            let outcome = send_one(&agent, &client, pair);
            match &outcome {
                Outcome::Success(body) => {
                    info!("rename of '{}' succeeded: {body}", pair.old_exercise_name);
                }
                failed => {
                    warn!("rename of '{}' failed: {failed}", pair.old_exercise_name);
                }
            }
            outcome
        })
        .collect()
}

/// Validate-then-run convenience over two parallel name lists.
///
/// Pairs `old_names[i]` with `new_names[i]`; a length mismatch aborts the
/// batch before any request is sent.
pub fn run_name_lists(
    endpoint_url: &str,
    old_names: &[String],
    new_names: &[String],
) -> Result<Vec<Outcome>, BatchError> {
    let config = BatchConfig::from_name_lists(endpoint_url, old_names, new_names)?;
    Ok(run(&config))
}

/// Build, send, and classify a single pair. Every failure mode lands in an
/// `Outcome`; nothing propagates.
fn send_one(agent: &ureq::Agent, client: &RenameClient, pair: &RenamePair) -> Outcome {
    let request = match client.build_rename(pair) {
        Ok(request) => request,
        Err(err) => {
            return Outcome::Unexpected {
                message: format!("payload serialization failed: {err}"),
            }
        }
    };
    info!("payload: {}", request.body);

    match execute(agent, &request) {
        Ok(response) => client.classify_rename(response),
        // No response exists to inspect: connection refused, DNS failure,
        // timeout, or a body that died mid-read all land here.
        Err(err) => Outcome::NetworkError {
            message: err.to_string(),
        },
    }
}

/// Execute one built request over ureq and read the full body.
fn execute(agent: &ureq::Agent, request: &HttpRequest) -> Result<HttpResponse, ureq::Error> {
    let mut builder = agent.post(&request.url);
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    let mut response = builder.send(request.body.as_bytes())?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string()?;
    Ok(HttpResponse { status, body })
}
