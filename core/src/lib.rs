//! Batch client for renaming fitness-exercise records over HTTP.
//!
//! # Overview
//! Pairs two equal-length name lists into rename requests and issues one
//! synchronous JSON POST per pair to a configured endpoint, classifying each
//! result independently. A failed pair never stops the pairs after it; the
//! only fatal error is a length mismatch between the two lists, which aborts
//! before anything is sent.
//!
//! # Design
//! - `RenameClient` is stateless: it holds only the endpoint URL, and its
//!   `build_rename` / `classify_rename` pair is deterministic and I/O-free.
//! - `batch::run` owns the blocking ureq round-trips and logs the payload
//!   and outcome of every pair via the `log` facade.
//! - Per-item results come back as a closed [`Outcome`] enum; callers decide
//!   how to aggregate. The run itself always completes.

pub mod batch;
pub mod client;
pub mod error;
pub mod http;
pub mod outcome;
pub mod types;

pub use client::RenameClient;
pub use error::BatchError;
pub use http::{HttpRequest, HttpResponse};
pub use outcome::{Outcome, ResponseBody};
pub use types::{BatchConfig, RenamePair};
