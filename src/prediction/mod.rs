//! Submitting a sketch to the classification endpoint and turning the answer into display text.

use thiserror::Error;

use crate::util::image;

mod wire;
pub use wire::*;

mod transport;
pub use transport::*;

mod client;
pub use client::*;

/// Every way a submission can fail. Callers treat them all alike: log and move on.
#[derive(Debug, Error)]
pub enum SubmitError {
	#[error("failed to encode sketch: {0}")]
	Encode(#[from] image::Error),

	#[error("invalid endpoint {endpoint:?}: {message}")]
	Endpoint { endpoint: String, message: String },

	#[error("request failed: {0}")]
	Network(String),

	#[error("server responded with status {0}")]
	Status(u16),

	#[error("invalid json: {0}")]
	Json(#[from] serde_json::Error),
}

static_assertions::assert_impl_all!(SubmitError: std::error::Error, Send, Sync);

impl From<reqwest::Error> for SubmitError {
	fn from(value: reqwest::Error) -> Self {
		SubmitError::Network(value.to_string())
	}
}
