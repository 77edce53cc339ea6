use futures::future::LocalBoxFuture;
use futures::FutureExt;
use reqwest::header::CONTENT_TYPE;

use super::SubmitError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
	pub status: u16,
	pub body: String,
}

impl TransportResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Sends one JSON request and hands back whatever the server answered. Implementations do not
/// retry and do not interpret the status.
pub trait Transport {
	fn post_json<'a>(
		&'a self,
		url: &'a str,
		body: String,
	) -> LocalBoxFuture<'a, Result<TransportResponse, SubmitError>>;
}

/// `fetch`-backed transport on wasm32, plain HTTP elsewhere.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
	client: reqwest::Client,
}

impl HttpTransport {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Transport for HttpTransport {
	fn post_json<'a>(
		&'a self,
		url: &'a str,
		body: String,
	) -> LocalBoxFuture<'a, Result<TransportResponse, SubmitError>> {
		async move {
			let response = self
				.client
				.post(url)
				.header(CONTENT_TYPE, "application/json")
				.body(body)
				.send()
				.await?;
			let status = response.status().as_u16();
			let body = response.text().await?;
			Ok(TransportResponse { status, body })
		}
		.boxed_local()
	}
}
