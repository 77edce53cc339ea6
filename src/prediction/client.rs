use std::future::Future;

use tracing::Instrument;

use super::{HttpTransport, PredictRequest, PredictResponse, SubmitError, Transport};
use crate::engine::SketchPad;
use crate::util::{image, DataUrl};

/// Somewhere to show the latest prediction text.
pub trait PredictionDisplay {
	fn show(&self, text: &str);
}

/// Resolves a possibly relative endpoint against the page origin, e.g. `/` against
/// `http://localhost:5000`. Absolute endpoints are used as is.
pub fn resolve_endpoint(endpoint: &str, origin: Option<&str>) -> Result<String, SubmitError> {
	let error = |message: String| SubmitError::Endpoint {
		endpoint: endpoint.to_owned(),
		message,
	};
	if let Ok(url) = reqwest::Url::parse(endpoint) {
		return Ok(url.into());
	}
	let origin = origin.ok_or_else(|| error("relative endpoint and no page origin".to_owned()))?;
	let base = reqwest::Url::parse(origin).map_err(|err| error(err.to_string()))?;
	let url = base.join(endpoint).map_err(|err| error(err.to_string()))?;
	Ok(url.into())
}

#[derive(Debug, Clone)]
pub struct PredictionClient<T = HttpTransport> {
	transport: T,
	endpoint: String,
}

impl<T: Transport> PredictionClient<T> {
	pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
		Self {
			transport,
			endpoint: endpoint.into(),
		}
	}

	async fn post(&self, image: image::Result<DataUrl>) -> Result<PredictResponse, SubmitError> {
		let body = serde_json::to_string(&PredictRequest::new(&image?))?;
		let response = self.transport.post_json(&self.endpoint, body).await?;
		if !response.is_success() {
			return Err(SubmitError::Status(response.status));
		}
		Ok(PredictResponse::from_json(&response.body)?)
	}

	/// Encodes the pad's pixels immediately, then posts them. The returned future does not borrow
	/// `pad`, so drawing can continue while the request is in flight.
	pub fn submit(
		&self,
		pad: &SketchPad,
	) -> impl Future<Output = Result<PredictResponse, SubmitError>> + '_ {
		let image = pad.to_data_url();
		self
			.post(image)
			.instrument(tracing::info_span!("submit", endpoint = %self.endpoint))
	}

	/// Submits and shows `Prediction: <value>` on success. On failure the error is logged once and
	/// `display` is left alone. Returns the text shown, if any.
	pub fn submit_and_display<'a, D: PredictionDisplay + ?Sized>(
		&'a self,
		pad: &SketchPad,
		display: &'a D,
	) -> impl Future<Output = Option<String>> + 'a {
		let submission = self.submit(pad);
		async move {
			match submission.await {
				Ok(response) => {
					let text = response.display_text();
					tracing::info!(prediction = ?response.prediction(), "received prediction");
					display.show(&text);
					Some(text)
				}
				Err(error) => {
					tracing::error!(%error, "prediction request failed");
					None
				}
			}
		}
	}
}
