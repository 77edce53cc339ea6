use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::util::DataUrl;

/// Body of the `POST` sent to the classification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
	pub image: String,
}

impl PredictRequest {
	pub fn new(image: &DataUrl) -> Self {
		Self {
			image: image.to_string(),
		}
	}
}

/// The decoded response body. Only the `prediction` field is read, and its type is left open.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictResponse {
	body: Value,
}

impl PredictResponse {
	pub fn from_json(text: &str) -> serde_json::Result<Self> {
		Ok(Self {
			body: serde_json::from_str(text)?,
		})
	}

	/// `None` when the field is absent or the body is not a JSON object.
	pub fn prediction(&self) -> Option<&Value> {
		self.body.get("prediction")
	}

	pub fn display_text(&self) -> String {
		format!("Prediction: {}", display_value(self.prediction()))
	}
}

/// Renders a JSON value the way a JavaScript template literal would, with `None` standing in for
/// `undefined`.
pub fn display_value(value: Option<&Value>) -> String {
	let Some(value) = value else {
		return "undefined".to_owned();
	};
	match value {
		Value::Null => "null".to_owned(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => display_number(n),
		Value::String(s) => s.clone(),
		Value::Array(items) => items
			.iter()
			.map(|item| match item {
				Value::Null => String::new(),
				item => display_value(Some(item)),
			})
			.join(","),
		Value::Object(_) => "[object Object]".to_owned(),
	}
}

/// `Number.prototype.toString`: shortest round-trip digits, positional between `1e-6` and `1e21`,
/// exponential outside it.
fn display_number(n: &serde_json::Number) -> String {
	let Some(f) = n.as_f64() else {
		return n.to_string();
	};
	if f == 0.0 {
		return "0".to_owned();
	}
	if (1e-6..1e21).contains(&f.abs()) {
		return f.to_string();
	}
	let exponential = format!("{f:e}");
	match exponential.split_once('e') {
		Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
		_ => exponential,
	}
}
