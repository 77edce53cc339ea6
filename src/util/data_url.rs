use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataUrlError {
	#[error("missing `data:` scheme")]
	MissingScheme,
	#[error("missing `,` separator")]
	MissingSeparator,
	#[error("only base64 data urls are supported")]
	NotBase64,
	#[error("invalid base64 payload: {0}")]
	InvalidPayload(#[from] base64::DecodeError),
}

/// An RFC 2397 `data:` URL with a base64 payload, the format `HTMLCanvasElement.toDataURL`
/// produces. Uses the standard padded alphabet so servers can decode it with stock decoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
	media_type: String,
	data: Vec<u8>,
}

impl DataUrl {
	pub fn new(media_type: impl Into<String>, data: Vec<u8>) -> Self {
		Self {
			media_type: media_type.into(),
			data,
		}
	}

	pub fn png(data: Vec<u8>) -> Self {
		Self::new("image/png", data)
	}

	pub fn media_type(&self) -> &str {
		&self.media_type
	}

	pub fn data(&self) -> &[u8] {
		&self.data
	}
}

impl fmt::Display for DataUrl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"data:{};base64,{}",
			self.media_type,
			STANDARD.encode(&self.data)
		)
	}
}

impl std::str::FromStr for DataUrl {
	type Err = DataUrlError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let rest = s.strip_prefix("data:").ok_or(DataUrlError::MissingScheme)?;
		let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingSeparator)?;
		let media_type = header
			.strip_suffix(";base64")
			.ok_or(DataUrlError::NotBase64)?;
		Ok(Self::new(media_type, STANDARD.decode(payload)?))
	}
}
