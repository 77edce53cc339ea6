use bon::Builder;

use crate::engine::{LineCap, ParseColorError, SketchPad, StrokeStyle};

/// Everything about the sketch page that is not decided by the user at runtime.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct SketchConfig {
	/// Width of the `<canvas>` backing store in pixels.
	#[builder(default = 280)]
	pub width: u32,
	#[builder(default = 280)]
	pub height: u32,
	#[builder(default = 10.0)]
	pub stroke_width: f32,
	#[builder(default)]
	pub line_cap: LineCap,
	/// Any CSS color.
	#[builder(default = "black".to_owned(), into)]
	pub stroke_color: String,
	/// Where sketches are posted. Relative endpoints resolve against the page origin.
	#[builder(default = "/".to_owned(), into)]
	pub endpoint: String,
}

impl Default for SketchConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl SketchConfig {
	pub fn stroke_style(&self) -> Result<StrokeStyle, ParseColorError> {
		Ok(StrokeStyle {
			width: self.stroke_width,
			cap: self.line_cap,
			color: self.stroke_color.parse()?,
		})
	}

	pub fn sketch_pad(&self) -> Result<SketchPad, ParseColorError> {
		Ok(SketchPad::builder()
			.width(self.width)
			.height(self.height)
			.style(self.stroke_style()?)
			.create())
	}
}
