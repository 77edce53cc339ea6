use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
pub enum LineCap {
	#[display("butt")]
	Butt,
	#[default]
	#[display("round")]
	Round,
	#[display("square")]
	Square,
}

/// Straight-alpha RGBA color with 8 bits per channel, the same layout as canvas `ImageData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba8(pub [u8; 4]);

impl Rgba8 {
	pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
	pub const BLACK: Self = Self([0, 0, 0, 255]);

	pub fn alpha(self) -> u8 {
		self.0[3]
	}
}

#[derive(Debug, Error)]
#[error("invalid stroke color {input:?}: {message}")]
pub struct ParseColorError {
	input: String,
	message: String,
}

impl std::str::FromStr for Rgba8 {
	type Err = ParseColorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let color = csscolorparser::parse(s).map_err(|err| ParseColorError {
			input: s.to_owned(),
			message: err.to_string(),
		})?;
		Ok(Self(color.to_rgba8()))
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
	pub width: f32,
	pub cap: LineCap,
	pub color: Rgba8,
}

impl Default for StrokeStyle {
	fn default() -> Self {
		Self {
			width: 10.0,
			cap: LineCap::Round,
			color: Rgba8::BLACK,
		}
	}
}

/// A straight piece of a stroke between two consecutive pointer positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
	pub from: Vec2,
	pub to: Vec2,
}

impl Segment {
	pub fn new(from: Vec2, to: Vec2) -> Self {
		Self { from, to }
	}

	pub fn length(&self) -> f32 {
		self.from.distance(self.to)
	}

	/// Signed distance from `point` to the outline of this segment stroked with `width` and `cap`.
	/// Negative inside. `None` when the stroke covers no area.
	pub fn signed_distance(&self, point: Vec2, width: f32, cap: LineCap) -> Option<f32> {
		let half_width = 0.5 * width;
		let length = self.length();
		if length <= f32::EPSILON {
			return match cap {
				LineCap::Butt => None,
				LineCap::Round => Some(point.distance(self.from) - half_width),
				LineCap::Square => {
					let d = (point - self.from).abs() - Vec2::splat(half_width);
					Some(d.max_element())
				}
			};
		}

		let direction = (self.to - self.from) / length;
		let offset = point - self.from;
		let along = offset.dot(direction);
		let across = offset.perp_dot(direction).abs();
		Some(match cap {
			LineCap::Round => {
				let t = along.clamp(0.0, length);
				point.distance(self.from + direction * t) - half_width
			}
			LineCap::Butt => (across - half_width).max((-along).max(along - length)),
			LineCap::Square => {
				(across - half_width).max((-along - half_width).max(along - length - half_width))
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use glam::vec2;

	#[test]
	fn default_style_is_thick_round_black() {
		let style = StrokeStyle::default();
		assert_eq!(style.width, 10.0);
		assert_eq!(style.cap, LineCap::Round);
		assert_eq!(style.color, Rgba8::BLACK);
		assert_eq!(style.cap.to_string(), "round");
	}

	#[test]
	fn parse_css_colors() {
		assert_eq!("black".parse::<Rgba8>().unwrap(), Rgba8::BLACK);
		assert_eq!("#ff000080".parse::<Rgba8>().unwrap(), Rgba8([255, 0, 0, 128]));
		assert!("not a color".parse::<Rgba8>().is_err());
	}

	#[test]
	fn round_distance() {
		let segment = Segment::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
		let d = |x, y| segment.signed_distance(vec2(x, y), 4.0, LineCap::Round).unwrap();
		assert_abs_diff_eq!(d(5.0, 0.0), -2.0);
		assert_abs_diff_eq!(d(5.0, 3.0), 1.0);
		assert_abs_diff_eq!(d(-3.0, 0.0), 1.0);
		assert_abs_diff_eq!(d(13.0, 4.0), 3.0);
	}

	#[test]
	fn butt_and_square_distance() {
		let segment = Segment::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
		let butt = |x, y| segment.signed_distance(vec2(x, y), 4.0, LineCap::Butt).unwrap();
		let square = |x, y| segment.signed_distance(vec2(x, y), 4.0, LineCap::Square).unwrap();
		assert_abs_diff_eq!(butt(-1.0, 0.0), 1.0);
		assert_abs_diff_eq!(square(-1.0, 0.0), -1.0);
		assert_abs_diff_eq!(butt(5.0, 1.0), -1.0);
		assert_abs_diff_eq!(square(12.5, 0.0), 0.5);
	}

	#[test]
	fn zero_length_segment() {
		let segment = Segment::new(vec2(3.0, 3.0), vec2(3.0, 3.0));
		assert_eq!(segment.signed_distance(vec2(3.0, 3.0), 4.0, LineCap::Butt), None);
		assert_abs_diff_eq!(
			segment
				.signed_distance(vec2(3.0, 4.0), 4.0, LineCap::Round)
				.unwrap(),
			-1.0
		);
		assert_abs_diff_eq!(
			segment
				.signed_distance(vec2(6.0, 3.0), 4.0, LineCap::Square)
				.unwrap(),
			1.0
		);
	}
}
