use crate::geom::{AABox, PixelRect};
use super::stroke::{LineCap, Rgba8, Segment, StrokeStyle};

/// Fraction of a pixel covered by a shape, given the signed distance from the pixel center to the
/// shape's outline. Falls off linearly over one pixel.
fn coverage(signed_distance: f32) -> f32 {
	(0.5 - signed_distance).clamp(0.0, 1.0)
}

fn blend_over(destination: [u8; 4], source: Rgba8, coverage: f32) -> [u8; 4] {
	let source_alpha = source.alpha() as f32 / 255.0 * coverage;
	let destination_alpha = destination[3] as f32 / 255.0;
	let alpha = source_alpha + destination_alpha * (1.0 - source_alpha);
	if alpha <= 0.0 {
		return Rgba8::TRANSPARENT.0;
	}
	let mut result = [0u8; 4];
	for channel in 0..3 {
		let s = source.0[channel] as f32;
		let d = destination[channel] as f32;
		let value = (s * source_alpha + d * destination_alpha * (1.0 - source_alpha)) / alpha;
		result[channel] = value.round().clamp(0.0, 255.0) as u8;
	}
	result[3] = (alpha * 255.0).round().clamp(0.0, 255.0) as u8;
	result
}

/// A persistent RGBA8 pixel buffer, row-major with straight alpha.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
	width: u32,
	height: u32,
	data: Vec<u8>,
}

impl std::fmt::Debug for Raster {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Raster")
			.field("width", &self.width)
			.field("height", &self.height)
			.finish_non_exhaustive()
	}
}

impl Raster {
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			data: vec![0; width as usize * height as usize * 4],
		}
	}

	/// Wraps existing RGBA8 pixels. `None` if `data` is not exactly `width * height * 4` bytes.
	pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
		(data.len() == width as usize * height as usize * 4).then_some(Self {
			width,
			height,
			data,
		})
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn data(&self) -> &[u8] {
		&self.data
	}

	pub fn bounds(&self) -> PixelRect {
		PixelRect {
			x: 0,
			y: 0,
			width: self.width,
			height: self.height,
		}
	}

	fn offset(&self, x: u32, y: u32) -> usize {
		(y as usize * self.width as usize + x as usize) * 4
	}

	pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let offset = self.offset(x, y);
		let mut pixel = [0u8; 4];
		pixel.copy_from_slice(&self.data[offset..offset + 4]);
		Some(Rgba8(pixel))
	}

	pub fn is_blank(&self) -> bool {
		self.data.iter().all(|&b| b == 0)
	}

	pub fn clear(&mut self) {
		self.data.fill(0);
	}

	/// Copies the pixels of `rect` into a tightly packed buffer, as expected by `ImageData`.
	pub fn region_data(&self, rect: PixelRect) -> Vec<u8> {
		let mut data = Vec::with_capacity(rect.area() * 4);
		for y in rect.y..rect.y + rect.height {
			let start = self.offset(rect.x, y);
			data.extend_from_slice(&self.data[start..start + rect.width as usize * 4]);
		}
		data
	}

	/// Strokes `segment` onto the buffer. Returns the pixels that may have changed, or `None` if
	/// the stroke has no area inside the buffer.
	pub fn stroke_segment(&mut self, segment: Segment, style: &StrokeStyle) -> Option<PixelRect> {
		if !(style.width > 0.0) || !segment.from.is_finite() || !segment.to.is_finite() {
			return None;
		}
		if style.cap == LineCap::Butt && segment.length() <= f32::EPSILON {
			return None;
		}

		let reach = 0.5 * style.width * std::f32::consts::SQRT_2 + 1.0;
		let rect = AABox::containing([segment.from, segment.to].into_iter())
			.dilated(reach)
			.covering_pixels(self.width, self.height)?;

		for y in rect.y..rect.y + rect.height {
			for x in rect.x..rect.x + rect.width {
				let center = glam::vec2(x as f32 + 0.5, y as f32 + 0.5);
				let Some(distance) = segment.signed_distance(center, style.width, style.cap) else {
					continue;
				};
				let coverage = coverage(distance);
				if coverage <= 0.0 {
					continue;
				}
				let offset = self.offset(x, y);
				let mut destination = [0u8; 4];
				destination.copy_from_slice(&self.data[offset..offset + 4]);
				self.data[offset..offset + 4]
					.copy_from_slice(&blend_over(destination, style.color, coverage));
			}
		}
		Some(rect)
	}
}
