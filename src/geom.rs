use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec2::MAX, Vec2::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x || self.min.y > self.max.y
	}

	pub fn expanded_to_contain(self, point: Vec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl Iterator<Item = Vec2>) -> Self {
		points.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	/// Grows the box by `margin` on every side.
	pub fn dilated(self, margin: f32) -> Self {
		if self.is_empty() {
			return self;
		}
		Self::new(self.min - Vec2::splat(margin), self.max + Vec2::splat(margin))
	}

	/// The smallest set of whole pixels overlapping this box, clipped to `[0, width) x [0, height)`.
	pub fn covering_pixels(&self, width: u32, height: u32) -> Option<PixelRect> {
		if self.is_empty() || !self.min.is_finite() || !self.max.is_finite() {
			return None;
		}
		let x0 = self.min.x.floor().max(0.0);
		let y0 = self.min.y.floor().max(0.0);
		let x1 = self.max.x.ceil().min(width as f32);
		let y1 = self.max.y.ceil().min(height as f32);
		if !(x0 < x1 && y0 < y1) {
			return None;
		}
		Some(PixelRect {
			x: x0 as u32,
			y: y0 as u32,
			width: (x1 - x0) as u32,
			height: (y1 - y0) as u32,
		})
	}
}

/// An integer rectangle of pixels, `x..x + width` by `y..y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{width}x{height}+{x}+{y}")]
pub struct PixelRect {
	pub x: u32,
	pub y: u32,
	pub width: u32,
	pub height: u32,
}

impl PixelRect {
	pub fn contains(&self, x: u32, y: u32) -> bool {
		x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
	}

	pub fn area(&self) -> usize {
		self.width as usize * self.height as usize
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::vec2;

	#[test]
	fn empty_box_covers_nothing() {
		assert!(AABox::empty().is_empty());
		assert_eq!(AABox::empty().covering_pixels(10, 10), None);
		assert_eq!(AABox::empty().dilated(5.0).covering_pixels(10, 10), None);
	}

	#[test]
	fn covering_pixels_rounds_outward_and_clips() {
		let b = AABox::containing([vec2(1.5, 2.2), vec2(4.1, 3.0)].into_iter());
		assert_eq!(
			b.covering_pixels(10, 10),
			Some(PixelRect {
				x: 1,
				y: 2,
				width: 4,
				height: 1,
			})
		);

		let b = AABox::new(vec2(-5.0, -5.0), vec2(3.5, 20.0));
		assert_eq!(
			b.covering_pixels(10, 10),
			Some(PixelRect {
				x: 0,
				y: 0,
				width: 4,
				height: 10,
			})
		);
	}

	#[test]
	fn box_outside_bounds_covers_nothing() {
		let b = AABox::new(vec2(-20.0, -20.0), vec2(-1.0, -1.0));
		assert_eq!(b.covering_pixels(10, 10), None);
		let b = AABox::new(vec2(12.0, 0.0), vec2(14.0, 5.0));
		assert_eq!(b.covering_pixels(10, 10), None);
	}

	#[test]
	fn pixel_rect_contains_is_half_open() {
		let r = PixelRect {
			x: 1,
			y: 0,
			width: 4,
			height: 3,
		};
		assert_eq!(r.to_string(), "4x3+1+0");
		assert!(r.contains(1, 0));
		assert!(r.contains(4, 2));
		assert!(!r.contains(5, 0));
		assert!(!r.contains(0, 1));
		assert!(!r.contains(2, 3));
		assert_eq!(r.area(), 12);
	}
}
