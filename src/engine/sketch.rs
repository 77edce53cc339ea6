use bon::bon;
use glam::Vec2;

use super::raster::Raster;
use super::stroke::{Segment, StrokeStyle};
use crate::geom::PixelRect;
use crate::util::{image, DataUrl};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PointerState {
	#[default]
	Idle,
	Drawing {
		/// Where the previous segment ended, or where the pointer went down.
		last: Vec2,
	},
}

/// A drawing surface driven by pointer events. Owns both the pixels and the pointer state, so
/// any number of independent pads can coexist.
#[derive(Debug, Clone)]
pub struct SketchPad {
	raster: Raster,
	style: StrokeStyle,
	state: PointerState,
}

#[bon]
impl SketchPad {
	#[builder(finish_fn = create)]
	pub fn new(width: u32, height: u32, #[builder(default)] style: StrokeStyle) -> Self {
		Self {
			raster: Raster::new(width, height),
			style,
			state: PointerState::Idle,
		}
	}
}

impl SketchPad {
	pub fn raster(&self) -> &Raster {
		&self.raster
	}

	pub fn style(&self) -> &StrokeStyle {
		&self.style
	}

	pub fn state(&self) -> PointerState {
		self.state
	}

	pub fn is_drawing(&self) -> bool {
		matches!(self.state, PointerState::Drawing { .. })
	}

	/// Starts a stroke at `position`. Nothing is drawn until the pointer moves.
	pub fn pointer_down(&mut self, position: Vec2) {
		self.state = PointerState::Drawing { last: position };
	}

	pub fn pointer_up(&mut self) {
		self.state = PointerState::Idle;
	}

	/// Extends the current stroke to `position` and returns the pixels that may have changed.
	/// Does nothing while idle.
	pub fn pointer_move(&mut self, position: Vec2) -> Option<PixelRect> {
		let PointerState::Drawing { last } = self.state else {
			return None;
		};
		self.state = PointerState::Drawing { last: position };
		self
			.raster
			.stroke_segment(Segment::new(last, position), &self.style)
	}

	/// Erases every pixel. The pointer state is left alone.
	pub fn clear(&mut self) {
		self.raster.clear();
	}

	pub fn to_png(&self) -> image::Result<Vec<u8>> {
		image::encode_png(&self.raster)
	}

	pub fn to_data_url(&self) -> image::Result<DataUrl> {
		Ok(DataUrl::png(self.to_png()?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::Rgba8;
	use glam::vec2;

	fn pad() -> SketchPad {
		SketchPad::builder().width(64).height(64).create()
	}

	fn random_position() -> Vec2 {
		vec2(fastrand::f32() * 100.0 - 18.0, fastrand::f32() * 100.0 - 18.0)
	}

	#[test]
	fn starts_idle_and_blank() {
		let pad = pad();
		assert_eq!(pad.state(), PointerState::Idle);
		assert!(!pad.is_drawing());
		assert!(pad.raster().is_blank());
		assert_eq!(*pad.style(), StrokeStyle::default());
	}

	#[test]
	fn moves_while_idle_change_nothing() {
		fastrand::seed(0x13371337);
		let mut pad = pad();
		for _ in 0..200 {
			assert_eq!(pad.pointer_move(random_position()), None);
		}
		assert!(pad.raster().is_blank());
		assert_eq!(pad.state(), PointerState::Idle);
	}

	#[test]
	fn idle_moves_preserve_existing_pixels() {
		fastrand::seed(0x13371337);
		let mut pad = pad();
		pad.pointer_down(vec2(5.0, 5.0));
		pad.pointer_move(vec2(40.0, 30.0));
		pad.pointer_up();
		let before = pad.raster().clone();
		for _ in 0..200 {
			pad.pointer_move(random_position());
		}
		assert_eq!(*pad.raster(), before);
	}

	#[test]
	fn down_then_move_draws_along_segment() {
		let mut pad = pad();
		pad.pointer_down(vec2(10.0, 10.0));
		assert!(pad.raster().is_blank());
		let rect = pad.pointer_move(vec2(50.0, 50.0)).unwrap();
		assert!(rect.contains(30, 30));
		assert_eq!(pad.raster().pixel(30, 30), Some(Rgba8::BLACK));
		assert_eq!(pad.raster().pixel(50, 10), Some(Rgba8::TRANSPARENT));
		assert_eq!(
			pad.state(),
			PointerState::Drawing {
				last: vec2(50.0, 50.0)
			}
		);
	}

	#[test]
	fn consecutive_moves_chain_from_last_position() {
		let mut pad = pad();
		pad.pointer_down(vec2(5.0, 5.0));
		pad.pointer_move(vec2(5.0, 55.0));
		pad.pointer_move(vec2(55.0, 55.0));
		// On the second segment only.
		assert_eq!(pad.raster().pixel(40, 55), Some(Rgba8::BLACK));
		// Would only be touched by a segment straight from the down position.
		assert_eq!(pad.raster().pixel(30, 30), Some(Rgba8::TRANSPARENT));
	}

	#[test]
	fn up_resets_flag() {
		let mut pad = pad();
		pad.pointer_down(vec2(10.0, 10.0));
		pad.pointer_up();
		assert!(!pad.is_drawing());
		assert_eq!(pad.pointer_move(vec2(50.0, 50.0)), None);
		assert!(pad.raster().is_blank());

		pad.pointer_up();
		assert_eq!(pad.state(), PointerState::Idle);
	}

	#[test]
	fn down_while_drawing_reanchors() {
		let mut pad = pad();
		pad.pointer_down(vec2(5.0, 5.0));
		pad.pointer_down(vec2(40.0, 40.0));
		pad.pointer_move(vec2(60.0, 40.0));
		assert_eq!(pad.raster().pixel(20, 20), Some(Rgba8::TRANSPARENT));
		assert_eq!(pad.raster().pixel(50, 40), Some(Rgba8::BLACK));
	}

	#[test]
	fn out_of_bounds_positions_are_accepted() {
		let mut pad = pad();
		pad.pointer_down(vec2(-30.0, 32.0));
		assert_eq!(pad.pointer_move(vec2(-10.0, 32.0)), None);
		assert!(pad.raster().is_blank());
		assert!(pad.pointer_move(vec2(100.0, 32.0)).is_some());
		assert_eq!(pad.raster().pixel(0, 32), Some(Rgba8::BLACK));
		assert_eq!(pad.raster().pixel(63, 32), Some(Rgba8::BLACK));
	}

	#[test]
	fn clear_blanks_regardless_of_state() {
		let mut pad = pad();
		pad.pointer_down(vec2(10.0, 10.0));
		pad.pointer_move(vec2(50.0, 50.0));
		pad.clear();
		assert!(pad.raster().is_blank());
		assert!(pad.is_drawing());

		pad.pointer_up();
		pad.clear();
		pad.clear();
		assert!(pad.raster().is_blank());
	}

	#[test]
	fn custom_style() {
		let mut pad = SketchPad::builder()
			.width(32)
			.height(32)
			.style(StrokeStyle {
				width: 2.0,
				color: "white".parse().unwrap(),
				..Default::default()
			})
			.create();
		pad.pointer_down(vec2(0.0, 16.5));
		pad.pointer_move(vec2(32.0, 16.5));
		assert_eq!(pad.raster().pixel(16, 16), Some(Rgba8([255, 255, 255, 255])));
		assert_eq!(pad.raster().pixel(16, 19), Some(Rgba8::TRANSPARENT));
	}

	#[test]
	fn data_url_round_trips_dimensions() {
		let mut pad = pad();
		pad.pointer_down(vec2(10.0, 10.0));
		pad.pointer_move(vec2(50.0, 50.0));
		let url = pad.to_data_url().unwrap();
		assert!(url.to_string().starts_with("data:image/png;base64,"));
		let decoded = image::decode_png(url.data()).unwrap();
		assert_eq!(decoded, *pad.raster());
	}
}
