use wasm_bindgen::JsCast;

mod result_ext;
pub use result_ext::*;

mod data_url;
pub use data_url::*;

pub mod image;

#[derive(thiserror::Error, Debug)]
#[error("javascript error: {0}")]
pub struct JsError(String);

impl JsError {
	pub fn new(message: impl Into<String>) -> Self {
		JsError(message.into())
	}
}

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

/// Maps an offset within an element's client box onto the pixel grid of a backing surface that
/// may be scaled by CSS.
pub fn client_to_surface(offset: glam::Vec2, client_size: glam::Vec2, surface_size: glam::Vec2) -> glam::Vec2 {
	if client_size.x <= 0.0 || client_size.y <= 0.0 {
		return offset;
	}
	offset * surface_size / client_size
}

pub trait CoordinateSource {
	/// Position in the pixel grid of the `<canvas>` the event targets.
	fn get_canvas_coordinates(&self) -> Option<glam::Vec2>;
}

impl CoordinateSource for leptos::ev::MouseEvent {
	fn get_canvas_coordinates(&self) -> Option<glam::Vec2> {
		let canvas = self
			.current_target()
			.and_then(|target| target.dyn_into::<web_sys::HtmlCanvasElement>().ok())?;
		let offset = glam::Vec2::new(self.offset_x() as f32, self.offset_y() as f32);
		let client_size = glam::Vec2::new(canvas.client_width() as f32, canvas.client_height() as f32);
		let surface_size = glam::Vec2::new(canvas.width() as f32, canvas.height() as f32);
		Some(client_to_surface(offset, client_size, surface_size))
	}
}
