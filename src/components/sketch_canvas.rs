use crate::engine::{Raster, SketchPad};
use crate::geom::PixelRect;
use crate::util::*;
use leptos::html;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{Clamped, JsCast};

/// The pad shared by every handler on the page. Everything runs on the browser's single thread.
pub type SharedPad = SendWrapper<Rc<RefCell<SketchPad>>>;

pub fn share_pad(pad: SketchPad) -> SharedPad {
	SendWrapper::new(Rc::new(RefCell::new(pad)))
}

fn context_2d(
	canvas: &web_sys::HtmlCanvasElement,
) -> Result<web_sys::CanvasRenderingContext2d, JsError> {
	canvas
		.get_context("2d")?
		.ok_or_else(|| JsError::new("canvas has no 2d context"))?
		.dyn_into::<web_sys::CanvasRenderingContext2d>()
		.map_err(|_| JsError::new("2d context has an unexpected type"))
}

/// Copies `rect` of `raster` onto the canvas, replacing what was there.
pub fn blit(
	canvas: &web_sys::HtmlCanvasElement,
	raster: &Raster,
	rect: PixelRect,
) -> Result<(), JsError> {
	let context = context_2d(canvas)?;
	let data = raster.region_data(rect);
	let image = web_sys::ImageData::new_with_u8_clamped_array_and_sh(
		Clamped(data.as_slice()),
		rect.width,
		rect.height,
	)?;
	context.put_image_data(&image, rect.x as f64, rect.y as f64)?;
	Ok(())
}

/// Redraws the whole canvas from `pad`.
pub fn present(canvas_ref: NodeRef<html::Canvas>, pad: &SketchPad) {
	let Some(canvas) = canvas_ref.get().or_warn("canvas is not mounted") else {
		return;
	};
	let raster = pad.raster();
	blit(&canvas, raster, raster.bounds()).ok_or_log("failed to present canvas");
}

#[component]
pub fn SketchCanvas(pad: SharedPad, canvas_ref: NodeRef<html::Canvas>) -> impl IntoView {
	let (width, height) = {
		let pad = pad.borrow();
		(pad.raster().width(), pad.raster().height())
	};

	let mousedown = {
		let pad = pad.clone();
		move |e: leptos::ev::MouseEvent| {
			let Some(position) = e.get_canvas_coordinates() else {
				return;
			};
			e.prevent_default();
			pad.borrow_mut().pointer_down(position);
		}
	};

	let mousemove = {
		let pad = pad.clone();
		move |e: leptos::ev::MouseEvent| {
			let Some(position) = e.get_canvas_coordinates() else {
				return;
			};
			let mut pad = pad.borrow_mut();
			let Some(rect) = pad.pointer_move(position) else {
				return;
			};
			if let Some(canvas) = canvas_ref.get() {
				blit(&canvas, pad.raster(), rect).ok_or_log("failed to draw segment");
			}
		}
	};

	let mouseup = move |_: leptos::ev::MouseEvent| {
		pad.borrow_mut().pointer_up();
	};

	view! {
		<canvas
			id="canvas"
			class="SketchCanvas"
			node_ref=canvas_ref
			width=width.to_string()
			height=height.to_string()
			on:mousedown=mousedown
			on:mousemove=mousemove
			on:mouseup=mouseup
		/>
	}
}
