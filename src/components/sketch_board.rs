use super::*;
use crate::config::SketchConfig;
use crate::prediction::{resolve_endpoint, HttpTransport, PredictionClient};
use crate::util::*;
use leptos::html;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use std::rc::Rc;

fn page_origin() -> Option<String> {
	web_sys::window()?.location().origin().ok()
}

fn create_client(config: &SketchConfig) -> PredictionClient {
	let endpoint = resolve_endpoint(&config.endpoint, page_origin().as_deref())
		.ok_or_log("failed to resolve prediction endpoint")
		.unwrap_or_else(|| config.endpoint.clone());
	tracing::info!(%endpoint, "prediction endpoint");
	PredictionClient::new(HttpTransport::new(), endpoint)
}

/// The drawing canvas together with its Clear/Submit controls and the latest prediction.
#[component]
pub fn SketchBoard() -> impl IntoView {
	let config = use_context::<SketchConfig>().unwrap_or_default();
	let style = config
		.stroke_style()
		.ok_or_log("invalid stroke style, using default")
		.unwrap_or_default();
	let pad = share_pad(
		crate::engine::SketchPad::builder()
			.width(config.width)
			.height(config.height)
			.style(style)
			.create(),
	);
	let client = SendWrapper::new(Rc::new(create_client(&config)));

	let canvas_ref = NodeRef::<html::Canvas>::new();
	let (prediction, set_prediction) = signal(String::new());

	let on_clear = {
		let pad = pad.clone();
		move || {
			let mut pad = pad.borrow_mut();
			pad.clear();
			present(canvas_ref, &pad);
		}
	};

	let on_submit = {
		let pad = pad.clone();
		move || {
			let pad = pad.clone();
			let client = client.clone();
			// Overlapping submissions are allowed; whichever answer arrives last is shown.
			wasm_bindgen_futures::spawn_local(async move {
				let submission = client.submit_and_display(&pad.borrow(), &set_prediction);
				submission.await;
			});
		}
	};

	view! {
		<div class="SketchBoard">
			<SketchCanvas pad=pad canvas_ref=canvas_ref/>
			<PredictionPanel prediction=prediction on_clear=on_clear on_submit=on_submit/>
		</div>
	}
}
