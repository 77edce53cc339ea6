pub mod util;

pub mod config;
pub mod engine;
pub mod geom;
pub mod prediction;

pub mod components;
mod pages;


use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	if use_context::<config::SketchConfig>().is_none() {
		provide_context(config::SketchConfig::default());
	}

	view! {
		<Title formatter=|page| format!("Digit Sketch - {page}")/>

		// Inject metadata in the <head> tag.
		<Meta charset="UTF-8"/>
		<Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

		<ConfigProvider>
			<Router>
				<Routes fallback=|| view! { <pages::NotFound/> }>
					<Route path=StaticSegment("") view=pages::Home/>
				</Routes>
			</Router>
		</ConfigProvider>
	}
}
