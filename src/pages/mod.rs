use crate::components::*;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn Home() -> impl IntoView {
	view! {
		<Title text="Draw a digit"/>
		<div class="Home">
			<SketchBoard/>
		</div>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname;

	view! {
		<Title text="Not found"/>
		<div class="NotFound">
			<div>{move || format!("Not found: {}", path.get())}</div>
			<A href="/">"Return home"</A>
		</div>
	}
}
