use crate::prediction::PredictionDisplay;
use leptos::prelude::*;
use thaw::{Body1, Button, Card, CardFooter, CardHeader};

impl PredictionDisplay for WriteSignal<String> {
	fn show(&self, text: &str) {
		self.set(text.to_owned());
	}
}

#[component]
pub fn PredictionPanel(
	#[prop(into)] prediction: Signal<String>,
	on_clear: impl Fn() + Send + Sync + 'static,
	on_submit: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
	view! {
		<Card class="PredictionPanel">
			<CardHeader>
				<Body1>
					<p id="prediction">{move || prediction.get()}</p>
				</Body1>
			</CardHeader>
			<CardFooter>
				<Button on_click=move |_| on_clear()>"Clear"</Button>
				<Button on_click=move |_| on_submit()>"Submit"</Button>
			</CardFooter>
		</Card>
	}
}
