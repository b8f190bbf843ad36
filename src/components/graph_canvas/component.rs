use leptos::prelude::*;
use log::error;

use super::render::{RenderOptions, render};
use super::surface::CanvasSurface;
use super::types::Graph;

/// A canvas showing `graph`, redrawn whenever the signal changes.
#[component]
pub fn GraphCanvas(
	#[prop(into)] graph: Signal<Graph>,
	#[prop(default = 500)] width: u32,
	#[prop(default = 400)] height: u32,
	#[prop(optional)] options: RenderOptions,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (failure, set_failure) = signal(None::<String>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		canvas.set_width(width);
		canvas.set_height(height);

		let result = CanvasSurface::new(canvas)
			.and_then(|mut surface| graph.with(|g| render(&mut surface, g, &options)));
		match result {
			Ok(()) => set_failure.set(None),
			Err(err) => {
				error!("graph render failed: {err}");
				set_failure.set(Some(err.to_string()));
			}
		}
	});

	view! {
		<canvas node_ref=canvas_ref class="graph-canvas" style="display: block;" />
		{move || failure.get().map(|msg| view! { <p class="graph-canvas-error">{msg}</p> })}
	}
}
