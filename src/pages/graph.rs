use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::graph_canvas::GraphCanvas;
use crate::library::{self, GraphSummary};

/// Detail page for one bundled graph: its counts and a rendering.
#[component]
pub fn GraphDetail() -> impl IntoView {
	let params = use_params_map();
	let name = move || params.with(|p| p.get("name").unwrap_or_default());

	view! {
		<div class="graph-detail">
			{move || {
				let name = name();
				match library::load(&name) {
					Ok(graph) => {
						let summary = GraphSummary::of(&name, &graph);
						view! {
							<div class="graph-view">
								<h1>{summary.name}</h1>
								<p class="subtitle">
									{format!("{} vertices, {} edges", summary.vertices, summary.edges)}
								</p>
								<GraphCanvas graph=Signal::stored(graph) />
							</div>
						}
							.into_any()
					}
					Err(err) => view! { <p class="graph-error">{err.to_string()}</p> }.into_any(),
				}
			}}
			<A href="/">"All graphs"</A>
		</div>
	}
}
