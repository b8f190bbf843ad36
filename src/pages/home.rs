use leptos::prelude::*;
use leptos_router::components::A;

use crate::library;

/// Default Home Page: links to every bundled graph
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<div class="graph-list">
			<h1>"Graphs"</h1>
			<ul>
				{library::names()
					.map(|name| {
						view! {
							<li>
								<A href=format!("/graphs/{name}")>{name}</A>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</div>
	}
}
