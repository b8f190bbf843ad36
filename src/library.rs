//! Named graphs bundled with the app.

use crate::components::graph_canvas::Graph;
use crate::error::{Error, Result};

const BUNDLED: &[(&str, &str)] = &[
	("square", include_str!("../graphs/square.json")),
	("star", include_str!("../graphs/star.json")),
	("triangle", include_str!("../graphs/triangle.json")),
];

/// Names of the bundled graphs.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUNDLED.iter().map(|&(name, _)| name)
}

/// Parse the bundled graph called `name`.
pub fn load(name: &str) -> Result<Graph> {
	let (_, json) = BUNDLED
		.iter()
		.find(|&&(bundled, _)| bundled == name)
		.ok_or_else(|| Error::UnknownGraph {
			name: name.to_owned(),
		})?;
	Graph::from_json(json)
}

/// Headline numbers for a graph's detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphSummary {
	/// Name the graph was loaded under.
	pub name: String,
	/// Number of vertices.
	pub vertices: usize,
	/// Neighbor entries halved, which counts each undirected edge once.
	pub edges: usize,
}

impl GraphSummary {
	/// Summarize `graph`.
	pub fn of(name: &str, graph: &Graph) -> Self {
		Self {
			name: name.to_owned(),
			vertices: graph.len(),
			edges: graph.neighbor_entries() / 2,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_canvas::{RenderOptions, plan, scale::REFERENCE_FRAME};

	#[test]
	fn every_bundled_graph_loads_and_plans() {
		for name in names() {
			let graph = load(name).unwrap();
			assert!(!graph.is_empty(), "{name} is empty");
			plan(&graph, REFERENCE_FRAME, &RenderOptions::default()).unwrap();
		}
	}

	#[test]
	fn unknown_graph_is_an_error() {
		assert!(matches!(
			load("dodecahedron"),
			Err(Error::UnknownGraph { name }) if name == "dodecahedron"
		));
	}

	#[test]
	fn summary_counts_undirected_edges_once() {
		let summary = GraphSummary::of("square", &load("square").unwrap());
		assert_eq!(
			summary,
			GraphSummary {
				name: "square".into(),
				vertices: 4,
				edges: 4,
			}
		);
	}

	#[test]
	fn star_uses_numeric_neighbor_ids() {
		let graph = load("star").unwrap();
		assert_eq!(GraphSummary::of("star", &graph).edges, 5);
		assert_eq!(graph.get("0").unwrap().neighbors.len(), 5);
	}
}
