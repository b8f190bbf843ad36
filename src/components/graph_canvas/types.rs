use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a vertex. Numeric ids in JSON are kept as their decimal text.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct VertexId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
	Text(String),
	Number(serde_json::Number),
}

impl From<RawId> for VertexId {
	fn from(raw: RawId) -> Self {
		match raw {
			RawId::Text(text) => VertexId(text),
			RawId::Number(number) => VertexId(number.to_string()),
		}
	}
}

impl VertexId {
	/// The identifier as text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for VertexId {
	fn from(id: &str) -> Self {
		VertexId(id.to_owned())
	}
}

impl From<String> for VertexId {
	fn from(id: String) -> Self {
		VertexId(id)
	}
}

impl Borrow<str> for VertexId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for VertexId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A vertex record: logical position, neighbor ids and display labels.
///
/// Only `labels[0]` is used when drawing, as the fill color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
	/// Position in the 500x400 logical frame.
	pub position: (f64, f64),
	/// Vertices this one draws an edge to.
	pub neighbors: Vec<VertexId>,
	/// Display labels; the first is the fill color.
	pub labels: Vec<String>,
}

impl Vertex {
	/// Create a vertex at `(x, y)` with no neighbors and no labels.
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self {
			position: (x, y),
			neighbors: Vec::new(),
			labels: Vec::new(),
		}
	}

	/// Add a neighbor.
	#[must_use]
	pub fn neighbor(mut self, id: impl Into<VertexId>) -> Self {
		self.neighbors.push(id.into());
		self
	}

	/// Append a label. The first label added is the fill color.
	#[must_use]
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.labels.push(label.into());
		self
	}

	/// Fill color, if the vertex has any label.
	pub fn fill_color(&self) -> Option<&str> {
		self.labels.first().map(String::as_str)
	}
}

/// Mapping of vertex ids to vertex records, iterated in id order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Graph {
	vertices: BTreeMap<VertexId, Vertex>,
}

impl Graph {
	/// An empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse `{ id: { position, neighbors, labels } }`.
	///
	/// A malformed vertex entry is reported against its id, not as a bare
	/// JSON error.
	pub fn from_json(json: &str) -> Result<Self> {
		let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
		raw.into_iter()
			.map(|(key, value)| {
				let id = VertexId::from(key);
				let vertex = serde_json::from_value::<Vertex>(value)
					.map_err(|err| Error::invalid(&id, err.to_string()))?;
				Ok::<_, Error>((id, vertex))
			})
			.collect()
	}

	/// Serialize back to the boundary JSON shape.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Insert a vertex, returning the one it replaced.
	pub fn insert(&mut self, id: impl Into<VertexId>, vertex: Vertex) -> Option<Vertex> {
		self.vertices.insert(id.into(), vertex)
	}

	/// Builder form of [`Graph::insert`].
	#[must_use]
	pub fn with(mut self, id: impl Into<VertexId>, vertex: Vertex) -> Self {
		self.insert(id, vertex);
		self
	}

	/// Look up a vertex.
	pub fn get(&self, id: &str) -> Option<&Vertex> {
		self.vertices.get(id)
	}

	/// Vertices in id order.
	pub fn iter(&self) -> impl Iterator<Item = (&VertexId, &Vertex)> {
		self.vertices.iter()
	}

	/// Number of vertices.
	pub fn len(&self) -> usize {
		self.vertices.len()
	}

	/// Whether the graph has no vertices.
	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
	}

	/// Total length of all neighbor lists.
	pub fn neighbor_entries(&self) -> usize {
		self.vertices.values().map(|v| v.neighbors.len()).sum()
	}
}

impl FromIterator<(VertexId, Vertex)> for Graph {
	fn from_iter<I: IntoIterator<Item = (VertexId, Vertex)>>(iter: I) -> Self {
		Self {
			vertices: iter.into_iter().collect(),
		}
	}
}
