//! Error types for rendering and loading graphs.

use thiserror::Error;

use crate::components::graph_canvas::VertexId;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or rendering a graph.
#[derive(Error, Debug)]
pub enum Error {
	/// A neighbor identifier does not resolve to a vertex of the graph.
	#[error("missing vertex `{id}`")]
	MissingVertex {
		/// The identifier that could not be resolved.
		id: VertexId,
	},

	/// A vertex record lacks a usable field.
	#[error("invalid data for vertex `{id}`: {field}")]
	InvalidVertexData {
		/// The vertex whose record is malformed.
		id: VertexId,
		/// What is wrong with it.
		field: String,
	},

	/// The drawing surface cannot be resolved or has no 2D context.
	#[error("drawing surface unavailable: {reason}")]
	SurfaceUnavailable {
		/// Why the surface could not be used.
		reason: String,
	},

	/// No bundled graph carries this name.
	#[error("unknown graph `{name}`")]
	UnknownGraph {
		/// The requested name.
		name: String,
	},

	/// The graph document is not valid JSON or its root is not an object.
	#[error("graph JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

impl Error {
	pub(crate) fn invalid(id: &VertexId, field: impl Into<String>) -> Self {
		Error::InvalidVertexData {
			id: id.clone(),
			field: field.into(),
		}
	}

	pub(crate) fn surface(reason: impl Into<String>) -> Self {
		Error::SurfaceUnavailable {
			reason: reason.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_vertex_names_the_identifier() {
		let err = Error::MissingVertex { id: "Z".into() };
		assert!(err.to_string().contains("`Z`"));
	}

	#[test]
	fn invalid_vertex_data_names_vertex_and_field() {
		let err = Error::invalid(&"A".into(), "labels is empty");
		let msg = err.to_string();
		assert!(msg.contains("`A`"));
		assert!(msg.contains("labels is empty"));
	}
}
