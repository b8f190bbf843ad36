use std::f64::consts::TAU;

use log::debug;

use super::scale::{REFERENCE_FRAME, Size, scale_position};
use super::surface::DrawingSurface;
use super::types::{Graph, Vertex, VertexId};
use crate::error::{Error, Result};

/// Stroke color of every edge.
pub const EDGE_COLOR: &str = "black";

/// Vertex radius and edge width, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
	/// Radius of each vertex circle.
	pub vertex_radius: f64,
	/// Stroke width of each edge.
	pub edge_thickness: f64,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			vertex_radius: 10.0,
			edge_thickness: 2.0,
		}
	}
}

/// An edge with both endpoints in pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
	/// Scaled position of the vertex listing the neighbor.
	pub from: (f64, f64),
	/// Scaled position of the neighbor.
	pub to: (f64, f64),
}

/// A vertex resolved to a pixel-space circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Disc {
	/// Scaled center.
	pub center: (f64, f64),
	/// Fill color, the vertex's first label.
	pub color: String,
}

/// Everything one render draws, in drawing order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
	/// Target size the positions were scaled to.
	pub size: Size,
	/// One segment per neighbor entry, in graph order.
	pub edges: Vec<Segment>,
	/// One disc per vertex, in graph order.
	pub vertices: Vec<Disc>,
	/// Edge stroke width.
	pub edge_thickness: f64,
	/// Vertex radius.
	pub vertex_radius: f64,
}

fn pixel_position(id: &VertexId, vertex: &Vertex, target: Size) -> Result<(f64, f64)> {
	let (x, y) = vertex.position;
	if !x.is_finite() || !y.is_finite() {
		return Err(Error::invalid(id, "position is not finite"));
	}
	Ok(scale_position(vertex.position, REFERENCE_FRAME, target))
}

/// Resolve and scale `graph` for a surface of size `target`.
///
/// Fails on the first neighbor id that is not a vertex, or the first vertex
/// without a usable position or labels.
pub fn plan(graph: &Graph, target: Size, options: &RenderOptions) -> Result<Scene> {
	let mut edges = Vec::with_capacity(graph.neighbor_entries());
	for (id, vertex) in graph.iter() {
		let from = pixel_position(id, vertex, target)?;
		for neighbor_id in &vertex.neighbors {
			let neighbor = graph
				.get(neighbor_id.as_str())
				.ok_or_else(|| Error::MissingVertex {
					id: neighbor_id.clone(),
				})?;
			let to = pixel_position(neighbor_id, neighbor, target)?;
			edges.push(Segment { from, to });
		}
	}

	let vertices = graph
		.iter()
		.map(|(id, vertex)| {
			let color = vertex
				.fill_color()
				.ok_or_else(|| Error::invalid(id, "labels is empty"))?;
			Ok::<_, Error>(Disc {
				center: pixel_position(id, vertex, target)?,
				color: color.to_owned(),
			})
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(Scene {
		size: target,
		edges,
		vertices,
		edge_thickness: options.edge_thickness,
		vertex_radius: options.vertex_radius,
	})
}

/// Clear `surface`, then draw the edges of `scene`, then its vertices.
pub fn paint<S: DrawingSurface + ?Sized>(surface: &mut S, scene: &Scene) {
	let (width, height) = (surface.width(), surface.height());
	surface.clear_rect(0.0, 0.0, width, height);
	draw_edges(surface, scene);
	draw_vertices(surface, scene);
}

fn draw_edges<S: DrawingSurface + ?Sized>(surface: &mut S, scene: &Scene) {
	for Segment { from, to } in &scene.edges {
		surface.begin_path();
		surface.move_to(from.0, from.1);
		surface.line_to(to.0, to.1);
		surface.set_stroke_style(EDGE_COLOR);
		surface.set_line_width(scene.edge_thickness);
		surface.stroke();
	}
}

fn draw_vertices<S: DrawingSurface + ?Sized>(surface: &mut S, scene: &Scene) {
	for Disc { center, color } in &scene.vertices {
		surface.begin_path();
		surface.arc(center.0, center.1, scene.vertex_radius, 0.0, TAU);
		surface.set_fill_style(color);
		surface.fill();
	}
}

/// Render `graph` onto `surface`.
///
/// The graph is fully resolved before the surface is touched, so on error the
/// surface keeps whatever it showed before.
pub fn render<S: DrawingSurface + ?Sized>(
	surface: &mut S,
	graph: &Graph,
	options: &RenderOptions,
) -> Result<()> {
	let size = Size::new(surface.width(), surface.height());
	let scene = plan(graph, size, options)?;
	debug!(
		"rendering {} vertices, {} edge segments onto {}x{}",
		scene.vertices.len(),
		scene.edges.len(),
		size.width,
		size.height
	);
	paint(surface, &scene);
	Ok(())
}
