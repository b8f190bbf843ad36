use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{Error, Result};

/// The drawing-context primitives the renderer writes through.
pub trait DrawingSurface {
	/// Width in pixels.
	fn width(&self) -> f64;
	/// Height in pixels.
	fn height(&self) -> f64;
	/// Erase a rectangle.
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	/// Start a new path.
	fn begin_path(&mut self);
	/// Start a subpath at a point.
	fn move_to(&mut self, x: f64, y: f64);
	/// Extend the subpath with a straight line.
	fn line_to(&mut self, x: f64, y: f64);
	/// Color used by [`DrawingSurface::stroke`].
	fn set_stroke_style(&mut self, color: &str);
	/// Width used by [`DrawingSurface::stroke`].
	fn set_line_width(&mut self, width: f64);
	/// Stroke the current path.
	fn stroke(&mut self);
	/// Add a circular arc to the current path.
	fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
	/// Color used by [`DrawingSurface::fill`].
	fn set_fill_style(&mut self, color: &str);
	/// Fill the current path.
	fn fill(&mut self);
}

/// An HTML canvas and its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wrap a canvas, fetching its `2d` context.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
		let ctx = canvas
			.get_context("2d")
			.map_err(|err| Error::surface(format!("getContext failed: {err:?}")))?
			.ok_or_else(|| Error::surface("canvas has no 2d context"))?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| Error::surface("2d context is not a CanvasRenderingContext2d"))?;
		Ok(Self { canvas, ctx })
	}

	/// Look up a canvas element in the current document by its id.
	pub fn by_id(id: &str) -> Result<Self> {
		let document = web_sys::window()
			.and_then(|window| window.document())
			.ok_or_else(|| Error::surface("no document"))?;
		let canvas = document
			.get_element_by_id(id)
			.ok_or_else(|| Error::surface(format!("no element with id `{id}`")))?
			.dyn_into::<HtmlCanvasElement>()
			.map_err(|_| Error::surface(format!("element `{id}` is not a canvas")))?;
		Self::new(canvas)
	}

	/// The wrapped canvas.
	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}
}

impl DrawingSurface for CanvasSurface {
	fn width(&self) -> f64 {
		self.canvas.width() as f64
	}

	fn height(&self) -> f64 {
		self.canvas.height() as f64
	}

	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		self.ctx.clear_rect(x, y, width, height);
	}

	fn begin_path(&mut self) {
		self.ctx.begin_path();
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ctx.move_to(x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.ctx.line_to(x, y);
	}

	fn set_stroke_style(&mut self, color: &str) {
		self.ctx.set_stroke_style_str(color);
	}

	fn set_line_width(&mut self, width: f64) {
		self.ctx.set_line_width(width);
	}

	fn stroke(&mut self) {
		self.ctx.stroke();
	}

	fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
		let _ = self.ctx.arc(x, y, radius, start_angle, end_angle);
	}

	fn set_fill_style(&mut self, color: &str) {
		self.ctx.set_fill_style_str(color);
	}

	fn fill(&mut self) {
		self.ctx.fill();
	}
}

/// One call made on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
	ClearRect { x: f64, y: f64, width: f64, height: f64 },
	BeginPath,
	MoveTo { x: f64, y: f64 },
	LineTo { x: f64, y: f64 },
	SetStrokeStyle(String),
	SetLineWidth(f64),
	Stroke,
	Arc { x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64 },
	SetFillStyle(String),
	Fill,
}

/// A stroked straight segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub color: String,
	pub width: f64,
}

/// A filled circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
	pub center: (f64, f64),
	pub radius: f64,
	pub color: String,
}

/// Headless surface that records calls in place of drawing pixels.
///
/// A clear covering the whole surface drops everything recorded before it,
/// so [`RecordingSurface::calls`] only holds what is still visible.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
	width: f64,
	height: f64,
	calls: Vec<DrawCall>,
}

impl RecordingSurface {
	/// A blank surface of the given pixel size.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			calls: Vec::new(),
		}
	}

	/// Calls since the last full clear, that clear included.
	pub fn calls(&self) -> &[DrawCall] {
		&self.calls
	}

	/// Segments produced by each `stroke`, with the stroke state at that time.
	pub fn lines(&self) -> Vec<Line> {
		let mut lines = Vec::new();
		let (mut color, mut width) = (String::from("black"), 1.0);
		let mut path: Vec<((f64, f64), (f64, f64))> = Vec::new();
		let mut cursor = None;
		for call in &self.calls {
			match call {
				DrawCall::BeginPath => {
					path.clear();
					cursor = None;
				}
				DrawCall::MoveTo { x, y } => cursor = Some((*x, *y)),
				DrawCall::LineTo { x, y } => {
					if let Some(from) = cursor {
						path.push((from, (*x, *y)));
					}
					cursor = Some((*x, *y));
				}
				DrawCall::SetStrokeStyle(c) => color = c.clone(),
				DrawCall::SetLineWidth(w) => width = *w,
				DrawCall::Stroke => lines.extend(path.iter().map(|&(from, to)| Line {
					from,
					to,
					color: color.clone(),
					width,
				})),
				_ => {}
			}
		}
		lines
	}

	/// Arcs filled by each `fill`, with the fill color at that time.
	pub fn circles(&self) -> Vec<Circle> {
		let mut circles = Vec::new();
		let mut color = String::from("black");
		let mut arcs: Vec<((f64, f64), f64)> = Vec::new();
		for call in &self.calls {
			match call {
				DrawCall::BeginPath => arcs.clear(),
				DrawCall::Arc { x, y, radius, .. } => arcs.push(((*x, *y), *radius)),
				DrawCall::SetFillStyle(c) => color = c.clone(),
				DrawCall::Fill => circles.extend(arcs.iter().map(|&(center, radius)| Circle {
					center,
					radius,
					color: color.clone(),
				})),
				_ => {}
			}
		}
		circles
	}

	fn covers(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
		x <= 0.0 && y <= 0.0 && x + width >= self.width && y + height >= self.height
	}
}

impl DrawingSurface for RecordingSurface {
	fn width(&self) -> f64 {
		self.width
	}

	fn height(&self) -> f64 {
		self.height
	}

	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		if self.covers(x, y, width, height) {
			self.calls.clear();
		}
		self.calls.push(DrawCall::ClearRect { x, y, width, height });
	}

	fn begin_path(&mut self) {
		self.calls.push(DrawCall::BeginPath);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.calls.push(DrawCall::MoveTo { x, y });
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.calls.push(DrawCall::LineTo { x, y });
	}

	fn set_stroke_style(&mut self, color: &str) {
		self.calls.push(DrawCall::SetStrokeStyle(color.to_owned()));
	}

	fn set_line_width(&mut self, width: f64) {
		self.calls.push(DrawCall::SetLineWidth(width));
	}

	fn stroke(&mut self) {
		self.calls.push(DrawCall::Stroke);
	}

	fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
		self.calls.push(DrawCall::Arc {
			x,
			y,
			radius,
			start_angle,
			end_angle,
		});
	}

	fn set_fill_style(&mut self, color: &str) {
		self.calls.push(DrawCall::SetFillStyle(color.to_owned()));
	}

	fn fill(&mut self) {
		self.calls.push(DrawCall::Fill);
	}
}
