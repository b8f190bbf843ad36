mod component;
mod render;
pub mod scale;
mod surface;
mod types;

pub use component::GraphCanvas;
pub use render::{Disc, EDGE_COLOR, RenderOptions, Scene, Segment, paint, plan, render};
pub use surface::{CanvasSurface, Circle, DrawCall, DrawingSurface, Line, RecordingSurface};
pub use types::{Graph, Vertex, VertexId};
