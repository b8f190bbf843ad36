use graph_canvas::components::graph_canvas::{Circle, DrawCall, Line};
use graph_canvas::{Error, Graph, RecordingSurface, RenderOptions, Vertex, render};
use pretty_assertions::assert_eq;

fn draw(graph: &Graph, width: f64, height: f64) -> RecordingSurface {
	let mut surface = RecordingSurface::new(width, height);
	render(&mut surface, graph, &RenderOptions::default()).unwrap();
	surface
}

fn single(x: f64, y: f64) -> Graph {
	Graph::new().with("A", Vertex::new(x, y).label("black"))
}

#[test]
fn reference_size_is_identity() {
	let surface = draw(&single(250.0, 200.0), 500.0, 400.0);
	assert_eq!(surface.circles()[0].center, (250.0, 200.0));
}

#[test]
fn double_size_doubles_positions() {
	let surface = draw(&single(250.0, 200.0), 1000.0, 800.0);
	assert_eq!(surface.circles()[0].center, (500.0, 400.0));
}

#[test]
fn empty_graph_only_clears() {
	let surface = draw(&Graph::new(), 300.0, 200.0);
	assert_eq!(
		surface.calls(),
		&[DrawCall::ClearRect {
			x: 0.0,
			y: 0.0,
			width: 300.0,
			height: 200.0
		}]
	);
}

#[test]
fn rendering_twice_matches_rendering_once() {
	let graph = Graph::new()
		.with("A", Vertex::new(10.0, 10.0).neighbor("B").label("red"))
		.with("B", Vertex::new(90.0, 40.0).neighbor("A").label("green"));

	let once = draw(&graph, 500.0, 400.0);
	let mut twice = draw(&graph, 500.0, 400.0);
	render(&mut twice, &graph, &RenderOptions::default()).unwrap();

	assert_eq!(twice.calls(), once.calls());
}

#[test]
fn symmetric_neighbors_draw_two_segments() {
	let graph = Graph::new()
		.with("A", Vertex::new(0.0, 0.0).neighbor("B").label("red"))
		.with("B", Vertex::new(100.0, 100.0).neighbor("A").label("red"));

	let lines = draw(&graph, 500.0, 400.0).lines();
	assert_eq!(
		lines,
		vec![
			Line {
				from: (0.0, 0.0),
				to: (100.0, 100.0),
				color: "black".into(),
				width: 2.0,
			},
			Line {
				from: (100.0, 100.0),
				to: (0.0, 0.0),
				color: "black".into(),
				width: 2.0,
			},
		]
	);
}

#[test]
fn missing_neighbor_fails_with_its_id() {
	let graph = Graph::new().with("A", Vertex::new(0.0, 0.0).neighbor("Z").label("red"));
	let mut surface = RecordingSurface::new(500.0, 400.0);

	let err = render(&mut surface, &graph, &RenderOptions::default()).unwrap_err();
	match err {
		Error::MissingVertex { id } => assert_eq!(id.as_str(), "Z"),
		other => panic!("unexpected error: {other}"),
	}
	assert!(surface.circles().is_empty());
}

#[test]
fn first_label_is_the_fill_color() {
	let graph = Graph::new().with("A", Vertex::new(5.0, 5.0).label("#ff0000").label("extra"));
	assert_eq!(
		draw(&graph, 500.0, 400.0).circles(),
		vec![Circle {
			center: (5.0, 5.0),
			radius: 10.0,
			color: "#ff0000".into(),
		}]
	);
}

#[test]
fn default_options_are_radius_ten_width_two() {
	let graph = Graph::new()
		.with("A", Vertex::new(0.0, 0.0).neighbor("B").label("red"))
		.with("B", Vertex::new(1.0, 1.0).label("red"));
	let surface = draw(&graph, 500.0, 400.0);

	assert!(surface.circles().iter().all(|c| c.radius == 10.0));
	assert!(surface.lines().iter().all(|l| l.width == 2.0));
}

#[test]
fn custom_options_reach_the_surface() {
	let graph = Graph::new()
		.with("A", Vertex::new(0.0, 0.0).neighbor("B").label("red"))
		.with("B", Vertex::new(1.0, 1.0).label("red"));
	let mut surface = RecordingSurface::new(500.0, 400.0);
	let options = RenderOptions {
		vertex_radius: 4.0,
		edge_thickness: 0.5,
	};
	render(&mut surface, &graph, &options).unwrap();

	assert!(surface.circles().iter().all(|c| c.radius == 4.0));
	assert!(surface.lines().iter().all(|l| l.width == 0.5));
}

#[test]
fn json_graph_with_numeric_ids_renders() {
	let graph = Graph::from_json(
		r#"{
			"1": { "position": [0, 0], "neighbors": [2], "labels": ["red"] },
			"2": { "position": [500, 400], "neighbors": [], "labels": ["blue"] }
		}"#,
	)
	.unwrap();

	let lines = draw(&graph, 100.0, 100.0).lines();
	assert_eq!(lines.len(), 1);
	assert_eq!(lines[0].to, (100.0, 100.0));
}
