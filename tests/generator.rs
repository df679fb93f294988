//! Scenario and property tests for the topology generator.

use std::f64::consts::FRAC_PI_2;

use proptest::prelude::*;
use rstest::rstest;
use topology_explorer::topology::{
	Advisory, Edge, Generation, Graph, ParamMap, Point3, TopologyKind, generate,
};

fn params(pairs: &[(&str, f64)]) -> ParamMap {
	pairs.iter().map(|&(k, v)| (k.to_owned(), v)).collect()
}

fn counts(generation: &Generation) -> (usize, usize) {
	(generation.graph.node_count(), generation.graph.edge_count())
}

fn assert_well_formed(graph: &Graph) {
	assert!(graph.edges_in_bounds(), "dangling edge in {graph:?}");
	assert!(!graph.has_self_loops(), "self-loop in {graph:?}");
}

#[test]
fn ring_of_four_is_a_closed_square() {
	let generation = generate("ring", "2D", &params(&[("n", 4.0)]));
	let graph = &generation.graph;

	assert_eq!(counts(&generation), (4, 4));
	assert_eq!(
		graph.edges,
		vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 0)]
	);
	for (i, p) in graph.positions().enumerate() {
		let theta = i as f64 * FRAC_PI_2;
		assert!((p.x - 3.0 * theta.cos()).abs() < 1e-12);
		assert!((p.z - 3.0 * theta.sin()).abs() < 1e-12);
		assert_eq!(p.y, 0.0);
	}
}

#[test]
fn two_by_two_mesh_has_four_corners() {
	let generation = generate("mesh", "2D", &params(&[("dimX", 2.0), ("dimY", 2.0)]));
	assert_eq!(counts(&generation), (4, 4));
	for p in generation.graph.positions() {
		assert_eq!((p.x.abs(), p.y.abs(), p.z), (0.5, 0.5, 0.0));
	}
}

#[test]
fn square_hypercube() {
	let generation = generate("hypercube", "2D", &params(&[("dimensions", 2.0)]));
	assert_eq!(counts(&generation), (4, 4));
	assert_eq!(generation.advisory, None);
	assert!((0..4).all(|i| generation.graph.degree(i) == 2));
}

#[test]
fn five_dimensional_hypercube_is_refused_with_a_note() {
	let generation = generate("hypercube", "2D", &params(&[("dimensions", 5.0)]));
	assert_eq!(counts(&generation), (0, 0));
	assert!(matches!(
		generation.advisory,
		Some(Advisory::HypercubeDimensions { requested }) if requested == 5.0
	));
}

#[test]
fn binary_tree_of_two_levels() {
	let generation = generate("tree", "2D", &params(&[("levels", 2.0), ("branching", 2.0)]));
	assert_eq!(counts(&generation), (7, 6));
}

#[test]
fn unknown_kind_renders_nothing() {
	let generation = generate("unknown", "2D", &ParamMap::new());
	assert_eq!(counts(&generation), (0, 0));
	assert_eq!(
		generation.advisory,
		Some(Advisory::UnknownTopology("unknown".to_owned()))
	);
}

#[rstest]
#[case("mesh", "3D", &[("dimX", 3.0), ("dimY", 2.0), ("dimZ", 4.0)], 24)]
#[case("mesh", "2D", &[("dimX", 3.0), ("dimY", 2.0), ("dimZ", 4.0)], 6)]
#[case("torus", "2D", &[("dimX", 5.0), ("dimY", 3.0)], 15)]
#[case("torus", "2D", &[], 32)]
#[case("ring", "2D", &[("n", 9.0)], 9)]
#[case("butterfly", "2D", &[("k", 4.0)], 12)]
fn node_count_formulas(
	#[case] kind: &str,
	#[case] mode: &str,
	#[case] pairs: &[(&str, f64)],
	#[case] nodes: usize,
) {
	let generation = generate(kind, mode, &params(pairs));
	assert_eq!(generation.graph.node_count(), nodes);
	assert_well_formed(&generation.graph);
}

#[rstest]
#[case(1.0, 2, 1)]
#[case(2.0, 4, 4)]
#[case(3.0, 8, 12)]
#[case(4.0, 0, 0)]
#[case(0.0, 0, 0)]
#[case(7.0, 0, 0)]
fn hypercube_counts(#[case] dimensions: f64, #[case] nodes: usize, #[case] edges: usize) {
	let generation = generate("hypercube", "3D", &params(&[("dimensions", dimensions)]));
	assert_eq!(counts(&generation), (nodes, edges));
}

#[rstest]
#[case("mesh", &[("dimX", 0.0)], (0, 0))]
#[case("mesh", &[("dimY", 0.0)], (0, 0))]
#[case("torus", &[("dimX", 0.0)], (0, 0))]
#[case("torus", &[("dimY", 0.0)], (0, 0))]
#[case("ring", &[("n", 0.0)], (0, 0))]
#[case("ring", &[("n", 1.0)], (1, 0))]
#[case("tree", &[("levels", 0.0)], (1, 0))]
#[case("tree", &[("branching", 0.0)], (1, 0))]
#[case("butterfly", &[("k", 0.0)], (0, 0))]
#[case("mesh", &[("dimX", -3.0)], (0, 0))]
#[case("ring", &[("n", f64::NAN)], (0, 0))]
#[case("torus", &[("dimX", f64::INFINITY)], (0, 0))]
fn degenerate_parameters_degrade_quietly(
	#[case] kind: &str,
	#[case] pairs: &[(&str, f64)],
	#[case] expected: (usize, usize),
) {
	let generation = generate(kind, "2D", &params(pairs));
	assert_eq!(counts(&generation), expected);
	assert_eq!(generation.advisory, None);
}

#[test]
fn segments_match_edge_endpoints() {
	let generation = generate("torus", "2D", &params(&[("dimX", 4.0), ("dimY", 3.0)]));
	let graph = &generation.graph;
	let segments: Vec<(Point3, Point3)> = graph.segments().collect();
	assert_eq!(segments.len(), graph.edge_count());
	for (edge, (a, b)) in graph.edges.iter().zip(segments) {
		assert_eq!(graph.nodes[edge.a].position, a);
		assert_eq!(graph.nodes[edge.b].position, b);
	}
}

fn kind_strategy() -> impl Strategy<Value = TopologyKind> {
	prop::sample::select(TopologyKind::ALL.to_vec())
}

fn mode_strategy() -> impl Strategy<Value = &'static str> {
	prop::sample::select(vec!["2D", "3D"])
}

fn params_strategy() -> impl Strategy<Value = ParamMap> {
	(
		-2.0..7.0f64,
		-2.0..7.0f64,
		-2.0..5.0f64,
		-1.0..40.0f64,
		-1.0..4.0f64,
		-1.0..4.0f64,
		-1.0..5.0f64,
		-1.0..20.0f64,
	)
		.prop_map(|(x, y, z, n, levels, branching, dimensions, k)| {
			params(&[
				("dimX", x.round()),
				("dimY", y.round()),
				("dimZ", z.round()),
				("n", n.round()),
				("levels", levels.round()),
				("branching", branching.round()),
				("dimensions", dimensions.round()),
				("k", k.round()),
			])
		})
}

proptest! {
	#[test]
	fn generation_is_deterministic(
		kind in kind_strategy(),
		mode in mode_strategy(),
		params in params_strategy(),
	) {
		let first = generate(kind.as_str(), mode, &params);
		let second = generate(kind.as_str(), mode, &params);
		prop_assert_eq!(first, second);
	}

	#[test]
	fn edges_stay_inside_the_graph_without_self_loops(
		kind in kind_strategy(),
		mode in mode_strategy(),
		params in params_strategy(),
	) {
		let graph = generate(kind.as_str(), mode, &params).graph;
		prop_assert!(graph.edges_in_bounds());
		prop_assert!(!graph.has_self_loops());
	}

	#[test]
	fn trees_are_connected_and_acyclic(levels in 0u8..5, branching in 0u8..4) {
		let graph = generate(
			"tree",
			"2D",
			&params(&[("levels", f64::from(levels)), ("branching", f64::from(branching))]),
		)
		.graph;
		let expected: usize = (0..=u32::from(levels)).map(|l| usize::from(branching).pow(l)).sum();
		prop_assert_eq!(graph.node_count(), expected);
		prop_assert_eq!(graph.edge_count(), expected - 1);
	}

	#[test]
	fn tori_add_two_edges_per_node(dim_x in 2u8..10, dim_y in 2u8..10) {
		let graph = generate(
			"torus",
			"2D",
			&params(&[("dimX", f64::from(dim_x)), ("dimY", f64::from(dim_y))]),
		)
		.graph;
		let nodes = usize::from(dim_x) * usize::from(dim_y);
		prop_assert_eq!(graph.node_count(), nodes);
		prop_assert_eq!(graph.edge_count(), 2 * nodes);
	}

	#[test]
	fn rings_have_one_edge_per_node(n in 2u16..300) {
		let graph = generate("ring", "2D", &params(&[("n", f64::from(n))])).graph;
		prop_assert_eq!(graph.node_count(), usize::from(n));
		prop_assert_eq!(graph.edge_count(), usize::from(n));
	}

	#[test]
	fn mesh_counts_follow_the_mode(x in 0u8..6, y in 0u8..6, z in 0u8..6) {
		let p = params(&[("dimX", f64::from(x)), ("dimY", f64::from(y)), ("dimZ", f64::from(z))]);
		let (x, y, z) = (usize::from(x), usize::from(y), usize::from(z));
		prop_assert_eq!(generate("mesh", "2D", &p).graph.node_count(), x * y);
		prop_assert_eq!(generate("mesh", "3D", &p).graph.node_count(), x * y * z);
	}
}
