use crate::topology::builder::GraphBuilder;
use crate::topology::types::{Graph, NodeAddress, Point3};

const LINE: [[f64; 3]; 2] = [[-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
const LINE_EDGES: [(usize, usize); 1] = [(0, 1)];

const SQUARE: [[f64; 3]; 4] = [
	[-1.0, -1.0, 0.0],
	[1.0, -1.0, 0.0],
	[1.0, 1.0, 0.0],
	[-1.0, 1.0, 0.0],
];
const SQUARE_EDGES: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 3), (3, 0)];

const CUBE: [[f64; 3]; 8] = [
	[-1.0, -1.0, -1.0],
	[1.0, -1.0, -1.0],
	[1.0, 1.0, -1.0],
	[-1.0, 1.0, -1.0],
	[-1.0, -1.0, 1.0],
	[1.0, -1.0, 1.0],
	[1.0, 1.0, 1.0],
	[-1.0, 1.0, 1.0],
];
const CUBE_EDGES: [(usize, usize); 12] = [
	// bottom
	(0, 1),
	(1, 2),
	(2, 3),
	(3, 0),
	// top
	(4, 5),
	(5, 6),
	(6, 7),
	(7, 4),
	// verticals
	(0, 4),
	(1, 5),
	(2, 6),
	(3, 7),
];

/// Corners of a unit hypercube with `dimensions` in `1..=3`.
///
/// Corners are listed explicitly per dimension; any other count yields an
/// empty graph. Callers deal with reporting the unsupported request.
pub fn hypercube(dimensions: u8) -> Graph {
	let (corners, edges): (&[[f64; 3]], &[(usize, usize)]) = match dimensions {
		1 => (&LINE, &LINE_EDGES),
		2 => (&SQUARE, &SQUARE_EDGES),
		3 => (&CUBE, &CUBE_EDGES),
		_ => return Graph::default(),
	};

	let mut builder = GraphBuilder::with_capacity(corners.len(), edges.len());
	for &[x, y, z] in corners {
		builder.add_node(NodeAddress::Corner(corner_bits(x, y, z)), Point3::new(x, y, z));
	}
	for &(a, b) in edges {
		builder.add_edge(a, b);
	}
	builder.finish()
}

fn corner_bits(x: f64, y: f64, z: f64) -> u8 {
	[x, y, z]
		.into_iter()
		.enumerate()
		.filter(|&(_, c)| c > 0.0)
		.fold(0, |bits, (d, _)| bits | (1 << d))
}
