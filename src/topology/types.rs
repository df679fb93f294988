use std::fmt;

use super::config::TopologyKind;

/// A position in scene space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
	/// Horizontal.
	pub x: f64,
	/// Vertical.
	pub y: f64,
	/// Depth.
	pub z: f64,
}

impl Point3 {
	/// The scene origin.
	pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

	/// Build a point from its three coordinates.
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	/// Distance from the origin.
	pub fn length(self) -> f64 {
		(self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
	}

	/// Coordinates as an array, the layout renderers expect.
	pub const fn to_array(self) -> [f64; 3] {
		[self.x, self.y, self.z]
	}
}

/// Topology-specific address of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeAddress {
	/// Position around a ring.
	Linear(usize),
	/// Grid coordinates of a mesh node.
	#[allow(missing_docs)]
	Grid { x: usize, y: usize, z: usize },
	/// Segment along the ring axis and along the tube axis of a torus.
	#[allow(missing_docs)]
	Torus { ring: usize, tube: usize },
	/// Depth below the root of a tree.
	#[allow(missing_docs)]
	Tree { depth: usize },
	/// Hypercube corner; bit `d` is set when coordinate `d` is positive.
	Corner(u8),
	/// Butterfly stage and position within the stage.
	#[allow(missing_docs)]
	Stage { stage: usize, position: usize },
}

impl fmt::Display for NodeAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			Self::Linear(i) => write!(f, "{i}"),
			Self::Grid { x, y, z } => write!(f, "({x}, {y}, {z})"),
			Self::Torus { ring, tube } => write!(f, "({ring}, {tube})"),
			Self::Tree { depth } => write!(f, "depth {depth}"),
			Self::Corner(bits) => write!(f, "{bits:03b}"),
			Self::Stage { stage, position } => write!(f, "s{stage}:{position}"),
		}
	}
}

/// One generated node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
	/// Topology-specific label.
	pub address: NodeAddress,
	/// Scene-space coordinates.
	pub position: Point3,
}

/// Undirected link between two entries of [`Graph::nodes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	/// Index of the first endpoint.
	pub a: usize,
	/// Index of the second endpoint.
	pub b: usize,
}

impl Edge {
	/// Link node `a` to node `b`.
	pub const fn new(a: usize, b: usize) -> Self {
		Self { a, b }
	}

	/// The endpoint opposite `node`, if `node` is an endpoint at all.
	pub const fn other(self, node: usize) -> Option<usize> {
		if self.a == node {
			Some(self.b)
		} else if self.b == node {
			Some(self.a)
		} else {
			None
		}
	}

	/// Both endpoints are the same node.
	pub const fn is_self_loop(self) -> bool {
		self.a == self.b
	}
}

/// Nodes plus index-pair edges produced by one generation call.
///
/// Edges are stored once per addition, so a pair can repeat (a torus with a
/// dimension of 2 links the same two nodes from both sides).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	/// Nodes in enumeration order.
	pub nodes: Vec<Node>,
	/// Edges in insertion order.
	pub edges: Vec<Edge>,
}

impl Graph {
	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of stored edges, repeats included.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// No nodes at all.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Node positions in enumeration order, for point rendering.
	pub fn positions(&self) -> impl Iterator<Item = Point3> + '_ {
		self.nodes.iter().map(|node| node.position)
	}

	/// Endpoint coordinates of every edge, for line-segment rendering.
	pub fn segments(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
		self.edges.iter().filter_map(|edge| {
			let a = self.nodes.get(edge.a)?;
			let b = self.nodes.get(edge.b)?;
			Some((a.position, b.position))
		})
	}

	/// Indices linked to `node`, once per stored edge.
	pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
		self.edges.iter().filter_map(move |edge| edge.other(node))
	}

	/// Edge count at `node`.
	pub fn degree(&self, node: usize) -> usize {
		self.neighbors(node).count()
	}

	/// Whether any edge starts and ends on the same node.
	pub fn has_self_loops(&self) -> bool {
		self.edges.iter().any(|edge| edge.is_self_loop())
	}

	/// Whether every edge refers to nodes of this graph.
	pub fn edges_in_bounds(&self) -> bool {
		let n = self.nodes.len();
		self.edges.iter().all(|edge| edge.a < n && edge.b < n)
	}

	/// Largest distance of any node from the origin.
	pub fn radius(&self) -> f64 {
		self.positions().map(Point3::length).fold(0.0, f64::max)
	}
}

/// Non-fatal note about a generation call, meant for the end user.
#[derive(Clone, Debug, PartialEq)]
pub enum Advisory {
	/// Hypercubes are only drawn for 1, 2 or 3 dimensions.
	HypercubeDimensions {
		/// The value that was asked for.
		requested: f64,
	},
	/// The kind is selectable but has no generation rule yet.
	NoGenerationRule(TopologyKind),
	/// The tag did not name any topology.
	UnknownTopology(String),
}

impl fmt::Display for Advisory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::HypercubeDimensions { requested } => write!(
				f,
				"hypercube dimensions should be between 1 and 3 for visualization (got {requested})"
			),
			Self::NoGenerationRule(kind) => write!(f, "no layout is available for {kind} yet"),
			Self::UnknownTopology(tag) => write!(f, "unknown topology {tag:?}"),
		}
	}
}

/// Result of one generation call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Generation {
	/// Possibly empty.
	pub graph: Graph,
	/// Set when the request could not be drawn as asked.
	pub advisory: Option<Advisory>,
}

impl Generation {
	/// An empty graph carrying an advisory.
	pub fn empty(advisory: Advisory) -> Self {
		Self {
			graph: Graph::default(),
			advisory: Some(advisory),
		}
	}
}

impl From<Graph> for Generation {
	fn from(graph: Graph) -> Self {
		Self {
			graph,
			advisory: None,
		}
	}
}
