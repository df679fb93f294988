use log::trace;

use super::types::{Edge, Graph, Node, NodeAddress, Point3};

/// Most entries reserved up front; larger graphs grow as they are built.
const MAX_RESERVE: usize = 1 << 16;

/// Accumulates nodes and edges for a single generation call.
///
/// Edge insertion is checked: endpoints outside the current node table and
/// self-loops are dropped instead of being stored.
#[derive(Debug, Default)]
pub(super) struct GraphBuilder {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
}

impl GraphBuilder {
	pub(super) fn with_capacity(nodes: usize, edges: usize) -> Self {
		Self {
			nodes: Vec::with_capacity(nodes.min(MAX_RESERVE)),
			edges: Vec::with_capacity(edges.min(MAX_RESERVE)),
		}
	}

	/// Append a node and return its index.
	pub(super) fn add_node(&mut self, address: NodeAddress, position: Point3) -> usize {
		self.nodes.push(Node { address, position });
		self.nodes.len() - 1
	}

	pub(super) fn position(&self, index: usize) -> Option<Point3> {
		self.nodes.get(index).map(|node| node.position)
	}

	/// Link `a` and `b`, returning whether the edge was stored.
	pub(super) fn add_edge(&mut self, a: usize, b: usize) -> bool {
		if a == b {
			trace!("skipping self-loop on node {a}");
			return false;
		}
		if a >= self.nodes.len() || b >= self.nodes.len() {
			trace!("skipping edge {a}-{b}: only {} nodes", self.nodes.len());
			return false;
		}
		self.edges.push(Edge::new(a, b));
		true
	}

	pub(super) fn finish(self) -> Graph {
		Graph {
			nodes: self.nodes,
			edges: self.edges,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn two_nodes() -> GraphBuilder {
		let mut builder = GraphBuilder::default();
		builder.add_node(NodeAddress::Linear(0), Point3::ORIGIN);
		builder.add_node(NodeAddress::Linear(1), Point3::new(1.0, 0.0, 0.0));
		builder
	}

	#[test]
	fn indices_follow_insertion_order() {
		let mut builder = GraphBuilder::default();
		assert_eq!(builder.add_node(NodeAddress::Linear(0), Point3::ORIGIN), 0);
		assert_eq!(builder.add_node(NodeAddress::Linear(1), Point3::ORIGIN), 1);
	}

	#[test]
	fn saturated_estimates_reserve_a_bounded_amount() {
		let builder = GraphBuilder::with_capacity(usize::MAX, usize::MAX);
		assert!(builder.nodes.capacity() < 2 * MAX_RESERVE);
		assert!(builder.edges.capacity() < 2 * MAX_RESERVE);
		assert!(builder.finish().is_empty());
	}

	#[test]
	fn self_loops_are_refused() {
		let mut builder = two_nodes();
		assert!(!builder.add_edge(1, 1));
		assert!(builder.finish().edges.is_empty());
	}

	#[test]
	fn out_of_range_edges_are_refused() {
		let mut builder = two_nodes();
		assert!(!builder.add_edge(0, 2));
		assert!(builder.add_edge(1, 0));
		assert_eq!(builder.finish().edges, vec![Edge::new(1, 0)]);
	}
}
