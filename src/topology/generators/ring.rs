use std::f64::consts::TAU;

use crate::topology::builder::GraphBuilder;
use crate::topology::config::RingConfig;
use crate::topology::types::{Graph, NodeAddress, Point3};

/// Circle radius in world units.
pub const RING_RADIUS: f64 = 3.0;

/// `n` nodes evenly spaced on a circle in the XZ plane, each linked to its
/// successor.
///
/// A single node would be its own successor; that self-loop is not stored.
pub fn ring(config: &RingConfig) -> Graph {
	let n = config.n;
	let mut builder = GraphBuilder::with_capacity(n, n);

	for i in 0..n {
		let theta = i as f64 / n as f64 * TAU;
		builder.add_node(
			NodeAddress::Linear(i),
			Point3::new(RING_RADIUS * theta.cos(), 0.0, RING_RADIUS * theta.sin()),
		);
	}
	for i in 0..n {
		builder.add_edge(i, (i + 1) % n);
	}

	builder.finish()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::topology::types::Edge;

	#[test]
	fn closes_the_loop() {
		let graph = ring(&RingConfig { n: 5 });
		assert_eq!(graph.edges.last(), Some(&Edge::new(4, 0)));
		assert!((0..5).all(|i| graph.degree(i) == 2));
	}

	#[test]
	fn nodes_sit_on_the_circle() {
		let graph = ring(&RingConfig { n: 7 });
		for p in graph.positions() {
			assert!((p.length() - RING_RADIUS).abs() < 1e-12);
			assert_eq!(p.y, 0.0);
		}
	}

	#[test]
	fn single_node_has_no_self_loop() {
		let graph = ring(&RingConfig { n: 1 });
		assert_eq!(graph.node_count(), 1);
		assert_eq!(graph.edge_count(), 0);
	}

	#[test]
	fn two_nodes_link_both_ways() {
		let graph = ring(&RingConfig { n: 2 });
		assert_eq!(graph.edges, vec![Edge::new(0, 1), Edge::new(1, 0)]);
	}

	#[test]
	fn empty_ring() {
		assert!(ring(&RingConfig { n: 0 }).is_empty());
	}
}
