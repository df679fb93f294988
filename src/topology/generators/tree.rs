use std::f64::consts::TAU;

use crate::topology::builder::GraphBuilder;
use crate::topology::config::TreeConfig;
use crate::topology::types::{Graph, NodeAddress, Point3};

/// Rooted tree hanging below the origin.
///
/// Each level drops by one unit. A child of a node at level `l` sits at
/// radius `2 / l` from its parent, on an angle that evenly divides the
/// circle and is offset by the parent's own angle. Nodes are enumerated
/// depth-first, parents before children.
pub fn tree(config: &TreeConfig) -> Graph {
	let nodes = node_count(config);
	let mut builder = GraphBuilder::with_capacity(nodes, nodes.saturating_sub(1));
	let root = builder.add_node(NodeAddress::Tree { depth: 0 }, Point3::ORIGIN);
	grow(&mut builder, config, root);
	builder.finish()
}

/// `1 + b + b^2 + ... + b^levels`, saturating.
pub fn node_count(config: &TreeConfig) -> usize {
	let mut total = 1usize;
	let mut width = 1usize;
	for _ in 0..config.levels {
		width = width.saturating_mul(config.branching);
		total = total.saturating_add(width);
	}
	total
}

/// A node whose children are still being added.
struct Frame {
	node: usize,
	level: usize,
	angle: f64,
	next_child: usize,
}

// Explicit stack: `levels` is not bounded here, only by the form.
fn grow(builder: &mut GraphBuilder, config: &TreeConfig, root: usize) {
	if config.levels == 0 {
		return;
	}
	let mut stack = vec![Frame {
		node: root,
		level: 1,
		angle: 0.0,
		next_child: 0,
	}];

	while let Some(frame) = stack.last_mut() {
		if frame.next_child == config.branching {
			stack.pop();
			continue;
		}
		let i = frame.next_child;
		frame.next_child += 1;
		let (parent, level) = (frame.node, frame.level);
		let theta = i as f64 / config.branching as f64 * TAU + frame.angle;

		let Some(origin) = builder.position(parent) else {
			stack.pop();
			continue;
		};
		let radius = 2.0 / level as f64;
		let child = builder.add_node(
			NodeAddress::Tree { depth: level },
			Point3::new(
				origin.x + radius * theta.cos(),
				origin.y - 1.0,
				origin.z + radius * theta.sin(),
			),
		);
		builder.add_edge(parent, child);

		if level < config.levels {
			stack.push(Frame {
				node: child,
				level: level + 1,
				angle: theta,
				next_child: 0,
			});
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::topology::types::Edge;

	#[rstest]
	#[case(0, 2, 1)]
	#[case(1, 2, 3)]
	#[case(2, 2, 7)]
	#[case(3, 3, 40)]
	#[case(4, 0, 1)]
	#[case(5, 1, 6)]
	fn geometric_node_count(#[case] levels: usize, #[case] branching: usize, #[case] nodes: usize) {
		let config = TreeConfig { levels, branching };
		let graph = tree(&config);
		assert_eq!(graph.node_count(), nodes);
		assert_eq!(node_count(&config), nodes);
		assert_eq!(graph.edge_count(), nodes - 1);
	}

	#[test]
	fn enumeration_is_depth_first() {
		let graph = tree(&TreeConfig {
			levels: 2,
			branching: 2,
		});
		assert_eq!(
			graph.edges,
			vec![
				Edge::new(0, 1),
				Edge::new(1, 2),
				Edge::new(1, 3),
				Edge::new(0, 4),
				Edge::new(4, 5),
				Edge::new(4, 6),
			]
		);
		let depths: Vec<_> = graph
			.nodes
			.iter()
			.map(|node| match node.address {
				NodeAddress::Tree { depth } => depth,
				other => panic!("unexpected address {other:?}"),
			})
			.collect();
		assert_eq!(depths, vec![0, 1, 2, 2, 1, 2, 2]);
	}

	#[test]
	fn children_hang_one_unit_below_their_parent() {
		let graph = tree(&TreeConfig {
			levels: 3,
			branching: 2,
		});
		for edge in &graph.edges {
			let (parent, child) = (graph.nodes[edge.a].position, graph.nodes[edge.b].position);
			assert_eq!(child.y, parent.y - 1.0);
		}
	}

	#[test]
	fn first_level_uses_radius_two() {
		let graph = tree(&TreeConfig {
			levels: 1,
			branching: 4,
		});
		let first = graph.nodes[1].position;
		assert_eq!(first, Point3::new(2.0, -1.0, 0.0));
		for p in graph.positions().skip(1) {
			assert!(((p.x * p.x + p.z * p.z).sqrt() - 2.0).abs() < 1e-12);
		}
	}

	#[test]
	fn deep_chains_do_not_exhaust_the_stack() {
		let graph = tree(&TreeConfig {
			levels: 200_000,
			branching: 1,
		});
		assert_eq!(graph.node_count(), 200_001);
		assert_eq!(graph.edge_count(), 200_000);
		assert_eq!(graph.nodes[200_000].position.y, -200_000.0);
	}

	#[test]
	fn every_node_but_the_root_has_one_parent() {
		let graph = tree(&TreeConfig {
			levels: 3,
			branching: 3,
		});
		let mut parents = vec![0usize; graph.node_count()];
		for edge in &graph.edges {
			assert!(edge.a < edge.b);
			parents[edge.b] += 1;
		}
		assert_eq!(parents[0], 0);
		assert!(parents[1..].iter().all(|&p| p == 1));
	}
}
