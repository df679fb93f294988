use std::f64::consts::TAU;

use crate::topology::builder::GraphBuilder;
use crate::topology::config::TorusConfig;
use crate::topology::types::{Graph, NodeAddress, Point3};

/// Distance from the torus centre to the tube centre.
pub const MAJOR_RADIUS: f64 = 3.0;
/// Tube radius.
pub const MINOR_RADIUS: f64 = 1.0;

/// Points on a torus surface with full wraparound along both axes.
///
/// Every node adds one edge around the tube and one around the ring. A
/// dimension of 1 would make those edges self-loops, which are skipped.
pub fn torus(config: &TorusConfig) -> Graph {
	let (rings, tubes) = (config.dim_x, config.dim_y);
	let total = rings.saturating_mul(tubes);
	let mut builder = GraphBuilder::with_capacity(total, total.saturating_mul(2));

	for i in 0..rings {
		let u = i as f64 / rings as f64 * TAU;
		for j in 0..tubes {
			let v = j as f64 / tubes as f64 * TAU;
			let reach = MAJOR_RADIUS + MINOR_RADIUS * v.cos();
			builder.add_node(
				NodeAddress::Torus { ring: i, tube: j },
				Point3::new(reach * u.cos(), MINOR_RADIUS * v.sin(), reach * u.sin()),
			);
		}
	}

	let index = |i: usize, j: usize| i * tubes + j;
	for i in 0..rings {
		for j in 0..tubes {
			let here = index(i, j);
			builder.add_edge(here, index(i, (j + 1) % tubes));
			builder.add_edge(here, index((i + 1) % rings, j));
		}
	}

	builder.finish()
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::topology::types::Edge;

	#[rstest]
	#[case(8, 4)]
	#[case(3, 3)]
	#[case(2, 5)]
	fn two_additions_per_node(#[case] dim_x: usize, #[case] dim_y: usize) {
		let graph = torus(&TorusConfig { dim_x, dim_y });
		assert_eq!(graph.node_count(), dim_x * dim_y);
		assert_eq!(graph.edge_count(), 2 * dim_x * dim_y);
	}

	#[test]
	fn every_node_has_degree_four() {
		let graph = torus(&TorusConfig { dim_x: 6, dim_y: 3 });
		assert!((0..graph.node_count()).all(|i| graph.degree(i) == 4));
	}

	#[test]
	fn edge_order_is_tube_then_ring() {
		let graph = torus(&TorusConfig { dim_x: 3, dim_y: 3 });
		assert_eq!(graph.edges[..2], [Edge::new(0, 1), Edge::new(0, 3)]);
		// last node wraps on both axes
		assert_eq!(graph.edges[16..], [Edge::new(8, 6), Edge::new(8, 2)]);
	}

	#[test]
	fn single_tube_segment_skips_self_loops() {
		let graph = torus(&TorusConfig { dim_x: 4, dim_y: 1 });
		assert_eq!(graph.node_count(), 4);
		assert_eq!(graph.edge_count(), 4);
		assert!(!graph.has_self_loops());
	}

	#[test]
	fn nodes_lie_on_the_surface() {
		let graph = torus(&TorusConfig::default());
		for p in graph.positions() {
			let ring_distance = (p.x * p.x + p.z * p.z).sqrt() - MAJOR_RADIUS;
			let tube = (ring_distance * ring_distance + p.y * p.y).sqrt();
			assert!((tube - MINOR_RADIUS).abs() < 1e-12);
		}
	}

	#[test]
	fn zero_dimension_is_empty() {
		let graph = torus(&TorusConfig { dim_x: 0, dim_y: 4 });
		assert!(graph.is_empty());
		assert_eq!(graph.edge_count(), 0);
	}
}
