use crate::topology::builder::GraphBuilder;
use crate::topology::config::ButterflyConfig;
use crate::topology::types::{Graph, NodeAddress, Point3};

/// Horizontal spacing between consecutive stages.
const STAGE_SPACING: f64 = 2.0;

/// Staged butterfly network with `ceil(log2 k) + 1` stages of `k` nodes.
///
/// Stages run along x and positions along y. From each stage but the last,
/// the shuffle family links position `i` to flat index
/// `(stage + 1) * k + (i ^ (1 << (stage mod log2 k)))`, and the straight
/// family links `i` to `i` in the next stage. All shuffle edges are added
/// before the straight ones.
///
/// When `k` is not a power of two the flipped position can reach `k` or
/// beyond, so the shuffle edge lands in a later stage. Only targets past the
/// last node are dropped.
pub fn butterfly(config: &ButterflyConfig) -> Graph {
	let (k, stages, bits) = (config.k, config.stages(), config.address_bits());
	let per_family = stages.saturating_sub(1).saturating_mul(k);
	let mut builder =
		GraphBuilder::with_capacity(stages.saturating_mul(k), per_family.saturating_mul(2));

	let centre = k as f64 / 2.0;
	for stage in 0..stages {
		for position in 0..k {
			builder.add_node(
				NodeAddress::Stage { stage, position },
				Point3::new(stage as f64 * STAGE_SPACING, position as f64 - centre, 0.0),
			);
		}
	}

	let index = |stage: usize, position: usize| stage * k + position;
	let links = 0..stages.saturating_sub(1);

	if bits > 0 {
		for stage in links.clone() {
			let mask = 1usize << (stage as u32 % bits);
			for i in 0..k {
				builder.add_edge(index(stage, i), index(stage + 1, 0) + (i ^ mask));
			}
		}
	}

	for stage in links {
		for i in 0..k {
			builder.add_edge(index(stage, i), index(stage + 1, i));
		}
	}

	builder.finish()
}
