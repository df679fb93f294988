//! Graph generation for interconnection-network topologies.
//!
//! Everything here is a pure function of its inputs: the same kind, mode and
//! parameters always produce the same nodes and edges, bit for bit. Bad input
//! never fails; it degrades to an empty or minimal graph, with an
//! [`Advisory`] when the user should be told why.

mod builder;
pub mod config;
mod error;
/// Per-topology builders.
pub mod generators;
mod types;

use log::{debug, warn};

pub use config::{
	ButterflyConfig, Dimensionality, HypercubeConfig, MeshConfig, ParamLimits, ParamMap,
	RingConfig, TopologyConfig, TopologyKind, TorusConfig, TreeConfig,
};
pub use error::ParseTopologyError;
pub use types::{Advisory, Edge, Generation, Graph, Node, NodeAddress, Point3};

/// Generate the graph named by `kind` from loosely typed form input.
///
/// Unknown kinds give an empty graph, and an unreadable `mode` falls back
/// to 2D.
pub fn generate(kind: &str, mode: &str, params: &ParamMap) -> Generation {
	let kind = match kind.parse::<TopologyKind>() {
		Ok(kind) => kind,
		Err(err) => {
			debug!("{err}");
			return report(Generation::empty(Advisory::UnknownTopology(kind.to_owned())));
		}
	};
	let mode = mode.parse::<Dimensionality>().unwrap_or_else(|err| {
		debug!("{err}, using {}", Dimensionality::default());
		Dimensionality::default()
	});
	TopologyConfig::from_params(kind, mode, params).generate()
}

impl TopologyConfig {
	/// Build this topology's graph.
	pub fn generate(&self) -> Generation {
		let generation: Generation = match self {
			Self::Mesh(config) => generators::mesh(config).into(),
			Self::Ring(config) => generators::ring(config).into(),
			Self::Torus(config) => generators::torus(config).into(),
			Self::Tree(config) => generators::tree(config).into(),
			Self::Hypercube(config) => match config.supported() {
				Some(dimensions) => generators::hypercube(dimensions).into(),
				None => Generation::empty(Advisory::HypercubeDimensions {
					requested: config.dimensions,
				}),
			},
			Self::Butterfly(config) => generators::butterfly(config).into(),
			Self::Dragonfly => Generation::empty(Advisory::NoGenerationRule(self.kind())),
		};
		debug!(
			"generated {}: {} nodes, {} edges",
			self.kind(),
			generation.graph.node_count(),
			generation.graph.edge_count()
		);
		report(generation)
	}
}

fn report(generation: Generation) -> Generation {
	if let Some(advisory) = &generation.advisory {
		warn!("{advisory}");
	}
	generation
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unparseable_mode_means_two_dimensions() {
		let params: ParamMap = [("dimZ".to_owned(), 4.0)].into_iter().collect();
		assert_eq!(generate("mesh", "4D", &params), generate("mesh", "2D", &params));
	}

	#[test]
	fn dragonfly_is_selectable_but_empty() {
		let generation = generate("dragonfly", "2D", &ParamMap::new());
		assert!(generation.graph.is_empty());
		assert_eq!(
			generation.advisory,
			Some(Advisory::NoGenerationRule(TopologyKind::Dragonfly))
		);
	}

	#[test]
	fn unsupported_hypercube_reports_the_request() {
		let generation = TopologyConfig::Hypercube(HypercubeConfig { dimensions: 7.0 }).generate();
		assert!(generation.graph.is_empty());
		assert_eq!(
			generation.advisory,
			Some(Advisory::HypercubeDimensions { requested: 7.0 })
		);
	}

	#[test]
	fn supported_kinds_carry_no_advisory() {
		for kind in TopologyKind::ALL {
			if kind == TopologyKind::Dragonfly {
				continue;
			}
			let generation =
				TopologyConfig::from_params(kind, Dimensionality::ThreeD, &ParamMap::new()).generate();
			assert_eq!(generation.advisory, None, "{kind}");
			assert!(!generation.graph.is_empty(), "{kind}");
		}
	}
}
