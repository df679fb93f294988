//! Mapping and routing selections captured alongside a topology.
//!
//! Nothing here computes a mapping or a route yet. The explorer assembles a
//! [`ProcessRequest`] from the form and logs it, so the shape of the request
//! is fixed before any algorithm exists.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::topology::{Dimensionality, ParamMap, TopologyKind};

/// A menu label that names no known option.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown {what} {label:?}")]
pub struct UnknownSelection {
	/// Which menu was being read.
	pub what: &'static str,
	/// The label that matched nothing.
	pub label: String,
}

/// Task-to-node mapping heuristics offered by the explorer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum MappingTechnique {
	#[default]
	AntColony,
	BranchAndBound,
	Genetic,
	Greedy,
	NearestNeighbors,
	ParticleSwarm,
	QLearning,
	SimulatedAnnealing,
	TabuSearch,
	/// Fixed placement; takes no inputs.
	Static,
}

impl MappingTechnique {
	/// Every technique, in menu order.
	pub const ALL: [Self; 10] = [
		Self::AntColony,
		Self::BranchAndBound,
		Self::Genetic,
		Self::Greedy,
		Self::NearestNeighbors,
		Self::ParticleSwarm,
		Self::QLearning,
		Self::SimulatedAnnealing,
		Self::TabuSearch,
		Self::Static,
	];

	/// Short tag shown in the menu.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::AntColony => "ACO",
			Self::BranchAndBound => "BnB",
			Self::Genetic => "GA",
			Self::Greedy => "Greedy",
			Self::NearestNeighbors => "KNN",
			Self::ParticleSwarm => "PSO",
			Self::QLearning => "Q-learning",
			Self::SimulatedAnnealing => "SA",
			Self::TabuSearch => "TS",
			Self::Static => "Static",
		}
	}

	/// Whether mapped tasks are penalised for overloading a node.
	pub const fn uses_overload_penalty(self) -> bool {
		!matches!(self, Self::Static)
	}

	/// Technique-specific inputs as `(key, label, step)`.
	pub const fn parameters(self) -> &'static [(&'static str, &'static str, &'static str)] {
		match self {
			Self::AntColony => &[
				("ants", "Ants", "1"),
				("iterations", "Iterations", "1"),
				("alpha", "Alpha", "1"),
				("beta", "Beta", "1"),
				("evaporation", "Evaporation Rate", "0.01"),
			],
			Self::Genetic => &[
				("population", "Population", "1"),
				("generations", "Generations", "1"),
				("crossover", "Crossover Rate", "0.01"),
				("mutation", "Mutation Rate", "0.01"),
			],
			Self::NearestNeighbors => &[("k", "Neighbours (k)", "1")],
			Self::ParticleSwarm => &[
				("swarm", "Swarm Size", "1"),
				("w", "Inertia (w)", "0.01"),
				("c1", "Cognitive (c1)", "0.01"),
				("c2", "Social (c2)", "0.01"),
			],
			Self::QLearning => &[
				("alphaQ", "Learning Rate", "0.01"),
				("gamma", "Discount (gamma)", "0.01"),
				("epsilon", "Exploration (epsilon)", "0.01"),
			],
			Self::SimulatedAnnealing => &[
				("temp", "Initial Temperature", "1"),
				("cooling", "Cooling Rate", "0.01"),
			],
			Self::TabuSearch => &[
				("tabuIt", "Iterations", "1"),
				("tenure", "Tabu Tenure", "1"),
				("neighborhood", "Neighbourhood Size", "1"),
			],
			Self::BranchAndBound | Self::Greedy | Self::Static => &[],
		}
	}
}

impl fmt::Display for MappingTechnique {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for MappingTechnique {
	type Err = UnknownSelection;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|t| t.as_str() == s)
			.ok_or_else(|| UnknownSelection {
				what: "mapping technique",
				label: s.to_owned(),
			})
	}
}

/// Penalty weight shared by every technique except `Static`.
pub const OVERLOAD_PENALTY: &str = "overloadPenalty";

/// Starting values for every mapping input.
pub fn mapping_defaults() -> ParamMap {
	[
		("ants", 10.0),
		("iterations", 100.0),
		("alpha", 1.0),
		("beta", 2.0),
		("evaporation", 0.5),
		("population", 50.0),
		("generations", 100.0),
		("crossover", 0.7),
		("mutation", 0.01),
		("k", 5.0),
		("swarm", 20.0),
		("w", 0.5),
		("c1", 1.0),
		("c2", 1.0),
		("alphaQ", 0.1),
		("gamma", 0.9),
		("epsilon", 0.1),
		("temp", 100.0),
		("cooling", 0.95),
		("tabuIt", 100.0),
		("tenure", 5.0),
		("neighborhood", 10.0),
		(OVERLOAD_PENALTY, 0.1),
	]
	.into_iter()
	.map(|(key, value)| (key.to_owned(), value))
	.collect()
}

/// Routing algorithms offered by the explorer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum RoutingAlgorithm {
	DestinationTag,
	#[default]
	DimensionOrder,
	VariableDimensionOrder,
	XorTag,
	Valiant,
	MinimalOblivious,
	LoadBalancedOblivious,
}

impl RoutingAlgorithm {
	/// Every algorithm, in menu order.
	pub const ALL: [Self; 7] = [
		Self::DestinationTag,
		Self::DimensionOrder,
		Self::VariableDimensionOrder,
		Self::XorTag,
		Self::Valiant,
		Self::MinimalOblivious,
		Self::LoadBalancedOblivious,
	];

	/// Menu label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::DestinationTag => "Destination Tag Routing",
			Self::DimensionOrder => "Dimension Order Routing",
			Self::VariableDimensionOrder => "Variable Dimension Order Routing",
			Self::XorTag => "XOR-Tag Routing",
			Self::Valiant => "Valiant Routing",
			Self::MinimalOblivious => "Minimal Oblivious Routing",
			Self::LoadBalancedOblivious => "Load-Balanced Oblivious Routing",
		}
	}
}

impl fmt::Display for RoutingAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for RoutingAlgorithm {
	type Err = UnknownSelection;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|r| r.as_str() == s)
			.ok_or_else(|| UnknownSelection {
				what: "routing algorithm",
				label: s.to_owned(),
			})
	}
}

/// The topology half of the form.
#[derive(Clone, Debug, PartialEq)]
pub struct TopologyRequest {
	/// Selected topology.
	pub kind: TopologyKind,
	/// Mesh layout mode; ignored by other kinds.
	pub mode: Dimensionality,
	/// Raw form values, every key included.
	pub params: ParamMap,
}

/// A mapping technique and the inputs it reads.
#[derive(Clone, Debug, PartialEq)]
pub struct MappingRequest {
	/// Selected technique.
	pub technique: MappingTechnique,
	/// Only the keys `technique` uses.
	pub params: ParamMap,
}

/// Everything the explorer form has captured.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct ProcessRequest {
	pub topology: TopologyRequest,
	pub mapping: MappingRequest,
	pub routing: RoutingAlgorithm,
	/// Rounded up like any other count.
	pub virtual_channels: usize,
}

impl MappingRequest {
	/// Keep only the inputs the chosen technique reads.
	pub fn new(technique: MappingTechnique, all: &ParamMap) -> Self {
		let penalty = technique
			.uses_overload_penalty()
			.then_some(OVERLOAD_PENALTY);
		let params = technique
			.parameters()
			.iter()
			.map(|&(key, _, _)| key)
			.chain(penalty)
			.filter_map(|key| all.get(key).map(|&v| (key.to_owned(), v)))
			.collect();
		Self { technique, params }
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[test]
	fn every_mapping_input_has_a_default() {
		let defaults = mapping_defaults();
		for technique in MappingTechnique::ALL {
			for (key, _, _) in technique.parameters() {
				assert!(defaults.contains_key(*key), "{technique} lacks {key}");
			}
		}
	}

	#[rstest]
	#[case(MappingTechnique::AntColony, 6)]
	#[case(MappingTechnique::Greedy, 1)]
	#[case(MappingTechnique::Static, 0)]
	#[case(MappingTechnique::NearestNeighbors, 2)]
	fn mapping_request_keeps_relevant_inputs(#[case] technique: MappingTechnique, #[case] n: usize) {
		let request = MappingRequest::new(technique, &mapping_defaults());
		assert_eq!(request.params.len(), n);
		assert_eq!(
			request.params.contains_key(OVERLOAD_PENALTY),
			technique.uses_overload_penalty()
		);
	}

	#[test]
	fn labels_round_trip() {
		for technique in MappingTechnique::ALL {
			assert_eq!(technique.as_str().parse(), Ok(technique));
		}
		for routing in RoutingAlgorithm::ALL {
			assert_eq!(routing.as_str().parse(), Ok(routing));
		}
		assert!("Dijkstra".parse::<RoutingAlgorithm>().is_err());
	}
}
