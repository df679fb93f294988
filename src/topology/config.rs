//! Typed per-topology configuration built from a loose parameter map.
//!
//! The explorer form hands over a name -> number map. Each topology reads the
//! keys it understands, ignores the rest, and falls back to its defaults for
//! anything missing.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::error::ParseTopologyError;

/// Named numeric parameters as captured by the form.
pub type ParamMap = BTreeMap<String, f64>;

/// Extent along x (mesh) or segments around the ring axis (torus).
pub const DIM_X: &str = "dimX";
/// Extent along y (mesh) or segments around the tube (torus).
pub const DIM_Y: &str = "dimY";
/// Extent along z; 3D meshes only.
pub const DIM_Z: &str = "dimZ";
/// Ring size.
pub const RING_NODES: &str = "n";
/// Tree depth below the root.
pub const LEVELS: &str = "levels";
/// Children per tree node.
pub const BRANCHING: &str = "branching";
/// Hypercube dimensionality.
pub const DIMENSIONS: &str = "dimensions";
/// Butterfly arity.
pub const ARITY: &str = "k";

/// Interconnection-network topologies the explorer can select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TopologyKind {
	/// Rectangular grid, 2D or 3D.
	#[default]
	Mesh,
	/// Closed cycle.
	Ring,
	/// 2D grid wrapped on both axes.
	Torus,
	/// Complete rooted tree.
	Tree,
	/// Binary n-cube, drawable up to three dimensions.
	Hypercube,
	/// Multistage butterfly.
	Butterfly,
	/// Listed in the menu but has no layout yet.
	Dragonfly,
}

impl TopologyKind {
	/// Every kind, in menu order.
	pub const ALL: [Self; 7] = [
		Self::Mesh,
		Self::Ring,
		Self::Torus,
		Self::Tree,
		Self::Hypercube,
		Self::Butterfly,
		Self::Dragonfly,
	];

	/// Lowercase tag accepted by [`generate`](crate::topology::generate).
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Mesh => "mesh",
			Self::Ring => "ring",
			Self::Torus => "torus",
			Self::Tree => "tree",
			Self::Hypercube => "hypercube",
			Self::Butterfly => "butterfly",
			Self::Dragonfly => "dragonfly",
		}
	}

	/// Human-readable name for menus.
	pub const fn label(self) -> &'static str {
		match self {
			Self::Mesh => "Mesh",
			Self::Ring => "Ring",
			Self::Torus => "Torus",
			Self::Tree => "Tree",
			Self::Hypercube => "Hypercube",
			Self::Butterfly => "Butterfly",
			Self::Dragonfly => "Dragonfly",
		}
	}

	/// Only meshes distinguish between a 2D and a 3D layout.
	pub const fn uses_dimensionality(self) -> bool {
		matches!(self, Self::Mesh)
	}
}

impl fmt::Display for TopologyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TopologyKind {
	type Err = ParseTopologyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| ParseTopologyError::UnknownKind(s.to_owned()))
	}
}

/// Layout mode for topologies that have one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dimensionality {
	/// Single layer in the XY plane.
	#[default]
	TwoD,
	/// Layers stacked along z.
	ThreeD,
}

impl Dimensionality {
	/// `"2D"` or `"3D"`.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::TwoD => "2D",
			Self::ThreeD => "3D",
		}
	}
}

impl fmt::Display for Dimensionality {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Dimensionality {
	type Err = ParseTopologyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			m if m.eq_ignore_ascii_case("2d") => Ok(Self::TwoD),
			m if m.eq_ignore_ascii_case("3d") => Ok(Self::ThreeD),
			other => Err(ParseTopologyError::UnknownMode(other.to_owned())),
		}
	}
}

/// Convert a form value into an element count.
///
/// Fractional values round up, matching a `0..value` loop bound. Zero,
/// negative and non-finite values all collapse to zero.
pub fn count(value: f64) -> usize {
	if value.is_finite() && value > 0.0 {
		value.ceil() as usize
	} else {
		0
	}
}

fn count_or(params: &ParamMap, key: &str, default: usize) -> usize {
	params.get(key).copied().map_or(default, count)
}

/// Mesh extents and layout mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshConfig {
	/// Nodes along x.
	pub dim_x: usize,
	/// Nodes along y.
	pub dim_y: usize,
	/// Ignored unless `mode` is 3D.
	pub dim_z: usize,
	/// 2D meshes lay out a single z layer.
	pub mode: Dimensionality,
}

impl Default for MeshConfig {
	fn default() -> Self {
		Self {
			dim_x: 1,
			dim_y: 1,
			dim_z: 1,
			mode: Dimensionality::TwoD,
		}
	}
}

impl MeshConfig {
	/// Missing keys keep their defaults.
	pub fn from_params(mode: Dimensionality, params: &ParamMap) -> Self {
		let defaults = Self::default();
		Self {
			dim_x: count_or(params, DIM_X, defaults.dim_x),
			dim_y: count_or(params, DIM_Y, defaults.dim_y),
			dim_z: count_or(params, DIM_Z, defaults.dim_z),
			mode,
		}
	}

	/// Layers along z that are actually laid out.
	pub const fn depth(&self) -> usize {
		match self.mode {
			Dimensionality::TwoD => 1,
			Dimensionality::ThreeD => self.dim_z,
		}
	}
}

/// Ring size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingConfig {
	/// Node count.
	pub n: usize,
}

impl Default for RingConfig {
	fn default() -> Self {
		Self { n: 4 }
	}
}

impl RingConfig {
	/// Missing keys keep their defaults.
	pub fn from_params(params: &ParamMap) -> Self {
		Self {
			n: count_or(params, RING_NODES, Self::default().n),
		}
	}
}

/// `dim_x` segments around the ring axis, `dim_y` around the tube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TorusConfig {
	/// Segments around the ring axis.
	pub dim_x: usize,
	/// Segments around the tube.
	pub dim_y: usize,
}

impl Default for TorusConfig {
	fn default() -> Self {
		Self { dim_x: 8, dim_y: 4 }
	}
}

impl TorusConfig {
	/// Missing keys keep their defaults.
	pub fn from_params(params: &ParamMap) -> Self {
		let defaults = Self::default();
		Self {
			dim_x: count_or(params, DIM_X, defaults.dim_x),
			dim_y: count_or(params, DIM_Y, defaults.dim_y),
		}
	}
}

/// Complete tree shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeConfig {
	/// Levels below the root.
	pub levels: usize,
	/// Children per internal node.
	pub branching: usize,
}

impl Default for TreeConfig {
	fn default() -> Self {
		Self {
			levels: 1,
			branching: 2,
		}
	}
}

impl TreeConfig {
	/// Missing keys keep their defaults.
	pub fn from_params(params: &ParamMap) -> Self {
		let defaults = Self::default();
		Self {
			levels: count_or(params, LEVELS, defaults.levels),
			branching: count_or(params, BRANCHING, defaults.branching),
		}
	}
}

/// Hypercube dimensionality, kept as entered.
///
/// Only exactly 1, 2 or 3 can be drawn; everything else is reported back
/// to the user instead of being rounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HypercubeConfig {
	/// Requested dimensions, unrounded.
	pub dimensions: f64,
}

impl Default for HypercubeConfig {
	fn default() -> Self {
		Self { dimensions: 3.0 }
	}
}

impl HypercubeConfig {
	/// Missing keys keep their defaults.
	pub fn from_params(params: &ParamMap) -> Self {
		Self {
			dimensions: params
				.get(DIMENSIONS)
				.copied()
				.unwrap_or(Self::default().dimensions),
		}
	}

	/// The drawable dimension count, if any.
	pub fn supported(&self) -> Option<u8> {
		[1u8, 2, 3]
			.into_iter()
			.find(|&d| f64::from(d) == self.dimensions)
	}
}

/// Butterfly arity: nodes per stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButterflyConfig {
	/// Nodes per stage.
	pub k: usize,
}

impl Default for ButterflyConfig {
	fn default() -> Self {
		Self { k: 2 }
	}
}

impl ButterflyConfig {
	/// Missing keys keep their defaults.
	pub fn from_params(params: &ParamMap) -> Self {
		Self {
			k: count_or(params, ARITY, Self::default().k),
		}
	}

	/// Bits needed to address a position within a stage, `ceil(log2 k)`.
	pub const fn address_bits(&self) -> u32 {
		if self.k <= 1 {
			0
		} else {
			usize::BITS - (self.k - 1).leading_zeros()
		}
	}

	/// Stage columns: one per address bit plus the input stage.
	pub const fn stages(&self) -> usize {
		if self.k == 0 {
			0
		} else {
			self.address_bits() as usize + 1
		}
	}
}

/// A fully typed generation request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TopologyConfig {
	/// See [`MeshConfig`].
	Mesh(MeshConfig),
	/// See [`RingConfig`].
	Ring(RingConfig),
	/// See [`TorusConfig`].
	Torus(TorusConfig),
	/// See [`TreeConfig`].
	Tree(TreeConfig),
	/// See [`HypercubeConfig`].
	Hypercube(HypercubeConfig),
	/// See [`ButterflyConfig`].
	Butterfly(ButterflyConfig),
	/// Carries no parameters.
	Dragonfly,
}

impl TopologyConfig {
	/// Read the parameters `kind` understands out of `params`.
	pub fn from_params(kind: TopologyKind, mode: Dimensionality, params: &ParamMap) -> Self {
		match kind {
			TopologyKind::Mesh => Self::Mesh(MeshConfig::from_params(mode, params)),
			TopologyKind::Ring => Self::Ring(RingConfig::from_params(params)),
			TopologyKind::Torus => Self::Torus(TorusConfig::from_params(params)),
			TopologyKind::Tree => Self::Tree(TreeConfig::from_params(params)),
			TopologyKind::Hypercube => Self::Hypercube(HypercubeConfig::from_params(params)),
			TopologyKind::Butterfly => Self::Butterfly(ButterflyConfig::from_params(params)),
			TopologyKind::Dragonfly => Self::Dragonfly,
		}
	}

	/// The kind this configuration generates.
	pub const fn kind(&self) -> TopologyKind {
		match self {
			Self::Mesh(_) => TopologyKind::Mesh,
			Self::Ring(_) => TopologyKind::Ring,
			Self::Torus(_) => TopologyKind::Torus,
			Self::Tree(_) => TopologyKind::Tree,
			Self::Hypercube(_) => TopologyKind::Hypercube,
			Self::Butterfly(_) => TopologyKind::Butterfly,
			Self::Dragonfly => TopologyKind::Dragonfly,
		}
	}
}

/// Upper bounds applied by the form before values reach the generator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamLimits {
	/// Per mesh or torus axis.
	pub max_extent: f64,
	/// Ring size.
	pub max_ring_nodes: f64,
	/// Tree depth.
	pub max_levels: f64,
	/// Tree fan-out.
	pub max_branching: f64,
	/// Butterfly `k`.
	pub max_arity: f64,
}

impl Default for ParamLimits {
	fn default() -> Self {
		Self {
			max_extent: 32.0,
			max_ring_nodes: 512.0,
			max_levels: 6.0,
			max_branching: 6.0,
			max_arity: 64.0,
		}
	}
}

impl ParamLimits {
	/// Cap `value` for `key`; unknown keys and non-finite values pass through.
	pub fn clamp(&self, key: &str, value: f64) -> f64 {
		let max = match key {
			DIM_X | DIM_Y | DIM_Z => self.max_extent,
			RING_NODES => self.max_ring_nodes,
			LEVELS => self.max_levels,
			BRANCHING => self.max_branching,
			ARITY => self.max_arity,
			_ => return value,
		};
		if value.is_finite() { value.min(max) } else { value }
	}
}

/// The values the explorer form starts with.
pub fn form_defaults() -> ParamMap {
	[
		(DIM_X, 1.0),
		(DIM_Y, 1.0),
		(DIM_Z, 1.0),
		(RING_NODES, 4.0),
		(ARITY, 2.0),
		(LEVELS, 1.0),
		(BRANCHING, 2.0),
		(DIMENSIONS, 1.0),
	]
	.into_iter()
	.map(|(key, value)| (key.to_owned(), value))
	.collect()
}
