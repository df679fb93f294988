//! One builder per topology, each a pure function of its typed config.

mod butterfly;
mod hypercube;
mod mesh;
mod ring;
mod torus;
mod tree;

pub use butterfly::butterfly;
pub use hypercube::hypercube;
pub use mesh::mesh;
pub use ring::{RING_RADIUS, ring};
pub use torus::{MAJOR_RADIUS, MINOR_RADIUS, torus};
pub use tree::{node_count as tree_node_count, tree};
