use crate::topology::builder::GraphBuilder;
use crate::topology::config::MeshConfig;
use crate::topology::types::{Graph, NodeAddress, Point3};

/// Axis-aligned grid centred on the origin, nearest neighbours only.
pub fn mesh(config: &MeshConfig) -> Graph {
	let (nx, ny, nz) = (config.dim_x, config.dim_y, config.depth());
	let total = nx.saturating_mul(ny).saturating_mul(nz);
	let mut builder = GraphBuilder::with_capacity(total, total.saturating_mul(3));

	let offset = |n: usize| (n as f64 - 1.0) / 2.0;
	let (ox, oy, oz) = (offset(nx), offset(ny), offset(nz));
	for x in 0..nx {
		for y in 0..ny {
			for z in 0..nz {
				builder.add_node(
					NodeAddress::Grid { x, y, z },
					Point3::new(x as f64 - ox, y as f64 - oy, z as f64 - oz),
				);
			}
		}
	}

	let index = |x: usize, y: usize, z: usize| (x * ny + y) * nz + z;
	for x in 0..nx {
		for y in 0..ny {
			for z in 0..nz {
				let here = index(x, y, z);
				if x + 1 < nx {
					builder.add_edge(here, index(x + 1, y, z));
				}
				if y + 1 < ny {
					builder.add_edge(here, index(x, y + 1, z));
				}
				if z + 1 < nz {
					builder.add_edge(here, index(x, y, z + 1));
				}
			}
		}
	}

	builder.finish()
}
