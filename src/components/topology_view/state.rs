use std::cmp::Ordering;
use std::collections::HashSet;

use super::camera::{OrbitCamera, Projected};
use crate::topology::Graph;

/// Pick radius around a node, in canvas pixels.
pub const HIT_RADIUS: f64 = 10.0;
pub const MIN_NODE_RADIUS: f64 = 2.0;

/// On-screen radius of a node of `size` world units seen at `p`.
pub fn node_radius(size: f64, p: &Projected) -> f64 {
	(size * p.scale).max(MIN_NODE_RADIUS)
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	/// Shift-drag moves the view instead of orbiting it.
	pub panning: bool,
	pub last_x: f64,
	pub last_y: f64,
}

/// Hovered node and the fading highlight of the previous one.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
	pub highlight_t: f64,
	pub prev_node: Option<usize>,
	pub prev_neighbors: HashSet<usize>,
	delay_t: f64,
}

/// Everything the canvas needs between frames.
pub struct SceneState {
	pub graph: Graph,
	pub camera: OrbitCamera,
	pub drag: DragState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	projected: Vec<Option<Projected>>,
}

impl SceneState {
	pub fn new(graph: Graph, width: f64, height: f64) -> Self {
		let mut camera = OrbitCamera::default();
		camera.frame(graph.radius());
		let mut state = Self {
			graph,
			camera,
			drag: DragState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			projected: Vec::new(),
		};
		state.reproject();
		state
	}

	/// Swap in a freshly generated graph, keeping the viewing angle.
	pub fn set_graph(&mut self, graph: Graph) {
		self.camera.frame(graph.radius());
		self.graph = graph;
		self.hover = HoverState::default();
		self.reproject();
	}

	pub fn reproject(&mut self) {
		let (camera, width, height) = (&self.camera, self.width, self.height);
		self.projected = self
			.graph
			.positions()
			.map(|p| camera.project(p, width, height))
			.collect();
	}

	pub fn projected(&self, node: usize) -> Option<Projected> {
		self.projected.get(node).copied().flatten()
	}

	/// Visible nodes, farthest first.
	pub fn draw_order(&self) -> Vec<(usize, Projected)> {
		let mut visible: Vec<_> = self
			.projected
			.iter()
			.enumerate()
			.filter_map(|(i, p)| p.map(|p| (i, p)))
			.collect();
		visible.sort_by(|(_, a), (_, b)| b.depth.partial_cmp(&a.depth).unwrap_or(Ordering::Equal));
		visible
	}

	/// The nearest node drawn under the canvas point `(sx, sy)`.
	pub fn node_at_position(&self, sx: f64, sy: f64, size: f64) -> Option<usize> {
		self.draw_order()
			.into_iter()
			.rev()
			.find(|(_, p)| {
				let (dx, dy) = (p.x - sx, p.y - sy);
				(dx * dx + dy * dy).sqrt() < HIT_RADIUS.max(node_radius(size, p))
			})
			.map(|(i, _)| i)
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// keep the old highlight around while it fades out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			self.hover.neighbors.extend(self.graph.neighbors(idx));
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f64) {
		if self.animation_running && !self.drag.active {
			self.camera.advance(dt);
		}

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}

		self.reproject();
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.reproject();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::topology::{Graph, RingConfig, generators};

	fn square() -> SceneState {
		let graph = generators::ring(&RingConfig { n: 4 });
		let mut state = SceneState::new(graph, 800.0, 600.0);
		state.camera.pitch = 0.0;
		state.reproject();
		state
	}

	#[test]
	fn hovering_collects_neighbours() {
		let mut state = square();
		state.set_hover(Some(0));
		assert_eq!(state.hover.neighbors, HashSet::from([1, 3]));
		assert!(state.is_highlighted(3));
		assert!(!state.is_highlighted(2));
	}

	#[test]
	fn leaving_a_node_fades_instead_of_clearing() {
		let mut state = square();
		state.set_hover(Some(1));
		state.set_hover(None);
		assert!(state.is_hovered(1));
		assert!(state.has_active_highlight());
		state.tick(0.5);
		assert!(!state.has_active_highlight());
	}

	#[test]
	fn picking_prefers_the_nearest_node() {
		let state = square();
		// node 1 faces the camera at z = 3, node 3 hides behind it
		let front = state.projected(1).unwrap();
		assert_eq!(state.node_at_position(front.x, front.y, 0.1), Some(1));
		assert_eq!(state.node_at_position(-100.0, -100.0, 0.1), None);
	}

	#[test]
	fn draw_order_is_back_to_front() {
		let state = square();
		let order: Vec<_> = state.draw_order().into_iter().map(|(i, _)| i).collect();
		assert_eq!(order.first(), Some(&3));
		assert_eq!(order.last(), Some(&1));
	}

	#[test]
	fn new_graphs_keep_the_viewing_angle() {
		let mut state = square();
		state.camera.yaw = 1.25;
		state.set_hover(Some(2));
		state.set_graph(Graph::default());
		assert_eq!(state.camera.yaw, 1.25);
		assert_eq!(state.hover.node, None);
		assert!(state.draw_order().is_empty());
	}

	#[test]
	fn rotation_pauses_while_dragging() {
		let mut state = square();
		state.drag.active = true;
		state.tick(1.0);
		assert_eq!(state.camera.yaw, 0.0);
		state.drag.active = false;
		state.tick(1.0);
		assert!(state.camera.yaw > 0.0);
	}
}
