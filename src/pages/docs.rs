use leptos::prelude::*;
use leptos_router::components::A;

struct Section {
	name: &'static str,
	paragraphs: &'static [&'static str],
}

static SECTIONS: [Section; 5] = [
	Section {
		name: "Introduction",
		paragraphs: &[
			"Welcome to the MART documentation. Pick a topology on the demo page, tune its \
			 parameters and the network is redrawn as you type.",
			"Drag the view to orbit, hold shift while dragging to pan, scroll to zoom and \
			 double-click to pause the rotation. Hover a node to see its address and links.",
		],
	},
	Section {
		name: "Topologies",
		paragraphs: &[
			"Mesh: a dimX by dimY grid (by dimZ in 3D) linking nearest neighbours, without \
			 wraparound.",
			"Ring: n nodes on a circle, each linked to the next, the last back to the first.",
			"Torus: dimX by dimY nodes on a torus surface with wraparound on both axes; \
			 every node adds one link around the tube and one around the ring.",
			"Tree: a root with branching children per node, levels deep; \
			 1 + b + b^2 + ... + b^levels nodes.",
			"Hypercube: the corners of a 1, 2 or 3 dimensional cube, linked when they \
			 differ in one coordinate. Higher dimensions cannot be drawn.",
			"Butterfly: ceil(log2 k) + 1 stages of k nodes, with straight and shuffle links \
			 between consecutive stages.",
			"Dragonfly: selectable, but there is no layout for it yet.",
		],
	},
	Section {
		name: "Mapping",
		paragraphs: &[
			"Mapping techniques decide which node runs each task. The demo captures the \
			 technique and its parameters; the heuristics themselves are not implemented yet.",
		],
	},
	Section {
		name: "Routing",
		paragraphs: &[
			"Routing algorithms choose the path a message takes between two nodes. As with \
			 mapping, the demo records the algorithm and the number of virtual channels \
			 for a future run.",
		],
	},
	Section {
		name: "Examples",
		paragraphs: &[
			"A 4x4 mesh in 2D: 16 nodes and 24 links.",
			"An 8x4 torus: 32 nodes and 64 links.",
			"A binary tree of 3 levels: 15 nodes and 14 links.",
			"A 3D hypercube: 8 corners and 12 edges.",
		],
	},
];

/// Tabbed documentation.
#[component]
pub fn Docs() -> impl IntoView {
	let selected = RwSignal::new(0usize);

	view! {
		<div class="docs">
			<header>
				<h1>"MART Documentation"</h1>
				<p class="subtitle">
					"Everything you need to get started with Mapping & Routing Tool"
				</p>
				<A href="/">"← Back to Home"</A>
			</header>
			<div class="tab-list">
				{SECTIONS
					.iter()
					.enumerate()
					.map(|(i, section)| {
						view! {
							<button
								class="tab"
								class:selected=move || selected.get() == i
								on:click=move |_| selected.set(i)
							>
								{section.name}
							</button>
						}
					})
					.collect_view()}
			</div>
			<div class="tab-panel">
				{move || {
					SECTIONS
						.get(selected.get())
						.map(|section| {
							section
								.paragraphs
								.iter()
								.map(|text| view! { <p>{*text}</p> })
								.collect_view()
						})
				}}
			</div>
		</div>
	}
}
