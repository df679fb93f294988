use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::nav::NavBar;
use crate::components::topology_view::{RenderStyle, TopologyView};
use crate::topology::{HypercubeConfig, TopologyConfig};

const FEATURES: [(&str, &str); 3] = [
	(
		"Interactive Visualizations",
		"Explore and interact with various topologies like mesh, torus, and butterfly.",
	),
	(
		"Mapping Techniques",
		"Choose how tasks are placed onto the network, from ant colonies to tabu search.",
	),
	(
		"Routing Algorithms",
		"Compare dimension-order, Valiant and oblivious routing over the same topology.",
	),
];

/// Landing page with a rotating cube preview.
#[component]
pub fn Home() -> impl IntoView {
	let preview = Signal::derive(|| {
		TopologyConfig::Hypercube(HypercubeConfig::default())
			.generate()
			.graph
	});

	view! {
		<div class="landing">
			<NavBar />
			<section class="hero">
				<div class="hero-preview">
					<TopologyView graph=preview style=RenderStyle::wireframe() height=Some(320.0) />
				</div>
				<h1>"MART: Mapping & Routing Tool"</h1>
				<p class="subtitle">
					"Explore advanced interconnection network visualizations and algorithms"
				</p>
				<A href="/demo" attr:class="cta">"Try the Demo ↗"</A>
			</section>
			<section class="features">
				<h2>"Features"</h2>
				<div class="feature-grid">
					{FEATURES
						.into_iter()
						.map(|(title, blurb)| {
							view! {
								<div class="feature">
									<h3>{title}</h3>
									<p>{blurb}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>
		</div>
	}
}
