use leptos::prelude::*;
use log::{info, warn};

use crate::components::param_input::{ParamInput, parse_number};
use crate::components::topology_view::TopologyView;
use crate::request::{
	MappingRequest, MappingTechnique, OVERLOAD_PENALTY, ProcessRequest, RoutingAlgorithm,
	TopologyRequest, mapping_defaults,
};
use crate::topology::config::{
	ARITY, BRANCHING, DIM_X, DIM_Y, DIM_Z, DIMENSIONS, LEVELS, RING_NODES, count, form_defaults,
};
use crate::topology::{Dimensionality, Generation, ParamLimits, ParamMap, TopologyConfig, TopologyKind};

fn status_line(generation: &Generation) -> String {
	let graph = &generation.graph;
	let counts = format!("{} nodes, {} links", graph.node_count(), graph.edge_count());
	match &generation.advisory {
		Some(advisory) => format!("{counts} ({advisory})"),
		None => counts,
	}
}

/// Inputs for the selected topology.
fn topology_fields(
	kind: TopologyKind,
	mode: Dimensionality,
	params: RwSignal<ParamMap>,
) -> AnyView {
	let limits = ParamLimits::default();
	match kind {
		TopologyKind::Mesh => view! {
			<ParamInput label="Dim X" key=DIM_X params=params limits=limits />
			<ParamInput label="Dim Y" key=DIM_Y params=params limits=limits />
			{(mode == Dimensionality::ThreeD)
				.then(|| view! { <ParamInput label="Dim Z" key=DIM_Z params=params limits=limits /> })}
		}
		.into_any(),
		TopologyKind::Ring => view! {
			<ParamInput label="Nodes (n)" key=RING_NODES params=params limits=limits />
		}
		.into_any(),
		TopologyKind::Torus => view! {
			<ParamInput label="Dim X" key=DIM_X params=params limits=limits />
			<ParamInput label="Dim Y" key=DIM_Y params=params limits=limits />
		}
		.into_any(),
		TopologyKind::Tree => view! {
			<ParamInput label="Levels" key=LEVELS params=params limits=limits />
			<ParamInput label="Branching Factor" key=BRANCHING params=params limits=limits />
		}
		.into_any(),
		TopologyKind::Hypercube => view! {
			<ParamInput label="Dimensions" key=DIMENSIONS params=params limits=limits />
			{move || {
				params
					.with(|p| p.get(DIMENSIONS).is_some_and(|&d| d > 3.0))
					.then(|| {
						view! {
							<p class="warning">
								"Visualization for hypercube networks in more than 3D is not supported."
							</p>
						}
					})
			}}
		}
		.into_any(),
		TopologyKind::Butterfly => view! {
			<ParamInput label="k (arity)" key=ARITY params=params limits=limits />
		}
		.into_any(),
		TopologyKind::Dragonfly => view! { <p>"No parameters: dragonfly has no layout yet."</p> }.into_any(),
	}
}

/// Topology explorer: parameter form on the left, live 3D view on the right.
#[component]
pub fn Demo() -> impl IntoView {
	let kind = RwSignal::new(TopologyKind::Mesh);
	let mode = RwSignal::new(Dimensionality::TwoD);
	let params = RwSignal::new(form_defaults());

	let mapping = RwSignal::new(MappingTechnique::default());
	let map_params = RwSignal::new(mapping_defaults());
	let routing = RwSignal::new(RoutingAlgorithm::default());
	let virtual_channels = RwSignal::new(1.0f64);

	let generation = Memo::new(move |_| {
		params.with(|p| TopologyConfig::from_params(kind.get(), mode.get(), p).generate())
	});
	let graph = Signal::derive(move || generation.with(|g| g.graph.clone()));

	let on_kind = move |ev: leptos::ev::Event| match event_target_value(&ev).parse() {
		Ok(next) => kind.set(next),
		Err(err) => warn!("{err}"),
	};
	let on_mode = move |ev: leptos::ev::Event| match event_target_value(&ev).parse() {
		Ok(next) => mode.set(next),
		Err(err) => warn!("{err}"),
	};
	let on_mapping = move |ev: leptos::ev::Event| match event_target_value(&ev).parse() {
		Ok(next) => mapping.set(next),
		Err(err) => warn!("{err}"),
	};
	let on_routing = move |ev: leptos::ev::Event| match event_target_value(&ev).parse() {
		Ok(next) => routing.set(next),
		Err(err) => warn!("{err}"),
	};
	let on_channels = move |ev: leptos::ev::Event| {
		virtual_channels.set(parse_number(&event_target_value(&ev)));
	};

	let on_process = move |_: leptos::ev::MouseEvent| {
		let technique = mapping.get_untracked();
		let request = ProcessRequest {
			topology: TopologyRequest {
				kind: kind.get_untracked(),
				mode: mode.get_untracked(),
				params: params.get_untracked(),
			},
			mapping: map_params.with_untracked(|p| MappingRequest::new(technique, p)),
			routing: routing.get_untracked(),
			virtual_channels: count(virtual_channels.get_untracked()),
		};
		info!("process request: {request:?}");
	};

	view! {
		<div class="demo">
			<div class="demo-panel">
				<section class="panel">
					<h2 class="title-topology">"Topology"</h2>
					<select prop:value=move || kind.get().as_str() on:change=on_kind>
						{TopologyKind::ALL
							.into_iter()
							.map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
							.collect_view()}
					</select>
					{move || {
						kind.get()
							.uses_dimensionality()
							.then(|| {
								view! {
									<select prop:value=move || mode.get().as_str() on:change=on_mode>
										<option value="2D">"2D"</option>
										<option value="3D">"3D"</option>
									</select>
								}
							})
					}}
					{move || topology_fields(kind.get(), mode.get(), params)}
					<p class="status">{move || generation.with(status_line)}</p>
				</section>

				<section class="panel">
					<h2 class="title-mapping">"Mapping Technique"</h2>
					<select prop:value=move || mapping.get().as_str() on:change=on_mapping>
						{MappingTechnique::ALL
							.into_iter()
							.map(|m| view! { <option value=m.as_str()>{m.as_str()}</option> })
							.collect_view()}
					</select>
					{move || {
						let technique = mapping.get();
						view! {
							{technique
								.uses_overload_penalty()
								.then(|| {
									view! {
										<ParamInput
											label="Overload Penalty"
											key=OVERLOAD_PENALTY
											params=map_params
											step="0.01"
										/>
									}
								})}
							{technique
								.parameters()
								.iter()
								.map(|&(key, label, step)| {
									view! { <ParamInput label=label key=key params=map_params step=step /> }
								})
								.collect_view()}
						}
					}}
				</section>

				<section class="panel">
					<h2 class="title-routing">"Routing Algorithm"</h2>
					<select prop:value=move || routing.get().as_str() on:change=on_routing>
						{RoutingAlgorithm::ALL
							.into_iter()
							.map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
							.collect_view()}
					</select>
					<div class="field">
						<label>"Virtual Channels"</label>
						<input
							type="number"
							prop:value=move || virtual_channels.get().to_string()
							on:input=on_channels
						/>
					</div>
				</section>

				<button class="process" on:click=on_process>
					"Process"
				</button>
			</div>

			<div class="demo-view">
				<TopologyView graph=graph />
			</div>
		</div>
	}
}
