use leptos::prelude::*;

use crate::components::nav::NavBar;

#[component]
pub fn About() -> impl IntoView {
	view! {
		<div class="about">
			<NavBar />
			<header>
				<h1>"Meet the Team"</h1>
				<p class="subtitle">"The minds behind MART"</p>
			</header>
			<section class="panel">
				<p>
					"MART is a teaching and research tool for interconnection networks. It draws "
					"the classic topologies of parallel machines and is growing towards comparing "
					"how tasks are mapped onto them and how messages are routed across them."
				</p>
			</section>
		</div>
	}
}
