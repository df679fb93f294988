use leptos::prelude::*;
use leptos_router::components::A;

/// Top navigation bar shared by every page.
#[component]
pub fn NavBar() -> impl IntoView {
	view! {
		<nav class="navbar">
			<ul>
				<li><A href="/about">"About"</A></li>
				<li><A href="/docs">"Docs"</A></li>
				<li class="brand">"MART"</li>
				<li><A href="/demo">"Demo"</A></li>
				<li><A href="/">"Home"</A></li>
			</ul>
		</nav>
	}
}
