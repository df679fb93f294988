//! Leptos client-side explorer for interconnection-network topologies.
//!
//! [`topology`] generates the graphs and has no browser dependency; the rest
//! of the crate is the routed UI that captures parameters and draws them.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod pages;
pub mod request;
pub mod topology;

// Top-Level pages
use crate::pages::about::About;
use crate::pages::demo::Demo;
use crate::pages::docs::Docs;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router for the landing, explorer, docs and about pages.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="MART: Mapping & Routing Tool" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/demo") view=Demo />
				<Route path=path!("/docs") view=Docs />
				<Route path=path!("/about") view=About />
			</Routes>
		</Router>
	}
}
