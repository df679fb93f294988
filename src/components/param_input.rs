use leptos::prelude::*;

use crate::topology::{ParamLimits, ParamMap};

/// Read a form field leniently; anything unparseable becomes `NaN`, which
/// the generator treats as a degenerate value.
pub fn parse_number(raw: &str) -> f64 {
	raw.trim().parse().unwrap_or(f64::NAN)
}

/// Parse `raw` and bound it for `key` when limits apply.
fn read_input(raw: &str, key: &str, limits: Option<ParamLimits>) -> f64 {
	let value = parse_number(raw);
	limits.map_or(value, |l| l.clamp(key, value))
}

fn display_number(value: Option<f64>) -> String {
	match value {
		Some(v) if v.is_finite() => v.to_string(),
		_ => String::new(),
	}
}

/// Labelled numeric input bound to one key of a parameter map.
#[component]
pub fn ParamInput(
	label: &'static str,
	key: &'static str,
	params: RwSignal<ParamMap>,
	#[prop(optional)] limits: Option<ParamLimits>,
	#[prop(default = "1")] step: &'static str,
) -> impl IntoView {
	let value = move || params.with(|p| display_number(p.get(key).copied()));
	let on_input = move |ev: leptos::ev::Event| {
		let value = read_input(&event_target_value(&ev), key, limits);
		params.update(|p| {
			p.insert(key.to_owned(), value);
		});
	};

	view! {
		<div class="field">
			<label>{label}</label>
			<input type="number" step=step prop:value=value on:input=on_input />
		</div>
	}
}
