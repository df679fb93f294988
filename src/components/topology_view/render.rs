use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{SceneState, node_radius};
use super::style::RenderStyle;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &SceneState, style: &RenderStyle, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&style.background);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, style, ctx);
	draw_nodes(state, style, ctx);
	ctx.set_global_alpha(1.0);
}

fn draw_edges(state: &SceneState, style: &RenderStyle, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);
	ctx.set_stroke_style_str(&style.line_color);

	for edge in &state.graph.edges {
		let (Some(a), Some(b)) = (state.projected(edge.a), state.projected(edge.b)) else {
			continue;
		};

		// t=0: every edge at 0.7; t=1: highlighted edges at 1.0, the rest at 0.15
		let is_highlighted = state.is_highlighted(edge.a) && state.is_highlighted(edge.b);
		let (alpha, width) = if is_highlighted {
			(0.7 + 0.3 * t, style.line_width * (1.0 + 0.6 * t))
		} else {
			(0.7 - 0.55 * t, style.line_width)
		};

		ctx.set_global_alpha(alpha);
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &SceneState, style: &RenderStyle, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
	);

	for (idx, p) in state.draw_order() {
		let highlighted = has_highlight && state.is_highlighted(idx);
		let base = node_radius(style.point_size, &p);
		let (alpha, radius) = if !has_highlight {
			(1.0, base)
		} else if highlighted {
			(1.0, base * (1.0 + 0.35 * t))
		} else {
			(1.0 - 0.7 * t, base * (1.0 - 0.15 * t))
		};

		if highlighted && state.is_hovered(idx) && t > 0.01 {
			draw_glow(ctx, p.x, p.y, radius, t);
		}

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&style.point_color);
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);

	let Some(idx) = state.hover.node.or(state.hover.prev_node) else {
		return;
	};
	let (Some(node), Some(p)) = (state.graph.nodes.get(idx), state.projected(idx)) else {
		return;
	};
	let radius = node_radius(style.point_size, &p);
	ctx.set_global_alpha(t);
	ctx.set_fill_style_str(&style.label_color);
	ctx.set_font("12px sans-serif");
	let _ = ctx.fill_text(&node.address.to_string(), p.x + radius + 4.0, p.y - radius - 4.0);
	ctx.set_global_alpha(1.0);
}

fn draw_glow(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, t: f64) {
	let glow_radius = radius * (1.8 + 1.2 * t);
	let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, glow_radius) else {
		return;
	};
	let alpha = 0.35 * t;
	let stops = [
		(0.0, format!("rgba(255, 255, 255, {alpha})")),
		(0.6, format!("rgba(200, 220, 255, {})", alpha * 0.3)),
		(1.0, "rgba(255, 255, 255, 0)".to_owned()),
	];
	if stops
		.iter()
		.any(|(offset, color)| gradient.add_color_stop(*offset, color).is_err())
	{
		return;
	}
	ctx.begin_path();
	let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}
