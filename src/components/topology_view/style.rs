/// Presentation settings for [`super::TopologyView`], kept apart from the
/// graph data.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
	pub background: String,
	pub line_color: String,
	pub line_width: f64,
	pub point_color: String,
	/// Node size in world units; scaled with perspective.
	pub point_size: f64,
	pub label_color: String,
}

impl Default for RenderStyle {
	fn default() -> Self {
		Self {
			background: "#181a20".into(),
			line_color: "#00ffff".into(),
			line_width: 1.0,
			point_color: "#ff77ff".into(),
			point_size: 0.1,
			label_color: "white".into(),
		}
	}
}

impl RenderStyle {
	/// Wireframe look used for the landing page preview.
	pub fn wireframe() -> Self {
		Self {
			background: "#0f172a".into(),
			line_color: "#00bfff".into(),
			point_color: "#00bfff".into(),
			point_size: 0.04,
			..Self::default()
		}
	}
}
