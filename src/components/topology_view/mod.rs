mod camera;
mod component;
mod render;
mod state;
mod style;

pub use component::TopologyView;
pub use style::RenderStyle;
