pub mod nav;
pub mod param_input;
pub mod topology_view;
