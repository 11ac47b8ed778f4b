pub mod outline_node;
pub mod render_config;

pub use outline_node::OutlineNode;
pub use render_config::RenderConfig;
