mod base_component;
mod render_command;
mod screen;

pub use base_component::*;
pub use render_command::*;
pub use screen::*;
