mod bitmap;
mod event;

pub use bitmap::*;
pub use event::*;
