//! Retained-mode box layout for desktop editors.
//!
//! Elements form a tree owned by a [`Screen`]. Each frame runs deferred
//! callbacks, the style cascade, three layout passes and a draw pass that
//! fills a [`RenderContext`] with [`RenderCommand`]s for an external
//! rasterizer.

pub mod geometry;
pub mod style;
pub mod ui;
pub mod view;

pub use geometry::*;
pub use style::*;
pub use ui::*;
pub use view::*;
