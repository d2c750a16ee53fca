use std::any::Any;

use super::{ElementCore, ElementId, ElementTrait, Layoutable};
use crate::geometry::{AlongAxis, Axis};
use crate::style::{AxisSizingRule, StyleSheet};
use crate::view::render_command::RenderContext;

/// Fixed-width text measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 16.0,
        }
    }
}

impl TextMetrics {
    pub fn measure_width(&self, content: &str) -> f32 {
        content.chars().count() as f32 * self.char_width
    }
}

pub struct Text {
    core: ElementCore,
    content: String,
    metrics: TextMetrics,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self::from_core(ElementCore::new(), content.into())
    }

    pub fn new_with_id(id: ElementId, content: impl Into<String>) -> Self {
        Self::from_core(ElementCore::new_with_id(id), content.into())
    }

    fn from_core(core: ElementCore, content: String) -> Self {
        Self {
            core,
            content,
            metrics: TextMetrics::default(),
        }
    }

    pub fn with_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_style(mut self, selector: &str, sheet: StyleSheet) -> Self {
        self.core.set_style(selector, sheet);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }
}

impl Layoutable for Text {
    fn compute_independent_dimensions(&mut self) {
        self.core.compute_independent_dimensions();
        let sizing = self.core.computed_style().sizing;
        for axis in Axis::ALL {
            if sizing.along(axis) != AxisSizingRule::Fit {
                continue;
            }
            let measured = match axis {
                Axis::Horizontal => self.metrics.measure_width(&self.content),
                Axis::Vertical => self.metrics.line_height,
            };
            self.core.set_size_along(axis, measured);
        }
    }

    fn compute_responsive_dimensions(&mut self) {}

    fn compute_position(&mut self) {}
}

impl ElementTrait for Text {
    fn core(&self) -> &ElementCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ElementCore {
        &mut self.core
    }

    fn children(&self) -> Option<&[Box<dyn ElementTrait>]> {
        None
    }

    fn split_mut(&mut self) -> (&mut ElementCore, Option<&mut [Box<dyn ElementTrait>]>) {
        (&mut self.core, None)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn draw(&self, ctx: &mut RenderContext) {
        self.core.draw_decorations(ctx);
        let style = self.core.computed_style();
        if !style.is_visible() || self.content.is_empty() {
            return;
        }
        ctx.set_color(style.foreground);
        ctx.draw_text(self.core.position(), &self.content);
    }
}
