use std::fmt;
use std::rc::Rc;

use crate::style::color::Color;
use crate::style::layout_rules::{
    BoxAlignment, BoxDirection, BoxPadding, PositioningRule, SizingRule,
};
use crate::ui::Bitmap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerEvents {
    #[default]
    Auto,
    None,
}

/// Checkerboard painted beneath translucent pixels of an image background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransparencyReference {
    pub cell_size: f32,
    pub light: Color,
    pub dark: Color,
}

impl Default for TransparencyReference {
    fn default() -> Self {
        Self {
            cell_size: 8.0,
            light: Color::rgb(204, 204, 204),
            dark: Color::rgb(153, 153, 153),
        }
    }
}

#[derive(Clone)]
pub struct ImageBackground {
    pub bitmap: Rc<dyn Bitmap>,
    pub sizing: SizingRule,
    pub positioning: PositioningRule,
    pub transparency: Option<TransparencyReference>,
}

impl ImageBackground {
    pub fn new(bitmap: Rc<dyn Bitmap>) -> Self {
        Self {
            bitmap,
            sizing: SizingRule::fit(),
            positioning: PositioningRule::Static,
            transparency: None,
        }
    }

    pub fn with_sizing(mut self, sizing: SizingRule) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn with_positioning(mut self, positioning: PositioningRule) -> Self {
        self.positioning = positioning;
        self
    }

    pub fn with_transparency(mut self, transparency: TransparencyReference) -> Self {
        self.transparency = Some(transparency);
        self
    }
}

impl fmt::Debug for ImageBackground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageBackground")
            .field("bitmap", &(self.bitmap.width(), self.bitmap.height()))
            .field("sizing", &self.sizing)
            .field("positioning", &self.positioning)
            .field("transparency", &self.transparency)
            .finish()
    }
}

impl PartialEq for ImageBackground {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.bitmap, &other.bitmap)
            && self.sizing == other.sizing
            && self.positioning == other.positioning
            && self.transparency == other.transparency
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Background {
    #[default]
    None,
    Solid(Color),
    Image(ImageBackground),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Border {
    #[default]
    None,
    Solid { color: Color, width: f32 },
}

impl Border {
    pub const fn solid(color: Color, width: f32) -> Self {
        Border::Solid { color, width }
    }
}

/// A partial style. Absent fields leave the computed value untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSheet {
    pub visibility: Option<Visibility>,
    pub pointer_events: Option<PointerEvents>,
    pub sizing: Option<SizingRule>,
    pub positioning: Option<PositioningRule>,
    pub foreground: Option<Color>,
    pub background: Option<Background>,
    pub border: Option<Border>,
    pub direction: Option<BoxDirection>,
    pub alignment: Option<BoxAlignment>,
    pub padding: Option<BoxPadding>,
    pub gap: Option<f32>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_pointer_events(mut self, pointer_events: PointerEvents) -> Self {
        self.pointer_events = Some(pointer_events);
        self
    }

    pub fn with_sizing(mut self, sizing: SizingRule) -> Self {
        self.sizing = Some(sizing);
        self
    }

    pub fn with_positioning(mut self, positioning: PositioningRule) -> Self {
        self.positioning = Some(positioning);
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_direction(mut self, direction: BoxDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_alignment(mut self, alignment: BoxAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_padding(mut self, padding: BoxPadding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }
}
