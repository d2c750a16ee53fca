use crate::geometry::{AlongAxis, Axis, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AxisSizingRule {
    Fixed(f32),
    #[default]
    Fit,
    Fill,
}

impl AxisSizingRule {
    pub fn is_fill(self) -> bool {
        matches!(self, AxisSizingRule::Fill)
    }

    /// True when the rule yields a size the parent can read in the first pass.
    pub fn contributes_to_content(self) -> bool {
        !self.is_fill()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizingRule {
    pub width: AxisSizingRule,
    pub height: AxisSizingRule,
}

impl SizingRule {
    pub const fn new(width: AxisSizingRule, height: AxisSizingRule) -> Self {
        Self { width, height }
    }

    pub const fn fixed(width: f32, height: f32) -> Self {
        Self::new(AxisSizingRule::Fixed(width), AxisSizingRule::Fixed(height))
    }

    pub const fn fit() -> Self {
        Self::new(AxisSizingRule::Fit, AxisSizingRule::Fit)
    }

    pub const fn fill() -> Self {
        Self::new(AxisSizingRule::Fill, AxisSizingRule::Fill)
    }
}

impl AlongAxis for SizingRule {
    type Value = AxisSizingRule;

    fn along(&self, axis: Axis) -> AxisSizingRule {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    fn set_along(&mut self, axis: Axis, value: AxisSizingRule) {
        match axis {
            Axis::Horizontal => self.width = value,
            Axis::Vertical => self.height = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PositioningRule {
    #[default]
    Static,
    /// Offset from the parent's position, outside the flow.
    Relative(Vec2),
    /// Offset taken as an absolute screen position, outside the flow.
    Absolute(Vec2),
}

impl PositioningRule {
    pub fn is_static(self) -> bool {
        matches!(self, PositioningRule::Static)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxPadding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl BoxPadding {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn total(&self, axis: Axis) -> f32 {
        self.start(axis) + self.end(axis)
    }

    pub fn start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    pub fn end(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoxAlignment {
    pub horizontal: Alignment,
    pub vertical: Alignment,
}

impl BoxAlignment {
    pub const fn new(horizontal: Alignment, vertical: Alignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const fn center() -> Self {
        Self::new(Alignment::Center, Alignment::Center)
    }
}

impl AlongAxis for BoxAlignment {
    type Value = Alignment;

    fn along(&self, axis: Axis) -> Alignment {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    fn set_along(&mut self, axis: Axis, value: Alignment) {
        match axis {
            Axis::Horizontal => self.horizontal = value,
            Axis::Vertical => self.vertical = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoxDirection {
    #[default]
    Row,
    Column,
}

impl BoxDirection {
    pub const fn primary_axis(self) -> Axis {
        match self {
            BoxDirection::Row => Axis::Horizontal,
            BoxDirection::Column => Axis::Vertical,
        }
    }

    pub const fn secondary_axis(self) -> Axis {
        self.primary_axis().complement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_totals_follow_axis() {
        let padding = BoxPadding::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(padding.total(Axis::Horizontal), 6.0);
        assert_eq!(padding.total(Axis::Vertical), 4.0);
        assert_eq!(padding.start(Axis::Horizontal), 4.0);
        assert_eq!(padding.end(Axis::Vertical), 3.0);
    }

    #[test]
    fn symmetric_padding_maps_horizontal_to_left_right() {
        let padding = BoxPadding::symmetric(5.0, 2.0);
        assert_eq!(padding, BoxPadding::new(2.0, 5.0, 2.0, 5.0));
        assert_eq!(BoxPadding::uniform(3.0).total(Axis::Vertical), 6.0);
    }

    #[test]
    fn direction_axes() {
        assert_eq!(BoxDirection::Row.primary_axis(), Axis::Horizontal);
        assert_eq!(BoxDirection::Row.secondary_axis(), Axis::Vertical);
        assert_eq!(BoxDirection::Column.primary_axis(), Axis::Vertical);
        assert_eq!(BoxDirection::Column.secondary_axis(), Axis::Horizontal);
    }

    #[test]
    fn sizing_rule_along_axis() {
        let mut rule = SizingRule::fixed(10.0, 20.0);
        assert_eq!(rule.along(Axis::Vertical), AxisSizingRule::Fixed(20.0));
        rule.set_along(Axis::Horizontal, AxisSizingRule::Fill);
        assert_eq!(rule.width, AxisSizingRule::Fill);
        assert!(!rule.width.contributes_to_content());
        assert!(rule.height.contributes_to_content());
    }
}
