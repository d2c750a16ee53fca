pub use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    pub const fn complement(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Generic access to two-component structures by axis.
pub trait AlongAxis {
    type Value: Copy;

    fn along(&self, axis: Axis) -> Self::Value;
    fn set_along(&mut self, axis: Axis, value: Self::Value);
}

impl AlongAxis for Vec2 {
    type Value = f32;

    fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    fn set_along(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }
}

/// Builds a vector from a primary/secondary pair.
pub fn vec2_from_axes(primary_axis: Axis, primary: f32, secondary: f32) -> Vec2 {
    let mut out = Vec2::ZERO;
    out.set_along(primary_axis, primary);
    out.set_along(primary_axis.complement(), secondary);
    out
}

/// Rotates `point` by `radians` around `origin`.
pub fn rotate_around(point: Vec2, origin: Vec2, radians: f32) -> Vec2 {
    origin + Vec2::from_angle(radians).rotate(point - origin)
}
