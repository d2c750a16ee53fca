use crate::style::Color;

/// Read-only pixel source used by image backgrounds.
pub trait Bitmap {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Caller keeps `x < width` and `y < height`.
    fn pixel(&self, x: u32, y: u32) -> Color;
}

impl Bitmap for image::RgbaImage {
    fn width(&self) -> u32 {
        image::RgbaImage::width(self)
    }

    fn height(&self) -> u32 {
        image::RgbaImage::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        Color::from(*self.get_pixel(x, y))
    }
}
