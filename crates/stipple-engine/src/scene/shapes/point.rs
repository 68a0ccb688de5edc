use crate::coords::{ColorRgba, Vec2};
use crate::render::{GraphicsContext, Primitive};

/// A single square dot, `size` physical pixels across.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    position: Vec2,
    color: ColorRgba,
    size: f32,
}

impl Point {
    #[inline]
    pub fn new(position: Vec2, color: ColorRgba, size: f32) -> Self {
        Self { position, color, size }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn color(&self) -> ColorRgba {
        self.color
    }

    /// Diameter in physical pixels.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn render<G: GraphicsContext + ?Sized>(&self, gfx: &mut G) {
        gfx.set_point_size(self.size);
        gfx.set_color(self.color);
        gfx.draw(Primitive::Points, &[self.position]);
    }
}
