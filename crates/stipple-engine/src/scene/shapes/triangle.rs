use core::f32::consts::{FRAC_PI_2, TAU};

use crate::coords::{ColorRgba, Vec2};
use crate::render::{GraphicsContext, Primitive};

use super::SIZE_TO_NDC;

/// Filled equilateral triangle, pointing up, with its centroid at `position`.
///
/// The circumradius is `size * SIZE_TO_NDC`.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    position: Vec2,
    color: ColorRgba,
    size: f32,
}

impl Triangle {
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

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Distance from the centroid to each corner, in NDC.
    #[inline]
    pub fn circumradius(&self) -> f32 {
        self.size * SIZE_TO_NDC
    }

    /// Corners in counter-clockwise order, starting at the top.
    pub fn vertices(&self) -> [Vec2; 3] {
        let r = self.circumradius();
        let corner = |i: u32| self.position + Vec2::from_angle(FRAC_PI_2 + i as f32 * TAU / 3.0) * r;
        [corner(0), corner(1), corner(2)]
    }

    pub fn render<G: GraphicsContext + ?Sized>(&self, gfx: &mut G) {
        gfx.set_color(self.color);
        gfx.draw(Primitive::Triangles, &self.vertices());
    }
}
