use core::f32::consts::TAU;

use crate::coords::{ColorRgba, Vec2};
use crate::render::{GraphicsContext, Primitive};

use super::{DEFAULT_CIRCLE_SEGMENTS, SIZE_TO_NDC};

/// Fewest wedges that still enclose an area.
const MIN_SEGMENTS: u32 = 3;

/// Filled disc approximated by a fan of triangular wedges around `position`.
///
/// The radius is `size * SIZE_TO_NDC`.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    position: Vec2,
    color: ColorRgba,
    size: f32,
    segments: u32,
}

impl Circle {
    #[inline]
    pub fn new(position: Vec2, color: ColorRgba, size: f32) -> Self {
        Self { position, color, size, segments: DEFAULT_CIRCLE_SEGMENTS }
    }

    /// Sets the wedge count (at least 3).
    #[inline]
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments.max(MIN_SEGMENTS);
        self
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

    #[inline]
    pub fn segments(&self) -> u32 {
        self.segments
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * SIZE_TO_NDC
    }

    /// Wedges as `[center, rim_i, rim_i+1]`, counter-clockwise from +X.
    pub fn wedges(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        let r = self.radius();
        let step = TAU / self.segments as f32;
        let rim = move |i: u32| self.position + Vec2::from_angle(i as f32 * step) * r;
        (0..self.segments).map(move |i| [self.position, rim(i), rim(i + 1)])
    }

    pub fn render<G: GraphicsContext + ?Sized>(&self, gfx: &mut G) {
        gfx.set_color(self.color);
        for wedge in self.wedges() {
            gfx.draw(Primitive::Triangles, &wedge);
        }
    }
}
