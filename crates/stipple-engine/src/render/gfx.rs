use crate::coords::{ColorRgba, Vec2};

/// Primitive topology accepted by [`GraphicsContext::draw`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Primitive {
    /// Every vertex is one square dot of the current point size.
    Points,
    /// Every three vertices form one filled triangle. A trailing partial
    /// triangle is ignored.
    Triangles,
}

/// Minimal immediate-style drawing surface that shapes render against.
///
/// State (`color`, `point_size`) is sticky: it applies to every following
/// `draw` until changed. Submission order is paint order.
///
/// Implementations are infallible per call; a lost device or surface is
/// handled by whoever owns the frame, not by the shapes.
pub trait GraphicsContext {
    /// Discards everything drawn so far this frame and fills the surface.
    fn clear(&mut self, color: ColorRgba);

    /// Diameter of subsequent point primitives, in physical pixels.
    fn set_point_size(&mut self, size: f32);

    /// Solid fill for subsequent primitives.
    fn set_color(&mut self, color: ColorRgba);

    /// Submits `vertices` (NDC) as `primitive`.
    fn draw(&mut self, primitive: Primitive, vertices: &[Vec2]);
}

impl<G: GraphicsContext + ?Sized> GraphicsContext for &mut G {
    #[inline]
    fn clear(&mut self, color: ColorRgba) {
        (**self).clear(color);
    }

    #[inline]
    fn set_point_size(&mut self, size: f32) {
        (**self).set_point_size(size);
    }

    #[inline]
    fn set_color(&mut self, color: ColorRgba) {
        (**self).set_color(color);
    }

    #[inline]
    fn draw(&mut self, primitive: Primitive, vertices: &[Vec2]) {
        (**self).draw(primitive, vertices);
    }
}
