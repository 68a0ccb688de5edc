pub(crate) mod circle;
pub(crate) mod point;
pub(crate) mod triangle;

pub use circle::Circle;
pub use point::Point;
pub use triangle::Triangle;

use core::fmt;

use crate::coords::{ColorRgba, Vec2};
use crate::render::GraphicsContext;

/// Factor converting a triangle/circle `size` into NDC units.
///
/// A size of 10 spans 0.05 NDC, i.e. 10 px on a 400 px-wide surface.
pub const SIZE_TO_NDC: f32 = 1.0 / 200.0;

/// Wedge count used for circles unless overridden.
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 12;

/// Shape variant selector, as chosen in the UI.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    #[default]
    Point,
    Triangle,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Point, ShapeKind::Triangle, ShapeKind::Circle];
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Point => "point",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Circle => "circle",
        };
        f.write_str(name)
    }
}

/// A paintable shape.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here and in `ShapeKind`
/// - implement `render` for it in terms of `GraphicsContext` primitives
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Triangle(Triangle),
    Circle(Circle),
}

impl Shape {
    /// Builds a shape of `kind` from copies of the given attributes.
    pub fn new(kind: ShapeKind, position: Vec2, color: ColorRgba, size: f32) -> Self {
        match kind {
            ShapeKind::Point => Shape::Point(Point::new(position, color, size)),
            ShapeKind::Triangle => Shape::Triangle(Triangle::new(position, color, size)),
            ShapeKind::Circle => Shape::Circle(Circle::new(position, color, size)),
        }
    }

    /// Overrides the circle wedge count. Has no effect on other variants.
    pub fn with_circle_segments(self, segments: u32) -> Self {
        match self {
            Shape::Circle(c) => Shape::Circle(c.with_segments(segments)),
            other => other,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Center in NDC.
    pub fn position(&self) -> Vec2 {
        match self {
            Shape::Point(s) => s.position(),
            Shape::Triangle(s) => s.position(),
            Shape::Circle(s) => s.position(),
        }
    }

    pub fn color(&self) -> ColorRgba {
        match self {
            Shape::Point(s) => s.color(),
            Shape::Triangle(s) => s.color(),
            Shape::Circle(s) => s.color(),
        }
    }

    pub fn size(&self) -> f32 {
        match self {
            Shape::Point(s) => s.size(),
            Shape::Triangle(s) => s.size(),
            Shape::Circle(s) => s.size(),
        }
    }

    /// Issues this shape's primitives to `gfx`.
    ///
    /// Never clears the surface and never touches state other than the
    /// context's current color / point size.
    pub fn render<G: GraphicsContext + ?Sized>(&self, gfx: &mut G) {
        match self {
            Shape::Point(s) => s.render(gfx),
            Shape::Triangle(s) => s.render(gfx),
            Shape::Circle(s) => s.render(gfx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_dispatches_on_kind() {
        for kind in ShapeKind::ALL {
            let s = Shape::new(kind, Vec2::new(0.1, 0.2), ColorRgba::red(), 7.0);
            assert_eq!(s.kind(), kind);
            assert_eq!(s.position(), Vec2::new(0.1, 0.2));
            assert_eq!(s.color(), ColorRgba::red());
            assert_eq!(s.size(), 7.0);
        }
    }

    #[test]
    fn circle_segments_only_touch_circles() {
        let tri = Shape::new(ShapeKind::Triangle, Vec2::zero(), ColorRgba::white(), 5.0);
        assert_eq!(tri.clone().with_circle_segments(32), tri);

        let Shape::Circle(c) =
            Shape::new(ShapeKind::Circle, Vec2::zero(), ColorRgba::white(), 5.0).with_circle_segments(32)
        else {
            panic!("expected a circle");
        };
        assert_eq!(c.segments(), 32);
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(ShapeKind::Point.to_string(), "point");
        assert_eq!(ShapeKind::Triangle.to_string(), "triangle");
        assert_eq!(ShapeKind::Circle.to_string(), "circle");
    }
}
