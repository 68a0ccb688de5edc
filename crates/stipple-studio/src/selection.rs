use core::fmt;

use stipple_engine::coords::{ColorChannel, ColorRgba, Vec2};
use stipple_engine::scene::{Shape, ShapeKind};

pub const MIN_SIZE: f32 = 5.0;
pub const MAX_SIZE: f32 = 40.0;
pub const DEFAULT_SIZE: f32 = 10.0;

/// The brush: what the next click stamps.
///
/// Shapes take copies of these attributes, so editing the selection never
/// reaches back into the scene.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Selection {
    kind: ShapeKind,
    color: ColorRgba,
    size: f32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Point,
            color: ColorRgba::white(),
            size: DEFAULT_SIZE,
        }
    }
}

impl Selection {
    pub fn new(kind: ShapeKind, color: ColorRgba, size: f32) -> Self {
        Self { kind, color, size: size.clamp(MIN_SIZE, MAX_SIZE) }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> ColorRgba {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn set_kind(&mut self, kind: ShapeKind) {
        self.kind = kind;
    }

    pub fn set_color(&mut self, color: ColorRgba) {
        self.color = color;
    }

    /// Sets one channel, clamped to `[0, 1]`.
    pub fn set_channel(&mut self, channel: ColorChannel, value: f32) {
        self.color = self.color.with_channel(channel, value);
    }

    pub fn adjust_channel(&mut self, channel: ColorChannel, delta: f32) {
        self.set_channel(channel, self.color.channel(channel) + delta);
    }

    /// Sets the size, clamped to `[MIN_SIZE, MAX_SIZE]`.
    pub fn set_size(&mut self, size: f32) {
        self.size = size.clamp(MIN_SIZE, MAX_SIZE);
    }

    pub fn adjust_size(&mut self, delta: f32) {
        self.set_size(self.size + delta);
    }

    /// Stamps a shape at `position` (NDC) from the current attributes.
    pub fn make_shape(&self, position: Vec2, circle_segments: u32) -> Shape {
        Shape::new(self.kind, position, self.color, self.size).with_circle_segments(circle_segments)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.color;
        write!(
            f,
            "{} rgb({:.1}, {:.1}, {:.1}) size {}",
            self.kind, c.r, c.g, c.b, self.size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn default_is_white_point_of_size_ten() {
        let s = Selection::default();
        assert_eq!(s.kind(), ShapeKind::Point);
        assert_eq!(s.color(), ColorRgba::white());
        assert_eq!(s.size(), 10.0);
    }

    // ── edits ─────────────────────────────────────────────────────────────

    #[test]
    fn channel_edits_clamp_to_unit_range() {
        let mut s = Selection::default();
        s.adjust_channel(ColorChannel::Red, 0.1);
        assert_eq!(s.color().r, 1.0);

        s.adjust_channel(ColorChannel::Green, -0.3);
        assert!(approx(s.color().g, 0.7));

        s.set_channel(ColorChannel::Blue, -2.0);
        assert_eq!(s.color().b, 0.0);
    }

    #[test]
    fn size_clamps_to_slider_range() {
        let mut s = Selection::default();
        s.adjust_size(100.0);
        assert_eq!(s.size(), MAX_SIZE);
        s.adjust_size(-100.0);
        assert_eq!(s.size(), MIN_SIZE);
        assert_eq!(Selection::new(ShapeKind::Circle, ColorRgba::red(), 1.0).size(), MIN_SIZE);
    }

    // ── stamping ──────────────────────────────────────────────────────────

    #[test]
    fn shape_copies_current_attributes() {
        let mut s = Selection::default();
        s.set_kind(ShapeKind::Triangle);
        s.set_color(ColorRgba::green());
        s.set_size(20.0);

        let shape = s.make_shape(Vec2::new(0.5, -0.5), 12);
        assert_eq!(shape.kind(), ShapeKind::Triangle);
        assert_eq!(shape.color(), ColorRgba::green());
        assert_eq!(shape.size(), 20.0);
        assert_eq!(shape.position(), Vec2::new(0.5, -0.5));
    }

    #[test]
    fn later_edits_do_not_touch_stamped_shapes() {
        let mut s = Selection::default();
        s.set_color(ColorRgba::red());
        let shape = s.make_shape(Vec2::zero(), 12);

        s.set_channel(ColorChannel::Red, 0.0);
        s.set_channel(ColorChannel::Blue, 1.0);
        s.set_size(35.0);

        assert_eq!(shape.color(), ColorRgba::red());
        assert_eq!(shape.size(), 10.0);
    }

    #[test]
    fn display_summarizes_brush() {
        let s = Selection::new(ShapeKind::Circle, ColorRgba::new(1.0, 0.5, 0.0, 1.0), 15.0);
        assert_eq!(s.to_string(), "circle rgb(1.0, 0.5, 0.0) size 15");
    }
}
