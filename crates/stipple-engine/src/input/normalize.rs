use crate::coords::{Rect, Vec2};

/// Maps a pointer position to normalized device coordinates.
///
/// `pointer` and `bounds` are in the same pixel space (viewport/window
/// coordinates, +Y down). The result has its origin at the center of
/// `bounds`, spans `[-1, 1]` across it, and has +Y up. Points outside
/// `bounds` map outside `[-1, 1]`.
///
/// Zero-sized bounds are treated as `f32::EPSILON` wide so the output stays
/// finite.
pub fn to_normalized(pointer: Vec2, bounds: Rect) -> Vec2 {
    let half_w = (bounds.size.x * 0.5).max(f32::EPSILON);
    let half_h = (bounds.size.y * 0.5).max(f32::EPSILON);

    let local = pointer - bounds.origin;
    Vec2::new((local.x - half_w) / half_w, (half_h - local.y) / half_h)
}
