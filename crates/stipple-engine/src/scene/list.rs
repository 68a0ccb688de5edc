use super::Shape;

/// Ordered, append-only-until-cleared list of shapes.
///
/// Insertion order is paint order: later shapes are drawn over earlier ones.
/// Shapes are only reachable through shared references once appended, so
/// their attributes cannot change in place.
///
/// Performance characteristics:
/// - `append()` is O(1) amortized
/// - `clear()` is O(n) (drops shapes) and keeps the allocation for reuse
/// - no capacity limit; every redraw replays all `n` shapes
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `shape` on top of everything already in the scene.
    #[inline]
    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Removes every shape. Calling it on an empty scene does nothing.
    #[inline]
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Returns all shapes in paint order.
    #[inline]
    pub fn all(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgba, Vec2};
    use crate::scene::ShapeKind;

    fn shape(kind: ShapeKind, x: f32) -> Shape {
        Shape::new(kind, Vec2::new(x, 0.0), ColorRgba::white(), 10.0)
    }

    // ── append ────────────────────────────────────────────────────────────

    #[test]
    fn append_to_empty_yields_single_shape() {
        let mut scene = Scene::new();
        let s = shape(ShapeKind::Triangle, 0.5);
        scene.append(s.clone());
        assert_eq!(scene.all(), &[s]);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut scene = Scene::new();
        let a = shape(ShapeKind::Point, -0.5);
        let b = shape(ShapeKind::Circle, 0.0);
        let c = shape(ShapeKind::Triangle, 0.5);
        scene.append(a.clone());
        scene.append(b.clone());
        scene.append(c.clone());
        assert_eq!(scene.all(), &[a, b, c]);
        assert_eq!(scene.len(), 3);
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_empties_scene() {
        let mut scene = Scene::new();
        for i in 0..5 {
            scene.append(shape(ShapeKind::Point, i as f32 * 0.1));
        }
        scene.clear();
        assert!(scene.is_empty());
        assert!(scene.all().is_empty());
    }

    #[test]
    fn clear_on_empty_is_noop() {
        let mut scene = Scene::new();
        scene.clear();
        scene.clear();
        assert_eq!(scene, Scene::new());
    }

    #[test]
    fn append_after_clear_starts_fresh() {
        let mut scene = Scene::new();
        scene.append(shape(ShapeKind::Circle, 0.2));
        scene.clear();
        let s = shape(ShapeKind::Point, 0.9);
        scene.append(s.clone());
        assert_eq!(scene.all(), &[s]);
    }
}
