use stipple_engine::coords::ColorRgba;
use stipple_engine::scene::shapes::DEFAULT_CIRCLE_SEGMENTS;

use crate::selection::Selection;

/// Canvas settings fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Clear color of every redraw.
    pub background: ColorRgba,
    /// Wedges per stamped circle.
    pub circle_segments: u32,
    /// Brush state at startup.
    pub selection: Selection,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: ColorRgba::black(),
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            selection: Selection::default(),
        }
    }
}
