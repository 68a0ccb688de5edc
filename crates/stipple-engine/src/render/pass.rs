use core::fmt;
use std::time::Duration;

use crate::coords::ColorRgba;
use crate::scene::Scene;
use crate::time::Stopwatch;

use super::GraphicsContext;

/// Shortest duration used for the fps estimate, so it stays finite.
const MIN_PASS_DURATION: Duration = Duration::from_micros(1);

/// Outcome of one full redraw pass.
///
/// Informational only; nothing paces itself on these numbers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderStats {
    /// Shapes replayed.
    pub shape_count: usize,
    /// Wall-clock time spent issuing the pass.
    pub duration: Duration,
}

impl RenderStats {
    #[inline]
    pub fn millis(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }

    /// Passes per second this pass would sustain.
    #[inline]
    pub fn fps(&self) -> f64 {
        1.0 / self.duration.max(MIN_PASS_DURATION).as_secs_f64()
    }
}

/// Key-value status line, e.g. `numdot: 3 ms: 0 fps: 41666`.
impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "numdot: {} ms: {} fps: {}",
            self.shape_count,
            self.millis().floor(),
            self.fps().floor()
        )
    }
}

/// Clears `gfx` to `background`, then replays every shape in `scene` in
/// insertion order.
///
/// Always a full redraw; there is no dirty-region tracking.
pub fn render_scene<G: GraphicsContext + ?Sized>(
    scene: &Scene,
    gfx: &mut G,
    background: ColorRgba,
) -> RenderStats {
    let watch = Stopwatch::start();

    gfx.clear(background);
    for shape in scene.iter() {
        shape.render(gfx);
    }

    RenderStats {
        shape_count: scene.len(),
        duration: watch.elapsed(),
    }
}
