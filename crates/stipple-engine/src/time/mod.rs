//! Time subsystem.
//!
//! - `FrameClock`: one per window, `tick()` once per presented frame
//! - `Stopwatch`: measures a single span of work (e.g. one redraw pass)

mod frame_clock;
mod stopwatch;

pub use frame_clock::{FrameClock, FrameTime};
pub use stopwatch::Stopwatch;
