//! Core engine-facing contracts.
//!
//! The interface between the runtime (platform loop) and the application:
//! callbacks, their control directives and the per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
