//! Rendering subsystem.
//!
//! Shapes never talk to wgpu directly. They issue primitives to a
//! [`GraphicsContext`]; implementations decide what a primitive becomes:
//! - [`CommandRecorder`] keeps an ordered command log (tests, diagnostics)
//! - [`PrimitiveRenderer`] batches primitives and encodes them into a wgpu pass
//!
//! Convention: primitive vertices are in NDC (+Y up). Pixel-sized extents
//! (point sprites) are resolved in the vertex shader using a viewport uniform.

mod common;
mod ctx;
mod gfx;
mod pass;
mod primitive;
mod recorder;

pub use ctx::{RenderCtx, RenderTarget};
pub use gfx::{GraphicsContext, Primitive};
pub use pass::{render_scene, RenderStats};
pub use primitive::PrimitiveRenderer;
pub use recorder::{CommandRecorder, GfxCommand, Submission};
