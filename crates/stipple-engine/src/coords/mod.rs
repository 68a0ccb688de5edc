//! Coordinate and geometry types shared by the scene, input and renderers.
//!
//! Two spaces are in play:
//! - Surface pixels: origin top-left, +X right, +Y down (pointer events, viewport)
//! - Normalized device coordinates (NDC): `[-1, 1]` per axis, origin at the
//!   surface center, +Y up (shape positions)
//!
//! `input::to_normalized` is the only place that converts between them.

mod color;
mod rect;
mod vec2;
mod viewport;

pub use color::{ColorChannel, ColorRgba};
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
