//! Stipple engine crate.
//!
//! Owns the shape scene, the graphics-context abstraction the shapes draw
//! against, and the platform + GPU runtime that hosts it.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
