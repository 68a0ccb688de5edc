//! Stipple studio: an interactive painter built on `stipple-engine`.
//!
//! Left click stamps the selected shape at the pointer; dragging keeps
//! stamping. Keys edit the selection (see [`controls::control_for_key`]).

pub mod canvas;
pub mod config;
pub mod controls;
pub mod selection;
pub mod studio;

pub use canvas::{Canvas, CanvasApp};
pub use config::CanvasConfig;
pub use selection::Selection;
pub use studio::Studio;
