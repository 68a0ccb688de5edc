//! Retained shape scene.
//!
//! Responsibilities:
//! - define the closed set of shape variants and their geometry
//! - store shapes in paint order (insertion order, later on top)
//! - keep per-variant geometry isolated in `scene::shapes::*`
//!
//! Shapes only know how to describe themselves to a `render::GraphicsContext`;
//! replaying the whole list lives in `render::render_scene`.

mod list;

pub mod shapes;

pub use list::Scene;
pub use shapes::{Shape, ShapeKind};
