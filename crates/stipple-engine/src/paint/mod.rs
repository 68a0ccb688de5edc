//! GPU-facing paint model.
//!
//! Shapes carry straight-alpha `coords::ColorRgba`; renderers blend in
//! premultiplied alpha, so colors cross into this module right before upload.

pub mod color;

pub use color::Color;
