use crate::coords::{ColorRgba, Vec2};

use super::{GraphicsContext, Primitive};

/// One call made against a [`CommandRecorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum GfxCommand {
    Clear(ColorRgba),
    SetPointSize(f32),
    SetColor(ColorRgba),
    Draw { primitive: Primitive, vertices: Vec<Vec2> },
}

/// A draw call with the sticky state that was active when it was issued.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub primitive: Primitive,
    pub vertices: Vec<Vec2>,
    pub color: ColorRgba,
    pub point_size: f32,
}

/// [`GraphicsContext`] that records every call in order.
///
/// Used by tests and by anything that wants to inspect what a scene would
/// draw without a GPU.
#[derive(Debug, Default, Clone)]
pub struct CommandRecorder {
    commands: Vec<GfxCommand>,
}

impl CommandRecorder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw command log in issue order.
    #[inline]
    pub fn commands(&self) -> &[GfxCommand] {
        &self.commands
    }

    /// Drains the log, leaving the recorder empty.
    #[inline]
    pub fn take(&mut self) -> Vec<GfxCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Draw calls issued after the most recent clear, with resolved state.
    ///
    /// Initial state before any `set_*` call is opaque black and a point size
    /// of 1, matching the GPU renderer.
    pub fn submissions(&self) -> Vec<Submission> {
        let mut color = ColorRgba::black();
        let mut point_size = 1.0;
        let mut out = Vec::new();

        for cmd in &self.commands {
            match cmd {
                GfxCommand::Clear(_) => out.clear(),
                GfxCommand::SetPointSize(s) => point_size = *s,
                GfxCommand::SetColor(c) => color = *c,
                GfxCommand::Draw { primitive, vertices } => out.push(Submission {
                    primitive: *primitive,
                    vertices: vertices.clone(),
                    color,
                    point_size,
                }),
            }
        }

        out
    }

    /// Number of clears recorded.
    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, GfxCommand::Clear(_)))
            .count()
    }
}

impl GraphicsContext for CommandRecorder {
    fn clear(&mut self, color: ColorRgba) {
        self.commands.push(GfxCommand::Clear(color));
    }

    fn set_point_size(&mut self, size: f32) {
        self.commands.push(GfxCommand::SetPointSize(size));
    }

    fn set_color(&mut self, color: ColorRgba) {
        self.commands.push(GfxCommand::SetColor(color));
    }

    fn draw(&mut self, primitive: Primitive, vertices: &[Vec2]) {
        self.commands.push(GfxCommand::Draw { primitive, vertices: vertices.to_vec() });
    }
}
