use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::input::{InputEvent, InputState};

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum AppControl {
    #[default]
    Continue,
    /// Something visible changed; schedule a frame.
    Redraw,
    Exit,
}

impl AppControl {
    /// Combines two directives; `Exit` wins over `Redraw` wins over `Continue`.
    pub fn merge(self, other: AppControl) -> AppControl {
        use AppControl::*;
        match (self, other) {
            (Exit, _) | (_, Exit) => Exit,
            (Redraw, _) | (_, Redraw) => Redraw,
            _ => Continue,
        }
    }
}

/// Application contract implemented by higher layers.
///
/// The runtime does not redraw on its own after startup and resizes. An app
/// that changes what it shows returns [`AppControl::Redraw`].
pub trait App {
    /// Called for each translated input event, after `input` has absorbed it.
    fn on_input(
        &mut self,
        window: &WindowCtx<'_>,
        input: &InputState,
        event: &InputEvent,
    ) -> AppControl {
        let _ = (window, input, event);
        AppControl::Continue
    }

    /// Called for raw window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}

#[cfg(test)]
mod tests {
    use super::AppControl::*;

    #[test]
    fn merge_prefers_exit_then_redraw() {
        assert_eq!(Continue.merge(Continue), Continue);
        assert_eq!(Continue.merge(Redraw), Redraw);
        assert_eq!(Redraw.merge(Continue), Redraw);
        assert_eq!(Redraw.merge(Exit), Exit);
        assert_eq!(Exit.merge(Continue), Exit);
    }
}
