//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform events into [`InputEvent`]s via
//! `platform::winit`, folds them into [`InputState`], and hands each event
//! to the application as it arrives.

mod normalize;
pub(crate) mod platform;
mod state;
mod types;

pub use normalize::to_normalized;
pub use state::InputState;
pub use types::{
    ButtonState,
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    PointerButtonEvent,
    PointerMoveEvent,
};
