use std::collections::HashSet;

use super::types::{
    ButtonState,
    InputEvent,
    Modifiers,
    MouseButton,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for a window.
///
/// Folded from the event stream so handlers can ask "is the primary button
/// held right now?" while processing a pointer move.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    /// Pointer position in logical pixels; `None` until the first move and
    /// while outside the window.
    pub pointer_pos: Option<(f32, f32)>,

    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::Focused(focused) => {
                // Releases that happen while unfocused are never delivered.
                if !*focused {
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            // Leaving the window ends any drag; the release may never arrive.
            InputEvent::PointerLeft => {
                self.pointer_pos = None;
                self.buttons_down.clear();
            }

            InputEvent::Key { modifiers, .. } => self.modifiers = *modifiers,

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;
                match state {
                    ButtonState::Pressed => self.buttons_down.insert(*button),
                    ButtonState::Released => self.buttons_down.remove(button),
                };
            }
        }
    }

    /// Builds a button event at the tracked pointer position.
    ///
    /// Platforms report buttons without a position. Returns `None` when the
    /// pointer position is unknown, so no event is placed at a made-up spot.
    pub fn button_event(&self, button: MouseButton, state: ButtonState) -> Option<PointerButtonEvent> {
        let (x, y) = self.pointer_pos?;
        Some(PointerButtonEvent { button, state, x, y, modifiers: self.modifiers })
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyState};

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: ButtonState::Pressed,
            x: 3.0,
            y: 4.0,
            modifiers: Modifiers::default(),
        })
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: ButtonState::Released,
            x: 3.0,
            y: 4.0,
            modifiers: Modifiers::default(),
        })
    }

    // ── buttons ───────────────────────────────────────────────────────────

    #[test]
    fn button_press_and_release_tracked() {
        let mut s = InputState::default();
        s.apply_event(&press(MouseButton::Left));
        assert!(s.button_down(MouseButton::Left));
        assert_eq!(s.pointer_pos, Some((3.0, 4.0)));

        s.apply_event(&release(MouseButton::Left));
        assert!(!s.button_down(MouseButton::Left));
    }

    #[test]
    fn focus_loss_releases_buttons() {
        let mut s = InputState::default();
        s.apply_event(&press(MouseButton::Left));
        s.apply_event(&InputEvent::Focused(false));
        assert!(s.buttons_down.is_empty());
    }

    // ── button events ─────────────────────────────────────────────────────

    #[test]
    fn button_event_without_known_pointer_is_dropped() {
        let s = InputState::default();
        assert_eq!(s.button_event(MouseButton::Left, ButtonState::Pressed), None);
    }

    #[test]
    fn button_event_uses_tracked_pointer_and_modifiers() {
        let mut s = InputState::default();
        let shift = Modifiers { shift: true, ..Default::default() };
        s.apply_event(&InputEvent::ModifiersChanged(shift));
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 12.0, y: 34.0 }));

        let ev = s.button_event(MouseButton::Left, ButtonState::Pressed);
        assert_eq!(
            ev,
            Some(PointerButtonEvent {
                button: MouseButton::Left,
                state: ButtonState::Pressed,
                x: 12.0,
                y: 34.0,
                modifiers: shift,
            })
        );
    }

    #[test]
    fn button_event_dropped_after_pointer_left() {
        let mut s = InputState::default();
        s.apply_event(&press(MouseButton::Left));
        s.apply_event(&InputEvent::PointerLeft);
        assert_eq!(s.pointer_pos, None);
        assert!(!s.button_down(MouseButton::Left));
        assert_eq!(s.button_event(MouseButton::Left, ButtonState::Pressed), None);
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn key_events_carry_modifiers_into_state() {
        let mut s = InputState::default();
        let ctrl = Modifiers { ctrl: true, ..Default::default() };
        s.apply_event(&InputEvent::Key {
            key: Key::A,
            state: KeyState::Pressed,
            modifiers: ctrl,
            repeat: false,
        });
        assert_eq!(s.modifiers, ctrl);
    }
}
