use stipple_engine::coords::{ColorChannel, ColorRgba};
use stipple_engine::input::{Key, Modifiers};
use stipple_engine::scene::ShapeKind;

/// Channel step per key press (a slider tick of 10 out of 100).
pub const CHANNEL_STEP: f32 = 0.1;
/// Size step per key press.
pub const SIZE_STEP: f32 = 5.0;

/// A canvas command bound to a key.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Control {
    SetKind(ShapeKind),
    SetColor(ColorRgba),
    AdjustChannel { channel: ColorChannel, delta: f32 },
    AdjustSize(f32),
    Clear,
    Exit,
}

/// Key bindings:
///
/// | key                  | control                          |
/// |----------------------|----------------------------------|
/// | `P` / `T` / `C`      | point / triangle / circle        |
/// | `1` / `2`            | red / green preset               |
/// | `R` / `G` / `B`      | channel up, down with Shift      |
/// | `Up` / `Down`        | size up / down                   |
/// | `Backspace`/`Delete` | clear                            |
/// | `Escape`             | exit                             |
pub fn control_for_key(key: Key, modifiers: Modifiers) -> Option<Control> {
    let step = if modifiers.shift { -CHANNEL_STEP } else { CHANNEL_STEP };
    let channel = |channel| Control::AdjustChannel { channel, delta: step };

    let control = match key {
        Key::P => Control::SetKind(ShapeKind::Point),
        Key::T => Control::SetKind(ShapeKind::Triangle),
        Key::C => Control::SetKind(ShapeKind::Circle),

        Key::Digit1 => Control::SetColor(ColorRgba::red()),
        Key::Digit2 => Control::SetColor(ColorRgba::green()),

        Key::R => channel(ColorChannel::Red),
        Key::G => channel(ColorChannel::Green),
        Key::B => channel(ColorChannel::Blue),

        Key::ArrowUp => Control::AdjustSize(SIZE_STEP),
        Key::ArrowDown => Control::AdjustSize(-SIZE_STEP),

        Key::Backspace | Key::Delete => Control::Clear,
        Key::Escape => Control::Exit,

        _ => return None,
    };

    Some(control)
}

/// One-line key summary logged at startup.
pub const HELP: &str = "keys: P/T/C shape, 1/2 red/green, R/G/B channel (+Shift lowers), \
                        Up/Down size, Backspace clear, Esc quit";

#[cfg(test)]
mod tests {
    use super::*;

    fn shift() -> Modifiers {
        Modifiers { shift: true, ..Default::default() }
    }

    #[test]
    fn shape_keys() {
        let m = Modifiers::default();
        assert_eq!(control_for_key(Key::P, m), Some(Control::SetKind(ShapeKind::Point)));
        assert_eq!(control_for_key(Key::T, m), Some(Control::SetKind(ShapeKind::Triangle)));
        assert_eq!(control_for_key(Key::C, m), Some(Control::SetKind(ShapeKind::Circle)));
    }

    #[test]
    fn color_presets() {
        let m = Modifiers::default();
        assert_eq!(control_for_key(Key::Digit1, m), Some(Control::SetColor(ColorRgba::red())));
        assert_eq!(control_for_key(Key::Digit2, m), Some(Control::SetColor(ColorRgba::green())));
    }

    #[test]
    fn shift_flips_channel_direction() {
        assert_eq!(
            control_for_key(Key::G, Modifiers::default()),
            Some(Control::AdjustChannel { channel: ColorChannel::Green, delta: CHANNEL_STEP })
        );
        assert_eq!(
            control_for_key(Key::B, shift()),
            Some(Control::AdjustChannel { channel: ColorChannel::Blue, delta: -CHANNEL_STEP })
        );
    }

    #[test]
    fn size_clear_and_exit() {
        let m = Modifiers::default();
        assert_eq!(control_for_key(Key::ArrowDown, m), Some(Control::AdjustSize(-SIZE_STEP)));
        assert_eq!(control_for_key(Key::Delete, m), Some(Control::Clear));
        assert_eq!(control_for_key(Key::Backspace, m), Some(Control::Clear));
        assert_eq!(control_for_key(Key::Escape, m), Some(Control::Exit));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(control_for_key(Key::Space, Modifiers::default()), None);
        assert_eq!(control_for_key(Key::Unknown(0), shift()), None);
    }
}
