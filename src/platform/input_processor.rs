//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit events into engine InputEvents.
//
// Architecture:
//   winit WindowEvent → InputProcessor → InputEvent → InputDevices
//
// Stateful cursor tracking: winit reports absolute cursor positions,
// the engine wants per-event deltas. The first position after the cursor
// enters the window yields no event. Unmapped keys are filtered
// (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, MouseScrollDelta},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode, MouseButton};

/// Pixels per wheel line, for hosts reporting pixel deltas.
const PIXELS_PER_LINE: f64 = 40.0;

//=== InputProcessor ======================================================

/// Converts winit events to engine InputEvents.
pub(crate) struct InputProcessor {
    last_cursor: Option<PhysicalPosition<f64>>,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self { last_cursor: None }
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a winit KeyEvent (filters unmapped keys and key repeat).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        if key_event.repeat {
            return None;
        }

        let PhysicalKey::Code(code) = key_event.physical_key else {
            return None;
        };

        self.process_key(KeyCode::from(code), key_event.state)
    }

    pub(crate) fn process_mouse_button(&self, button: WinitMouseButton, state: ElementState) -> InputEvent {
        let button = MouseButton::from(button);

        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown(button),
            ElementState::Released => InputEvent::MouseButtonUp(button),
        }
    }

    /// Converts an absolute cursor position into a motion delta.
    pub(crate) fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<InputEvent> {
        let previous = self.last_cursor.replace(position)?;

        let dx = (position.x - previous.x) as f32;
        let dy = (position.y - previous.y) as f32;
        if dx == 0.0 && dy == 0.0 {
            return None;
        }

        Some(InputEvent::MouseMoved { dx, dy })
    }

    /// Forgets the cursor position so re-entry does not produce a jump.
    pub(crate) fn process_cursor_left(&mut self) {
        self.last_cursor = None;
    }

    /// Converts a wheel event. Only the vertical component is reported.
    pub(crate) fn process_mouse_wheel(&self, delta: MouseScrollDelta) -> Option<InputEvent> {
        let delta = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_LINE) as f32,
        };

        (delta != 0.0).then_some(InputEvent::MouseScrolled { delta })
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_key(&self, key: KeyCode, state: ElementState) -> Option<InputEvent> {
        if key == KeyCode::Unidentified {
            return None;
        }

        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown(key),
            ElementState::Released => InputEvent::KeyUp(key),
        })
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts winit physical key codes to engine key codes.
///
/// Left and right modifier keys collapse onto one code. Unmapped keys
/// (F13-F24, numpad, media keys) return `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------

            Digit0 => KeyCode::Digit0,
            Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2,
            Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4,
            Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6,
            Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8,
            Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Function Keys ------------------------------------------------

            F1 => KeyCode::F1,
            F2 => KeyCode::F2,
            F3 => KeyCode::F3,
            F4 => KeyCode::F4,
            F5 => KeyCode::F5,
            F6 => KeyCode::F6,
            F7 => KeyCode::F7,
            F8 => KeyCode::F8,
            F9 => KeyCode::F9,
            F10 => KeyCode::F10,
            F11 => KeyCode::F11,
            F12 => KeyCode::F12,

            //--- Arrows -------------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Modifiers ----------------------------------------------------

            ControlLeft | ControlRight => KeyCode::Control,
            ShiftLeft | ShiftRight => KeyCode::Shift,
            AltLeft | AltRight => KeyCode::Alt,
            SuperLeft | SuperRight => KeyCode::Meta,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,

            _ => KeyCode::Unidentified,
        }
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            WinitMouseButton::Back => MouseButton::Back,
            WinitMouseButton::Forward => MouseButton::Forward,
            WinitMouseButton::Other(_) => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_states_map_to_down_and_up() {
        let processor = InputProcessor::new();

        assert_eq!(
            processor.process_key(KeyCode::KeyS, ElementState::Pressed),
            Some(InputEvent::KeyDown(KeyCode::KeyS))
        );
        assert_eq!(
            processor.process_key(KeyCode::KeyS, ElementState::Released),
            Some(InputEvent::KeyUp(KeyCode::KeyS))
        );
    }

    #[test]
    fn unidentified_keys_are_filtered() {
        let processor = InputProcessor::new();

        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
        assert_eq!(processor.process_key(KeyCode::Unidentified, ElementState::Pressed), None);
    }

    #[test]
    fn keycode_conversion() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::KeyA);
        assert_eq!(KeyCode::from(WinitKeyCode::F12), KeyCode::F12);
        assert_eq!(KeyCode::from(WinitKeyCode::Enter), KeyCode::Enter);
        assert_eq!(KeyCode::from(WinitKeyCode::ControlRight), KeyCode::Control);
        assert_eq!(KeyCode::from(WinitKeyCode::SuperLeft), KeyCode::Meta);
    }

    #[test]
    fn mouse_button_conversion() {
        let processor = InputProcessor::new();

        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Back, ElementState::Pressed),
            InputEvent::MouseButtonDown(MouseButton::Back)
        );
        assert_eq!(MouseButton::from(WinitMouseButton::Other(9)), MouseButton::Other);
    }

    #[test]
    fn cursor_positions_become_deltas() {
        let mut processor = InputProcessor::new();

        assert_eq!(processor.process_cursor_moved(PhysicalPosition::new(100.0, 100.0)), None);
        assert_eq!(
            processor.process_cursor_moved(PhysicalPosition::new(110.0, 95.0)),
            Some(InputEvent::MouseMoved { dx: 10.0, dy: -5.0 })
        );
        assert_eq!(processor.process_cursor_moved(PhysicalPosition::new(110.0, 95.0)), None);
    }

    #[test]
    fn cursor_reentry_does_not_jump() {
        let mut processor = InputProcessor::new();
        processor.process_cursor_moved(PhysicalPosition::new(0.0, 0.0));

        processor.process_cursor_left();

        assert_eq!(processor.process_cursor_moved(PhysicalPosition::new(500.0, 500.0)), None);
    }

    #[test]
    fn wheel_reports_vertical_lines() {
        let processor = InputProcessor::new();

        assert_eq!(
            processor.process_mouse_wheel(MouseScrollDelta::LineDelta(0.0, -1.0)),
            Some(InputEvent::MouseScrolled { delta: -1.0 })
        );
        assert_eq!(
            processor.process_mouse_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 80.0))),
            Some(InputEvent::MouseScrolled { delta: 2.0 })
        );
        assert_eq!(processor.process_mouse_wheel(MouseScrollDelta::LineDelta(3.0, 0.0)), None);
    }
}
