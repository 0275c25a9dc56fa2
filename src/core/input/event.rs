//=========================================================================
// Input Events
//=========================================================================
//
// Host-neutral representation of raw keyboard and mouse events.
//
// Every host backend (winit, headless) translates its native events into
// `InputEvent`s. Devices consume them and flip their primitive buttons and
// axes inside the input graph.
//
// Event Flow:
// ```text
// Host (winit / headless remote)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputDevices → Keyboard / Mouse
//         ↓
//    InputGraph primitives (DeviceButton / DeviceAxis)
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// `Back`/`Forward` are the two thumb buttons, exposed by the mouse
/// device as `x1`/`x2`. Anything else the host reports maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Left and right variants of modifier keys collapse onto one code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Function Keys ----------------------------------------------------

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Modifier Keys ----------------------------------------------------

    /// Ctrl on every platform (the Command key on macOS is `Meta`).
    Control,
    Shift,
    Alt,
    /// Windows / Super / Command key.
    Meta,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Key the host reported but the input layer does not map.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from a host.
///
/// `MouseMoved` carries a position delta in pixels since the previous
/// move event, not an absolute position; hosts that only report absolute
/// positions compute the delta themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    MouseButtonDown(MouseButton),
    MouseButtonUp(MouseButton),

    /// Cursor movement since the last move event, in pixels.
    MouseMoved { dx: f32, dy: f32 },

    /// Vertical wheel movement. Positive scrolls up.
    MouseScrolled { delta: f32 },

    /// Unrecognized or unsupported event. Ignored by every device.
    Unidentified,
}

impl InputEvent {
    /// Returns `true` for keyboard events.
    pub fn is_keyboard(&self) -> bool {
        matches!(self, Self::KeyDown(_) | Self::KeyUp(_))
    }

    /// Returns `true` for mouse button, motion, and wheel events.
    pub fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MouseButtonDown(_)
                | Self::MouseButtonUp(_)
                | Self::MouseMoved { .. }
                | Self::MouseScrolled { .. }
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
