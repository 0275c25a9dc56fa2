//=========================================================================
// Keyboard
//=========================================================================
//
// Keyboard device. One `DeviceButton` per mapped key, no axes.
//
// Button ids: "A".."Z", "0".."9", "F1".."F12", "Control", "Meta", "Alt",
// "Shift", "Tab", "Enter", "Backspace", "Escape", "Space", "Delete",
// "Left", "Right", "Up", "Down".
//
//=========================================================================

use std::collections::HashMap;

use log::trace;

use super::primitive::DeviceButton;
use super::InputDevice;
use crate::core::input::event::{InputEvent, KeyCode};
use crate::core::input::graph::InputGraph;
use crate::core::input::node::{AxisId, ButtonId};

//=== Constants ===========================================================

pub const KEYBOARD_ID: &str = "Keyboard";

/// Display names of the Control and Meta keys. macOS swaps the labels.
#[cfg(target_os = "macos")]
const CONTROL_NAMES: (&str, &str) = ("Command", "Control");
#[cfg(not(target_os = "macos"))]
const CONTROL_NAMES: (&str, &str) = ("Control", "Meta");

//--- Key Table -----------------------------------------------------------

/// `(code, id, name)` for every key, in registration order. An empty name
/// means "same as id".
const KEYS: &[(KeyCode, &str, &str)] = {
    use KeyCode::*;
    &[
        (KeyA, "A", ""), (KeyB, "B", ""), (KeyC, "C", ""), (KeyD, "D", ""),
        (KeyE, "E", ""), (KeyF, "F", ""), (KeyG, "G", ""), (KeyH, "H", ""),
        (KeyI, "I", ""), (KeyJ, "J", ""), (KeyK, "K", ""), (KeyL, "L", ""),
        (KeyM, "M", ""), (KeyN, "N", ""), (KeyO, "O", ""), (KeyP, "P", ""),
        (KeyQ, "Q", ""), (KeyR, "R", ""), (KeyS, "S", ""), (KeyT, "T", ""),
        (KeyU, "U", ""), (KeyV, "V", ""), (KeyW, "W", ""), (KeyX, "X", ""),
        (KeyY, "Y", ""), (KeyZ, "Z", ""),
        (Digit0, "0", ""), (Digit1, "1", ""), (Digit2, "2", ""), (Digit3, "3", ""),
        (Digit4, "4", ""), (Digit5, "5", ""), (Digit6, "6", ""), (Digit7, "7", ""),
        (Digit8, "8", ""), (Digit9, "9", ""),
        (F1, "F1", ""), (F2, "F2", ""), (F3, "F3", ""), (F4, "F4", ""),
        (F5, "F5", ""), (F6, "F6", ""), (F7, "F7", ""), (F8, "F8", ""),
        (F9, "F9", ""), (F10, "F10", ""), (F11, "F11", ""), (F12, "F12", ""),
        (Control, "Control", CONTROL_NAMES.0),
        (Meta, "Meta", CONTROL_NAMES.1),
        (Alt, "Alt", ""),
        (Shift, "Shift", ""),
        (Tab, "Tab", ""),
        (Enter, "Enter", ""),
        (Backspace, "Backspace", ""),
        (Escape, "Escape", ""),
        (Space, "Space", ""),
        (Delete, "Delete", ""),
        (ArrowLeft, "Left", "Left Arrow"),
        (ArrowRight, "Right", "Right Arrow"),
        (ArrowUp, "Up", "Up Arrow"),
        (ArrowDown, "Down", "Down Arrow"),
    ]
};

//=== Keyboard ============================================================

pub struct Keyboard {
    keys: Vec<(&'static str, ButtonId)>,
    by_code: HashMap<KeyCode, ButtonId>,
}

impl Keyboard {
    /// Registers one button per key in `graph`.
    pub fn new(graph: &mut InputGraph) -> Self {
        let mut keys = Vec::with_capacity(KEYS.len());
        let mut by_code = HashMap::with_capacity(KEYS.len());

        for &(code, id, name) in KEYS {
            let name = if name.is_empty() { id } else { name };
            let button = graph.add_button(DeviceButton::new(id, name, KEYBOARD_ID));
            keys.push((id, button));
            by_code.insert(code, button);
        }

        Self { keys, by_code }
    }

    /// Graph handle of the button bound to a key code.
    pub fn key(&self, code: KeyCode) -> Option<ButtonId> {
        self.by_code.get(&code).copied()
    }

    fn set_key(&self, code: KeyCode, down: bool, graph: &mut InputGraph) -> bool {
        let Some(id) = self.key(code) else {
            trace!(target: "input", "Keyboard ignores {:?}", code);
            return false;
        };
        match graph.button_as_mut::<DeviceButton>(id) {
            Some(button) => {
                button.set_down(down);
                true
            }
            None => false,
        }
    }
}

impl InputDevice for Keyboard {
    fn id(&self) -> &str {
        KEYBOARD_ID
    }

    fn name(&self) -> &str {
        KEYBOARD_ID
    }

    fn has_axis(&self, _id: &str) -> bool {
        false
    }

    fn axes(&self) -> Vec<&str> {
        Vec::new()
    }

    fn buttons(&self) -> Vec<&str> {
        self.keys.iter().map(|(id, _)| *id).collect()
    }

    fn axis(&self, _id: &str) -> Option<AxisId> {
        None
    }

    fn button(&self, id: &str) -> Option<ButtonId> {
        self.keys
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, button)| *button)
    }

    fn handle_event(&mut self, event: &InputEvent, graph: &mut InputGraph) -> bool {
        match *event {
            InputEvent::KeyDown(code) => self.set_key(code, true, graph),
            InputEvent::KeyUp(code) => self.set_key(code, false, graph),
            _ => false,
        }
    }

    fn update(&mut self, _graph: &mut InputGraph, _dt: f32) {}
}

//=========================================================================
// Unit Tests
//=========================================================================
