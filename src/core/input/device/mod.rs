//=========================================================================
// Input Devices
//=========================================================================
//
// Physical devices and the enumerator the kernel talks to.
//
// Architecture:
// ```text
// InputDevices (host input enumerator)
//   └─ StandardInputs
//        ├─ Keyboard ─┐
//        └─ Mouse ────┴─ own handles to DeviceButton / DeviceAxis nodes
//                        living in the InputGraph
// ```
//
// Devices never own their primitives. They register them in the graph at
// construction and afterwards only flip their state in response to
// `InputEvent`s.
//
// Per tick:
//   1. host events → `handle_event` (any number of times)
//   2. graph snapshot (edge detection)
//   3. `update` → devices clear per-tick state (mouse motion, wheel)
//
//=========================================================================

//=== Module Declarations =================================================

mod keyboard;
mod mouse;
mod primitive;

//=== Public API ==========================================================

pub use keyboard::{Keyboard, KEYBOARD_ID};
pub use mouse::{Mouse, MOUSE_ID, MOUSE_MOTION_SCALE};
pub use primitive::{DeviceAxis, DeviceButton};

//=== External Dependencies ===============================================

use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::event::InputEvent;
use super::graph::InputGraph;
use super::node::{AxisId, ButtonId};

//=== InputDevice =========================================================

/// A physical device exposing buttons and axes by string id.
pub trait InputDevice {
    /// Unique id of this device.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Returns `true` if the device has an axis or button named `id`.
    fn has_input(&self, id: &str) -> bool {
        self.has_axis(id) || self.has_button(id)
    }

    fn has_axis(&self, id: &str) -> bool {
        self.axis(id).is_some()
    }

    fn has_button(&self, id: &str) -> bool {
        self.button(id).is_some()
    }

    /// Ids of every axis on this device.
    fn axes(&self) -> Vec<&str>;

    /// Ids of every button on this device.
    fn buttons(&self) -> Vec<&str>;

    /// Graph handle of the axis named `id`.
    fn axis(&self, id: &str) -> Option<AxisId>;

    /// Graph handle of the button named `id`.
    fn button(&self, id: &str) -> Option<ButtonId>;

    /// Applies a host event. Returns `true` if the device consumed it.
    fn handle_event(&mut self, event: &InputEvent, graph: &mut InputGraph) -> bool;

    /// Per-tick housekeeping, run after the graph snapshot.
    fn update(&mut self, graph: &mut InputGraph, dt: f32);

    /// Removes this device's primitives from `graph`. Handles and
    /// mappings pointing at them go stale.
    fn release(&self, graph: &mut InputGraph) {
        for button in self.buttons().into_iter().filter_map(|id| self.button(id)) {
            graph.remove_button(button);
        }
        for axis in self.axes().into_iter().filter_map(|id| self.axis(id)) {
            graph.remove_axis(axis);
        }
    }
}

//=== InputDevices ========================================================

/// Host input enumerator: the set of devices a host provides.
pub trait InputDevices {
    fn has_device(&self, id: &str) -> bool {
        self.devices().iter().any(|device| *device == id)
    }

    /// Ids of every device.
    fn devices(&self) -> Vec<&str>;

    /// Device with the given id. Unknown ids are logged and yield `None`.
    fn device(&self, id: &str) -> Option<&dyn InputDevice>;

    /// Routes a host event to the device that handles it.
    fn handle_event(&mut self, event: &InputEvent, graph: &mut InputGraph) -> bool;

    /// Ticks every device.
    fn update(&mut self, graph: &mut InputGraph, dt: f32);

    /// Releases every device's primitives. Called when the host shuts down.
    fn release(&self, graph: &mut InputGraph) {
        for device in self.devices().into_iter().filter_map(|id| self.device(id)) {
            device.release(graph);
        }
    }
}

//=== StandardInputs ======================================================

/// Keyboard plus mouse. The enumerator every bundled host provides.
pub struct StandardInputs {
    keyboard: Keyboard,
    mouse: Mouse,
}

impl StandardInputs {
    /// Registers keyboard and mouse primitives in `graph`.
    pub fn new(graph: &mut InputGraph) -> Self {
        Self {
            keyboard: Keyboard::new(graph),
            mouse: Mouse::new(graph),
        }
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn mouse(&self) -> &Mouse {
        &self.mouse
    }
}

impl InputDevices for StandardInputs {
    fn devices(&self) -> Vec<&str> {
        vec![self.keyboard.id(), self.mouse.id()]
    }

    fn device(&self, id: &str) -> Option<&dyn InputDevice> {
        if id == self.keyboard.id() {
            Some(&self.keyboard)
        } else if id == self.mouse.id() {
            Some(&self.mouse)
        } else {
            warn!(target: "input", "Unknown input device id: {}", id);
            None
        }
    }

    fn handle_event(&mut self, event: &InputEvent, graph: &mut InputGraph) -> bool {
        let handled = if event.is_keyboard() {
            self.keyboard.handle_event(event, graph)
        } else if event.is_mouse() {
            self.mouse.handle_event(event, graph)
        } else {
            false
        };

        if !handled {
            trace!(target: "input", "Unhandled input event: {:?}", event);
        }
        handled
    }

    fn update(&mut self, graph: &mut InputGraph, dt: f32) {
        self.keyboard.update(graph, dt);
        self.mouse.update(graph, dt);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
