//=========================================================================
// Mouse
//=========================================================================
//
// Mouse device.
//
// Buttons: "left", "middle", "right", "x1", "x2", "scrollup", "scrolldown"
// Axes:    "Horizontal", "Vertical"
//
// Axes carry the cursor motion accumulated during the current tick,
// scaled by `MOUSE_MOTION_SCALE`. Wheel movement presses a scroll button
// for a single tick. Both are cleared in `update`, which runs after the
// graph snapshot, so scroll buttons still report `is_pressed` for the
// tick they happened in and `is_released` on the next one.
//
//=========================================================================

use log::trace;

use super::primitive::{DeviceAxis, DeviceButton};
use super::InputDevice;
use crate::core::input::event::{InputEvent, MouseButton};
use crate::core::input::graph::InputGraph;
use crate::core::input::node::{AxisId, ButtonId};

//=== Constants ===========================================================

pub const MOUSE_ID: &str = "Mouse";

/// Axis units per pixel of cursor motion.
pub const MOUSE_MOTION_SCALE: f32 = 0.001;

const BUTTONS: [(&str, &str); 7] = [
    ("left", "Left Click"),
    ("middle", "Middle Click"),
    ("right", "Right Click"),
    ("x1", "X1"),
    ("x2", "X2"),
    ("scrollup", "Scroll Up"),
    ("scrolldown", "Scroll Down"),
];

const AXES: [(&str, &str); 2] = [
    ("Horizontal", "Move (Horizontal)"),
    ("Vertical", "Move (Vertical)"),
];

const SCROLL_UP: usize = 5;
const SCROLL_DOWN: usize = 6;
const HORIZONTAL: usize = 0;
const VERTICAL: usize = 1;

//=== Mouse ===============================================================

pub struct Mouse {
    buttons: [ButtonId; 7],
    axes: [AxisId; 2],
    motion: (f32, f32),
}

impl Mouse {
    /// Registers the mouse buttons and axes in `graph`.
    pub fn new(graph: &mut InputGraph) -> Self {
        Self {
            buttons: BUTTONS.map(|(id, name)| graph.add_button(DeviceButton::new(id, name, MOUSE_ID))),
            axes: AXES.map(|(id, name)| graph.add_axis(DeviceAxis::new(id, name, MOUSE_ID))),
            motion: (0.0, 0.0),
        }
    }

    fn button_index(button: MouseButton) -> Option<usize> {
        match button {
            MouseButton::Left => Some(0),
            MouseButton::Middle => Some(1),
            MouseButton::Right => Some(2),
            MouseButton::Back => Some(3),
            MouseButton::Forward => Some(4),
            MouseButton::Other => None,
        }
    }

    fn set_button(&self, index: usize, down: bool, graph: &mut InputGraph) -> bool {
        match graph.button_as_mut::<DeviceButton>(self.buttons[index]) {
            Some(button) => {
                button.set_down(down);
                true
            }
            None => false,
        }
    }

    fn set_axis(&self, index: usize, value: f32, graph: &mut InputGraph) {
        if let Some(axis) = graph.axis_as_mut::<DeviceAxis>(self.axes[index]) {
            axis.set_value(value);
        }
    }

    fn click(&self, button: MouseButton, down: bool, graph: &mut InputGraph) -> bool {
        match Self::button_index(button) {
            Some(index) => self.set_button(index, down, graph),
            None => {
                trace!(target: "input", "Mouse ignores {:?}", button);
                false
            }
        }
    }
}

impl InputDevice for Mouse {
    fn id(&self) -> &str {
        MOUSE_ID
    }

    fn name(&self) -> &str {
        MOUSE_ID
    }

    fn axes(&self) -> Vec<&str> {
        AXES.iter().map(|(id, _)| *id).collect()
    }

    fn buttons(&self) -> Vec<&str> {
        BUTTONS.iter().map(|(id, _)| *id).collect()
    }

    fn axis(&self, id: &str) -> Option<AxisId> {
        AXES.iter()
            .position(|(axis, _)| *axis == id)
            .map(|index| self.axes[index])
    }

    fn button(&self, id: &str) -> Option<ButtonId> {
        BUTTONS
            .iter()
            .position(|(button, _)| *button == id)
            .map(|index| self.buttons[index])
    }

    fn handle_event(&mut self, event: &InputEvent, graph: &mut InputGraph) -> bool {
        match *event {
            InputEvent::MouseButtonDown(button) => self.click(button, true, graph),
            InputEvent::MouseButtonUp(button) => self.click(button, false, graph),
            InputEvent::MouseMoved { dx, dy } => {
                self.motion.0 += dx;
                self.motion.1 += dy;
                self.set_axis(HORIZONTAL, self.motion.0 * MOUSE_MOTION_SCALE, graph);
                self.set_axis(VERTICAL, self.motion.1 * MOUSE_MOTION_SCALE, graph);
                true
            }
            InputEvent::MouseScrolled { delta } if delta > 0.0 => self.set_button(SCROLL_UP, true, graph),
            InputEvent::MouseScrolled { delta } if delta < 0.0 => self.set_button(SCROLL_DOWN, true, graph),
            _ => false,
        }
    }

    fn update(&mut self, graph: &mut InputGraph, _dt: f32) {
        self.motion = (0.0, 0.0);
        self.set_axis(HORIZONTAL, 0.0, graph);
        self.set_axis(VERTICAL, 0.0, graph);
        self.set_button(SCROLL_UP, false, graph);
        self.set_button(SCROLL_DOWN, false, graph);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
