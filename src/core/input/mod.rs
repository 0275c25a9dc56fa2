//=========================================================================
// Input System
//=========================================================================
//
// Composable virtual input.
//
// Architecture:
// ```text
// Input (facade, owned by the kernel)
//   ├─ graph:   InputGraph   (every primitive and composite node)
//   ├─ buttons: ButtonMap    ("Jump" → ButtonId)
//   └─ axes:    AxisMap      ("MoveX" → AxisId)
// ```
//
// Gameplay code queries virtual controls by name. Unmapped names log a
// warning and read as "never pressed / zero".
//
// Example wiring:
// ```text
// Save = Or(And(Control, S), F2)
// MoveX = ButtonAxis { Left: (0, -1), Right: (0, +1) }
// ```
//
//=========================================================================

//=== Module Declarations =================================================

pub mod composite;
pub mod device;
pub mod event;
mod graph;
mod map;
mod node;

//=== Public API ==========================================================

pub use composite::{AndButton, AxisButton, ButtonAxis, ButtonSet, NotButton, OrButton};
pub use device::{
    DeviceAxis, DeviceButton, InputDevice, InputDevices, Keyboard, Mouse, StandardInputs,
};
pub use event::{InputEvent, KeyCode, MouseButton};
pub use graph::{InputError, InputGraph};
pub use map::{AxisMap, ButtonMap, InputMap};
pub use node::{AxisId, AxisInput, ButtonId, ButtonInput, InputLabel, InputRef, ANONYMOUS_DEVICE};

//=== Internal Dependencies ===============================================

use crate::core::Updatable;

//=== Input ===============================================================

/// Named access to the input graph.
#[derive(Default)]
pub struct Input {
    graph: InputGraph,
    buttons: ButtonMap,
    axes: AxisMap,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Accessors --------------------------------------------------------

    pub fn graph(&self) -> &InputGraph {
        &self.graph
    }

    /// Graph access for wiring composites and feeding devices.
    pub fn graph_mut(&mut self) -> &mut InputGraph {
        &mut self.graph
    }

    pub fn buttons(&self) -> &ButtonMap {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut ButtonMap {
        &mut self.buttons
    }

    pub fn axes(&self) -> &AxisMap {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut AxisMap {
        &mut self.axes
    }

    //--- Mapping ----------------------------------------------------------

    /// Maps a virtual button name. Returns the handle it replaced.
    pub fn map_button(&mut self, name: impl Into<String>, button: ButtonId) -> Option<ButtonId> {
        self.buttons.map(name, button)
    }

    /// Maps a virtual axis name. Returns the handle it replaced.
    pub fn map_axis(&mut self, name: impl Into<String>, axis: AxisId) -> Option<AxisId> {
        self.axes.map(name, axis)
    }

    //--- Button Queries ---------------------------------------------------

    pub fn is_down(&self, name: &str) -> bool {
        self.buttons.get(name).is_some_and(|id| self.graph.is_down(id))
    }

    pub fn is_up(&self, name: &str) -> bool {
        self.buttons.get(name).is_some_and(|id| self.graph.is_up(id))
    }

    /// Down this tick, up the previous one.
    pub fn is_pressed(&self, name: &str) -> bool {
        self.buttons.get(name).is_some_and(|id| self.graph.is_pressed(id))
    }

    /// Up this tick, down the previous one.
    pub fn is_released(&self, name: &str) -> bool {
        self.buttons.get(name).is_some_and(|id| self.graph.is_released(id))
    }

    //--- Axis Queries -----------------------------------------------------

    pub fn value(&self, name: &str) -> f32 {
        self.axes.get(name).map_or(0.0, |id| self.graph.value(id))
    }

    /// Axis value mapped onto `[min, max]`. `0.0` for an unmapped name.
    pub fn value_in(&self, name: &str, min: f32, max: f32) -> f32 {
        self.axes.get(name).map_or(0.0, |id| self.graph.value_in(id, min, max))
    }
}

/// Snapshots every button for next tick's edge detection.
impl Updatable for Input {
    fn update(&mut self, dt: f32) {
        self.graph.update(dt);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    struct Rig {
        input: Input,
        devices: StandardInputs,
    }

    impl Rig {
        fn new() -> Self {
            let mut input = Input::new();
            let devices = StandardInputs::new(input.graph_mut());
            Self { input, devices }
        }

        fn key(&self, id: &str) -> ButtonId {
            self.devices.keyboard().button(id).unwrap()
        }

        fn send(&mut self, event: InputEvent) {
            self.devices.handle_event(&event, self.input.graph_mut());
        }

        fn end_tick(&mut self) {
            self.input.update(0.016);
            self.devices.update(self.input.graph_mut(), 0.016);
        }
    }

    //=====================================================================
    // Registry Misses
    //=====================================================================

    #[test]
    fn unmapped_names_read_neutral() {
        let input = Input::new();

        assert!(!input.is_down("nonexistent"));
        assert!(!input.is_up("nonexistent"));
        assert!(!input.is_pressed("nonexistent"));
        assert!(!input.is_released("nonexistent"));
        assert_eq!(input.value("nonexistent"), 0.0);
        assert_eq!(input.value_in("nonexistent", 5.0, 10.0), 0.0);
        assert_eq!(input.buttons().get("nonexistent"), None);
    }

    //=====================================================================
    // Virtual Controls
    //=====================================================================

    #[test]
    fn chord_or_alternative_drives_a_named_button() {
        let mut rig = Rig::new();
        let (ctrl, s, f2) = (rig.key("Control"), rig.key("S"), rig.key("F2"));

        let graph = rig.input.graph_mut();
        let chord = graph.add_button(AndButton::new());
        graph.attach(chord, ctrl).unwrap();
        graph.attach(chord, s).unwrap();
        let save = graph.add_button(OrButton::new());
        graph.attach(save, chord).unwrap();
        graph.attach(save, f2).unwrap();
        rig.input.map_button("Save", save);

        rig.end_tick();
        rig.send(InputEvent::KeyDown(KeyCode::Control));
        assert!(!rig.input.is_down("Save"));

        rig.send(InputEvent::KeyDown(KeyCode::KeyS));
        assert!(rig.input.is_pressed("Save"));
        rig.end_tick();

        assert!(rig.input.is_down("Save"));
        assert!(!rig.input.is_pressed("Save"));

        rig.send(InputEvent::KeyUp(KeyCode::KeyS));
        assert!(rig.input.is_released("Save"));
        assert!(rig.input.is_up("Save"));
    }

    #[test]
    fn digital_axis_from_arrow_keys() {
        let mut rig = Rig::new();
        let (left, right) = (rig.key("Left"), rig.key("Right"));

        let graph = rig.input.graph_mut();
        let axis = graph.add_axis(ButtonAxis::new());
        graph.attach_axis_button(axis, left, 0.0, -1.0).unwrap();
        graph.attach_axis_button(axis, right, 0.0, 1.0).unwrap();
        rig.input.map_axis("MoveX", axis);

        rig.send(InputEvent::KeyDown(KeyCode::ArrowRight));
        assert_eq!(rig.input.value("MoveX"), 1.0);
        assert_eq!(rig.input.value_in("MoveX", 0.0, 4.0), 4.0);

        rig.send(InputEvent::KeyDown(KeyCode::ArrowLeft));
        assert_eq!(rig.input.value("MoveX"), 0.0);
    }

    #[test]
    fn mouse_motion_as_a_button() {
        let mut rig = Rig::new();
        let horizontal = rig.devices.mouse().axis("Horizontal").unwrap();

        let graph = rig.input.graph_mut();
        let flick = graph.add_button(AxisButton::with_range(crate::core::InclusiveRange::new(0.1, 1.0)));
        graph.set_axis_button_child(flick, Some(horizontal)).unwrap();
        rig.input.map_button("Flick", flick);

        rig.send(InputEvent::MouseMoved { dx: 250.0, dy: 0.0 });
        assert!(rig.input.is_pressed("Flick"));

        rig.end_tick();
        assert!(rig.input.is_released("Flick"));
    }

    #[test]
    fn remapping_a_name_switches_controls() {
        let mut rig = Rig::new();
        let (space, w) = (rig.key("Space"), rig.key("W"));
        rig.input.map_button("Jump", space);

        rig.send(InputEvent::KeyDown(KeyCode::KeyW));
        assert!(!rig.input.is_down("Jump"));

        assert_eq!(rig.input.map_button("Jump", w), Some(space));
        assert!(rig.input.is_down("Jump"));

        rig.input.buttons_mut().unmap("Jump");
        assert!(!rig.input.is_down("Jump"));
    }
}
