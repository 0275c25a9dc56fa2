//=========================================================================
// Primitive Inputs
//=========================================================================
//
// Leaf nodes of the input graph. Their state is written by a device in
// response to host events and read by everything above them.
//
//=========================================================================

use std::any::Any;

use crate::core::input::graph::InputGraph;
use crate::core::input::node::{AxisInput, ButtonInput, InputLabel};

//=== DeviceButton ========================================================

/// Button whose state is set directly by its owning device.
#[derive(Debug, Clone)]
pub struct DeviceButton {
    label: InputLabel,
    down: bool,
}

impl DeviceButton {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        device_id: impl Into<String>,
    ) -> Self {
        Self {
            label: InputLabel {
                id: id.into(),
                name: name.into(),
                device_id: device_id.into(),
            },
            down: false,
        }
    }

    pub fn set_down(&mut self, down: bool) {
        self.down = down;
    }

    pub fn down(&self) -> bool {
        self.down
    }
}

impl ButtonInput for DeviceButton {
    fn id(&self) -> &str {
        &self.label.id
    }

    fn name(&self) -> &str {
        &self.label.name
    }

    fn device_id(&self) -> &str {
        &self.label.device_id
    }

    fn is_down(&self, _graph: &InputGraph) -> bool {
        self.down
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=== DeviceAxis ==========================================================

/// Axis whose value is set directly by its owning device.
#[derive(Debug, Clone)]
pub struct DeviceAxis {
    label: InputLabel,
    value: f32,
}

impl DeviceAxis {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        device_id: impl Into<String>,
    ) -> Self {
        Self {
            label: InputLabel {
                id: id.into(),
                name: name.into(),
                device_id: device_id.into(),
            },
            value: 0.0,
        }
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }
}

impl AxisInput for DeviceAxis {
    fn id(&self) -> &str {
        &self.label.id
    }

    fn name(&self) -> &str {
        &self.label.name
    }

    fn device_id(&self) -> &str {
        &self.label.device_id
    }

    fn value(&self, _graph: &InputGraph) -> f32 {
        self.value
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
