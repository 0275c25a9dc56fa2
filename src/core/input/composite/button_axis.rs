//=========================================================================
// ButtonAxis
//=========================================================================
//
// Turns buttons into an axis. Each attached button contributes its
// `down_value` while held and its `up_value` otherwise; the axis value is
// the sum of all contributions (0 with nothing attached).
//
// Two keys bound as (0, -1) and (0, +1) give a classic digital axis.
//
// Derived identity:
//   id   = "<id1>-<id2>..."
//   name = "<name1>, <name2>, ..."
//
//=========================================================================

use std::any::Any;

use crate::core::input::graph::InputGraph;
use crate::core::input::node::{AxisInput, ButtonId, InputLabel, InputRef};

//=== Binding =============================================================

#[derive(Debug, Clone)]
struct Binding {
    button: ButtonId,
    label: InputLabel,
    up_value: f32,
    down_value: f32,
}

//=== ButtonAxis ==========================================================

#[derive(Debug, Default)]
pub struct ButtonAxis {
    bindings: Vec<Binding>,
    id: String,
    name: String,
}

impl ButtonAxis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Up/down contributions of an attached button.
    pub fn contribution(&self, button: ButtonId) -> Option<(f32, f32)> {
        self.bindings
            .iter()
            .find(|binding| binding.button == button)
            .map(|binding| (binding.up_value, binding.down_value))
    }

    pub fn is_attached(&self, button: ButtonId) -> bool {
        self.bindings.iter().any(|binding| binding.button == button)
    }

    pub fn attached(&self) -> Vec<ButtonId> {
        self.bindings.iter().map(|binding| binding.button).collect()
    }

    pub(crate) fn attach(&mut self, button: ButtonId, label: InputLabel, up_value: f32, down_value: f32) {
        match self.bindings.iter_mut().find(|binding| binding.button == button) {
            Some(binding) => {
                binding.up_value = up_value;
                binding.down_value = down_value;
            }
            None => self.bindings.push(Binding { button, label, up_value, down_value }),
        }
        self.rename();
    }

    pub(crate) fn detach(&mut self, button: ButtonId) -> bool {
        let Some(pos) = self.bindings.iter().position(|binding| binding.button == button) else {
            return false;
        };
        self.bindings.remove(pos);
        self.rename();
        true
    }

    fn rename(&mut self) {
        self.id = self
            .bindings
            .iter()
            .map(|binding| binding.label.id.as_str())
            .collect::<Vec<_>>()
            .join("-");
        self.name = self
            .bindings
            .iter()
            .map(|binding| binding.label.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
    }
}

impl AxisInput for ButtonAxis {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self, graph: &InputGraph) -> f32 {
        self.bindings
            .iter()
            .map(|binding| {
                if graph.is_down(binding.button) {
                    binding.down_value
                } else {
                    binding.up_value
                }
            })
            .sum()
    }

    fn children(&self) -> Vec<InputRef> {
        self.bindings
            .iter()
            .map(|binding| InputRef::Button(binding.button))
            .collect()
    }

    fn forget(&mut self, removed: InputRef) {
        if let InputRef::Button(id) = removed {
            self.detach(id);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
