//=========================================================================
// AxisButton
//=========================================================================
//
// Turns an axis into a button: down while the axis value lies inside an
// inclusive activation range, `[0.5, 1.0]` unless configured otherwise.
//
// The node takes the child axis's id and name verbatim.
//
//=========================================================================

use std::any::Any;

use crate::core::input::graph::InputGraph;
use crate::core::input::node::{AxisId, ButtonInput, InputLabel, InputRef};
use crate::core::InclusiveRange;

//=== Constants ===========================================================

pub const DEFAULT_ACTIVATION_RANGE: InclusiveRange<f32> = InclusiveRange::new(0.5, 1.0);

//=== AxisButton ==========================================================

#[derive(Debug)]
pub struct AxisButton {
    child: Option<AxisId>,
    range: InclusiveRange<f32>,
    id: String,
    name: String,
}

impl AxisButton {
    /// Creates an AxisButton with no child and the default range.
    pub fn new() -> Self {
        Self::with_range(DEFAULT_ACTIVATION_RANGE)
    }

    pub fn with_range(range: InclusiveRange<f32>) -> Self {
        Self {
            child: None,
            range,
            id: String::new(),
            name: String::new(),
        }
    }

    pub fn child(&self) -> Option<AxisId> {
        self.child
    }

    pub fn activation_range(&self) -> InclusiveRange<f32> {
        self.range
    }

    pub(crate) fn set_activation_range(&mut self, range: InclusiveRange<f32>) {
        self.range = range;
    }

    pub(crate) fn set_child(&mut self, child: Option<(AxisId, InputLabel)>) {
        match child {
            Some((id, label)) => {
                self.child = Some(id);
                self.id = label.id;
                self.name = label.name;
            }
            None => {
                self.child = None;
                self.id.clear();
                self.name.clear();
            }
        }
    }
}

impl Default for AxisButton {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonInput for AxisButton {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_down(&self, graph: &InputGraph) -> bool {
        self.child
            .is_some_and(|child| self.range.contains(graph.value(child)))
    }

    fn children(&self) -> Vec<InputRef> {
        self.child.map(InputRef::Axis).into_iter().collect()
    }

    fn forget(&mut self, removed: InputRef) {
        if self.child.map(InputRef::Axis) == Some(removed) {
            self.set_child(None);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::device::DeviceAxis;

    fn setup(range: Option<InclusiveRange<f32>>) -> (InputGraph, AxisId, crate::core::input::ButtonId) {
        let mut graph = InputGraph::new();
        let stick = graph.add_axis(DeviceAxis::new("Horizontal", "Move (Horizontal)", "Mouse"));
        let button = graph.add_button(match range {
            Some(range) => AxisButton::with_range(range),
            None => AxisButton::new(),
        });
        graph.set_axis_button_child(button, Some(stick)).unwrap();
        (graph, stick, button)
    }

    fn tilt(graph: &mut InputGraph, axis: AxisId, value: f32) {
        graph.axis_as_mut::<DeviceAxis>(axis).unwrap().set_value(value);
    }

    #[test]
    fn default_range_is_inclusive_at_both_ends() {
        let (mut graph, stick, button) = setup(None);

        for (value, down) in [(0.0, false), (0.49, false), (0.5, true), (0.75, true), (1.0, true)] {
            tilt(&mut graph, stick, value);
            assert_eq!(graph.is_down(button), down, "value {value}");
        }
    }

    #[test]
    fn custom_range_bounds_are_down() {
        let (mut graph, stick, button) = setup(Some(InclusiveRange::new(0.0, 0.25)));

        tilt(&mut graph, stick, 0.0);
        assert!(graph.is_down(button));
        tilt(&mut graph, stick, 0.25);
        assert!(graph.is_down(button));
        tilt(&mut graph, stick, 0.26);
        assert!(!graph.is_down(button));
    }

    #[test]
    fn range_can_be_changed_after_wiring() {
        let (mut graph, stick, button) = setup(None);
        tilt(&mut graph, stick, 0.2);
        assert!(!graph.is_down(button));

        graph.set_activation_range(button, InclusiveRange::new(0.1, 0.3)).unwrap();

        assert!(graph.is_down(button));
        assert_eq!(
            graph.button_as::<AxisButton>(button).unwrap().activation_range(),
            InclusiveRange::new(0.1, 0.3)
        );
    }

    #[test]
    fn identity_mirrors_child_axis() {
        let (graph, stick, button) = setup(None);
        let node = graph.button(button).unwrap();

        assert_eq!(node.id(), "Horizontal");
        assert_eq!(node.name(), "Move (Horizontal)");
        assert_eq!(node.device_id(), "anonymous");
        assert_eq!(graph.button_as::<AxisButton>(button).unwrap().child(), Some(stick));
    }

    #[test]
    fn childless_axis_button_is_up() {
        let mut graph = InputGraph::new();
        let button = graph.add_button(AxisButton::with_range(InclusiveRange::new(0.0, 1.0)));

        assert!(!graph.is_down(button));
    }
}
