//=========================================================================
// AndButton
//=========================================================================
//
// Down iff every attached child is down. With no children it is
// vacuously down.
//
// Derived identity:
//   id   = "and-<id1>-<id2>..."
//   name = "(<name1>) + (<name2>) + ..."
//
//=========================================================================

use std::any::Any;

use super::{ButtonList, ButtonSet};
use crate::core::input::graph::InputGraph;
use crate::core::input::node::{ButtonId, ButtonInput, InputLabel, InputRef};

//=== AndButton ===========================================================

/// Button chord: down while all children are held.
#[derive(Debug)]
pub struct AndButton {
    children: ButtonList,
    id: String,
    name: String,
}

impl AndButton {
    pub fn new() -> Self {
        let mut button = Self {
            children: ButtonList::default(),
            id: String::new(),
            name: String::new(),
        };
        button.rename();
        button
    }

    fn rename(&mut self) {
        (self.id, self.name) = self.children.derive_label("and", " + ");
    }
}

impl Default for AndButton {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonInput for AndButton {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_down(&self, graph: &InputGraph) -> bool {
        self.children.ids().all(|child| graph.is_down(child))
    }

    fn children(&self) -> Vec<InputRef> {
        self.children.refs()
    }

    fn forget(&mut self, removed: InputRef) {
        if let InputRef::Button(id) = removed {
            if self.children.remove(id) {
                self.rename();
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl ButtonSet for AndButton {
    fn attach(&mut self, child: ButtonId, label: InputLabel) -> bool {
        let attached = self.children.insert(child, label);
        if attached {
            self.rename();
        }
        attached
    }

    fn detach(&mut self, child: ButtonId) -> bool {
        let detached = self.children.remove(child);
        if detached {
            self.rename();
        }
        detached
    }

    fn is_attached(&self, child: ButtonId) -> bool {
        self.children.contains(child)
    }

    fn attached(&self) -> Vec<ButtonId> {
        self.children.ids().collect()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::device::DeviceButton;
    use crate::core::input::node::ANONYMOUS_DEVICE;

    fn setup() -> (InputGraph, ButtonId, ButtonId, ButtonId) {
        let mut graph = InputGraph::new();
        let ctrl = graph.add_button(DeviceButton::new("Control", "Control", "Keyboard"));
        let s = graph.add_button(DeviceButton::new("S", "S", "Keyboard"));
        let and = graph.add_button(AndButton::new());
        (graph, ctrl, s, and)
    }

    fn press(graph: &mut InputGraph, id: ButtonId, down: bool) {
        graph.button_as_mut::<DeviceButton>(id).unwrap().set_down(down);
    }

    #[test]
    fn empty_and_is_down() {
        let (graph, _, _, and) = setup();
        assert!(graph.is_down(and));
    }

    #[test]
    fn down_only_when_all_children_down() {
        let (mut graph, ctrl, s, and) = setup();
        graph.attach(and, ctrl).unwrap();
        graph.attach(and, s).unwrap();

        for (c, k) in [(false, false), (true, false), (false, true), (true, true)] {
            press(&mut graph, ctrl, c);
            press(&mut graph, s, k);
            assert_eq!(graph.is_down(and), c && k);
        }
    }

    #[test]
    fn identity_is_derived_from_children() {
        let (mut graph, ctrl, s, and) = setup();
        assert_eq!(graph.button(and).unwrap().id(), "and");

        graph.attach(and, ctrl).unwrap();
        graph.attach(and, s).unwrap();

        let node = graph.button(and).unwrap();
        assert_eq!(node.id(), "and-Control-S");
        assert_eq!(node.name(), "(Control) + (S)");
        assert_eq!(node.device_id(), ANONYMOUS_DEVICE);
    }

    #[test]
    fn duplicate_attach_is_ignored() {
        let (mut graph, ctrl, _, and) = setup();

        assert!(graph.attach(and, ctrl).unwrap());
        assert!(!graph.attach(and, ctrl).unwrap());
        assert_eq!(graph.button(and).unwrap().id(), "and-Control");
    }

    #[test]
    fn attach_then_detach_restores_empty_default() {
        let (mut graph, ctrl, _, and) = setup();

        graph.attach(and, ctrl).unwrap();
        assert!(!graph.is_down(and));

        assert!(graph.detach(and, ctrl).unwrap());
        assert!(!graph.is_attached(and, ctrl));
        assert!(graph.is_down(and));
        assert_eq!(graph.button(and).unwrap().id(), "and");
    }
}
