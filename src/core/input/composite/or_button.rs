//=========================================================================
// OrButton
//=========================================================================
//
// Down iff any attached child is down. With no children it is up.
//
// Derived identity:
//   id   = "or-<id1>-<id2>..."
//   name = "(<name1>) or (<name2>) or ..."
//
//=========================================================================

use std::any::Any;

use super::{ButtonList, ButtonSet};
use crate::core::input::graph::InputGraph;
use crate::core::input::node::{ButtonId, ButtonInput, InputLabel, InputRef};

//=== OrButton ============================================================

/// Alternative bindings: down while any child is held.
#[derive(Debug)]
pub struct OrButton {
    children: ButtonList,
    id: String,
    name: String,
}

impl OrButton {
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
        (self.id, self.name) = self.children.derive_label("or", " or ");
    }
}

impl Default for OrButton {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonInput for OrButton {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_down(&self, graph: &InputGraph) -> bool {
        self.children.ids().any(|child| graph.is_down(child))
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

impl ButtonSet for OrButton {
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
