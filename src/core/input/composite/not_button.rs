//=========================================================================
// NotButton
//=========================================================================
//
// Inverts a single child. With no child set it is up.
//
// Derived identity:
//   child set : id = "not-<id>",  name = "Not (<name>)"
//   no child  : id = "not-<nil>", name = "<nil>"
//
//=========================================================================

use std::any::Any;

use crate::core::input::graph::InputGraph;
use crate::core::input::node::{ButtonId, ButtonInput, InputLabel, InputRef};

//=== NotButton ===========================================================

#[derive(Debug)]
pub struct NotButton {
    child: Option<ButtonId>,
    id: String,
    name: String,
}

impl NotButton {
    /// Creates a Not node without a child. Wire one with
    /// [`InputGraph::set_not_child`].
    pub fn new() -> Self {
        let mut button = Self {
            child: None,
            id: String::new(),
            name: String::new(),
        };
        button.set_child(None);
        button
    }

    pub fn child(&self) -> Option<ButtonId> {
        self.child
    }

    pub(crate) fn set_child(&mut self, child: Option<(ButtonId, InputLabel)>) {
        match child {
            Some((id, label)) => {
                self.child = Some(id);
                self.id = format!("not-{}", label.id);
                self.name = format!("Not ({})", label.name);
            }
            None => {
                self.child = None;
                self.id = "not-<nil>".to_owned();
                self.name = "<nil>".to_owned();
            }
        }
    }
}

impl Default for NotButton {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonInput for NotButton {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_down(&self, graph: &InputGraph) -> bool {
        self.child.is_some_and(|child| !graph.is_down(child))
    }

    fn children(&self) -> Vec<InputRef> {
        self.child.map(InputRef::Button).into_iter().collect()
    }

    fn forget(&mut self, removed: InputRef) {
        if self.child.map(InputRef::Button) == Some(removed) {
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
