//=========================================================================
// Composite Inputs
//=========================================================================
//
// Buttons and axes derived from other inputs.
//
//   AndButton  : down iff every child is down (empty → down)
//   OrButton   : down iff any child is down (empty → up)
//   NotButton  : down iff a child is set and it is up
//   AxisButton : down iff the child axis value is inside a range
//   ButtonAxis : sum of per-button up/down contributions
//
// Composites hold child handles plus a copy of each child's label, and
// rebuild their derived id/name on every structural change. Structural
// edits are made through `InputGraph` so cycles can be rejected.
//
// Every composite reports `ANONYMOUS_DEVICE` as its device id.
//
//=========================================================================

//=== Module Declarations =================================================

mod and_button;
mod axis_button;
mod button_axis;
mod not_button;
mod or_button;

//=== Public API ==========================================================

pub use and_button::AndButton;
pub use axis_button::AxisButton;
pub use button_axis::ButtonAxis;
pub use not_button::NotButton;
pub use or_button::OrButton;

//=== Internal Dependencies ===============================================

use super::node::{ButtonId, ButtonInput, InputLabel, InputRef};

//=== ButtonSet ===========================================================

/// Composite button whose children form an ordered set (And, Or).
pub trait ButtonSet: ButtonInput {
    /// Adds `child`. Returns `false` if it was already attached.
    fn attach(&mut self, child: ButtonId, label: InputLabel) -> bool;

    /// Removes `child`. Returns `false` if it was not attached.
    fn detach(&mut self, child: ButtonId) -> bool;

    fn is_attached(&self, child: ButtonId) -> bool;

    /// Attached children, in attachment order.
    fn attached(&self) -> Vec<ButtonId>;
}

pub(crate) fn as_button_set(node: &dyn ButtonInput) -> Option<&dyn ButtonSet> {
    let any = node.as_any();
    if let Some(and) = any.downcast_ref::<AndButton>() {
        return Some(and as &dyn ButtonSet);
    }
    any.downcast_ref::<OrButton>().map(|or| or as &dyn ButtonSet)
}

pub(crate) fn as_button_set_mut(node: &mut dyn ButtonInput) -> Option<&mut dyn ButtonSet> {
    let any = node.as_any_mut();
    if any.is::<AndButton>() {
        return any.downcast_mut::<AndButton>().map(|and| and as &mut dyn ButtonSet);
    }
    any.downcast_mut::<OrButton>().map(|or| or as &mut dyn ButtonSet)
}

//=== ButtonList ==========================================================

/// Ordered, duplicate-free child list shared by And and Or.
#[derive(Debug, Default)]
pub(crate) struct ButtonList {
    children: Vec<(ButtonId, InputLabel)>,
}

impl ButtonList {
    pub(crate) fn insert(&mut self, child: ButtonId, label: InputLabel) -> bool {
        if self.contains(child) {
            return false;
        }
        self.children.push((child, label));
        true
    }

    pub(crate) fn remove(&mut self, child: ButtonId) -> bool {
        let before = self.children.len();
        self.children.retain(|(id, _)| *id != child);
        self.children.len() != before
    }

    pub(crate) fn contains(&self, child: ButtonId) -> bool {
        self.children.iter().any(|(id, _)| *id == child)
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = ButtonId> + '_ {
        self.children.iter().map(|(id, _)| *id)
    }

    pub(crate) fn refs(&self) -> Vec<InputRef> {
        self.ids().map(InputRef::Button).collect()
    }

    /// Builds `(<prefix>-<id1>-<id2>..., "(<name1>)<sep>(<name2>)...")`.
    pub(crate) fn derive_label(&self, prefix: &str, separator: &str) -> (String, String) {
        let mut id = String::from(prefix);
        let mut names = Vec::with_capacity(self.children.len());
        for (_, label) in &self.children {
            id.push('-');
            id.push_str(&label.id);
            names.push(format!("({})", label.name));
        }
        (id, names.join(separator))
    }
}
