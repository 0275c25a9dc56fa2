//=========================================================================
// Input Graph
//=========================================================================
//
// Arena that owns every input node and answers every input query.
//
// Architecture:
// ```text
// InputGraph
//   ├─ buttons: Vec<Slot<ButtonEntry>>   (node + was_down snapshot)
//   ├─ axes:    Vec<Slot<Box<dyn AxisInput>>>
//   └─ free lists for slot reuse
// ```
//
// Composites reference children through generational handles. Structural
// edits go through the graph so it can:
// - reject edits that would close a cycle,
// - rebuild the composite's derived id and name,
// - detach a removed node from every composite that referenced it.
//
// Edge detection:
//   `update()` snapshots `was_down := is_down()` for every button, in two
//   passes so all snapshots see the same pre-snapshot state. It must run
//   exactly once per tick, after that tick's events have been delivered.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use log::{debug, trace, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::composite::{as_button_set, as_button_set_mut, AxisButton, ButtonAxis, NotButton};
use super::node::{AxisId, AxisInput, ButtonId, ButtonInput, InputRef};
use crate::core::{InclusiveRange, Updatable};

//=== InputError ==========================================================

/// Rejected structural edit on the graph.
///
/// Queries never fail; only attach/detach style edits return this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown button handle {0}")]
    UnknownButton(ButtonId),

    #[error("unknown axis handle {0}")]
    UnknownAxis(AxisId),

    #[error("input '{id}' does not support {operation}")]
    WrongKind { id: String, operation: &'static str },

    #[error("attaching '{child}' under '{parent}' would create a cycle")]
    Cycle { parent: String, child: String },
}

//=== Slots ===============================================================

struct Slot<E> {
    generation: u32,
    entry: Option<E>,
}

struct ButtonEntry {
    node: Box<dyn ButtonInput>,
    was_down: bool,
}

//=== InputGraph ==========================================================

/// Owner of every button and axis node.
#[derive(Default)]
pub struct InputGraph {
    buttons: Vec<Slot<ButtonEntry>>,
    axes: Vec<Slot<Box<dyn AxisInput>>>,
    free_buttons: Vec<u32>,
    free_axes: Vec<u32>,
}

impl InputGraph {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Node Lifetime ----------------------------------------------------

    /// Moves a button node into the graph and returns its handle.
    pub fn add_button<B: ButtonInput>(&mut self, node: B) -> ButtonId {
        let entry = ButtonEntry {
            node: Box::new(node),
            was_down: false,
        };

        let id = match self.free_buttons.pop() {
            Some(index) => {
                let slot = &mut self.buttons[index as usize];
                slot.entry = Some(entry);
                ButtonId { index, generation: slot.generation }
            }
            None => {
                self.buttons.push(Slot { generation: 0, entry: Some(entry) });
                ButtonId { index: (self.buttons.len() - 1) as u32, generation: 0 }
            }
        };

        trace!(target: "input", "Added button {} ({})", id, self.label_of(id.into()));
        id
    }

    /// Moves an axis node into the graph and returns its handle.
    pub fn add_axis<A: AxisInput>(&mut self, node: A) -> AxisId {
        let node: Box<dyn AxisInput> = Box::new(node);

        let id = match self.free_axes.pop() {
            Some(index) => {
                let slot = &mut self.axes[index as usize];
                slot.entry = Some(node);
                AxisId { index, generation: slot.generation }
            }
            None => {
                self.axes.push(Slot { generation: 0, entry: Some(node) });
                AxisId { index: (self.axes.len() - 1) as u32, generation: 0 }
            }
        };

        trace!(target: "input", "Added axis {} ({})", id, self.label_of(id.into()));
        id
    }

    /// Removes a button and detaches it from every composite using it.
    ///
    /// The handle (and any copy of it) is stale afterwards.
    pub fn remove_button(&mut self, id: ButtonId) -> Option<Box<dyn ButtonInput>> {
        let slot = self.buttons.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_buttons.push(id.index);

        self.forget_everywhere(InputRef::Button(id));
        debug!(target: "input", "Removed button '{}'", entry.node.id());
        Some(entry.node)
    }

    /// Removes an axis and detaches it from every composite using it.
    pub fn remove_axis(&mut self, id: AxisId) -> Option<Box<dyn AxisInput>> {
        let slot = self.axes.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_axes.push(id.index);

        self.forget_everywhere(InputRef::Axis(id));
        debug!(target: "input", "Removed axis '{}'", node.id());
        Some(node)
    }

    fn forget_everywhere(&mut self, removed: InputRef) {
        for entry in self.buttons.iter_mut().filter_map(|s| s.entry.as_mut()) {
            entry.node.forget(removed);
        }
        for node in self.axes.iter_mut().filter_map(|s| s.entry.as_mut()) {
            node.forget(removed);
        }
    }

    //--- Node Access ------------------------------------------------------

    fn button_entry(&self, id: ButtonId) -> Option<&ButtonEntry> {
        self.buttons
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_ref())
    }

    fn button_entry_mut(&mut self, id: ButtonId) -> Option<&mut ButtonEntry> {
        self.buttons
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_mut())
    }

    pub fn contains_button(&self, id: ButtonId) -> bool {
        self.button_entry(id).is_some()
    }

    pub fn contains_axis(&self, id: AxisId) -> bool {
        self.axis(id).is_some()
    }

    pub fn button(&self, id: ButtonId) -> Option<&dyn ButtonInput> {
        self.button_entry(id).map(|entry| entry.node.as_ref())
    }

    pub fn axis(&self, id: AxisId) -> Option<&dyn AxisInput> {
        self.axes
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_deref())
    }

    fn axis_mut(&mut self, id: AxisId) -> Option<&mut (dyn AxisInput + 'static)> {
        match self.axes.get_mut(id.index as usize) {
            Some(slot) if slot.generation == id.generation => slot.entry.as_deref_mut(),
            _ => None,
        }
    }

    /// Typed view of a button node, if it is a `T`.
    pub fn button_as<T: ButtonInput>(&self, id: ButtonId) -> Option<&T> {
        self.button(id)?.as_any().downcast_ref::<T>()
    }

    /// Typed mutable view of a button node, if it is a `T`.
    ///
    /// Mutating identity through this view does not refresh the derived
    /// names of composites that already reference the node.
    pub fn button_as_mut<T: ButtonInput>(&mut self, id: ButtonId) -> Option<&mut T> {
        self.button_entry_mut(id)?.node.as_any_mut().downcast_mut::<T>()
    }

    pub fn axis_as<T: AxisInput>(&self, id: AxisId) -> Option<&T> {
        self.axis(id)?.as_any().downcast_ref::<T>()
    }

    pub fn axis_as_mut<T: AxisInput>(&mut self, id: AxisId) -> Option<&mut T> {
        self.axis_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    pub fn button_count(&self) -> usize {
        self.buttons.iter().filter(|s| s.entry.is_some()).count()
    }

    pub fn axis_count(&self) -> usize {
        self.axes.iter().filter(|s| s.entry.is_some()).count()
    }

    //--- Button Queries ---------------------------------------------------

    fn down_state(&self, id: ButtonId) -> Option<(bool, bool)> {
        match self.button_entry(id) {
            Some(entry) => Some((entry.node.is_down(self), entry.was_down)),
            None => {
                warn!(target: "input", "Query on stale or unknown button {}", id);
                None
            }
        }
    }

    /// Current down state. `false` for a stale handle.
    pub fn is_down(&self, id: ButtonId) -> bool {
        self.down_state(id).is_some_and(|(down, _)| down)
    }

    /// Current up state. `false` for a stale handle.
    pub fn is_up(&self, id: ButtonId) -> bool {
        self.down_state(id).is_some_and(|(down, _)| !down)
    }

    /// Down state captured at the last snapshot.
    pub fn was_down(&self, id: ButtonId) -> bool {
        self.button_entry(id).is_some_and(|entry| entry.was_down)
    }

    /// Down now, up at the last snapshot.
    pub fn is_pressed(&self, id: ButtonId) -> bool {
        self.down_state(id).is_some_and(|(down, was)| down && !was)
    }

    /// Up now, down at the last snapshot.
    pub fn is_released(&self, id: ButtonId) -> bool {
        self.down_state(id).is_some_and(|(down, was)| !down && was)
    }

    //--- Axis Queries -----------------------------------------------------

    /// Current value. `0.0` for a stale handle.
    pub fn value(&self, id: AxisId) -> f32 {
        match self.axis(id) {
            Some(axis) => axis.value(self),
            None => {
                warn!(target: "input", "Query on stale or unknown axis {}", id);
                0.0
            }
        }
    }

    /// Current value mapped onto `[min, max]`. `min` for a stale handle.
    pub fn value_in(&self, id: AxisId, min: f32, max: f32) -> f32 {
        match self.axis(id) {
            Some(axis) => axis.value_in(self, min, max),
            None => {
                warn!(target: "input", "Query on stale or unknown axis {}", id);
                min
            }
        }
    }

    //--- Edge Detection ---------------------------------------------------

    /// Snapshots a single button. For callers driving edge detection by
    /// hand instead of through [`InputGraph::snapshot`].
    pub fn update_button(&mut self, id: ButtonId) {
        let Some(down) = self.button_entry(id).map(|entry| entry.node.is_down(self)) else {
            warn!(target: "input", "Snapshot of stale or unknown button {}", id);
            return;
        };
        if let Some(entry) = self.button_entry_mut(id) {
            entry.was_down = down;
        }
    }

    /// Snapshots every button, primitive and composite alike.
    pub fn snapshot(&mut self) {
        let states: Vec<Option<bool>> = self
            .buttons
            .iter()
            .map(|slot| slot.entry.as_ref().map(|entry| entry.node.is_down(self)))
            .collect();

        for (slot, state) in self.buttons.iter_mut().zip(states) {
            if let (Some(entry), Some(down)) = (slot.entry.as_mut(), state) {
                entry.was_down = down;
            }
        }
    }

    //--- And / Or ---------------------------------------------------------

    /// Adds `child` to an And or Or node.
    ///
    /// Returns `Ok(false)` if it was already attached.
    pub fn attach(&mut self, parent: ButtonId, child: ButtonId) -> Result<bool, InputError> {
        let label = self.button(child).ok_or(InputError::UnknownButton(child))?.label();
        self.ensure_acyclic(parent.into(), child.into())?;

        let node = self.button_node_mut(parent)?;
        let parent_id = node.id().to_owned();
        let set = as_button_set_mut(node).ok_or(InputError::WrongKind {
            id: parent_id,
            operation: "attach",
        })?;

        let attached = set.attach(child, label);
        if attached {
            debug!(target: "input", "Attached {} to '{}'", child, set.id());
        }
        Ok(attached)
    }

    /// Removes `child` from an And or Or node.
    ///
    /// Returns `Ok(false)` if it was not attached.
    pub fn detach(&mut self, parent: ButtonId, child: ButtonId) -> Result<bool, InputError> {
        let node = self.button_node_mut(parent)?;
        let parent_id = node.id().to_owned();
        let set = as_button_set_mut(node).ok_or(InputError::WrongKind {
            id: parent_id,
            operation: "detach",
        })?;

        let detached = set.detach(child);
        if detached {
            debug!(target: "input", "Detached {} from '{}'", child, set.id());
        }
        Ok(detached)
    }

    /// Returns `true` if `child` is attached to the And or Or node `parent`.
    pub fn is_attached(&self, parent: ButtonId, child: ButtonId) -> bool {
        self.button(parent)
            .and_then(as_button_set)
            .is_some_and(|set| set.is_attached(child))
    }

    //--- Not --------------------------------------------------------------

    /// Replaces (or clears) the child of a Not node.
    pub fn set_not_child(
        &mut self,
        parent: ButtonId,
        child: Option<ButtonId>,
    ) -> Result<(), InputError> {
        let child = match child {
            Some(id) => {
                let label = self.button(id).ok_or(InputError::UnknownButton(id))?.label();
                self.ensure_acyclic(parent.into(), id.into())?;
                Some((id, label))
            }
            None => None,
        };

        let not = self.typed_button_mut::<NotButton>(parent, "set_not_child")?;
        not.set_child(child);
        debug!(target: "input", "Not node is now '{}'", not.id());
        Ok(())
    }

    //--- AxisButton -------------------------------------------------------

    /// Replaces (or clears) the axis an AxisButton watches.
    pub fn set_axis_button_child(
        &mut self,
        parent: ButtonId,
        child: Option<AxisId>,
    ) -> Result<(), InputError> {
        let child = match child {
            Some(id) => {
                let label = self.axis(id).ok_or(InputError::UnknownAxis(id))?.label();
                self.ensure_acyclic(parent.into(), id.into())?;
                Some((id, label))
            }
            None => None,
        };

        let button = self.typed_button_mut::<AxisButton>(parent, "set_axis_button_child")?;
        button.set_child(child);
        debug!(target: "input", "Axis button is now '{}'", button.id());
        Ok(())
    }

    pub fn set_activation_range(
        &mut self,
        parent: ButtonId,
        range: InclusiveRange<f32>,
    ) -> Result<(), InputError> {
        self.typed_button_mut::<AxisButton>(parent, "set_activation_range")?
            .set_activation_range(range);
        Ok(())
    }

    //--- ButtonAxis -------------------------------------------------------

    /// Adds `button` to a ButtonAxis, contributing `down_value` while it is
    /// down and `up_value` otherwise. Re-attaching replaces both values.
    pub fn attach_axis_button(
        &mut self,
        axis: AxisId,
        button: ButtonId,
        up_value: f32,
        down_value: f32,
    ) -> Result<(), InputError> {
        let label = self.button(button).ok_or(InputError::UnknownButton(button))?.label();
        self.ensure_acyclic(axis.into(), button.into())?;

        let node = self.typed_axis_mut::<ButtonAxis>(axis, "attach_axis_button")?;
        node.attach(button, label, up_value, down_value);
        debug!(target: "input", "Button axis is now '{}'", node.id());
        Ok(())
    }

    /// Removes `button` from a ButtonAxis. Returns `Ok(false)` if absent.
    pub fn detach_axis_button(&mut self, axis: AxisId, button: ButtonId) -> Result<bool, InputError> {
        let node = self.typed_axis_mut::<ButtonAxis>(axis, "detach_axis_button")?;
        Ok(node.detach(button))
    }

    pub fn is_axis_button_attached(&self, axis: AxisId, button: ButtonId) -> bool {
        self.axis_as::<ButtonAxis>(axis)
            .is_some_and(|node| node.is_attached(button))
    }

    //--- Helpers ----------------------------------------------------------

    fn button_node_mut(&mut self, id: ButtonId) -> Result<&mut (dyn ButtonInput + 'static), InputError> {
        self.button_entry_mut(id)
            .map(|entry| entry.node.as_mut())
            .ok_or(InputError::UnknownButton(id))
    }

    fn typed_button_mut<T: ButtonInput>(
        &mut self,
        id: ButtonId,
        operation: &'static str,
    ) -> Result<&mut T, InputError> {
        let node = self.button_node_mut(id)?;
        if !node.as_any().is::<T>() {
            return Err(InputError::WrongKind { id: node.id().to_owned(), operation });
        }
        node.as_any_mut()
            .downcast_mut::<T>()
            .ok_or(InputError::UnknownButton(id))
    }

    fn typed_axis_mut<T: AxisInput>(
        &mut self,
        id: AxisId,
        operation: &'static str,
    ) -> Result<&mut T, InputError> {
        let node = self.axis_mut(id).ok_or(InputError::UnknownAxis(id))?;
        if !node.as_any().is::<T>() {
            return Err(InputError::WrongKind { id: node.id().to_owned(), operation });
        }
        node.as_any_mut()
            .downcast_mut::<T>()
            .ok_or(InputError::UnknownAxis(id))
    }

    fn children_of(&self, node: InputRef) -> Vec<InputRef> {
        match node {
            InputRef::Button(id) => self.button(id).map(|b| b.children()).unwrap_or_default(),
            InputRef::Axis(id) => self.axis(id).map(|a| a.children()).unwrap_or_default(),
        }
    }

    fn label_of(&self, node: InputRef) -> String {
        match node {
            InputRef::Button(id) => self.button(id).map(|b| b.id().to_owned()),
            InputRef::Axis(id) => self.axis(id).map(|a| a.id().to_owned()),
        }
        .unwrap_or_default()
    }

    /// Fails if `parent` is reachable from `child`, or if `parent` is gone.
    fn ensure_acyclic(&self, parent: InputRef, child: InputRef) -> Result<(), InputError> {
        let parent_exists = match parent {
            InputRef::Button(id) => self.contains_button(id),
            InputRef::Axis(id) => self.contains_axis(id),
        };
        if !parent_exists {
            return Err(match parent {
                InputRef::Button(id) => InputError::UnknownButton(id),
                InputRef::Axis(id) => InputError::UnknownAxis(id),
            });
        }

        let mut stack = vec![child];
        let mut seen = HashSet::new();
        while let Some(node) = stack.pop() {
            if node == parent {
                return Err(InputError::Cycle {
                    parent: self.label_of(parent),
                    child: self.label_of(child),
                });
            }
            if seen.insert(node) {
                stack.extend(self.children_of(node));
            }
        }
        Ok(())
    }
}

impl Updatable for InputGraph {
    fn update(&mut self, _dt: f32) {
        self.snapshot();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::composite::{AndButton, OrButton};
    use crate::core::input::device::{DeviceAxis, DeviceButton};

    //--- Test Helpers -----------------------------------------------------

    fn key(graph: &mut InputGraph, id: &str) -> ButtonId {
        graph.add_button(DeviceButton::new(id, id, "Keyboard"))
    }

    fn set(graph: &mut InputGraph, id: ButtonId, down: bool) {
        graph
            .button_as_mut::<DeviceButton>(id)
            .expect("device button")
            .set_down(down);
    }

    //=====================================================================
    // Edge Detection
    //=====================================================================

    #[test]
    fn press_is_reported_on_the_up_to_down_tick_only() {
        let mut graph = InputGraph::new();
        let a = key(&mut graph, "A");

        // tick 1: up
        graph.snapshot();

        // tick 2: down
        set(&mut graph, a, true);
        assert!(graph.is_pressed(a));
        assert!(!graph.is_released(a));
        graph.snapshot();

        // tick 3: still down
        assert!(graph.is_down(a));
        assert!(!graph.is_pressed(a));
        assert!(!graph.is_released(a));
    }

    #[test]
    fn release_is_reported_on_the_down_to_up_tick() {
        let mut graph = InputGraph::new();
        let a = key(&mut graph, "A");

        set(&mut graph, a, true);
        graph.snapshot();

        set(&mut graph, a, false);
        assert!(graph.is_released(a));
        assert!(!graph.is_pressed(a));
        assert!(graph.is_up(a));
    }

    #[test]
    fn composites_get_edge_detection_from_snapshot() {
        let mut graph = InputGraph::new();
        let a = key(&mut graph, "A");
        let b = key(&mut graph, "B");
        let both = graph.add_button(AndButton::new());
        graph.attach(both, a).unwrap();
        graph.attach(both, b).unwrap();

        set(&mut graph, a, true);
        graph.snapshot();
        assert!(!graph.is_down(both));

        set(&mut graph, b, true);
        assert!(graph.is_pressed(both));
        graph.snapshot();
        assert!(!graph.is_pressed(both));

        set(&mut graph, a, false);
        assert!(graph.is_released(both));
    }

    #[test]
    fn update_button_snapshots_a_single_button() {
        let mut graph = InputGraph::new();
        let a = key(&mut graph, "A");
        let b = key(&mut graph, "B");

        set(&mut graph, a, true);
        set(&mut graph, b, true);
        graph.update_button(a);

        assert!(!graph.is_pressed(a));
        assert!(graph.is_pressed(b));
    }

    //=====================================================================
    // Handles
    //=====================================================================

    #[test]
    fn stale_handles_miss_after_removal() {
        let mut graph = InputGraph::new();
        let a = key(&mut graph, "A");
        set(&mut graph, a, true);

        assert!(graph.remove_button(a).is_some());
        let reused = key(&mut graph, "B");

        assert_eq!(reused.index, a.index);
        assert!(!graph.contains_button(a));
        assert!(!graph.is_down(a));
        assert!(!graph.is_up(a));
        assert!(graph.remove_button(a).is_none());
    }

    #[test]
    fn removal_cascades_into_composites() {
        let mut graph = InputGraph::new();
        let a = key(&mut graph, "A");
        let b = key(&mut graph, "B");
        let either = graph.add_button(OrButton::new());
        graph.attach(either, a).unwrap();
        graph.attach(either, b).unwrap();

        graph.remove_button(a);

        assert!(!graph.is_attached(either, a));
        assert!(graph.is_attached(either, b));
        assert_eq!(graph.button(either).unwrap().id(), "or-B");
    }

    #[test]
    fn stale_axis_reads_neutral_values() {
        let mut graph = InputGraph::new();
        let x = graph.add_axis(DeviceAxis::new("X", "X", "Mouse"));
        graph.remove_axis(x);

        assert_eq!(graph.value(x), 0.0);
        assert_eq!(graph.value_in(x, -1.0, 1.0), -1.0);
    }

    //=====================================================================
    // Structural Errors
    //=====================================================================

    #[test]
    fn attaching_an_ancestor_is_rejected() {
        let mut graph = InputGraph::new();
        let a = key(&mut graph, "A");
        let outer = graph.add_button(AndButton::new());
        let inner = graph.add_button(OrButton::new());
        graph.attach(outer, inner).unwrap();
        graph.attach(inner, a).unwrap();

        let err = graph.attach(inner, outer).unwrap_err();
        assert!(matches!(err, InputError::Cycle { .. }));

        let err = graph.attach(outer, outer).unwrap_err();
        assert!(matches!(err, InputError::Cycle { .. }));
    }

    #[test]
    fn attach_to_primitive_is_wrong_kind() {
        let mut graph = InputGraph::new();
        let a = key(&mut graph, "A");
        let b = key(&mut graph, "B");

        let err = graph.attach(a, b).unwrap_err();
        assert_eq!(err, InputError::WrongKind { id: "A".into(), operation: "attach" });
    }

    #[test]
    fn attach_unknown_child_is_reported() {
        let mut graph = InputGraph::new();
        let and = graph.add_button(AndButton::new());
        let gone = key(&mut graph, "A");
        graph.remove_button(gone);

        assert_eq!(graph.attach(and, gone), Err(InputError::UnknownButton(gone)));
    }

    #[test]
    fn is_attached_on_non_set_node_is_false() {
        let mut graph = InputGraph::new();
        let a = key(&mut graph, "A");
        let not = graph.add_button(NotButton::new());
        graph.set_not_child(not, Some(a)).unwrap();

        assert!(!graph.is_attached(not, a));
    }
}
