//=========================================================================
// Input Nodes
//=========================================================================
//
// Capability traits shared by every node in the input graph, plus the
// handle types used to refer to nodes without owning them.
//
// Architecture:
// ```text
// InputGraph (owns every node)
//   ├─ buttons: [Box<dyn ButtonInput>]   ← ButtonId
//   └─ axes:    [Box<dyn AxisInput>]     ← AxisId
// ```
//
// Nodes never hold references to each other. Composites store handles and
// evaluate children through the graph passed to `is_down`/`value`, which
// keeps evaluation pull-based and side-effect free.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::fmt;

//=== Internal Dependencies ===============================================

use super::graph::InputGraph;

//=== Constants ===========================================================

/// Device id reported by nodes that no physical device owns.
pub const ANONYMOUS_DEVICE: &str = "anonymous";

//=== Handles =============================================================

/// Generational handle to a button node inside an [`InputGraph`].
///
/// A handle outlives the node it names: once the node is removed, lookups
/// through a stale handle miss instead of reaching a recycled slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

/// Generational handle to an axis node inside an [`InputGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "button#{}v{}", self.index, self.generation)
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "axis#{}v{}", self.index, self.generation)
    }
}

/// Either kind of node handle. Used for graph traversal and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputRef {
    Button(ButtonId),
    Axis(AxisId),
}

impl From<ButtonId> for InputRef {
    fn from(id: ButtonId) -> Self {
        Self::Button(id)
    }
}

impl From<AxisId> for InputRef {
    fn from(id: AxisId) -> Self {
        Self::Axis(id)
    }
}

//=== InputLabel ==========================================================

/// Identity triple of a node: id, human-readable name, owning device.
///
/// Composites keep a copy of each child's label so they can rebuild their
/// own derived id and name whenever the child set changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputLabel {
    pub id: String,
    pub name: String,
    pub device_id: String,
}

//=== ButtonInput =========================================================

/// Digital (down/up) input source.
///
/// Implementors only answer "is this down right now". The previous-tick
/// snapshot used for `is_pressed`/`is_released` lives in the graph slot,
/// so every button gets edge detection for free.
pub trait ButtonInput: Any {
    /// Id, unique within the owning device.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Id of the owning device, or [`ANONYMOUS_DEVICE`].
    fn device_id(&self) -> &str {
        ANONYMOUS_DEVICE
    }

    /// Current down state. Must not mutate anything.
    fn is_down(&self, graph: &InputGraph) -> bool;

    /// Direct children, for composites.
    fn children(&self) -> Vec<InputRef> {
        Vec::new()
    }

    /// Drops every reference to `removed`. Called by the graph when a node
    /// is removed so no composite keeps a dead handle.
    fn forget(&mut self, _removed: InputRef) {}

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Snapshot of this node's identity.
    fn label(&self) -> InputLabel {
        InputLabel {
            id: self.id().to_owned(),
            name: self.name().to_owned(),
            device_id: self.device_id().to_owned(),
        }
    }
}

//=== AxisInput ===========================================================

/// Continuous input source.
///
/// Device axes report values in `[0, 1]`; composite axes are unconstrained.
pub trait AxisInput: Any {
    fn id(&self) -> &str;
    fn name(&self) -> &str;

    fn device_id(&self) -> &str {
        ANONYMOUS_DEVICE
    }

    /// Current value. Must not mutate anything.
    fn value(&self, graph: &InputGraph) -> f32;

    /// Current value mapped linearly onto `[min, max]`.
    fn value_in(&self, graph: &InputGraph, min: f32, max: f32) -> f32 {
        min + (max - min) * self.value(graph)
    }

    fn children(&self) -> Vec<InputRef> {
        Vec::new()
    }

    fn forget(&mut self, _removed: InputRef) {}

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn label(&self) -> InputLabel {
        InputLabel {
            id: self.id().to_owned(),
            name: self.name().to_owned(),
            device_id: self.device_id().to_owned(),
        }
    }
}
