//=========================================================================
// Input Maps
//=========================================================================
//
// Name → node registries for virtual controls ("Jump", "MoveX", ...).
//
// Mapping a name that already exists overwrites it. Looking up an
// unmapped name is a recoverable miss: it logs a warning and yields
// `None`, never a panic.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::warn;

//=== Internal Dependencies ===============================================

use super::node::{AxisId, ButtonId};

//=== InputMap ============================================================

/// String-keyed registry of node handles.
#[derive(Debug, Clone)]
pub struct InputMap<H> {
    kind: &'static str,
    entries: HashMap<String, H>,
}

/// Virtual button names.
pub type ButtonMap = InputMap<ButtonId>;

/// Virtual axis names.
pub type AxisMap = InputMap<AxisId>;

impl<H: Copy> InputMap<H> {
    fn with_kind(kind: &'static str) -> Self {
        Self {
            kind,
            entries: HashMap::new(),
        }
    }

    /// Maps `name` to `handle`, returning the handle it replaced.
    pub fn map(&mut self, name: impl Into<String>, handle: H) -> Option<H> {
        self.entries.insert(name.into(), handle)
    }

    /// Removes `name`, returning the handle it mapped to.
    pub fn unmap(&mut self, name: &str) -> Option<H> {
        self.entries.remove(name)
    }

    /// Handle mapped to `name`. Logs a warning on a miss.
    pub fn get(&self, name: &str) -> Option<H> {
        let handle = self.entries.get(name).copied();
        if handle.is_none() {
            warn!(target: "input", "Unknown {} input [{}]", self.kind, name);
        }
        handle
    }

    /// Returns `true` if `name` is mapped. Never logs.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Mapped names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self::with_kind("button")
    }
}

impl Default for AxisMap {
    fn default() -> Self {
        Self::with_kind("axis")
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::device::DeviceButton;
    use crate::core::input::graph::InputGraph;

    #[test]
    fn miss_returns_none() {
        let map = ButtonMap::default();

        assert_eq!(map.get("nonexistent"), None);
        assert!(!map.contains("nonexistent"));
        assert!(map.is_empty());
    }

    #[test]
    fn map_overwrites_and_returns_previous() {
        let mut graph = InputGraph::new();
        let a = graph.add_button(DeviceButton::new("A", "A", "Keyboard"));
        let b = graph.add_button(DeviceButton::new("B", "B", "Keyboard"));
        let mut map = ButtonMap::default();

        assert_eq!(map.map("Jump", a), None);
        assert_eq!(map.map("Jump", b), Some(a));
        assert_eq!(map.get("Jump"), Some(b));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn unmap_removes_name() {
        let mut graph = InputGraph::new();
        let a = graph.add_button(DeviceButton::new("A", "A", "Keyboard"));
        let mut map = ButtonMap::default();
        map.map("Fire", a);

        assert_eq!(map.unmap("Fire"), Some(a));
        assert_eq!(map.unmap("Fire"), None);
        assert_eq!(map.get("Fire"), None);
    }
}
