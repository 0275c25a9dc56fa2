//=========================================================================
// Updater
//=========================================================================
//
// Fan-out Updatable that ticks a list of children in attachment order.
//
// Architecture:
//   Updater
//     └─ targets: Vec<(UpdaterKey, Box<dyn Updatable>)>
//
// The kernel owns two updaters (pre-update and post-update) and runs them
// around the active screen's update each tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::Updatable;

//=== UpdaterKey ==========================================================

/// Identifies one attachment inside an [`Updater`].
///
/// Returned by [`Updater::attach`] and used to detach the same target later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UpdaterKey(u64);

//=== Updater =============================================================

/// Updatable that calls `update()` on its children each tick.
///
/// Children run in the order they were attached. Detaching preserves the
/// relative order of the remaining children.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use xenon_engine::core::{Updatable, Updater};
///
/// #[derive(Default)]
/// struct Clock { elapsed: f32 }
///
/// impl Updatable for Clock {
///     fn update(&mut self, dt: f32) { self.elapsed += dt; }
/// }
///
/// let clock = Rc::new(RefCell::new(Clock::default()));
/// let mut updater = Updater::new();
/// updater.attach(clock.clone());
///
/// updater.update(0.5);
/// assert_eq!(clock.borrow().elapsed, 0.5);
/// ```
#[derive(Default)]
pub struct Updater {
    targets: Vec<(UpdaterKey, Box<dyn Updatable>)>,
    next_key: u64,
}

impl Updater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child updatable and returns its key.
    pub fn attach<U>(&mut self, target: U) -> UpdaterKey
    where
        U: Updatable + 'static,
    {
        let key = UpdaterKey(self.next_key);
        self.next_key += 1;
        self.targets.push((key, Box::new(target)));
        key
    }

    /// Removes a child updatable, returning it if it was attached.
    pub fn detach(&mut self, key: UpdaterKey) -> Option<Box<dyn Updatable>> {
        let pos = self.targets.iter().position(|(k, _)| *k == key)?;
        Some(self.targets.remove(pos).1)
    }

    /// Returns `true` if the key still refers to an attached child.
    pub fn is_attached(&self, key: UpdaterKey) -> bool {
        self.targets.iter().any(|(k, _)| *k == key)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Updatable for Updater {
    fn update(&mut self, dt: f32) {
        trace!(target: "kernel", "Updater ticking {} targets (dt={})", self.targets.len(), dt);
        for (_, target) in &mut self.targets {
            target.update(dt);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    //--- Test Helpers -----------------------------------------------------

    struct Tagged {
        tag: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Updatable for Tagged {
        fn update(&mut self, _dt: f32) {
            self.log.borrow_mut().push(self.tag);
        }
    }

    fn tagged(tag: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Tagged {
        Tagged { tag, log: log.clone() }
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn children_run_in_attachment_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut updater = Updater::new();

        updater.attach(tagged("a", &log));
        updater.attach(tagged("b", &log));
        updater.attach(tagged("c", &log));
        updater.update(0.016);

        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn detach_removes_only_that_child() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut updater = Updater::new();

        updater.attach(tagged("a", &log));
        let b = updater.attach(tagged("b", &log));
        updater.attach(tagged("c", &log));

        assert!(updater.detach(b).is_some());
        assert!(!updater.is_attached(b));
        updater.update(0.016);

        assert_eq!(*log.borrow(), vec!["a", "c"]);
        assert_eq!(updater.len(), 2);
    }

    #[test]
    fn detach_twice_is_noop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut updater = Updater::new();

        let a = updater.attach(tagged("a", &log));
        assert!(updater.detach(a).is_some());
        assert!(updater.detach(a).is_none());
        assert!(updater.is_empty());
    }

    #[test]
    fn shared_handles_observe_updates() {
        #[derive(Default)]
        struct Counter(u32);
        impl Updatable for Counter {
            fn update(&mut self, _dt: f32) {
                self.0 += 1;
            }
        }

        let counter = Rc::new(RefCell::new(Counter::default()));
        let mut updater = Updater::new();
        updater.attach(counter.clone());

        updater.update(0.1);
        updater.update(0.1);

        assert_eq!(counter.borrow().0, 2);
    }

    #[test]
    fn nested_updaters_tick_children() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut inner = Updater::new();
        inner.attach(tagged("inner", &log));

        let mut outer = Updater::new();
        outer.attach(tagged("first", &log));
        outer.attach(inner);
        outer.update(0.016);

        assert_eq!(*log.borrow(), vec!["first", "inner"]);
    }
}
