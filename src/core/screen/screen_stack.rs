//=========================================================================
// Screen Stack
//=========================================================================
//
// LIFO of screens with lifecycle hooks.
//
//   push(s) : push, then s.load()
//   pop()   : top.unload(), then remove
//   swap(s) : pop(), then push(s)
//
// Popping an empty stack is a no-op.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Screen, ScreenContext};

//=== ScreenStack =========================================================

#[derive(Default)]
pub struct ScreenStack {
    screens: Vec<Box<dyn Screen>>,
}

impl ScreenStack {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Stack Operations -------------------------------------------------

    /// Pushes `screen` and loads it.
    pub fn push(&mut self, screen: Box<dyn Screen>, ctx: &mut ScreenContext) {
        self.screens.push(screen);
        debug!(target: "kernel", "Pushed screen (depth {})", self.screens.len());

        if let Some(top) = self.screens.last_mut() {
            top.load(ctx);
        }
    }

    /// Unloads and removes the top screen, returning it.
    pub fn pop(&mut self, ctx: &mut ScreenContext) -> Option<Box<dyn Screen>> {
        let Some(top) = self.screens.last_mut() else {
            debug!(target: "kernel", "Pop on empty screen stack ignored");
            return None;
        };

        top.unload(ctx);
        let screen = self.screens.pop();
        debug!(target: "kernel", "Popped screen (depth {})", self.screens.len());
        screen
    }

    /// Pops the top screen (if any), then pushes `screen`.
    pub fn swap(&mut self, screen: Box<dyn Screen>, ctx: &mut ScreenContext) -> Option<Box<dyn Screen>> {
        let previous = self.pop(ctx);
        self.push(screen, ctx);
        previous
    }

    /// Pops every screen, top first.
    pub fn clear(&mut self, ctx: &mut ScreenContext) {
        while self.pop(ctx).is_some() {}
    }

    //--- Queries ----------------------------------------------------------

    pub fn top(&self) -> Option<&dyn Screen> {
        self.screens.last().map(|screen| screen.as_ref())
    }

    pub fn top_mut(&mut self) -> Option<&mut (dyn Screen + 'static)> {
        self.screens.last_mut().map(|screen| screen.as_mut())
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Input;
    use crate::core::screen::TransitionQueue;
    use std::cell::RefCell;
    use std::rc::Rc;

    //--- Test Helpers -----------------------------------------------------

    type Journal = Rc<RefCell<Vec<String>>>;

    struct Recorder {
        tag: &'static str,
        journal: Journal,
    }

    impl Recorder {
        fn boxed(tag: &'static str, journal: &Journal) -> Box<dyn Screen> {
            Box::new(Self { tag, journal: journal.clone() })
        }

        fn log(&self, what: &str) {
            self.journal.borrow_mut().push(format!("{}.{}", self.tag, what));
        }
    }

    impl Screen for Recorder {
        fn load(&mut self, _ctx: &mut ScreenContext) {
            self.log("load");
        }

        fn unload(&mut self, _ctx: &mut ScreenContext) {
            self.log("unload");
        }

        fn update(&mut self, _ctx: &mut ScreenContext, _dt: f32) {
            self.log("update");
        }

        fn render(&mut self, _ctx: &mut ScreenContext, _dt: f32) {
            self.log("render");
        }
    }

    fn with_ctx(f: impl FnOnce(&mut ScreenContext)) {
        let mut input = Input::new();
        let mut transitions = TransitionQueue::new();
        let mut ctx = ScreenContext::new(&mut input, None, None, &mut transitions);
        f(&mut ctx);
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn push_push_pop_lifecycle() {
        let journal = Journal::default();
        let mut stack = ScreenStack::new();

        with_ctx(|ctx| {
            stack.push(Recorder::boxed("A", &journal), ctx);
            stack.push(Recorder::boxed("B", &journal), ctx);
            stack.pop(ctx);
        });

        assert_eq!(*journal.borrow(), vec!["A.load", "B.load", "B.unload"]);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut stack = ScreenStack::new();

        with_ctx(|ctx| {
            assert!(stack.pop(ctx).is_none());
        });
        assert!(stack.is_empty());
        assert!(stack.top().is_none());
    }

    #[test]
    fn swap_unloads_then_loads() {
        let journal = Journal::default();
        let mut stack = ScreenStack::new();

        with_ctx(|ctx| {
            stack.push(Recorder::boxed("A", &journal), ctx);
            stack.swap(Recorder::boxed("B", &journal), ctx);
            if let Some(top) = stack.top_mut() {
                top.update(ctx, 0.016);
            }
        });

        assert_eq!(*journal.borrow(), vec!["A.load", "A.unload", "B.load", "B.update"]);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn clear_unloads_top_first() {
        let journal = Journal::default();
        let mut stack = ScreenStack::new();

        with_ctx(|ctx| {
            stack.push(Recorder::boxed("A", &journal), ctx);
            stack.push(Recorder::boxed("B", &journal), ctx);
            journal.borrow_mut().clear();
            stack.clear(ctx);
        });

        assert_eq!(*journal.borrow(), vec!["B.unload", "A.unload"]);
        assert!(stack.is_empty());
    }
}
