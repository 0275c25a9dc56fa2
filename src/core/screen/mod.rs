//=========================================================================
// Screen System
//=========================================================================
//
// Stack-managed units of application state.
//
// Architecture:
//   ScreenStack
//     └─ screens: Vec<Box<dyn Screen>>   (top = last)
//
// Lifecycle of a pushed screen:
//   load → (update | render)* → unload
//
// Screens see the rest of the kernel through a `ScreenContext`, which
// also lets them request stack changes. Requests are queued and applied
// once the current screen call has returned.
//
//=========================================================================

//=== Module Declarations =================================================

mod screen_stack;
mod transition_queue;

//=== Public API ==========================================================

pub use screen_stack::ScreenStack;
pub use transition_queue::{ScreenTransition, TransitionQueue};

//=== Internal Dependencies ===============================================

use crate::core::host::Window;
use crate::core::input::{Input, InputDevice, InputDevices};

//=== Screen Trait ========================================================

/// A unit of application state on the kernel's screen stack.
///
/// Only `update()` and `render()` are required:
///
/// ```rust
/// # use xenon_engine::prelude::*;
/// struct Title;
///
/// impl Screen for Title {
///     fn update(&mut self, ctx: &mut ScreenContext, _dt: f32) {
///         if ctx.input().is_pressed("Start") {
///             ctx.exit();
///         }
///     }
///
///     fn render(&mut self, _ctx: &mut ScreenContext, _dt: f32) {}
/// }
/// ```
pub trait Screen {
    /// Called once, right after the screen is pushed.
    fn load(&mut self, _ctx: &mut ScreenContext) {}

    /// Called once, right before the screen leaves the stack.
    fn unload(&mut self, _ctx: &mut ScreenContext) {}

    /// Called every update tick while this screen is on top.
    fn update(&mut self, ctx: &mut ScreenContext, dt: f32);

    /// Called every render tick while this screen is on top.
    fn render(&mut self, ctx: &mut ScreenContext, dt: f32);
}

//=== ScreenContext =======================================================

/// What a screen can reach while it runs.
pub struct ScreenContext<'a> {
    input: &'a mut Input,
    window: Option<&'a mut dyn Window>,
    devices: Option<&'a dyn InputDevices>,
    transitions: &'a mut TransitionQueue,
}

impl<'a> ScreenContext<'a> {
    pub fn new(
        input: &'a mut Input,
        window: Option<&'a mut dyn Window>,
        devices: Option<&'a dyn InputDevices>,
        transitions: &'a mut TransitionQueue,
    ) -> Self {
        Self {
            input,
            window,
            devices,
            transitions,
        }
    }

    //--- Services ---------------------------------------------------------

    pub fn input(&self) -> &Input {
        &*self.input
    }

    pub fn input_mut(&mut self) -> &mut Input {
        &mut *self.input
    }

    pub fn window(&self) -> Option<&dyn Window> {
        self.window.as_deref()
    }

    pub fn window_mut(&mut self) -> Option<&mut (dyn Window + 'a)> {
        self.window.as_deref_mut()
    }

    pub fn has_device(&self, id: &str) -> bool {
        self.devices.is_some_and(|devices| devices.has_device(id))
    }

    pub fn device(&self, id: &str) -> Option<&dyn InputDevice> {
        self.devices?.device(id)
    }

    //--- Stack Requests ---------------------------------------------------

    /// Pushes `screen` once the current call returns.
    pub fn push<S: Screen + 'static>(&mut self, screen: S) {
        self.transitions.push(ScreenTransition::Push(Box::new(screen)));
    }

    /// Pops the top screen once the current call returns.
    pub fn pop(&mut self) {
        self.transitions.push(ScreenTransition::Pop);
    }

    /// Replaces the top screen once the current call returns.
    pub fn swap<S: Screen + 'static>(&mut self, screen: S) {
        self.transitions.push(ScreenTransition::Swap(Box::new(screen)));
    }

    /// Stops the kernel after the current tick.
    pub fn exit(&mut self) {
        self.transitions.push(ScreenTransition::Exit);
    }
}
