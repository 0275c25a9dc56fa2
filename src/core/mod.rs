//=========================================================================
// Core
//=========================================================================
//
// Host-independent engine systems.
//
//   input   : composable virtual input graph, devices, name maps
//   screen  : screen trait, screen stack and transition queue
//   host    : contracts a platform backend implements (window, scheduler)
//   updater : fan-out tick helper used by the kernel's pre/post phases
//
// Everything here runs on the single tick thread. Nothing in this module
// talks to the OS directly; that lives in the private `platform` module.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod geometry;
pub mod host;
pub mod input;
pub mod screen;
mod updater;

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

//=== Public API ==========================================================

pub use geometry::{InclusiveRange, Rect};
pub use updater::{Updater, UpdaterKey};

//=== Updatable ===========================================================

/// Something that receives a per-tick time delta.
///
/// Updatables can be attached to the kernel's pre- or post-updater to be
/// ticked once per frame before or after (respectively) the active screen.
pub trait Updatable {
    /// Advances this object by `dt` seconds.
    fn update(&mut self, dt: f32);
}

/// Lets the application keep a handle to an updatable it attached.
impl<T: Updatable + ?Sized> Updatable for Rc<RefCell<T>> {
    fn update(&mut self, dt: f32) {
        self.borrow_mut().update(dt);
    }
}

impl<T: Updatable + ?Sized> Updatable for Box<T> {
    fn update(&mut self, dt: f32) {
        (**self).update(dt);
    }
}
