//=========================================================================
// Host Contracts
//=========================================================================
//
// What a platform backend provides to the kernel.
//
// Architecture:
// ```text
// HostRegistry
//   └─ HostInterface → Box<dyn HostFactory>
//                          │ init(config, graph)
//                          ↓
//                     HostBindings
//                       ├─ window:    Option<Box<dyn Window>>
//                       ├─ devices:   Box<dyn InputDevices>
//                       └─ scheduler: Box<dyn Scheduler>
// ```
//
// Exactly one host is initialized per `Kernel::exec()`. The scheduler
// owns the loop pacing; the kernel only reacts to `FrameCallbacks`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use log::debug;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::geometry::Rect;
use crate::core::input::{InputDevices, InputEvent, InputGraph};

//=== Bundled Hosts =======================================================

pub use crate::platform::{HeadlessHost, HeadlessRemote, HeadlessWindow, HostEvent, WinitHost};

//=== HostInterface =======================================================

/// Identifies a platform backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HostInterface {
    /// Desktop window and OS event loop through winit.
    #[default]
    Winit,

    /// No window. Fixed-step loop fed by injected events.
    Headless,
}

impl fmt::Display for HostInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winit => f.write_str("winit"),
            Self::Headless => f.write_str("headless"),
        }
    }
}

//=== HostConfig ==========================================================

/// Resolved settings handed to a host factory.
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    /// Update ticks per second.
    pub tps: u32,
    /// Process arguments, forwarded untouched.
    pub args: Vec<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            title: "Xenon".to_owned(),
            width: 800,
            height: 600,
            fullscreen: false,
            tps: 60,
            args: Vec::new(),
        }
    }
}

impl HostConfig {
    /// Update rate, never below one tick per second.
    pub fn tick_rate(&self) -> u32 {
        self.tps.max(1)
    }

    /// Fixed update delta in seconds.
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate() as f32
    }

    /// Fixed update interval.
    pub fn step(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate() as f64)
    }
}

//=== Window ==============================================================

/// Host window.
pub trait Window {
    /// Opaque native handle.
    fn handle(&self) -> u64;

    fn title(&self) -> String;
    fn set_title(&mut self, title: &str);

    /// Outer position and inner size, in physical pixels.
    fn bounds(&self) -> Rect<i32>;
    fn set_bounds(&mut self, bounds: Rect<i32>);

    fn show(&mut self);
    fn hide(&mut self);

    fn is_fullscreen(&self) -> bool;
    fn set_fullscreen(&mut self, fullscreen: bool);

    fn toggle_fullscreen(&mut self) {
        let fullscreen = self.is_fullscreen();
        self.set_fullscreen(!fullscreen);
    }
}

//=== Scheduler ===========================================================

/// Kernel-side handlers a scheduler drives.
pub trait FrameCallbacks {
    /// Delivers one host input event.
    fn input_event(&mut self, event: InputEvent);

    /// Runs one update tick.
    fn update(&mut self, dt: f32);

    /// Runs one render pass.
    fn render(&mut self, dt: f32);

    /// The host asked to close (window close button, remote request).
    fn exit_requested(&mut self);

    /// `false` once the kernel has stopped executing. Schedulers stop
    /// invoking callbacks for the rest of the tick.
    fn is_running(&self) -> bool;
}

/// Drives the tick loop for one host.
///
/// Each `tick()` may invoke the callbacks zero, one, or more times.
pub trait Scheduler {
    fn tick(&mut self, frame: &mut dyn FrameCallbacks);
}

//=== HostBindings ========================================================

/// Objects a host factory produces.
pub struct HostBindings {
    pub window: Option<Box<dyn Window>>,
    pub devices: Box<dyn InputDevices>,
    pub scheduler: Box<dyn Scheduler>,
}

//=== HostError ===========================================================

#[derive(Debug, Error)]
pub enum HostError {
    #[error("event loop creation failed: {0}")]
    EventLoop(String),

    #[error("window creation failed: {0}")]
    WindowCreation(String),

    #[error("{0} host is not available: {1}")]
    Unavailable(HostInterface, String),
}

//=== HostFactory =========================================================

/// Builds a host's bindings. Called once per `Kernel::exec()`.
///
/// Device primitives are registered in `graph`.
pub trait HostFactory {
    fn init(&mut self, config: &HostConfig, graph: &mut InputGraph) -> Result<HostBindings, HostError>;
}

impl<F> HostFactory for F
where
    F: FnMut(&HostConfig, &mut InputGraph) -> Result<HostBindings, HostError>,
{
    fn init(&mut self, config: &HostConfig, graph: &mut InputGraph) -> Result<HostBindings, HostError> {
        self(config, graph)
    }
}

//=== HostRegistry ========================================================

/// Maps each host interface to the factory that initializes it.
pub struct HostRegistry {
    factories: HashMap<HostInterface, Box<dyn HostFactory>>,
}

impl HostRegistry {
    /// Registry with no hosts.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry with the bundled winit and headless hosts.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(HostInterface::Winit, WinitHost::new());
        registry.register(HostInterface::Headless, HeadlessHost::new());
        registry
    }

    /// Registers (or replaces) the factory for `interface`.
    pub fn register<F>(&mut self, interface: HostInterface, factory: F)
    where
        F: HostFactory + 'static,
    {
        if self.factories.insert(interface, Box::new(factory)).is_some() {
            debug!(target: "host", "Replaced {} host factory", interface);
        }
    }

    pub fn is_registered(&self, interface: HostInterface) -> bool {
        self.factories.contains_key(&interface)
    }

    pub fn factory_mut(&mut self, interface: HostInterface) -> Option<&mut (dyn HostFactory + 'static)> {
        self.factories.get_mut(&interface).map(|factory| factory.as_mut())
    }
}

impl Default for HostRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
