//=========================================================================
// Xenon Kernel
//
// Owns the screen stack and runs the tick protocol.
//
// Architecture:
// ```text
//     KernelBuilder  ──build()──>  Kernel  ──exec(first)──>  [tick loop]
//         │                          │
//         ├─ with_host()             ├─ HostFactory::init() → window,
//         ├─ with_tps()              │    devices, scheduler
//         └─ with_host_factory()     ├─ push(first)
//                                    └─ while executing: scheduler.tick()
// ```
//
// Per update (scheduler calls `FrameCallbacks::update`):
//   1. pre-update updater
//   2. top screen update, or stop executing if the stack is empty
//   3. queued screen transitions
//   4. post-update updater
//   5. input graph snapshot (edge detection for the next tick)
//   6. device housekeeping (mouse motion and wheel reset)
//
// Per render: top screen render, or stop executing if the stack is empty.
//
// Stopping is cooperative. The loop ends after the current tick's
// callbacks return, and any screens left on the stack are unloaded.
//
//=========================================================================

//=== Submodules ==========================================================

mod error;

pub use error::KernelError;

//=== External Dependencies ===============================================

use log::{debug, error, info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::host::{
    FrameCallbacks, HostBindings, HostConfig, HostFactory, HostInterface, HostRegistry, Window,
};
use crate::core::input::{Input, InputDevice, InputDevices, InputEvent};
use crate::core::screen::{Screen, ScreenContext, ScreenStack, ScreenTransition, TransitionQueue};
use crate::core::{Updatable, Updater};

/// Rounds of transitions applied after one screen call before the rest
/// are dropped. Guards against screens that push each other on load.
const MAX_TRANSITION_ROUNDS: usize = 100;

//=== KernelBuilder =======================================================

/// Builder for configuring and constructing a [`Kernel`].
///
/// # Default Values
///
/// - **Host**: winit
/// - **Window**: "Xenon", 800x600, windowed
/// - **TPS**: 60
///
/// # Examples
///
/// ```no_run
/// use xenon_engine::prelude::*;
///
/// struct Title;
///
/// impl Screen for Title {
///     fn update(&mut self, _ctx: &mut ScreenContext, _dt: f32) {}
///     fn render(&mut self, _ctx: &mut ScreenContext, _dt: f32) {}
/// }
///
/// let mut kernel = KernelBuilder::new()
///     .with_title("Asteroids")
///     .with_window_size(1280, 720)
///     .with_tps(120)
///     .with_args(std::env::args())
///     .build();
///
/// kernel.exec(Title).unwrap();
/// ```
pub struct KernelBuilder {
    config: HostConfig,
    interface: HostInterface,
    registry: HostRegistry,
}

impl KernelBuilder {
    pub fn new() -> Self {
        Self {
            config: HostConfig::default(),
            interface: HostInterface::default(),
            registry: HostRegistry::with_defaults(),
        }
    }

    /// Selects the host `exec()` initializes.
    pub fn with_host(mut self, interface: HostInterface) -> Self {
        self.interface = interface;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.config.fullscreen = fullscreen;
        self
    }

    /// Sets the target update ticks per second.
    ///
    /// Default: 60
    ///
    /// # Panics
    ///
    /// Panics if `tps == 0`.
    pub fn with_tps(mut self, tps: u32) -> Self {
        assert!(tps > 0, "TPS must be positive, got {}", tps);
        self.config.tps = tps;
        self
    }

    /// Process arguments handed to the host.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Registers (or replaces) the factory for one host interface.
    pub fn with_host_factory<F>(mut self, interface: HostInterface, factory: F) -> Self
    where
        F: HostFactory + 'static,
    {
        self.registry.register(interface, factory);
        self
    }

    /// Replaces the whole host registry, bundled hosts included.
    pub fn with_host_registry(mut self, registry: HostRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn build(self) -> Kernel {
        info!(
            target: "kernel",
            "Building kernel (host: {}, TPS: {}, window: {}x{})",
            self.interface,
            self.config.tps,
            self.config.width,
            self.config.height
        );

        Kernel {
            config: self.config,
            interface: self.interface,
            registry: self.registry,
            pre_update: Updater::new(),
            post_update: Updater::new(),
            screens: ScreenStack::new(),
            services: Services::default(),
            executing: false,
        }
    }
}

impl Default for KernelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Services ============================================================

/// Everything a screen may reach, kept apart from the screen stack so a
/// `ScreenContext` can borrow it while a screen runs.
#[derive(Default)]
struct Services {
    input: Input,
    transitions: TransitionQueue,
    window: Option<Box<dyn Window>>,
    devices: Option<Box<dyn InputDevices>>,
}

impl Services {
    fn context(&mut self) -> ScreenContext<'_> {
        let window = self.window.as_mut().map(|window| &mut **window as &mut dyn Window);
        ScreenContext::new(&mut self.input, window, self.devices.as_deref(), &mut self.transitions)
    }
}

//=== Kernel ==============================================================

/// Screen stack, updaters and the active host.
///
/// Create via [`KernelBuilder`]; start with [`Kernel::exec`].
pub struct Kernel {
    config: HostConfig,
    interface: HostInterface,
    registry: HostRegistry,
    pre_update: Updater,
    post_update: Updater,
    screens: ScreenStack,
    services: Services,
    executing: bool,
}

impl Kernel {
    /// Kernel with default settings.
    pub fn new() -> Self {
        KernelBuilder::new().build()
    }

    //--- Execution --------------------------------------------------------

    /// Initializes the host, pushes `first` and ticks until exit.
    ///
    /// On return every screen has been unloaded and the host released.
    ///
    /// # Errors
    ///
    /// Fails before the loop starts if the selected host has no factory
    /// or its initialization fails.
    pub fn exec<S: Screen + 'static>(&mut self, first: S) -> Result<(), KernelError> {
        let interface = self.interface;
        info!(target: "kernel", "Starting kernel on {} host", interface);

        let Some(factory) = self.registry.factory_mut(interface) else {
            error!(target: "kernel", "No host factory registered for {}", interface);
            return Err(KernelError::HostUnavailable(interface));
        };

        let HostBindings {
            window,
            devices,
            mut scheduler,
        } = factory
            .init(&self.config, self.services.input.graph_mut())
            .map_err(|e| {
                error!(target: "kernel", "Host initialization failed: {}", e);
                KernelError::from(e)
            })?;

        self.services.window = window;
        self.services.devices = Some(devices);
        self.executing = true;
        self.push(first);

        while self.executing {
            scheduler.tick(&mut *self);
        }

        self.shutdown();
        info!(target: "kernel", "Kernel stopped");
        Ok(())
    }

    pub fn is_executing(&self) -> bool {
        self.executing
    }

    /// Stops the loop after the current tick.
    pub fn exit(&mut self) {
        if self.executing {
            debug!(target: "kernel", "Exit requested");
        }
        self.executing = false;
    }

    //--- Screen Stack -----------------------------------------------------

    /// Active screen, if any.
    pub fn screen(&self) -> Option<&dyn Screen> {
        self.screens.top()
    }

    pub fn screen_mut(&mut self) -> Option<&mut (dyn Screen + 'static)> {
        self.screens.top_mut()
    }

    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    /// Pushes and loads `screen`.
    pub fn push<S: Screen + 'static>(&mut self, screen: S) {
        self.screens.push(Box::new(screen), &mut self.services.context());
        self.apply_transitions();
    }

    /// Unloads and removes the active screen. No-op on an empty stack.
    pub fn pop(&mut self) -> Option<Box<dyn Screen>> {
        let screen = self.screens.pop(&mut self.services.context());
        self.apply_transitions();
        screen
    }

    /// Pops the active screen (if any), then pushes `screen`.
    pub fn swap<S: Screen + 'static>(&mut self, screen: S) -> Option<Box<dyn Screen>> {
        let previous = self.screens.swap(Box::new(screen), &mut self.services.context());
        self.apply_transitions();
        previous
    }

    //--- Services ---------------------------------------------------------

    pub fn input(&self) -> &Input {
        &self.services.input
    }

    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.services.input
    }

    /// Host window. `None` outside `exec()` or on a windowless host.
    pub fn window(&self) -> Option<&dyn Window> {
        self.services.window.as_deref()
    }

    pub fn window_mut(&mut self) -> Option<&mut (dyn Window + 'static)> {
        self.services.window.as_deref_mut()
    }

    pub fn has_device(&self, id: &str) -> bool {
        self.services.devices.as_ref().is_some_and(|devices| devices.has_device(id))
    }

    pub fn device(&self, id: &str) -> Option<&dyn InputDevice> {
        self.services.devices.as_ref()?.device(id)
    }

    /// Runs before the active screen's update.
    pub fn pre_update(&mut self) -> &mut Updater {
        &mut self.pre_update
    }

    /// Runs after the active screen's update, before the input snapshot.
    pub fn post_update(&mut self) -> &mut Updater {
        &mut self.post_update
    }

    //--- Configuration ----------------------------------------------------

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn args(&self) -> &[String] {
        &self.config.args
    }

    pub fn host_interface(&self) -> HostInterface {
        self.interface
    }

    /// Selects the host the next `exec()` initializes.
    pub fn set_host_interface(&mut self, interface: HostInterface) {
        if self.executing {
            warn!(target: "kernel", "Host changed to {} while executing; applies to the next exec()", interface);
        }
        self.interface = interface;
    }

    //--- Internal Helpers -------------------------------------------------

    /// Applies transitions queued by screens, including any queued by the
    /// `load()`/`unload()` calls those transitions trigger.
    fn apply_transitions(&mut self) {
        for _ in 0..MAX_TRANSITION_ROUNDS {
            let pending = self.services.transitions.take();
            if pending.is_empty() {
                return;
            }

            for transition in pending {
                trace!(target: "kernel", "Applying {:?}", transition);
                let mut ctx = self.services.context();
                match transition {
                    ScreenTransition::Push(screen) => self.screens.push(screen, &mut ctx),
                    ScreenTransition::Pop => drop(self.screens.pop(&mut ctx)),
                    ScreenTransition::Swap(screen) => drop(self.screens.swap(screen, &mut ctx)),
                    ScreenTransition::Exit => self.executing = false,
                }
            }
        }

        warn!(
            target: "kernel",
            "Dropping {} screen transitions after {} rounds",
            self.services.transitions.len(),
            MAX_TRANSITION_ROUNDS
        );
        self.services.transitions.clear();
    }

    /// Unloads remaining screens and releases the host.
    fn shutdown(&mut self) {
        debug!(target: "kernel", "Unloading {} screens", self.screens.len());
        self.screens.clear(&mut self.services.context());
        self.services.transitions.clear();
        self.services.window = None;
        if let Some(devices) = self.services.devices.take() {
            devices.release(self.services.input.graph_mut());
        }
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tick Protocol =======================================================

impl FrameCallbacks for Kernel {
    fn input_event(&mut self, event: InputEvent) {
        trace!(target: "kernel", "Input event: {:?}", event);

        let Some(devices) = self.services.devices.as_mut() else {
            return;
        };
        devices.handle_event(&event, self.services.input.graph_mut());
    }

    fn update(&mut self, dt: f32) {
        self.pre_update.update(dt);

        match self.screens.top_mut() {
            Some(screen) => screen.update(&mut self.services.context(), dt),
            None => {
                debug!(target: "kernel", "No screen to update, stopping");
                self.executing = false;
            }
        }
        self.apply_transitions();

        self.post_update.update(dt);

        self.services.input.update(dt);
        if let Some(devices) = self.services.devices.as_mut() {
            devices.update(self.services.input.graph_mut(), dt);
        }
    }

    fn render(&mut self, dt: f32) {
        match self.screens.top_mut() {
            Some(screen) => screen.render(&mut self.services.context(), dt),
            None => {
                debug!(target: "kernel", "No screen to render, stopping");
                self.executing = false;
            }
        }
        self.apply_transitions();
    }

    fn exit_requested(&mut self) {
        info!(target: "kernel", "Host requested exit");
        self.executing = false;
    }

    fn is_running(&self) -> bool {
        self.executing
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::{HeadlessHost, HostError, Scheduler};
    use crate::core::input::device::KEYBOARD_ID;
    use crate::core::input::{InputGraph, KeyCode};
    use std::cell::RefCell;
    use std::rc::Rc;

    //--- Test Helpers -----------------------------------------------------

    type Journal = Rc<RefCell<Vec<String>>>;

    fn record(journal: &Journal, entry: impl Into<String>) {
        journal.borrow_mut().push(entry.into());
    }

    /// Screen that logs its lifecycle and runs a scripted action on update.
    struct Scripted {
        tag: &'static str,
        journal: Journal,
        on_update: fn(&mut ScreenContext, &Journal),
    }

    impl Scripted {
        fn new(tag: &'static str, journal: &Journal) -> Self {
            Self::with(tag, journal, |_, _| {})
        }

        fn with(tag: &'static str, journal: &Journal, on_update: fn(&mut ScreenContext, &Journal)) -> Self {
            Self { tag, journal: journal.clone(), on_update }
        }
    }

    impl Screen for Scripted {
        fn load(&mut self, _ctx: &mut ScreenContext) {
            record(&self.journal, format!("{}.load", self.tag));
        }

        fn unload(&mut self, _ctx: &mut ScreenContext) {
            record(&self.journal, format!("{}.unload", self.tag));
        }

        fn update(&mut self, ctx: &mut ScreenContext, _dt: f32) {
            record(&self.journal, format!("{}.update", self.tag));
            (self.on_update)(ctx, &self.journal);
        }

        fn render(&mut self, _ctx: &mut ScreenContext, _dt: f32) {
            record(&self.journal, format!("{}.render", self.tag));
        }
    }

    struct Phase {
        tag: &'static str,
        journal: Journal,
    }

    impl Updatable for Phase {
        fn update(&mut self, _dt: f32) {
            record(&self.journal, self.tag);
        }
    }

    fn headless(frames: u64) -> KernelBuilder {
        KernelBuilder::new()
            .with_host(HostInterface::Headless)
            .with_host_factory(
                HostInterface::Headless,
                HeadlessHost::new().with_frame_limit(frames).with_pacing(false),
            )
    }

    //=====================================================================
    // KernelBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let kernel = Kernel::new();

        assert_eq!(kernel.host_interface(), HostInterface::Winit);
        assert_eq!(kernel.config(), &HostConfig::default());
        assert!(kernel.args().is_empty());
        assert!(!kernel.is_executing());
        assert!(kernel.screen().is_none());
        assert!(kernel.window().is_none());
    }

    #[test]
    fn builder_applies_settings() {
        let kernel = KernelBuilder::new()
            .with_title("Demo")
            .with_window_size(1024, 768)
            .with_fullscreen(true)
            .with_tps(30)
            .with_args(["demo", "--fast"])
            .build();

        assert_eq!(kernel.config().title, "Demo");
        assert_eq!((kernel.config().width, kernel.config().height), (1024, 768));
        assert!(kernel.config().fullscreen);
        assert_eq!(kernel.config().tps, 30);
        assert_eq!(kernel.args(), ["demo", "--fast"]);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        KernelBuilder::new().with_tps(0);
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_with_window_size_panics_on_zero() {
        KernelBuilder::new().with_window_size(0, 600);
    }

    //=====================================================================
    // Tick Protocol Tests
    //=====================================================================

    #[test]
    fn update_runs_phases_in_order() {
        let journal = Journal::default();
        let mut kernel = Kernel::new();
        kernel.pre_update().attach(Phase { tag: "pre", journal: journal.clone() });
        kernel.post_update().attach(Phase { tag: "post", journal: journal.clone() });
        kernel.push(Scripted::new("A", &journal));
        journal.borrow_mut().clear();

        kernel.update(0.016);
        kernel.render(0.016);

        assert_eq!(*journal.borrow(), vec!["pre", "A.update", "post", "A.render"]);
    }

    #[test]
    fn empty_stack_stops_in_update_and_render() {
        let mut kernel = Kernel::new();

        kernel.executing = true;
        kernel.update(0.016);
        assert!(!kernel.is_executing());

        kernel.executing = true;
        kernel.render(0.016);
        assert!(!kernel.is_executing());
    }

    #[test]
    fn empty_stack_ends_the_loop() {
        struct Counting(Rc<RefCell<u32>>);

        impl Scheduler for Counting {
            fn tick(&mut self, frame: &mut dyn FrameCallbacks) {
                *self.0.borrow_mut() += 1;
                frame.update(0.1);
            }
        }

        let ticks = Rc::new(RefCell::new(0));
        let scheduler_ticks = ticks.clone();
        let journal = Journal::default();

        let mut kernel = KernelBuilder::new()
            .with_host(HostInterface::Headless)
            .with_host_factory(HostInterface::Headless, move |config: &HostConfig, graph: &mut InputGraph| {
                let mut bindings = HeadlessHost::new().init(config, graph)?;
                bindings.scheduler = Box::new(Counting(scheduler_ticks.clone()));
                Ok::<_, HostError>(bindings)
            })
            .build();

        kernel
            .exec(Scripted::with("A", &journal, |ctx, _| ctx.pop()))
            .unwrap();

        assert_eq!(*ticks.borrow(), 2);
        assert_eq!(*journal.borrow(), vec!["A.load", "A.update", "A.unload"]);
        assert!(!kernel.is_executing());
    }

    //=====================================================================
    // Screen Transition Tests
    //=====================================================================

    #[test]
    fn kernel_push_pop_swap() {
        let journal = Journal::default();
        let mut kernel = Kernel::new();

        kernel.push(Scripted::new("A", &journal));
        kernel.push(Scripted::new("B", &journal));
        assert!(kernel.swap(Scripted::new("C", &journal)).is_some());
        assert!(kernel.pop().is_some());

        assert_eq!(
            *journal.borrow(),
            vec!["A.load", "B.load", "B.unload", "C.load", "C.unload"]
        );
        assert_eq!(kernel.screen_count(), 1);
    }

    #[test]
    fn pop_on_empty_stack_is_noop() {
        let mut kernel = Kernel::new();

        assert!(kernel.pop().is_none());
        assert!(kernel.screen().is_none());
        assert!(kernel.screen_mut().is_none());
    }

    #[test]
    fn screens_queue_transitions_from_update() {
        let journal = Journal::default();
        let mut kernel = Kernel::new();
        kernel.push(Scripted::with("A", &journal, |ctx, journal| {
            ctx.push(Scripted::with("B", journal, |ctx, journal| {
                ctx.swap(Scripted::new("C", journal));
            }));
        }));

        kernel.update(0.016);
        kernel.update(0.016);
        kernel.render(0.016);

        assert_eq!(
            *journal.borrow(),
            vec!["A.load", "A.update", "B.load", "B.update", "B.unload", "C.load", "C.render"]
        );
        assert_eq!(kernel.screen_count(), 2);
    }

    //=====================================================================
    // Execution Tests
    //=====================================================================

    #[test]
    fn exec_runs_until_frame_limit_and_unloads() {
        let journal = Journal::default();
        let mut kernel = headless(2).build();

        kernel.exec(Scripted::new("A", &journal)).unwrap();

        assert_eq!(
            *journal.borrow(),
            vec!["A.load", "A.update", "A.render", "A.update", "A.render", "A.unload"]
        );
        assert!(kernel.screen().is_none());
        assert!(kernel.window().is_none());
        assert!(!kernel.has_device(KEYBOARD_ID));
    }

    #[test]
    fn screen_exit_stops_after_current_tick() {
        let journal = Journal::default();
        let mut kernel = headless(10).build();

        kernel.exec(Scripted::with("A", &journal, |ctx, _| ctx.exit())).unwrap();

        assert_eq!(*journal.borrow(), vec!["A.load", "A.update", "A.unload"]);
    }

    #[test]
    fn exec_delivers_remote_input_to_screens() {
        struct Jumper {
            journal: Journal,
        }

        impl Screen for Jumper {
            fn load(&mut self, ctx: &mut ScreenContext) {
                assert_eq!(ctx.window().map(|window| window.title()), Some("Test".to_owned()));
                let space = ctx.device(KEYBOARD_ID).and_then(|keyboard| keyboard.button("Space"));
                if let Some(space) = space {
                    ctx.input_mut().map_button("Jump", space);
                }
            }

            fn update(&mut self, ctx: &mut ScreenContext, _dt: f32) {
                let input = ctx.input();
                record(
                    &self.journal,
                    format!("down={} pressed={}", input.is_down("Jump"), input.is_pressed("Jump")),
                );
            }

            fn render(&mut self, _ctx: &mut ScreenContext, _dt: f32) {}
        }

        let (host, remote) = HeadlessHost::with_remote();
        remote.send_input(InputEvent::KeyDown(KeyCode::Space)).unwrap();

        let journal = Journal::default();
        let mut kernel = KernelBuilder::new()
            .with_title("Test")
            .with_host(HostInterface::Headless)
            .with_host_factory(HostInterface::Headless, host.with_frame_limit(2).with_pacing(false))
            .build();

        kernel.exec(Jumper { journal: journal.clone() }).unwrap();

        assert_eq!(
            *journal.borrow(),
            vec!["down=true pressed=true", "down=true pressed=false"]
        );
    }

    #[test]
    fn exec_twice_releases_previous_devices() {
        struct Binder {
            journal: Journal,
        }

        impl Screen for Binder {
            fn load(&mut self, ctx: &mut ScreenContext) {
                let space = ctx.device(KEYBOARD_ID).and_then(|keyboard| keyboard.button("Space"));
                if let Some(space) = space {
                    ctx.input_mut().map_button("Jump", space);
                }
            }

            fn update(&mut self, ctx: &mut ScreenContext, _dt: f32) {
                record(&self.journal, format!("jump={}", ctx.input().is_down("Jump")));
            }

            fn render(&mut self, _ctx: &mut ScreenContext, _dt: f32) {}
        }

        let (host, remote) = HeadlessHost::with_remote();
        let journal = Journal::default();
        let mut kernel = KernelBuilder::new()
            .with_host(HostInterface::Headless)
            .with_host_factory(HostInterface::Headless, host.with_frame_limit(1).with_pacing(false))
            .build();

        kernel.exec(Binder { journal: journal.clone() }).unwrap();
        let stale = kernel.input().buttons().get("Jump").unwrap();
        assert_eq!(kernel.input().graph().button_count(), 0);
        assert_eq!(kernel.input().graph().axis_count(), 0);
        assert!(!kernel.input().graph().contains_button(stale));

        remote.send_input(InputEvent::KeyDown(KeyCode::Space)).unwrap();
        kernel.exec(Binder { journal: journal.clone() }).unwrap();

        assert_eq!(*journal.borrow(), vec!["jump=false", "jump=true"]);
        assert_eq!(kernel.input().graph().button_count(), 0);
    }

    #[test]
    fn remote_close_ends_exec() {
        let (host, remote) = HeadlessHost::with_remote();
        remote.request_close().unwrap();

        let journal = Journal::default();
        let mut kernel = KernelBuilder::new()
            .with_host(HostInterface::Headless)
            .with_host_factory(HostInterface::Headless, host.with_pacing(false))
            .build();

        kernel.exec(Scripted::new("A", &journal)).unwrap();

        assert_eq!(*journal.borrow(), vec!["A.load", "A.unload"]);
    }

    #[test]
    fn exec_fails_without_host() {
        let mut kernel = KernelBuilder::new()
            .with_host_registry(HostRegistry::empty())
            .build();

        let err = kernel.exec(Scripted::new("A", &Journal::default())).unwrap_err();

        assert!(matches!(err, KernelError::HostUnavailable(HostInterface::Winit)));
        assert!(kernel.screen().is_none());
    }

    #[test]
    fn exec_surfaces_host_init_errors() {
        let mut kernel = KernelBuilder::new()
            .with_host_factory(
                HostInterface::Winit,
                |_: &HostConfig, _: &mut InputGraph| -> Result<HostBindings, HostError> {
                    Err(HostError::WindowCreation("no display".into()))
                },
            )
            .build();

        let err = kernel.exec(Scripted::new("A", &Journal::default())).unwrap_err();

        assert!(matches!(err, KernelError::HostInit(HostError::WindowCreation(_))));
        assert!(!kernel.is_executing());
    }
}
