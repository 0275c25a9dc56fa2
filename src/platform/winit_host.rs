//=========================================================================
// Winit Host
//=========================================================================
//
// Desktop window and OS event loop.
//
// Architecture:
// ```text
//  WinitScheduler::tick()
//    └─ pump_app_events(timeout = time until next update)
//         └─ FrameDispatch (ApplicationHandler)
//              ├─ KeyboardInput / MouseInput / CursorMoved / MouseWheel
//              │     → InputProcessor → frame.input_event()
//              ├─ about_to_wait   → fixed-TPS frame.update(), request_redraw
//              ├─ RedrawRequested → frame.render(time since last render)
//              └─ CloseRequested  → frame.exit_requested()
// ```
//
// The kernel owns the outer loop, so the event loop is pumped instead of
// run. Updates run at the configured TPS regardless of the refresh rate;
// rendering follows redraw requests.
//
// Main thread requirement: winit mandates the main thread on macOS, and
// an event loop can only be created once per process.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::rc::Rc;
use std::time::{Duration, Instant};

use log::{debug, error, info, trace, warn};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    error::OsError,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Fullscreen, Window as NativeWindow, WindowAttributes, WindowId},
};

//=== Internal Dependencies ===============================================

use super::input_processor::InputProcessor;
use crate::core::geometry::Rect;
use crate::core::host::{
    FrameCallbacks, HostBindings, HostConfig, HostError, HostFactory, Scheduler, Window,
};
use crate::core::input::{InputGraph, StandardInputs};

/// Pump attempts while waiting for the OS to deliver `resumed`.
const STARTUP_PUMPS: usize = 100;

/// Updates allowed to catch up in one pump before the clock is reset.
const MAX_CATCH_UP_UPDATES: u32 = 5;

//=== WinitHost ===========================================================

/// Factory for the winit host.
#[derive(Debug, Default, Clone, Copy)]
pub struct WinitHost;

impl WinitHost {
    pub fn new() -> Self {
        Self
    }
}

impl HostFactory for WinitHost {
    fn init(&mut self, config: &HostConfig, graph: &mut InputGraph) -> Result<HostBindings, HostError> {
        debug!(target: "platform", "Creating winit event loop");

        let mut event_loop = EventLoop::new().map_err(|e| HostError::EventLoop(e.to_string()))?;

        let attributes = WindowAttributes::default()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_fullscreen(config.fullscreen.then_some(Fullscreen::Borderless(None)));

        let window = Rc::new(create_window(&mut event_loop, attributes)?);
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        let scheduler = WinitScheduler {
            event_loop,
            state: LoopState {
                window: Rc::clone(&window),
                processor: InputProcessor::new(),
                step: config.step(),
                dt: config.dt(),
                next_update: Instant::now(),
                last_render: Instant::now(),
            },
        };

        Ok(HostBindings {
            window: Some(Box::new(WinitWindow { window })),
            devices: Box::new(StandardInputs::new(graph)),
            scheduler: Box::new(scheduler),
        })
    }
}

//--- Window Bootstrap ----------------------------------------------------

/// Creates the window on the first `resumed` event.
struct WindowBootstrap {
    attributes: Option<WindowAttributes>,
    created: Option<Result<NativeWindow, OsError>>,
}

impl ApplicationHandler for WindowBootstrap {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(attributes) = self.attributes.take() {
            self.created = Some(event_loop.create_window(attributes));
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, _event: WindowEvent) {}
}

fn create_window(event_loop: &mut EventLoop<()>, attributes: WindowAttributes) -> Result<NativeWindow, HostError> {
    let mut bootstrap = WindowBootstrap {
        attributes: Some(attributes),
        created: None,
    };

    for _ in 0..STARTUP_PUMPS {
        let status = event_loop.pump_app_events(Some(Duration::from_millis(10)), &mut bootstrap);
        if let PumpStatus::Exit(code) = status {
            return Err(HostError::EventLoop(format!("exited during startup with code {}", code)));
        }

        if let Some(created) = bootstrap.created.take() {
            return created.map_err(|e| {
                error!(target: "platform", "Window creation failed: {}", e);
                HostError::WindowCreation(e.to_string())
            });
        }
    }

    Err(HostError::WindowCreation("the OS never resumed the application".to_owned()))
}

//=== WinitWindow =========================================================

struct WinitWindow {
    window: Rc<NativeWindow>,
}

impl Window for WinitWindow {
    fn handle(&self) -> u64 {
        u64::from(self.window.id())
    }

    fn title(&self) -> String {
        self.window.title()
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn bounds(&self) -> Rect<i32> {
        let position = self.window.outer_position().unwrap_or_default();
        let size = self.window.inner_size();
        Rect::new(position.x, position.y, size.width as i32, size.height as i32)
    }

    fn set_bounds(&mut self, bounds: Rect<i32>) {
        self.window.set_outer_position(PhysicalPosition::new(bounds.x, bounds.y));

        let size = PhysicalSize::new(bounds.width.max(1) as u32, bounds.height.max(1) as u32);
        if self.window.request_inner_size(size).is_none() {
            trace!(target: "platform", "Resize to {:?} is pending", size);
        }
    }

    fn show(&mut self) {
        self.window.set_visible(true);
    }

    fn hide(&mut self) {
        self.window.set_visible(false);
    }

    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.window.set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));
    }
}

//=== WinitScheduler ======================================================

struct WinitScheduler {
    event_loop: EventLoop<()>,
    state: LoopState,
}

/// Loop state the dispatcher needs while the event loop is pumping.
struct LoopState {
    window: Rc<NativeWindow>,
    processor: InputProcessor,
    step: Duration,
    dt: f32,
    next_update: Instant,
    last_render: Instant,
}

impl Scheduler for WinitScheduler {
    fn tick(&mut self, frame: &mut dyn FrameCallbacks) {
        let timeout = self.state.next_update.saturating_duration_since(Instant::now());
        let mut dispatch = FrameDispatch {
            state: &mut self.state,
            frame,
        };

        if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(Some(timeout), &mut dispatch) {
            info!(target: "platform", "Event loop exited with code {}", code);
            dispatch.frame.exit_requested();
        }
    }
}

//=== FrameDispatch =======================================================

/// Routes winit callbacks for one pump to the kernel.
struct FrameDispatch<'a> {
    state: &'a mut LoopState,
    frame: &'a mut dyn FrameCallbacks,
}

impl FrameDispatch<'_> {
    /// Runs every update that is due, at the fixed step.
    fn run_updates(&mut self) {
        let mut updates = 0;

        while self.frame.is_running() && Instant::now() >= self.state.next_update {
            if updates == MAX_CATCH_UP_UPDATES {
                warn!(target: "platform", "Update loop fell behind, skipping {} ms", self.lag().as_millis());
                self.state.next_update = Instant::now() + self.state.step;
                break;
            }

            self.frame.update(self.state.dt);
            self.state.next_update += self.state.step;
            updates += 1;
        }
    }

    fn lag(&self) -> Duration {
        Instant::now().saturating_duration_since(self.state.next_update)
    }
}

impl ApplicationHandler for FrameDispatch<'_> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        debug!(target: "platform", "Application resumed");
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if window_id != self.state.window.id() || !self.frame.is_running() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.frame.exit_requested();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.state.processor.process_key_event(&key_event) {
                    Some(event) => self.frame.input_event(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.state.processor.process_mouse_button(button, state);
                self.frame.input_event(event);
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(event) = self.state.processor.process_cursor_moved(position) {
                    self.frame.input_event(event);
                }
            }

            WindowEvent::CursorLeft { .. } => {
                self.state.processor.process_cursor_left();
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(event) = self.state.processor.process_mouse_wheel(delta) {
                    self.frame.input_event(event);
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = now.duration_since(self.state.last_render).as_secs_f32();
                self.state.last_render = now;
                self.frame.render(dt);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.run_updates();

        if self.frame.is_running() {
            self.state.window.request_redraw();
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.state.next_update));
        }
    }
}
