//=========================================================================
// Headless Host
//=========================================================================
//
// Windowless host for servers, tools and tests.
//
// Architecture:
// ```text
//  HeadlessRemote ── Sender<HostEvent> ──┐
//                                        ↓
//  HeadlessScheduler::tick()
//    ├─ drain up to MAX_EVENTS_PER_TICK events
//    ├─ update(1 / tps)
//    └─ render(1 / tps)
// ```
//
// Every tick is exactly one update and one render with a fixed delta.
// Pacing to wall-clock time is optional, so tests can run ticks back to
// back.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, SendError, Sender, TryRecvError};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::geometry::Rect;
use crate::core::host::{
    FrameCallbacks, HostBindings, HostConfig, HostError, HostFactory, Scheduler, Window,
};
use crate::core::input::{InputEvent, InputGraph, StandardInputs};

/// Upper bound on injected events handled per tick.
const MAX_EVENTS_PER_TICK: usize = 100;

static NEXT_WINDOW_HANDLE: AtomicU64 = AtomicU64::new(1);

//=== HostEvent ===========================================================

/// Events a remote feeds into a headless host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Input(InputEvent),
    CloseRequested,
}

//=== HeadlessRemote ======================================================

/// Sending half of a headless host. Cheap to clone and `Send`.
#[derive(Debug, Clone)]
pub struct HeadlessRemote {
    sender: Sender<HostEvent>,
}

impl HeadlessRemote {
    /// Queues an input event for the next tick.
    pub fn send_input(&self, event: InputEvent) -> Result<(), SendError<HostEvent>> {
        self.sender.send(HostEvent::Input(event))
    }

    /// Asks the kernel to stop, like a window close button would.
    pub fn request_close(&self) -> Result<(), SendError<HostEvent>> {
        self.sender.send(HostEvent::CloseRequested)
    }
}

//=== HeadlessHost ========================================================

/// Factory for the headless host.
///
/// ```rust
/// # use xenon_engine::core::host::HeadlessHost;
/// # use xenon_engine::core::input::{InputEvent, KeyCode};
/// let (host, remote) = HeadlessHost::with_remote();
/// let host = host.with_frame_limit(10).with_pacing(false);
///
/// remote.send_input(InputEvent::KeyDown(KeyCode::Space)).unwrap();
/// # drop(host);
/// ```
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    receiver: Option<Receiver<HostEvent>>,
    frame_limit: Option<u64>,
    paced: bool,
}

impl HeadlessHost {
    /// Host with no event source. Runs until a screen exits.
    pub fn new() -> Self {
        Self {
            receiver: None,
            frame_limit: None,
            paced: true,
        }
    }

    /// Host plus the remote that feeds it events.
    pub fn with_remote() -> (Self, HeadlessRemote) {
        let (sender, receiver) = unbounded();
        let host = Self {
            receiver: Some(receiver),
            ..Self::new()
        };
        (host, HeadlessRemote { sender })
    }

    /// Requests exit after `frames` ticks.
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// When `false`, ticks run back to back instead of at the configured TPS.
    pub fn with_pacing(mut self, paced: bool) -> Self {
        self.paced = paced;
        self
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostFactory for HeadlessHost {
    fn init(&mut self, config: &HostConfig, graph: &mut InputGraph) -> Result<HostBindings, HostError> {
        info!(target: "platform", "Headless host initialized ({} TPS)", config.tick_rate());

        Ok(HostBindings {
            window: Some(Box::new(HeadlessWindow::new(config))),
            devices: Box::new(StandardInputs::new(graph)),
            scheduler: Box::new(HeadlessScheduler::new(self, config)),
        })
    }
}

//=== HeadlessWindow ======================================================

/// In-memory window. Keeps whatever state it is given.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessWindow {
    handle: u64,
    title: String,
    bounds: Rect<i32>,
    visible: bool,
    fullscreen: bool,
}

impl HeadlessWindow {
    pub fn new(config: &HostConfig) -> Self {
        Self {
            handle: NEXT_WINDOW_HANDLE.fetch_add(1, Ordering::Relaxed),
            title: config.title.clone(),
            bounds: Rect::new(0, 0, config.width as i32, config.height as i32),
            visible: true,
            fullscreen: config.fullscreen,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Window for HeadlessWindow {
    fn handle(&self) -> u64 {
        self.handle
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    fn bounds(&self) -> Rect<i32> {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect<i32>) {
        self.bounds = bounds;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }
}

//=== HeadlessScheduler ===================================================

struct HeadlessScheduler {
    receiver: Option<Receiver<HostEvent>>,
    frame_limit: Option<u64>,
    frames: u64,
    paced: bool,
    step: Duration,
    dt: f32,
    next_tick: Option<Instant>,
}

impl HeadlessScheduler {
    fn new(host: &HeadlessHost, config: &HostConfig) -> Self {
        Self {
            receiver: host.receiver.clone(),
            frame_limit: host.frame_limit,
            frames: 0,
            paced: host.paced,
            step: config.step(),
            dt: config.dt(),
            next_tick: None,
        }
    }

    /// Sleeps until the next tick is due.
    fn pace(&mut self) {
        let now = Instant::now();
        if let Some(next_tick) = self.next_tick {
            if next_tick > now {
                thread::sleep(next_tick - now);
            }
        }
        self.next_tick = Some(self.next_tick.map_or(now, |next_tick| next_tick.max(now)) + self.step);
    }

    /// Delivers pending events (bounded to prevent starvation).
    ///
    /// Returns `true` if events were left queued for the next tick.
    fn drain(&mut self, frame: &mut dyn FrameCallbacks) -> bool {
        let Some(receiver) = &self.receiver else {
            return false;
        };

        let mut drained = 0;
        let backlog = loop {
            if !frame.is_running() {
                break false;
            }
            if drained == MAX_EVENTS_PER_TICK {
                break !receiver.is_empty();
            }
            match receiver.try_recv() {
                Ok(HostEvent::Input(event)) => frame.input_event(event),
                Ok(HostEvent::CloseRequested) => {
                    info!(target: "platform", "Close requested by remote");
                    frame.exit_requested();
                }
                Err(TryRecvError::Empty) => break false,
                Err(TryRecvError::Disconnected) => {
                    debug!(target: "platform", "Headless remote dropped, no further events");
                    self.receiver = None;
                    break false;
                }
            }
            drained += 1;
        };

        if backlog {
            warn!(target: "platform::input", "Event queue backlog: drained {} events this tick", drained);
        }
        backlog
    }
}

impl Scheduler for HeadlessScheduler {
    fn tick(&mut self, frame: &mut dyn FrameCallbacks) {
        if self.frame_limit.is_some_and(|limit| self.frames >= limit) {
            info!(target: "platform", "Frame limit of {} reached", self.frames);
            frame.exit_requested();
            return;
        }

        if self.paced {
            self.pace();
        }

        self.drain(frame);

        if frame.is_running() {
            frame.update(self.dt);
        }
        if frame.is_running() {
            frame.render(self.dt);
        }
        self.frames += 1;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
