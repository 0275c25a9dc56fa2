//=========================================================================
// Input Sandbox
//=========================================================================
//
// Wires a handful of virtual controls and logs them as they change.
//
//   Save  = Or(And(Control, S), F2)
//   Fire  = Or(left click, Space)
//   MoveX = ButtonAxis { Left: -1, Right: +1 }
//   Look  = AxisButton(mouse horizontal, [0.05, 1.0])
//   Idle  = Not(Fire)
//
// Escape quits, F11 toggles fullscreen.
//
// Run with `--headless` to drive the same screen from a scripted remote
// thread instead of a window.
//
//=========================================================================

use std::thread;
use std::time::Duration;

use env_logger::{Builder, Env};
use log::{info, warn};

use xenon_engine::core::input::device::{KEYBOARD_ID, MOUSE_ID};
use xenon_engine::core::input::InputError;
use xenon_engine::prelude::*;

//=== Sandbox Screen ======================================================

struct Sandbox {
    ticks: u64,
    last_move: f32,
}

impl Sandbox {
    fn new() -> Self {
        Self { ticks: 0, last_move: 0.0 }
    }

    fn wire(ctx: &mut ScreenContext) -> Result<(), InputError> {
        let (Some(keyboard), Some(mouse)) = (ctx.device(KEYBOARD_ID), ctx.device(MOUSE_ID)) else {
            warn!("Host has no keyboard or mouse, nothing to wire");
            return Ok(());
        };

        let key = |id: &str| keyboard.button(id);
        let (Some(control), Some(s), Some(f2), Some(space), Some(left), Some(right), Some(escape), Some(f11)) = (
            key("Control"),
            key("S"),
            key("F2"),
            key("Space"),
            key("Left"),
            key("Right"),
            key("Escape"),
            key("F11"),
        ) else {
            warn!("Keyboard is missing expected keys");
            return Ok(());
        };
        let (Some(click), Some(horizontal)) = (mouse.button("left"), mouse.axis("Horizontal")) else {
            warn!("Mouse is missing expected inputs");
            return Ok(());
        };

        let input = ctx.input_mut();
        let graph = input.graph_mut();

        let chord = graph.add_button(AndButton::new());
        graph.attach(chord, control)?;
        graph.attach(chord, s)?;
        let save = graph.add_button(OrButton::new());
        graph.attach(save, chord)?;
        graph.attach(save, f2)?;

        let fire = graph.add_button(OrButton::new());
        graph.attach(fire, click)?;
        graph.attach(fire, space)?;

        let idle = graph.add_button(NotButton::new());
        graph.set_not_child(idle, Some(fire))?;

        let move_x = graph.add_axis(ButtonAxis::new());
        graph.attach_axis_button(move_x, left, 0.0, -1.0)?;
        graph.attach_axis_button(move_x, right, 0.0, 1.0)?;

        let look = graph.add_button(AxisButton::with_range(InclusiveRange::new(0.05, 1.0)));
        graph.set_axis_button_child(look, Some(horizontal))?;

        input.map_button("Save", save);
        input.map_button("Fire", fire);
        input.map_button("Idle", idle);
        input.map_button("Look", look);
        input.map_button("Quit", escape);
        input.map_button("Fullscreen", f11);
        input.map_axis("MoveX", move_x);

        info!("Wired {} virtual buttons", input.buttons().len());
        Ok(())
    }
}

impl Screen for Sandbox {
    fn load(&mut self, ctx: &mut ScreenContext) {
        if let Err(e) = Self::wire(ctx) {
            warn!("Input wiring failed: {}", e);
        }
    }

    fn unload(&mut self, _ctx: &mut ScreenContext) {
        info!("Sandbox ran for {} ticks", self.ticks);
    }

    fn update(&mut self, ctx: &mut ScreenContext, _dt: f32) {
        self.ticks += 1;
        let input = ctx.input();

        for name in ["Save", "Fire", "Look"] {
            if input.is_pressed(name) {
                info!("{} pressed", name);
            }
            if input.is_released(name) {
                info!("{} released", name);
            }
        }
        if input.is_pressed("Idle") {
            info!("Idle again");
        }

        let move_x = input.value("MoveX");
        if move_x != self.last_move {
            info!("MoveX = {:+.1} ({:.0}% across)", move_x, input.value_in("MoveX", 0.0, 100.0));
            self.last_move = move_x;
        }

        let quit = input.is_pressed("Quit");
        let toggle = input.is_pressed("Fullscreen");

        if toggle {
            if let Some(window) = ctx.window_mut() {
                window.toggle_fullscreen();
            }
        }
        if quit {
            ctx.exit();
        }
    }

    fn render(&mut self, _ctx: &mut ScreenContext, _dt: f32) {}
}

//=== Scripted Remote =====================================================

fn headless_kernel() -> Kernel {
    let (host, remote) = HeadlessHost::with_remote();

    thread::spawn(move || {
        let script = [
            InputEvent::KeyDown(KeyCode::Control),
            InputEvent::KeyDown(KeyCode::KeyS),
            InputEvent::KeyUp(KeyCode::KeyS),
            InputEvent::KeyUp(KeyCode::Control),
            InputEvent::KeyDown(KeyCode::ArrowRight),
            InputEvent::MouseMoved { dx: 120.0, dy: 0.0 },
            InputEvent::KeyUp(KeyCode::ArrowRight),
            InputEvent::MouseButtonDown(MouseButton::Left),
            InputEvent::MouseButtonUp(MouseButton::Left),
            InputEvent::KeyDown(KeyCode::Escape),
        ];

        for event in script {
            if remote.send_input(event).is_err() {
                return;
            }
            thread::sleep(Duration::from_millis(50));
        }
    });

    KernelBuilder::new()
        .with_title("Input Sandbox")
        .with_host(HostInterface::Headless)
        .with_host_factory(HostInterface::Headless, host.with_frame_limit(600))
        .with_args(std::env::args())
        .build()
}

//=== Entry Point =========================================================

fn main() -> Result<(), KernelError> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("winit", log::LevelFilter::Warn)
        .init();

    let headless = std::env::args().any(|arg| arg == "--headless");
    let mut kernel = if headless {
        headless_kernel()
    } else {
        KernelBuilder::new()
            .with_title("Input Sandbox")
            .with_args(std::env::args())
            .build()
    };

    kernel.exec(Sandbox::new())
}
